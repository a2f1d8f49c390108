//! File upload detection trigger.

use crate::dom::{Page, Render};
use crate::error::ConsoleError;
use crate::net::ApiClient;
use crate::net::types::to_js_json;

pub const BUTTON_ID: &str = "detectBtn";
pub const INPUT_ID: &str = "uploadFile";
pub const RESULT_ID: &str = "detectResult";
pub const NO_FILE_MESSAGE: &str = "Please select a file";
pub const FAILURE_MESSAGE: &str = "Detection failed";

/// The detection result is opaque: show it verbatim as compact JSON.
#[must_use]
pub fn result_renders(result: &serde_json::Value) -> Vec<Render> {
    vec![Render::set_text(RESULT_ID, to_js_json(result))]
}

/// Click handler for `detectBtn`.
///
/// With no file selected this alerts and returns before any request is made.
/// Upload and render failures (including a missing result node) collapse into
/// one failure alert.
///
/// # Errors
///
/// Only a missing `uploadFile` input propagates.
pub async fn click(page: &mut Page, api: &ApiClient) -> Result<(), ConsoleError> {
    let Some(file) = page.document.selected_file(INPUT_ID)?.cloned() else {
        return page.apply(vec![Render::alert(NO_FILE_MESSAGE)]);
    };
    tracing::info!(file = %file.name, bytes = file.bytes.len(), "uploading file for detection");

    let rendered = match api.detect(&file).await {
        Ok(result) => page.apply(result_renders(&result)),
        Err(e) => Err(e),
    };
    if let Err(e) = rendered {
        tracing::error!(error = %e, "detection failed");
        page.apply(vec![Render::alert(FAILURE_MESSAGE)])?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "detect_test.rs"]
mod tests;
