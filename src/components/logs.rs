//! Log list fetcher.

use crate::dom::{Element, Page, Render};
use crate::error::ConsoleError;
use crate::net::ApiClient;
use crate::net::types::LogEntry;

pub const LIST_ID: &str = "logList";
pub const SEPARATOR: &str = " - ";

#[must_use]
pub fn format_entry(entry: &LogEntry) -> String {
    format!("{}{SEPARATOR}{}", entry.timestamp, entry.message)
}

/// One `<li>` per entry, appended in array order.
#[must_use]
pub fn list_renders(entries: &[LogEntry]) -> Vec<Render> {
    entries
        .iter()
        .map(|entry| Render::append(LIST_ID, Element::new("li").with_text(&format_entry(entry))))
        .collect()
}

/// Page-ready handler. Failures are logged and otherwise invisible.
///
/// # Errors
///
/// Never; the signature matches the other handlers.
pub async fn load(page: &mut Page, api: &ApiClient) -> Result<(), ConsoleError> {
    let rendered = match api.fetch_logs().await {
        Ok(entries) => {
            tracing::debug!(count = entries.len(), "log entries fetched");
            page.apply(list_renders(&entries))
        }
        Err(e) => Err(e),
    };
    if let Err(e) = rendered {
        tracing::error!(error = %e, "log fetch failed");
    }
    Ok(())
}

#[cfg(test)]
#[path = "logs_test.rs"]
mod tests;
