//! Dashboard counters.

use crate::dom::{Page, Render};
use crate::error::ConsoleError;
use crate::net::ApiClient;
use crate::net::types::{DashboardStats, display_value};

pub const TOTAL_NETWORK_ID: &str = "totalNetwork";
pub const TOTAL_WEB_ID: &str = "totalWeb";

/// Nothing to render unless the response is a JSON object. Absent fields
/// still overwrite their node, with empty text.
#[must_use]
pub fn stat_renders(data: &serde_json::Value) -> Vec<Render> {
    let Some(stats) = DashboardStats::from_response(data) else {
        return Vec::new();
    };
    vec![
        Render::set_text(TOTAL_NETWORK_ID, display_value(&stats.total_network)),
        Render::set_text(TOTAL_WEB_ID, display_value(&stats.total_web)),
    ]
}

/// Page-ready handler. Silent on failure.
///
/// # Errors
///
/// Never; the signature matches the other handlers.
pub async fn load(page: &mut Page, api: &ApiClient) -> Result<(), ConsoleError> {
    let rendered = match api.fetch_dashboard().await {
        Ok(data) => page.apply(stat_renders(&data)),
        Err(e) => Err(e),
    };
    if let Err(e) = rendered {
        tracing::error!(error = %e, "dashboard data fetch failed");
    }
    Ok(())
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
