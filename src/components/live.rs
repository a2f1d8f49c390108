//! Live traffic panel: latest captured packet from the backend sniffer.

use crate::dom::{Page, Render};
use crate::error::ConsoleError;
use crate::net::ApiClient;
use crate::net::types::{LivePacket, display_value};

pub const SRC_ID: &str = "liveSrc";
pub const DST_ID: &str = "liveDst";
pub const PROTOCOL_ID: &str = "liveProtocol";
pub const LENGTH_ID: &str = "liveLength";
pub const PREDICTION_ID: &str = "livePrediction";

#[must_use]
pub fn packet_renders(packet: &LivePacket) -> Vec<Render> {
    vec![
        Render::set_text(SRC_ID, display_value(&packet.src_ip)),
        Render::set_text(DST_ID, display_value(&packet.dst_ip)),
        Render::set_text(PROTOCOL_ID, display_value(&packet.protocol)),
        Render::set_text(LENGTH_ID, display_value(&packet.length)),
        Render::set_text(PREDICTION_ID, display_value(&packet.prediction)),
    ]
}

/// Page-ready handler. Silent on failure, like the other fetchers.
///
/// # Errors
///
/// Never; the signature matches the other handlers.
pub async fn load(page: &mut Page, api: &ApiClient) -> Result<(), ConsoleError> {
    let rendered = match api.fetch_live_traffic().await {
        Ok(packet) => page.apply(packet_renders(&packet)),
        Err(e) => Err(e),
    };
    if let Err(e) = rendered {
        tracing::error!(error = %e, "live traffic fetch failed");
    }
    Ok(())
}

#[cfg(test)]
#[path = "live_test.rs"]
mod tests;
