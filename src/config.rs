//! Console configuration parsed from environment variables.

use std::time::Duration;

use crate::error::ConsoleError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Optional HTTP timeouts. `None` waits forever, which is what a page script
/// does when nobody aborts its fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timeouts {
    pub request: Option<Duration>,
    pub connect: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub base_url: String,
    pub timeouts: Timeouts,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned(), timeouts: Timeouts::default() }
    }
}

impl ConsoleConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `INTRUGUARD_BASE_URL`: backend origin, default `http://127.0.0.1:5000`
    /// - `INTRUGUARD_REQUEST_TIMEOUT_SECS`: unset means no request timeout
    /// - `INTRUGUARD_CONNECT_TIMEOUT_SECS`: unset means no connect timeout
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Config`] when a timeout is set but is not a
    /// whole number of seconds.
    pub fn from_env() -> Result<Self, ConsoleError> {
        let base_url = match std::env::var("INTRUGUARD_BASE_URL") {
            Ok(raw) if !raw.trim().is_empty() => normalize_base_url(&raw),
            _ => DEFAULT_BASE_URL.to_owned(),
        };
        let timeouts = Timeouts {
            request: env_secs("INTRUGUARD_REQUEST_TIMEOUT_SECS")?,
            connect: env_secs("INTRUGUARD_CONNECT_TIMEOUT_SECS")?,
        };
        Ok(Self { base_url, timeouts })
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = normalize_base_url(base_url);
        self
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn env_secs(key: &str) -> Result<Option<Duration>, ConsoleError> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<u64>()
        .map(|secs| Some(Duration::from_secs(secs)))
        .map_err(|e| ConsoleError::Config(format!("{key}={raw}: {e}")))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
