//! HTTP client for the IntruGuard backend.
//!
//! Thin wrapper over one `reqwest::Client`. Each operation issues exactly one
//! request and suspends twice: once for the response head, once for the body.
//! Bodies are parsed as JSON whatever the status code: application failures
//! (`success: false`) arrive in the body. Only transport and decode failures
//! surface as errors.

use serde::de::DeserializeOwned;

use super::types::{Credentials, LivePacket, LogEntry, LoginResponse};
use crate::config::ConsoleConfig;
use crate::dom::SelectedFile;
use crate::error::ConsoleError;

pub const LOGIN_PATH: &str = "/login";
pub const LOGS_PATH: &str = "/api/logs";
pub const DASHBOARD_DATA_PATH: &str = "/api/dashboard-data";
pub const DETECT_PATH: &str = "/detect";
pub const LIVE_TRAFFIC_PATH: &str = "/api/live_traffic";

/// Multipart field carrying the uploaded file on `POST /detect`.
pub const DETECT_FILE_FIELD: &str = "file";

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::HttpClientBuild`] if the TLS backend cannot be
    /// initialised.
    pub fn new(config: &ConsoleConfig) -> Result<Self, ConsoleError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeouts.request {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.timeouts.connect {
            builder = builder.connect_timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ConsoleError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `POST /login` with a JSON body.
    ///
    /// # Errors
    ///
    /// [`ConsoleError::Request`] on transport failure, [`ConsoleError::Parse`]
    /// when the body is not a login response.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ConsoleError> {
        let response = self
            .http
            .post(self.url(LOGIN_PATH))
            .json(credentials)
            .send()
            .await
            .map_err(|e| ConsoleError::Request(e.to_string()))?;
        read_json(response).await
    }

    /// `GET /api/logs`.
    ///
    /// # Errors
    ///
    /// [`ConsoleError::Request`] on transport failure, [`ConsoleError::Parse`]
    /// when the body is not an array of log entries.
    pub async fn fetch_logs(&self) -> Result<Vec<LogEntry>, ConsoleError> {
        self.get_json(LOGS_PATH).await
    }

    /// `GET /api/dashboard-data`. Returned raw; the caller decides whether it
    /// is an object worth rendering.
    ///
    /// # Errors
    ///
    /// [`ConsoleError::Request`] on transport failure, [`ConsoleError::Parse`]
    /// when the body is not JSON.
    pub async fn fetch_dashboard(&self) -> Result<serde_json::Value, ConsoleError> {
        self.get_json(DASHBOARD_DATA_PATH).await
    }

    /// `GET /api/live_traffic`.
    ///
    /// # Errors
    ///
    /// [`ConsoleError::Request`] on transport failure, [`ConsoleError::Parse`]
    /// when the body is not a packet object.
    pub async fn fetch_live_traffic(&self) -> Result<LivePacket, ConsoleError> {
        self.get_json(LIVE_TRAFFIC_PATH).await
    }

    /// `POST /detect` with the file as multipart field `file`.
    ///
    /// # Errors
    ///
    /// [`ConsoleError::Request`] on transport failure, [`ConsoleError::Parse`]
    /// when the body is not JSON.
    pub async fn detect(&self, file: &SelectedFile) -> Result<serde_json::Value, ConsoleError> {
        let part = reqwest::multipart::Part::bytes(file.bytes.clone()).file_name(file.name.clone());
        let form = reqwest::multipart::Form::new().part(DETECT_FILE_FIELD, part);

        let response = self
            .http
            .post(self.url(DETECT_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ConsoleError::Request(e.to_string()))?;
        read_json(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ConsoleError> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ConsoleError::Request(e.to_string()))?;
        read_json(response).await
    }
}

// =============================================================================
// PARSING
// =============================================================================

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ConsoleError> {
    let status = response.status().as_u16();
    let url = response.url().path().to_owned();
    let text = response
        .text()
        .await
        .map_err(|e| ConsoleError::Request(e.to_string()))?;
    tracing::debug!(%url, status, bytes = text.len(), "response received");
    parse_json(&text)
}

fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, ConsoleError> {
    serde_json::from_str(text).map_err(|e| ConsoleError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
