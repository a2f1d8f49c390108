//! Console errors.
//!
//! ERROR HANDLING
//! ==============
//! Every fallible step of a page pipeline returns `ConsoleError`. Components
//! decide per variant whether a failure becomes an alert or only a log line;
//! nothing in the library panics on bad input or a dead backend.

/// Errors produced while loading pages, talking to the backend, or rendering.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// The HTTP request could not be sent or the body could not be read.
    #[error("request failed: {0}")]
    Request(String),

    /// The response body was not the JSON shape the page expects.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// A render instruction or trigger referenced an element id that does not exist.
    #[error("no element with id '{id}'")]
    MissingElement { id: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// A local file chosen for upload could not be read.
    #[error("failed to read {path}: {reason}")]
    FileRead { path: String, reason: String },

    /// No page is served at the requested path.
    #[error("unknown page: {0}")]
    UnknownPage(String),

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),
}

impl ConsoleError {
    pub(crate) fn missing(id: &str) -> Self {
        Self::MissingElement { id: id.to_owned() }
    }
}
