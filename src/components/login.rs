//! Login form submitter.
//!
//! On submit: read `username`/`password` from `loginForm`, `POST /login` as
//! JSON, then either navigate to `/dashboard` or alert the server's message.
//! Single attempt, no retry.

use crate::dom::{Document, Page, Render};
use crate::error::ConsoleError;
use crate::net::ApiClient;
use crate::net::types::{Credentials, LoginResponse};

pub const FORM_ID: &str = "loginForm";
pub const USERNAME_FIELD: &str = "username";
pub const PASSWORD_FIELD: &str = "password";
pub const SUCCESS_PATH: &str = "/dashboard";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Login failed";
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Read credentials out of the login form. Absent or empty controls yield
/// empty strings.
///
/// # Errors
///
/// Returns [`ConsoleError::MissingElement`] when the form is not on the page.
pub fn read_credentials(document: &Document) -> Result<Credentials, ConsoleError> {
    Ok(Credentials {
        username: document.form_data(FORM_ID, USERNAME_FIELD)?.unwrap_or_default(),
        password: document.form_data(FORM_ID, PASSWORD_FIELD)?.unwrap_or_default(),
    })
}

/// Map the login round trip to exactly one of {navigation, alert}.
#[must_use]
pub fn outcome(result: &Result<LoginResponse, ConsoleError>) -> Vec<Render> {
    match result {
        Ok(response) if response.success => vec![Render::navigate(SUCCESS_PATH)],
        Ok(response) => {
            let message = response
                .message
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or(DEFAULT_FAILURE_MESSAGE);
            vec![Render::alert(message)]
        }
        Err(_) => vec![Render::alert(SERVER_ERROR_MESSAGE)],
    }
}

/// Submit handler for `loginForm`.
///
/// # Errors
///
/// Only a missing form propagates; network and server failures become alerts.
pub async fn submit(page: &mut Page, api: &ApiClient) -> Result<(), ConsoleError> {
    let credentials = read_credentials(&page.document)?;
    tracing::info!(username = %credentials.username, "submitting login");

    let result = api.login(&credentials).await;
    match &result {
        Ok(response) if !response.success => tracing::info!("login rejected by server"),
        Ok(_) => {}
        Err(e) => tracing::error!(error = %e, "login request failed"),
    }
    page.apply(outcome(&result))
}

#[cfg(test)]
#[path = "login_test.rs"]
mod tests;
