//! Headless browser: loads pages and fires their events.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Browser` owns the one HTTP client shared by every page. Opening a page
//! builds its skeleton, fires `Ready`, and hands the page back; user gestures
//! (`submit`, `click`) fire against a page the caller holds. Pages never share
//! documents, so each load renders from scratch.

use crate::config::ConsoleConfig;
use crate::dom::Page;
use crate::error::ConsoleError;
use crate::events::{self, Trigger};
use crate::net::ApiClient;
use crate::pages::PageKind;

#[derive(Debug, Clone)]
pub struct Browser {
    api: ApiClient,
}

impl Browser {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Returns [`ConsoleError::HttpClientBuild`] if the client cannot be built.
    pub fn from_config(config: &ConsoleConfig) -> Result<Self, ConsoleError> {
        Ok(Self::new(ApiClient::new(config)?))
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Load the page at `path` and run its page-ready handlers.
    ///
    /// Ready-handler failures are logged, not returned: a broken fetch
    /// leaves the page as served.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::UnknownPage`] when nothing is served at `path`.
    pub async fn open(&self, path: &str) -> Result<Page, ConsoleError> {
        let kind = PageKind::from_path(path).ok_or_else(|| ConsoleError::UnknownPage(path.to_owned()))?;
        let mut page = Page::new(kind.path(), kind.document());
        tracing::info!(path = kind.path(), "page loaded");

        if let Err(e) = events::dispatch(&kind.registry(), Trigger::Ready, &mut page, &self.api).await {
            tracing::error!(path = kind.path(), error = %e, "page-ready handler failed");
        }
        Ok(page)
    }

    /// Submit the form `form_id` on `page`.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::MissingElement`] when the form is absent.
    pub async fn submit(&self, page: &mut Page, form_id: &'static str) -> Result<(), ConsoleError> {
        self.fire(page, Trigger::Submit(form_id)).await
    }

    /// Click the control `id` on `page`.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::MissingElement`] when the control is absent.
    pub async fn click(&self, page: &mut Page, id: &'static str) -> Result<(), ConsoleError> {
        self.fire(page, Trigger::Click(id)).await
    }

    /// Load the page a `Navigate` instruction pointed at, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::UnknownPage`] when the target is not a known page.
    pub async fn follow(&self, page: &Page) -> Result<Option<Page>, ConsoleError> {
        match page.navigated_to() {
            Some(target) => self.open(target).await.map(Some),
            None => Ok(None),
        }
    }

    async fn fire(&self, page: &mut Page, trigger: Trigger) -> Result<(), ConsoleError> {
        let kind = PageKind::from_path(&page.path).ok_or_else(|| ConsoleError::UnknownPage(page.path.clone()))?;
        events::dispatch(&kind.registry(), trigger, page, &self.api).await?;
        Ok(())
    }
}
