//! A loaded page: its document plus window-level state.

use super::{Document, Render};
use crate::error::ConsoleError;

/// Window state for one page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Path the document was loaded from. Fixed for the page's lifetime.
    pub path: String,
    /// Current path. Changes only through [`Render::Navigate`].
    pub location: String,
    pub document: Document,
    /// Every alert shown since the page loaded, oldest first.
    pub alerts: Vec<String>,
}

impl Page {
    #[must_use]
    pub fn new(location: &str, document: Document) -> Self {
        Self { path: location.to_owned(), location: location.to_owned(), document, alerts: Vec::new() }
    }

    /// Where a `Navigate` sent the window, if it left the loaded path.
    #[must_use]
    pub fn navigated_to(&self) -> Option<&str> {
        (self.location != self.path).then_some(self.location.as_str())
    }

    /// Execute render instructions in order.
    ///
    /// Stops at the first instruction that targets a missing element;
    /// instructions before it stay applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::MissingElement`] for a `SetText`/`Append`
    /// whose target id does not exist.
    pub fn apply(&mut self, renders: Vec<Render>) -> Result<(), ConsoleError> {
        for render in renders {
            match render {
                Render::SetText { id, text } => self.document.set_text(&id, text)?,
                Render::Append { parent, element } => self.document.append(&parent, element)?,
                Render::Alert(message) => self.alerts.push(message),
                Render::Navigate(path) => self.location = path,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
