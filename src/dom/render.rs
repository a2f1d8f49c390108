//! Render instructions emitted by components.

use super::Element;

/// One visible effect on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Render {
    /// Replace the text content of the element with this id.
    SetText { id: String, text: String },
    /// Append a new child to the element with this id.
    Append { parent: String, element: Element },
    /// Show a blocking alert.
    Alert(String),
    /// Move the window to another path.
    Navigate(String),
}

impl Render {
    #[must_use]
    pub fn set_text(id: &str, text: impl Into<String>) -> Self {
        Self::SetText { id: id.to_owned(), text: text.into() }
    }

    #[must_use]
    pub fn append(parent: &str, element: Element) -> Self {
        Self::Append { parent: parent.to_owned(), element }
    }

    #[must_use]
    pub fn alert(message: impl Into<String>) -> Self {
        Self::Alert(message.into())
    }

    #[must_use]
    pub fn navigate(path: &str) -> Self {
        Self::Navigate(path.to_owned())
    }
}
