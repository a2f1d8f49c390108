//! In-memory document model.
//!
//! DESIGN
//! ======
//! A page is a tree of [`Element`]s rooted at `<body>`. Components never
//! mutate it directly: they read inputs through [`Document`] lookups and
//! return [`Render`] instructions, which [`Page::apply`] executes as the one
//! side-effecting step. That keeps each component's decision logic a plain
//! function of its inputs.

pub mod page;
pub mod render;

pub use page::Page;
pub use render::Render;

use crate::error::ConsoleError;

// =============================================================================
// ELEMENT
// =============================================================================

/// A file picked in an `<input type="file">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// A single DOM node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    /// Form field name, used by [`Document::form_data`].
    pub name: Option<String>,
    pub classes: Vec<String>,
    pub text: String,
    /// Inline style declarations in insertion order.
    pub style: Vec<(String, String)>,
    pub value: Option<String>,
    pub files: Vec<SelectedFile>,
    pub children: Vec<Element>,
}

impl Element {
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self { tag: tag.to_owned(), ..Self::default() }
    }

    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_owned());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_owned());
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_owned());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_owned();
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Set an inline style property, replacing an earlier value for the same key.
    pub fn set_style(&mut self, key: &str, value: String) {
        if let Some(slot) = self.style.iter_mut().find(|(k, _)| k == key) {
            slot.1 = value;
        } else {
            self.style.push((key.to_owned(), value));
        }
    }

    #[must_use]
    pub fn style(&self, key: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Own text followed by every descendant's text, depth first.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    /// Replace all content with a single text run, like assigning `textContent`.
    pub fn set_text_content(&mut self, text: String) {
        self.children.clear();
        self.text = text;
    }
}

fn find<'a>(el: &'a Element, pred: &dyn Fn(&Element) -> bool) -> Option<&'a Element> {
    if pred(el) {
        return Some(el);
    }
    el.children.iter().find_map(|c| find(c, pred))
}

fn find_mut<'a>(el: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if el.id.as_deref() == Some(id) {
        return Some(el);
    }
    el.children.iter_mut().find_map(|c| find_mut(c, id))
}

// =============================================================================
// DOCUMENT
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    body: Element,
}

impl Default for Document {
    fn default() -> Self {
        Self { body: Element::new("body") }
    }
}

impl Document {
    #[must_use]
    pub fn new(children: Vec<Element>) -> Self {
        let mut body = Element::new("body");
        body.children = children;
        Self { body }
    }

    #[must_use]
    pub fn body(&self) -> &Element {
        &self.body
    }

    #[must_use]
    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        find(&self.body, &|el| el.id.as_deref() == Some(id))
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_mut(&mut self.body, id)
    }

    /// Look up an element that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::MissingElement`] when no element carries `id`.
    pub fn require(&self, id: &str) -> Result<&Element, ConsoleError> {
        self.get_element_by_id(id).ok_or_else(|| ConsoleError::missing(id))
    }

    fn require_mut(&mut self, id: &str) -> Result<&mut Element, ConsoleError> {
        self.get_element_by_id_mut(id).ok_or_else(|| ConsoleError::missing(id))
    }

    /// Value of the control named `field` inside form `form_id`.
    ///
    /// `Ok(None)` when the form has no such control or the control has never
    /// been given a value; an emptied control yields `Some("")`.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::MissingElement`] when the form itself is absent.
    pub fn form_data(&self, form_id: &str, field: &str) -> Result<Option<String>, ConsoleError> {
        let form = self.require(form_id)?;
        Ok(find(form, &|el| el.name.as_deref() == Some(field)).and_then(|el| el.value.clone()))
    }

    /// First file chosen in the file input `input_id`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::MissingElement`] when the input is absent.
    pub fn selected_file(&self, input_id: &str) -> Result<Option<&SelectedFile>, ConsoleError> {
        Ok(self.require(input_id)?.files.first())
    }

    /// Type into an input control.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::MissingElement`] when the control is absent.
    pub fn set_value(&mut self, id: &str, value: &str) -> Result<(), ConsoleError> {
        self.require_mut(id)?.value = Some(value.to_owned());
        Ok(())
    }

    /// Pick a file in a file input, replacing any earlier selection.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::MissingElement`] when the input is absent.
    pub fn select_file(&mut self, id: &str, file: SelectedFile) -> Result<(), ConsoleError> {
        self.require_mut(id)?.files = vec![file];
        Ok(())
    }

    pub(crate) fn set_text(&mut self, id: &str, text: String) -> Result<(), ConsoleError> {
        self.require_mut(id)?.set_text_content(text);
        Ok(())
    }

    pub(crate) fn append(&mut self, parent: &str, element: Element) -> Result<(), ConsoleError> {
        self.require_mut(parent)?.children.push(element);
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
