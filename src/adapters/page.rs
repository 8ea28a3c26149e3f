use crate::domain::ports::Dom;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub html: String,
    pub hidden: bool,
    pub value: Option<String>,
}

/// In-memory page keyed by selector strings.
///
/// Selectors are matched literally (`"#greeting"` addresses exactly one
/// element); writing to an unknown selector is a no-op, as with an empty
/// jQuery selection. Clones share the same elements.
#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: Arc<Mutex<HashMap<String, Element>>>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element, or reset it if it already exists.
    pub fn with_element(self, selector: &str) -> Self {
        self.elements().insert(selector.to_string(), Element::default());
        self
    }

    /// Add an input control holding `value`.
    pub fn with_input(self, selector: &str, value: &str) -> Self {
        self.elements().insert(
            selector.to_string(),
            Element {
                value: Some(value.to_string()),
                ..Element::default()
            },
        );
        self
    }

    pub fn element(&self, selector: &str) -> Option<Element> {
        self.elements().get(selector).cloned()
    }

    pub fn html(&self, selector: &str) -> Option<String> {
        self.elements().get(selector).map(|e| e.html.clone())
    }

    pub fn is_hidden(&self, selector: &str) -> bool {
        self.elements().get(selector).is_some_and(|e| e.hidden)
    }

    pub fn set_value(&self, selector: &str, value: &str) {
        if let Some(element) = self.elements().get_mut(selector) {
            element.value = Some(value.to_string());
        }
    }

    fn elements(&self) -> MutexGuard<'_, HashMap<String, Element>> {
        self.elements
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Dom for Page {
    fn set_html(&self, selector: &str, html: &str) {
        if let Some(element) = self.elements().get_mut(selector) {
            element.html = html.to_string();
        }
    }

    fn hide(&self, selector: &str) {
        if let Some(element) = self.elements().get_mut(selector) {
            element.hidden = true;
        }
    }

    fn value(&self, selector: &str) -> Option<String> {
        self.elements().get(selector).and_then(|e| e.value.clone())
    }
}

impl<T: Dom + ?Sized> Dom for Arc<T> {
    fn set_html(&self, selector: &str, html: &str) {
        (**self).set_html(selector, html)
    }

    fn hide(&self, selector: &str) {
        (**self).hide(selector)
    }

    fn value(&self, selector: &str) -> Option<String> {
        (**self).value(selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_html_replaces_content() {
        let page = Page::new().with_element("#greeting");
        page.set_html("#greeting", "Hola John!");
        page.set_html("#greeting", "Saludos, John Doe");
        assert_eq!(page.html("#greeting").as_deref(), Some("Saludos, John Doe"));
    }

    #[test]
    fn test_unknown_selector_is_noop() {
        let page = Page::new();
        page.set_html("#missing", "Hello");
        page.hide("#missing");
        assert!(page.element("#missing").is_none());
        assert!(!page.is_hidden("#missing"));
    }

    #[test]
    fn test_input_value_and_hide() {
        let page = Page::new().with_input("#lang", "en").with_element("#logindiv");
        page.set_value("#lang", "fr");
        page.hide("#logindiv");

        assert_eq!(page.value("#lang").as_deref(), Some("fr"));
        assert_eq!(page.value("#logindiv"), None);
        assert!(page.is_hidden("#logindiv"));
    }
}
