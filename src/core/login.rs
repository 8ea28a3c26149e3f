use crate::core::greeter::Greeter;
use crate::domain::ports::{Dom, TextSink};
use crate::utils::error::Result;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSelectors {
    /// Container holding the language select and the login button.
    pub container: String,
    pub language_input: String,
    pub greeting_target: String,
}

impl Default for LoginSelectors {
    fn default() -> Self {
        Self {
            container: "#logindiv".to_string(),
            language_input: "#lang".to_string(),
            greeting_target: "#greeting".to_string(),
        }
    }
}

/// Page wiring for the login button: hide the form, greet the user in the
/// chosen language, then log the login.
pub struct LoginFlow {
    dom: Arc<dyn Dom>,
    sink: Option<Arc<dyn TextSink>>,
    selectors: LoginSelectors,
}

impl LoginFlow {
    pub fn new(dom: Arc<dyn Dom>, selectors: LoginSelectors) -> Self {
        Self {
            dom,
            sink: None,
            selectors,
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn TextSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn selectors(&self) -> &LoginSelectors {
        &self.selectors
    }

    /// Run the login for `first_name last_name` and return the greeter used.
    ///
    /// The form is hidden before the language is validated, so an invalid
    /// selection leaves the form hidden and the greeting target untouched.
    pub fn login(&self, first_name: &str, last_name: &str) -> Result<Greeter> {
        let mut greeter =
            Greeter::create(Some(first_name), Some(last_name), None)?.with_dom(self.dom.clone());
        if let Some(sink) = &self.sink {
            greeter = greeter.with_sink(sink.clone());
        }

        self.dom.hide(&self.selectors.container);

        // 沒有選擇語言時沿用預設語言
        let code = self
            .dom
            .value(&self.selectors.language_input)
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| greeter.language().code().to_string());

        tracing::info!("Login for '{}' with language '{}'", greeter.full_name(), code);

        greeter
            .set_language(&code)?
            .render_to(Some(&self.selectors.greeting_target), true)?
            .log();

        Ok(greeter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MemorySink, Page};
    use crate::domain::model::Language;

    fn login_page(lang: &str) -> Page {
        Page::new()
            .with_element("#logindiv")
            .with_input("#lang", lang)
            .with_element("#greeting")
    }

    #[test]
    fn test_login_renders_and_logs() {
        let page = login_page("fr");
        let sink = MemorySink::new();
        let flow = LoginFlow::new(Arc::new(page.clone()), LoginSelectors::default())
            .with_sink(Arc::new(sink.clone()));

        let greeter = flow.login("John", "Doe").unwrap();

        assert_eq!(greeter.language(), Language::Fr);
        assert!(page.is_hidden("#logindiv"));
        assert_eq!(page.html("#greeting").as_deref(), Some("Bonjour, John Doe"));
        assert_eq!(sink.lines(), vec!["Connecté: John Doe"]);
    }

    #[test]
    fn test_login_without_selection_uses_default() {
        let page = login_page("");
        let flow = LoginFlow::new(Arc::new(page.clone()), LoginSelectors::default());

        let greeter = flow.login("John", "Doe").unwrap();
        assert_eq!(greeter.language(), Language::En);
        assert_eq!(page.html("#greeting").as_deref(), Some("Greetings, John Doe"));
    }
}
