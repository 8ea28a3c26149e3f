use crate::core::messages;
use crate::domain::model::Language;
use crate::domain::ports::{Dom, TextSink};
use crate::utils::error::{GreetrError, Result};
use std::fmt;

/// A person's name plus the language to greet them in.
///
/// The language is always one of [`Language::all`]; both construction and
/// [`Greeter::set_language`] reject anything else. Every fluent method
/// returns the same instance, so calls can be chained:
///
/// ```
/// use greetr::{Greeter, MemorySink};
///
/// let sink = MemorySink::new();
/// let mut greeter = Greeter::new("John", "Doe", "en")?.with_sink(sink.clone());
/// greeter.set_language("es")?.greet(true).log();
///
/// assert_eq!(sink.lines(), vec!["Saludos, John Doe", "Inició sesión: John Doe"]);
/// # Ok::<(), greetr::GreetrError>(())
/// ```
pub struct Greeter {
    first_name: String,
    last_name: String,
    language: Language,
    sink: Option<Box<dyn TextSink>>,
    dom: Option<Box<dyn Dom>>,
}

impl Greeter {
    /// Build a greeter from optional parts.
    ///
    /// Missing or empty names become `""`; a missing or empty language
    /// becomes the default language. Any other language code must be
    /// supported or [`GreetrError::InvalidLanguage`] is returned.
    pub fn create(
        first_name: Option<&str>,
        last_name: Option<&str>,
        language: Option<&str>,
    ) -> Result<Self> {
        let language = match language.filter(|code| !code.is_empty()) {
            Some(code) => code.parse::<Language>()?,
            None => Language::default(),
        };

        let greeter = Self {
            first_name: first_name.unwrap_or_default().to_string(),
            last_name: last_name.unwrap_or_default().to_string(),
            language,
            sink: None,
            dom: None,
        };

        tracing::debug!(
            "Created greeter for '{}' ({})",
            greeter.full_name(),
            greeter.language
        );
        Ok(greeter)
    }

    pub fn new(first_name: &str, last_name: &str, language: &str) -> Result<Self> {
        Self::create(Some(first_name), Some(last_name), Some(language))
    }

    /// Attach the text output used by [`greet`](Self::greet) and [`log`](Self::log).
    pub fn with_sink<S: TextSink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Attach the page used by [`render_to`](Self::render_to).
    pub fn with_dom<D: Dom + 'static>(mut self, dom: D) -> Self {
        self.dom = Some(Box::new(dom));
        self
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn greeting(&self) -> String {
        messages::informal_greeting(self.language, &self.first_name)
    }

    pub fn formal_greeting(&self) -> String {
        messages::formal_greeting(self.language, &self.full_name())
    }

    pub fn log_message(&self) -> String {
        messages::log_line(self.language, &self.full_name())
    }

    pub fn message(&self, formal: bool) -> String {
        if formal {
            self.formal_greeting()
        } else {
            self.greeting()
        }
    }

    /// Switch language. On an unsupported code the greeter is left unchanged.
    pub fn set_language(&mut self, code: &str) -> Result<&mut Self> {
        let language = code.parse::<Language>()?;
        tracing::debug!("Language changed: {} -> {}", self.language, language);
        self.language = language;
        Ok(self)
    }

    /// Write the (in)formal greeting to the sink, if one is attached.
    pub fn greet(&mut self, formal: bool) -> &mut Self {
        let msg = self.message(formal);
        self.write(&msg);
        self
    }

    /// Write the login log line to the sink, if one is attached.
    pub fn log(&mut self) -> &mut Self {
        let msg = self.log_message();
        self.write(&msg);
        self
    }

    /// Replace the content of `target` on the attached page with the greeting.
    pub fn render_to(&mut self, target: Option<&str>, formal: bool) -> Result<&mut Self> {
        let dom = self
            .dom
            .as_deref()
            .ok_or(GreetrError::MissingCapability { capability: "DOM" })?;

        let target = target
            .filter(|selector| !selector.is_empty())
            .ok_or(GreetrError::MissingTarget)?;

        let msg = self.message(formal);
        tracing::trace!("Rendering '{}' into {}", msg, target);
        dom.set_html(target, &msg);
        Ok(self)
    }

    fn write(&self, line: &str) {
        match &self.sink {
            Some(sink) => {
                tracing::trace!("Writing '{}'", line);
                sink.write_line(line);
            }
            None => tracing::trace!("No text sink attached, skipping '{}'", line),
        }
    }
}

impl Default for Greeter {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            language: Language::default(),
            sink: None,
            dom: None,
        }
    }
}

impl fmt::Debug for Greeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Greeter")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("language", &self.language)
            .field("has_sink", &self.sink.is_some())
            .field("has_dom", &self.dom.is_some())
            .finish()
    }
}
