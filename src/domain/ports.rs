/// Line-oriented text output, e.g. a console.
pub trait TextSink: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Page manipulation keyed by selector strings.
pub trait Dom: Send + Sync {
    /// Replace the content of every element matching `selector`.
    fn set_html(&self, selector: &str, html: &str);
    fn hide(&self, selector: &str);
    /// Current value of an input control, if the element exists and has one.
    fn value(&self, selector: &str) -> Option<String>;
}
