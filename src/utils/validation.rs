use crate::domain::model::Language;
use crate::utils::error::{GreetrError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Same rule as construction: exact, case-sensitive match, failing with
/// `InvalidLanguage` whether the code came from a flag, a file or a page.
pub fn validate_language(code: &str) -> Result<Language> {
    code.parse::<Language>()
}

/// Selectors only need to be non-empty; `render_to` applies the same rule.
pub fn validate_selector(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(GreetrError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Selector cannot be empty".to_string(),
        });
    }
    Ok(())
}
