use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreetrError {
    #[error("Invalid language: '{code}' is not a supported language code")]
    InvalidLanguage { code: String },

    #[error("Missing capability: {capability} not available")]
    MissingCapability { capability: &'static str },

    #[error("Missing target selector")]
    MissingTarget,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Language,
    Capability,
    Configuration,
    Io,
}

impl GreetrError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GreetrError::InvalidLanguage { .. } => ErrorCategory::Language,
            GreetrError::MissingCapability { .. } | GreetrError::MissingTarget => {
                ErrorCategory::Capability
            }
            GreetrError::IoError(_) => ErrorCategory::Io,
            GreetrError::ConfigError { .. }
            | GreetrError::ConfigValidationError { .. }
            | GreetrError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            GreetrError::InvalidLanguage { code } => {
                format!("Language '{}' is not supported", code)
            }
            GreetrError::MissingCapability { capability } => {
                format!("Cannot render greeting: {} is not available", capability)
            }
            GreetrError::MissingTarget => "Cannot render greeting: no target selector given".to_string(),
            GreetrError::IoError(e) => format!("File access failed: {}", e),
            GreetrError::ConfigError { message } => format!("Configuration problem: {}", message),
            GreetrError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            GreetrError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem in '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Language => format!(
                "Use one of the supported language codes: {}",
                crate::domain::model::Language::supported_codes().join(", ")
            ),
            ErrorCategory::Capability => {
                "Supply a page to render into and a non-empty target selector".to_string()
            }
            ErrorCategory::Configuration => {
                "Check the configuration file and command line flags".to_string()
            }
            ErrorCategory::Io => "Make sure the file exists and is readable".to_string(),
        }
    }

    /// CLI 結束碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Language => 2,
            ErrorCategory::Capability => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Io => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, GreetrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let err = GreetrError::InvalidLanguage {
            code: "de".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Language);
        assert!(err.recovery_suggestion().contains("en, es, fr"));

        assert_eq!(GreetrError::MissingTarget.category(), ErrorCategory::Capability);
        assert_eq!(
            GreetrError::MissingCapability { capability: "DOM" }.category(),
            ErrorCategory::Capability
        );
    }

    #[test]
    fn test_error_display() {
        let err = GreetrError::InvalidLanguage {
            code: "EN".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid language: 'EN' is not a supported language code"
        );
        assert_ne!(err.exit_code(), 0);
    }
}
