use crate::utils::error::GreetrError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported greeting languages. The first variant is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Es, Language::Fr]
    }

    pub fn supported_codes() -> Vec<&'static str> {
        Self::all().iter().map(Language::code).collect()
    }
}

impl FromStr for Language {
    type Err = GreetrError;

    /// Exact, case-sensitive match against the supported codes.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| GreetrError::InvalidLanguage {
                code: code.to_string(),
            })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
