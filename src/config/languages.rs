use crate::error::CheckError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Built-in target languages, checked in this order
pub const DEFAULT_LANGUAGES: &[(&str, &str)] = &[
    ("fr", "French"),
    ("es", "Spanish"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("de", "German"),
    ("bn", "Bengali"),
    ("ru", "Russian"),
    ("vi", "Vietnamese"),
];

/// A language code paired with its display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// File stem of the language's document, e.g. `fr` for `fr.json`
    pub code: String,
    pub name: String,
}

impl Language {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Reject codes that are empty or would not form a plain file stem
    pub fn validate(&self) -> Result<(), CheckError> {
        let valid_code = !self.code.is_empty()
            && self
                .code
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if valid_code && !self.name.trim().is_empty() {
            Ok(())
        } else {
            Err(CheckError::InvalidLanguage(format!(
                "{}={}",
                self.code, self.name
            )))
        }
    }
}

/// Parses `CODE=NAME`; a bare `CODE` uses the code as its display name.
impl FromStr for Language {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, name) = match s.split_once('=') {
            Some((code, name)) => (code.trim(), name.trim()),
            None => (s.trim(), s.trim()),
        };

        let language = Language::new(code, name);
        language
            .validate()
            .map_err(|_| CheckError::InvalidLanguage(s.to_string()))?;
        Ok(language)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// The built-in reference language (English)
pub fn default_reference() -> Language {
    Language::new("en", "English")
}

pub fn default_languages() -> Vec<Language> {
    DEFAULT_LANGUAGES
        .iter()
        .map(|&(code, name)| Language::new(code, name))
        .collect()
}
