use std::path::PathBuf;
use thiserror::Error;

/// Error type for loading, configuring and running a key check
#[derive(Debug, Error)]
pub enum CheckError {
    /// File could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON file
    #[error("Failed to parse JSON file {file}:\n{reason}\n\nTip: Verify the JSON syntax is correct")]
    JsonParse { file: PathBuf, reason: String },

    /// Failed to parse YAML file
    #[error("Failed to parse YAML file {file}:\n{reason}\n\nTip: Verify the YAML syntax is correct")]
    YamlParse { file: PathBuf, reason: String },

    /// File extension maps to no known document format
    #[error("Unsupported translation file format: {file}\n\nTip: Use .json, .jsonc, .yml or .yaml files")]
    UnsupportedFormat { file: PathBuf },

    /// Document parsed but its root is not a mapping with at least one key
    #[error("Translation file {file} has no keys\n\nTip: The top level must be an object with at least one key")]
    EmptyDocument { file: PathBuf },

    /// Config file could not be read or parsed
    #[error("Invalid config file {file}:\n{reason}")]
    Config { file: PathBuf, reason: String },

    /// Malformed language entry (e.g. from `--lang`)
    #[error("Invalid language '{0}'\n\nTip: Use the form CODE=NAME, e.g. fr=French")]
    InvalidLanguage(String),

    /// Reference document failed to load, nothing can be compared
    #[error("Failed to load {language} translation file {file}: {source}")]
    ReferenceLoad {
        language: String,
        file: PathBuf,
        #[source]
        source: Box<CheckError>,
    },
}

impl CheckError {
    /// Create an Io error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a JsonParse error from a file path and reason
    pub fn json_parse_error(file: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::JsonParse {
            file: file.into(),
            reason: reason.into(),
        }
    }

    /// Create a YamlParse error from a file path and reason
    pub fn yaml_parse_error(file: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::YamlParse {
            file: file.into(),
            reason: reason.into(),
        }
    }

    /// Create a Config error from a file path and reason
    pub fn config_error(file: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            file: file.into(),
            reason: reason.into(),
        }
    }

    /// Wrap a load failure of the reference document
    pub fn reference_load(
        language: impl Into<String>,
        file: impl Into<PathBuf>,
        source: CheckError,
    ) -> Self {
        Self::ReferenceLoad {
            language: language.into(),
            file: file.into(),
            source: Box::new(source),
        }
    }
}

/// Result type alias for CheckError
pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_parse_error() {
        let err = CheckError::json_parse_error("translations/fr.json", "expected value");
        let msg = err.to_string();
        assert!(msg.contains("translations/fr.json"));
        assert!(msg.contains("expected value"));
        assert!(msg.contains("JSON syntax"));
    }

    #[test]
    fn test_yaml_parse_error() {
        let err = CheckError::yaml_parse_error("config/locales/en.yml", "unexpected character");
        let msg = err.to_string();
        assert!(msg.contains("config/locales/en.yml"));
        assert!(msg.contains("unexpected character"));
        assert!(msg.contains("YAML syntax"));
    }

    #[test]
    fn test_io_error_mentions_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = CheckError::io("translations/de.json", io_err);
        let msg = err.to_string();
        assert!(msg.contains("translations/de.json"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_unsupported_format_has_tip() {
        let err = CheckError::UnsupportedFormat {
            file: PathBuf::from("fr.po"),
        };
        let msg = err.to_string();
        assert!(msg.contains("fr.po"));
        assert!(msg.contains("Tip:"));
    }

    #[test]
    fn test_empty_document_has_tip() {
        let err = CheckError::EmptyDocument {
            file: PathBuf::from("translations/en.json"),
        };
        let msg = err.to_string();
        assert!(msg.contains("translations/en.json has no keys"));
        assert!(msg.contains("Tip:"));
    }

    #[test]
    fn test_invalid_language() {
        let err = CheckError::InvalidLanguage("french".to_string());
        let msg = err.to_string();
        assert!(msg.contains("'french'"));
        assert!(msg.contains("CODE=NAME"));
    }

    #[test]
    fn test_reference_load_wraps_source() {
        let inner = CheckError::json_parse_error("en.json", "trailing comma");
        let err = CheckError::reference_load("English", "en.json", inner);
        let msg = err.to_string();
        assert!(msg.contains("Failed to load English translation file"));
        assert!(msg.contains("trailing comma"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
