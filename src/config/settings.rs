use crate::error::{CheckError, Result};
use crate::keys::KeyMode;
use crate::parse::DocumentFormat;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::languages::{default_languages, default_reference, Language};

/// Directory searched when none is configured
pub const DEFAULT_TRANSLATIONS_DIR: &str = "lib/i18n/translations";

/// Everything a key check needs: where the files live, which language is
/// authoritative and which languages to compare against it.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckConfig {
    pub translations_dir: PathBuf,
    pub reference: Language,
    pub languages: Vec<Language>,
    pub format: DocumentFormat,
    pub key_mode: KeyMode,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            translations_dir: PathBuf::from(DEFAULT_TRANSLATIONS_DIR),
            reference: default_reference(),
            languages: default_languages(),
            format: DocumentFormat::default(),
            key_mode: KeyMode::default(),
        }
    }
}

/// On-disk shape of a TOML config file; every field is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    translations_dir: Option<PathBuf>,
    format: Option<DocumentFormat>,
    leaves_only: Option<bool>,
    reference: Option<Language>,
    languages: Option<Vec<Language>>,
}

impl CheckConfig {
    pub fn new(translations_dir: impl Into<PathBuf>) -> Self {
        Self {
            translations_dir: translations_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_reference(mut self, reference: Language) -> Self {
        self.reference = reference;
        self
    }

    pub fn with_languages(mut self, languages: Vec<Language>) -> Self {
        self.languages = languages;
        self
    }

    pub fn with_format(mut self, format: DocumentFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_key_mode(mut self, key_mode: KeyMode) -> Self {
        self.key_mode = key_mode;
        self
    }

    /// File name of a language's document, e.g. `fr.json`
    pub fn file_name(&self, language: &Language) -> String {
        format!("{}.{}", language.code, self.format.extension())
    }

    pub fn document_path(&self, language: &Language) -> PathBuf {
        self.translations_dir.join(self.file_name(language))
    }

    /// Languages to compare, in configured order, without the reference
    /// and without repeated codes.
    pub fn target_languages(&self) -> Vec<&Language> {
        let mut seen: Vec<&str> = vec![self.reference.code.as_str()];
        let mut targets = Vec::with_capacity(self.languages.len());

        for language in &self.languages {
            if seen.contains(&language.code.as_str()) {
                tracing::debug!(code = %language.code, "skipping duplicate or reference language");
                continue;
            }
            seen.push(language.code.as_str());
            targets.push(language);
        }

        targets
    }

    /// Load a TOML config file layered over the defaults.
    ///
    /// A relative `translations_dir` is resolved against the directory that
    /// holds the config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| CheckError::io(path, e))?;
        let mut config = Self::from_toml_str(&content, path)?;

        if config.translations_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.translations_dir = parent.join(&config.translations_dir);
            }
        }

        Ok(config)
    }

    /// Parse TOML config text. `path` is only used for error messages.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| CheckError::config_error(path, e.to_string()))?;

        let mut config = Self::default();

        if let Some(dir) = file.translations_dir {
            config.translations_dir = dir;
        }
        if let Some(format) = file.format {
            config.format = format;
        }
        if let Some(true) = file.leaves_only {
            config.key_mode = KeyMode::LeavesOnly;
        }
        if let Some(reference) = file.reference {
            reference.validate()?;
            config.reference = reference;
        }
        if let Some(languages) = file.languages {
            for language in &languages {
                language.validate()?;
            }
            config.languages = languages;
        }

        Ok(config)
    }
}
