use crate::config::Language;
use crate::keys::Comparison;
use std::path::PathBuf;

/// Outcome of checking one target language
#[derive(Debug, Clone, PartialEq)]
pub enum LanguageReport {
    /// Document loaded and was compared against the reference
    Compared {
        language: Language,
        file: PathBuf,
        total_keys: usize,
        comparison: Comparison,
    },
    /// Document could not be loaded; excluded from the tallies
    Failed {
        language: Language,
        file: PathBuf,
        reason: String,
    },
}

impl LanguageReport {
    pub fn language(&self) -> &Language {
        match self {
            LanguageReport::Compared { language, .. } | LanguageReport::Failed { language, .. } => {
                language
            }
        }
    }

    pub fn file(&self) -> &PathBuf {
        match self {
            LanguageReport::Compared { file, .. } | LanguageReport::Failed { file, .. } => file,
        }
    }

    pub fn comparison(&self) -> Option<&Comparison> {
        match self {
            LanguageReport::Compared { comparison, .. } => Some(comparison),
            LanguageReport::Failed { .. } => None,
        }
    }
}

/// Result of a full run: the reference plus one entry per target language,
/// in the order the languages were configured.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub reference: Language,
    pub reference_file: PathBuf,
    pub reference_keys: usize,
    pub languages: Vec<LanguageReport>,
}

impl CheckReport {
    pub fn new(reference: Language, reference_file: PathBuf, reference_keys: usize) -> Self {
        Self {
            reference,
            reference_file,
            reference_keys,
            languages: Vec::new(),
        }
    }

    pub fn push(&mut self, report: LanguageReport) {
        self.languages.push(report);
    }

    /// Languages that loaded, with their comparison
    pub fn compared(&self) -> impl Iterator<Item = (&Language, &Comparison)> {
        self.languages
            .iter()
            .filter_map(|r| r.comparison().map(|c| (r.language(), c)))
    }

    /// Languages with at least one missing key
    pub fn with_missing(&self) -> impl Iterator<Item = (&Language, &Comparison)> {
        self.compared().filter(|(_, c)| !c.missing.is_empty())
    }

    /// Languages with at least one extra key
    pub fn with_extra(&self) -> impl Iterator<Item = (&Language, &Comparison)> {
        self.compared().filter(|(_, c)| !c.extra.is_empty())
    }

    pub fn failed(&self) -> impl Iterator<Item = &LanguageReport> {
        self.languages
            .iter()
            .filter(|r| matches!(r, LanguageReport::Failed { .. }))
    }

    pub fn total_missing(&self) -> usize {
        self.compared().map(|(_, c)| c.missing.len()).sum()
    }

    pub fn total_extra(&self) -> usize {
        self.compared().map(|(_, c)| c.extra.len()).sum()
    }

    /// True when no compared language has missing or extra keys.
    /// Languages that failed to load do not count against this.
    pub fn is_in_sync(&self) -> bool {
        self.total_missing() == 0 && self.total_extra() == 0
    }

    /// In sync and every language loaded
    pub fn is_clean(&self) -> bool {
        self.is_in_sync() && self.failed().next().is_none()
    }
}
