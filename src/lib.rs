pub mod config;
pub mod error;
pub mod keys;
pub mod output;
pub mod parse;
pub mod report;

// Re-export commonly used types
pub use config::{CheckConfig, Language};
pub use error::{CheckError, Result};
pub use keys::{extract_key_paths, Comparison, KeyExtractor, KeyMode, KeySet};
pub use output::ReportFormatter;
pub use parse::{load_document, load_translations, DocumentFormat, Node};
pub use report::{CheckReport, LanguageReport};

/// Compare every configured language against the reference language.
///
/// This function:
/// 1. Loads the reference document and extracts its key set
/// 2. Loads each target language in configured order and extracts its keys
/// 3. Records missing and extra keys per language
///
/// A document loads only if its root is a mapping with at least one key.
/// Only a reference that fails to load is an error. A target language that
/// fails to load is recorded as `LanguageReport::Failed` and the run moves on
/// to the next language. Key mismatches are findings, not errors.
#[must_use = "this function returns a Result that should be handled"]
pub fn run_check(config: &CheckConfig) -> Result<CheckReport> {
    let extractor = KeyExtractor::new().with_mode(config.key_mode);

    let reference_file = config.document_path(&config.reference);
    let reference_doc = load_translations(&reference_file).map_err(|e| {
        CheckError::reference_load(config.reference.name.clone(), &reference_file, e)
    })?;
    let reference_keys = extractor.extract(&reference_doc);

    tracing::debug!(
        language = %config.reference,
        keys = reference_keys.len(),
        "extracted reference keys"
    );

    let mut report = CheckReport::new(
        config.reference.clone(),
        reference_file,
        reference_keys.len(),
    );

    for language in config.target_languages() {
        let file = config.document_path(language);

        let language_report = match load_translations(&file) {
            Ok(doc) => {
                let keys = extractor.extract(&doc);
                let comparison = Comparison::between(&reference_keys, &keys);

                tracing::debug!(
                    %language,
                    keys = keys.len(),
                    missing = comparison.missing.len(),
                    extra = comparison.extra.len(),
                    "compared against reference"
                );

                LanguageReport::Compared {
                    language: language.clone(),
                    file,
                    total_keys: keys.len(),
                    comparison,
                }
            }
            Err(e) => {
                tracing::warn!(%language, error = %e, "skipping language that failed to load");

                LanguageReport::Failed {
                    language: language.clone(),
                    file,
                    reason: e.to_string(),
                }
            }
        };

        report.push(language_report);
    }

    Ok(report)
}
