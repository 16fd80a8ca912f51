use crate::error::{CheckError, Result};
use std::path::Path;

use super::document::Node;
use super::format::DocumentFormat;
use super::json_parser::JsonParser;
use super::yaml_parser::YamlParser;

/// Load a translation document, picking the parser from the file extension.
pub fn load_document(path: &Path) -> Result<Node> {
    let format = DocumentFormat::from_path(path).ok_or_else(|| CheckError::UnsupportedFormat {
        file: path.to_path_buf(),
    })?;

    tracing::debug!(path = %path.display(), %format, "loading translation document");

    match format {
        DocumentFormat::Json => JsonParser::parse_file(path),
        DocumentFormat::Yaml => YamlParser::parse_file(path),
    }
}

/// Load a document that must hold translations: its root has to be a
/// mapping with at least one key. `null`, scalars, sequences and `{}` are
/// rejected with `CheckError::EmptyDocument`.
pub fn load_translations(path: &Path) -> Result<Node> {
    let node = load_document(path)?;

    if node.as_mapping().is_some_and(|map| !map.is_empty()) {
        Ok(node)
    } else {
        Err(CheckError::EmptyDocument {
            file: path.to_path_buf(),
        })
    }
}
