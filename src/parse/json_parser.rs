use crate::error::{CheckError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

use super::document::Node;

/// Parser for JSON translation files
pub struct JsonParser;

impl JsonParser {
    pub fn parse_file(path: &Path) -> Result<Node> {
        let content = fs::read_to_string(path).map_err(|e| CheckError::io(path, e))?;
        Self::parse_str(&content, path)
    }

    /// Parse JSON text. `path` is only used for error messages.
    pub fn parse_str(content: &str, path: &Path) -> Result<Node> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        // Strip comments to support JSONC (JSON with Comments) format
        let cleaned_content = Self::strip_json_comments(content);

        let root: Value = serde_json::from_str(&cleaned_content).map_err(|e| {
            CheckError::json_parse_error(path, format!("Invalid JSON syntax: {}", e))
        })?;

        Ok(Self::to_node(root))
    }

    /// Strip single-line (//) and multi-line (/* */) comments from JSON
    fn strip_json_comments(content: &str) -> String {
        let mut result = String::with_capacity(content.len());
        let mut chars = content.chars().peekable();
        let mut in_string = false;
        let mut escape_next = false;

        while let Some(ch) = chars.next() {
            if escape_next {
                result.push(ch);
                escape_next = false;
                continue;
            }

            if ch == '\\' && in_string {
                result.push(ch);
                escape_next = true;
                continue;
            }

            if ch == '"' {
                in_string = !in_string;
                result.push(ch);
                continue;
            }

            if !in_string && ch == '/' {
                match chars.peek() {
                    Some('/') => {
                        chars.next();
                        for c in chars.by_ref() {
                            if c == '\n' {
                                // keep line numbers in serde_json errors accurate
                                result.push('\n');
                                break;
                            }
                        }
                        continue;
                    }
                    Some('*') => {
                        chars.next();
                        let mut prev = ' ';
                        for c in chars.by_ref() {
                            if prev == '*' && c == '/' {
                                break;
                            }
                            if c == '\n' {
                                result.push('\n');
                            }
                            prev = c;
                        }
                        continue;
                    }
                    _ => {}
                }
            }

            result.push(ch);
        }

        result
    }

    fn to_node(value: Value) -> Node {
        match value {
            Value::Object(map) => Node::Mapping(
                map.into_iter()
                    .map(|(key, val)| (key, Self::to_node(val)))
                    .collect(),
            ),
            Value::Array(arr) => Node::Sequence(arr.into_iter().map(Self::to_node).collect()),
            Value::String(s) => Node::Scalar(s),
            Value::Number(n) => Node::Scalar(n.to_string()),
            Value::Bool(b) => Node::Scalar(b.to_string()),
            Value::Null => Node::Null,
        }
    }
}
