use crate::error::{CheckError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use yaml_rust::{Yaml, YamlLoader};

use super::document::Node;

/// Parser for YAML translation files
pub struct YamlParser;

impl YamlParser {
    pub fn parse_file(path: &Path) -> Result<Node> {
        let content = fs::read_to_string(path).map_err(|e| CheckError::io(path, e))?;
        Self::parse_str(&content, path)
    }

    /// Parse YAML text. Only the first document of a multi-document stream
    /// is used; an empty stream yields `Node::Null`.
    pub fn parse_str(content: &str, path: &Path) -> Result<Node> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let docs = YamlLoader::load_from_str(content)
            .map_err(|e| CheckError::yaml_parse_error(path, e.to_string()))?;

        Ok(docs.into_iter().next().map(Self::to_node).unwrap_or_default())
    }

    fn to_node(yaml: Yaml) -> Node {
        match yaml {
            Yaml::Hash(hash) => {
                let mut map = BTreeMap::new();
                let mut merged = Vec::new();
                for (key, value) in hash {
                    if Self::is_merge_key(&key) {
                        match value {
                            Yaml::Hash(_) => {
                                merged.push(value);
                                continue;
                            }
                            Yaml::Array(items)
                                if items.iter().all(|item| matches!(item, Yaml::Hash(_))) =>
                            {
                                merged.extend(items);
                                continue;
                            }
                            _ => {}
                        }
                    }
                    if let Some(key_str) = Self::key_to_string(&key) {
                        map.insert(key_str, Self::to_node(value));
                    }
                }

                // Explicit keys win, then earlier merge sources
                for source in merged {
                    if let Node::Mapping(entries) = Self::to_node(source) {
                        for (key, value) in entries {
                            map.entry(key).or_insert(value);
                        }
                    }
                }
                Node::Mapping(map)
            }
            Yaml::Array(items) => Node::Sequence(items.into_iter().map(Self::to_node).collect()),
            Yaml::String(value) => Node::Scalar(value),
            Yaml::Real(value) => Node::Scalar(value),
            Yaml::Integer(value) => Node::Scalar(value.to_string()),
            Yaml::Boolean(value) => Node::Scalar(value.to_string()),
            Yaml::Null | Yaml::Alias(_) | Yaml::BadValue => Node::Null,
        }
    }

    fn is_merge_key(key: &Yaml) -> bool {
        matches!(key, Yaml::String(s) if s == "<<")
    }

    /// Scalar keys become strings; null and compound keys are dropped
    fn key_to_string(key: &Yaml) -> Option<String> {
        match key {
            Yaml::String(s) | Yaml::Real(s) => Some(s.clone()),
            Yaml::Integer(i) => Some(i.to_string()),
            Yaml::Boolean(b) => Some(b.to_string()),
            _ => None,
        }
    }
}
