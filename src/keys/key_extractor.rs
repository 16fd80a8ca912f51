// src/keys/key_extractor.rs

use crate::parse::Node;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Separator placed between the keys of a path
pub const KEY_SEPARATOR: char = '.';

/// Flattened, sorted set of dot-notation key paths of one document
pub type KeySet = BTreeSet<String>;

/// Which nodes of a document produce a key path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyMode {
    /// Every mapping-contained key, intermediate mappings included
    #[default]
    AllNodes,
    /// Only keys whose value is not a mapping
    LeavesOnly,
}

/// `KeyExtractor` flattens a translation document into the set of
/// dot-notation key paths it defines, e.g. `{"a": {"b": "x"}}` gives
/// `a` and `a.b`.
///
/// Sequences are terminal: a key holding a list contributes its own path
/// and nothing from inside the list.
#[derive(Debug, Clone, Default)]
pub struct KeyExtractor {
    mode: KeyMode,
}

impl KeyExtractor {
    /// Create a new `KeyExtractor` in `KeyMode::AllNodes`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: KeyMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> KeyMode {
        self.mode
    }

    /// Collect every key path reachable through the mapping hierarchy of
    /// `root`. A non-mapping root yields an empty set.
    pub fn extract(&self, root: &Node) -> KeySet {
        let mut keys = KeySet::new();

        let Some(root_map) = root.as_mapping() else {
            return keys;
        };

        // Explicit worklist so deeply nested documents cannot exhaust the stack
        let mut pending: Vec<(Option<String>, _)> = vec![(None, root_map)];

        while let Some((prefix, map)) = pending.pop() {
            for (key, value) in map {
                let path = join_key(prefix.as_deref(), key);

                match value {
                    Node::Mapping(child) => {
                        if self.mode == KeyMode::AllNodes {
                            keys.insert(path.clone());
                        }
                        pending.push((Some(path), child));
                    }
                    Node::Scalar(_) | Node::Sequence(_) | Node::Null => {
                        keys.insert(path);
                    }
                }
            }
        }

        keys
    }
}

/// Convenience wrapper for `KeyExtractor::new().extract(root)`
pub fn extract_key_paths(root: &Node) -> KeySet {
    KeyExtractor::new().extract(root)
}

fn join_key(prefix: Option<&str>, key: &str) -> String {
    match prefix {
        Some(prefix) => {
            let mut path = String::with_capacity(prefix.len() + 1 + key.len());
            path.push_str(prefix);
            path.push(KEY_SEPARATOR);
            path.push_str(key);
            path
        }
        None => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::JsonParser;
    use std::path::Path;

    fn doc(json: &str) -> Node {
        JsonParser::parse_str(json, Path::new("test.json")).unwrap()
    }

    fn set(keys: &[&str]) -> KeySet {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_nested_and_flat_keys() {
        let keys = extract_key_paths(&doc(r#"{"a": {"b": "x"}, "c": "y"}"#));
        assert_eq!(keys, set(&["a", "a.b", "c"]));
    }

    #[test]
    fn test_deep_nesting() {
        let keys = extract_key_paths(&doc(
            r#"{"invoice": {"labels": {"add_new": "Add New", "edit": "Edit"}}}"#,
        ));
        assert_eq!(
            keys,
            set(&[
                "invoice",
                "invoice.labels",
                "invoice.labels.add_new",
                "invoice.labels.edit"
            ])
        );
    }

    #[test]
    fn test_empty_mapping_keeps_own_path() {
        let keys = extract_key_paths(&doc(r#"{"a": {}, "b": {"c": {}}}"#));
        assert_eq!(keys, set(&["a", "b", "b.c"]));
    }

    #[test]
    fn test_non_mapping_root_is_empty() {
        assert!(extract_key_paths(&doc(r#""text""#)).is_empty());
        assert!(extract_key_paths(&doc("42")).is_empty());
        assert!(extract_key_paths(&doc("null")).is_empty());
        assert!(extract_key_paths(&doc(r#"[{"a": "b"}]"#)).is_empty());
        assert!(extract_key_paths(&doc("{}")).is_empty());
    }

    #[test]
    fn test_sequences_are_opaque() {
        // Keys of objects inside a list are invisible to the comparison
        let keys = extract_key_paths(&doc(r#"{"a": [{"b": 1}, {"c": 2}], "d": []}"#));
        assert_eq!(keys, set(&["a", "d"]));
    }

    #[test]
    fn test_null_and_number_values_count_as_keys() {
        let keys = extract_key_paths(&doc(r#"{"a": null, "b": 1, "c": false}"#));
        assert_eq!(keys, set(&["a", "b", "c"]));
    }

    #[test]
    fn test_leaves_only_mode() {
        let extractor = KeyExtractor::new().with_mode(KeyMode::LeavesOnly);
        let keys = extractor.extract(&doc(
            r#"{"a": {"b": "x", "e": {}}, "c": "y", "d": ["z"]}"#,
        ));
        assert_eq!(keys, set(&["a.b", "c", "d"]));
        assert_eq!(extractor.mode(), KeyMode::LeavesOnly);
    }

    #[test]
    fn test_dotted_keys_collapse_with_nested_paths() {
        let keys = extract_key_paths(&doc(r#"{"a.b": "flat", "a": {"b": "nested"}}"#));
        assert_eq!(keys, set(&["a", "a.b"]));
    }

    #[test]
    fn test_very_deep_document_does_not_overflow() {
        let mut node = Node::Scalar("leaf".to_string());
        for _ in 0..1_000 {
            let mut map = std::collections::BTreeMap::new();
            map.insert("k".to_string(), node);
            node = Node::Mapping(map);
        }

        let keys = extract_key_paths(&node);
        assert_eq!(keys.len(), 1_000);
        assert!(keys.iter().any(|k| k.ends_with("k.k")));

        // Tear down iteratively; the default recursive drop is depth-bound too
        let mut pending = vec![node];
        while let Some(current) = pending.pop() {
            if let Node::Mapping(map) = current {
                pending.extend(map.into_values());
            }
        }
    }
}
