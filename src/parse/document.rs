use std::collections::BTreeMap;

/// A parsed translation document.
///
/// Parsers normalize their native value types into this shape so key
/// extraction never has to inspect format-specific values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Node {
    /// Key-to-value mapping; keys are unique, later duplicates win at parse time
    Mapping(BTreeMap<String, Node>),
    /// Any terminal value (string, number, boolean), kept as text
    Scalar(String),
    /// Ordered list; opaque to key extraction
    Sequence(Vec<Node>),
    #[default]
    Null,
}

impl Node {
    /// Returns the mapping if this node is one
    pub fn as_mapping(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Node::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Node::Mapping(_))
    }
}
