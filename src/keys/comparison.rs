use super::key_extractor::KeySet;

/// Difference between a target key set and the reference key set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    /// In the reference, absent from the target
    pub missing: KeySet,
    /// In the target, absent from the reference
    pub extra: KeySet,
}

impl Comparison {
    pub fn between(reference: &KeySet, target: &KeySet) -> Self {
        Self {
            missing: reference.difference(target).cloned().collect(),
            extra: target.difference(reference).cloned().collect(),
        }
    }

    /// True when the target has exactly the reference's keys
    pub fn is_in_sync(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(keys: &[&str]) -> KeySet {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_missing_nested_key() {
        let cmp = Comparison::between(&set(&["a", "a.b", "a.d"]), &set(&["a", "a.b"]));
        assert_eq!(cmp.missing, set(&["a.d"]));
        assert!(cmp.extra.is_empty());
        assert!(!cmp.is_in_sync());
    }

    #[test]
    fn test_extra_key() {
        let cmp = Comparison::between(&set(&["a"]), &set(&["a", "b"]));
        assert!(cmp.missing.is_empty());
        assert_eq!(cmp.extra, set(&["b"]));
    }

    #[test]
    fn test_identical_sets_are_in_sync() {
        let keys = set(&["a", "a.b", "c"]);
        let cmp = Comparison::between(&keys, &keys);
        assert!(cmp.is_in_sync());
        assert_eq!(cmp, Comparison::default());
    }

    #[test]
    fn test_both_directions() {
        let cmp = Comparison::between(&set(&["common", "only_ref"]), &set(&["common", "only_target"]));
        assert_eq!(cmp.missing, set(&["only_ref"]));
        assert_eq!(cmp.extra, set(&["only_target"]));
    }
}
