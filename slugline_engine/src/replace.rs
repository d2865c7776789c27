//! Replacement table construction and the literal replacer.
//!
//! The merged table is rebuilt on every call from the immutable built-ins and
//! the caller's options; nothing is cached between calls.

use std::collections::HashMap;

use slugline_data::tables::{FIXED_REPLACEMENTS, OVERRIDABLE_REPLACEMENTS};

/// Ordered key -> value substitutions.
///
/// A key keeps the position of its first insertion; re-inserting it only
/// swaps the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl ReplacementTable {
    /// Merge built-in soft defaults, `custom`, and the fixed built-ins, in that order.
    pub fn build(custom: &[(String, String)]) -> Self {
        let mut table = Self::default();
        for (key, value) in OVERRIDABLE_REPLACEMENTS {
            table.insert(key, value);
        }
        for (key, value) in custom {
            table.insert(key, value);
        }
        for (key, value) in FIXED_REPLACEMENTS {
            table.insert(key, value);
        }
        table
    }

    /// Insert or overwrite.
    pub fn insert(&mut self, key: &str, value: &str) {
        if let Some(&pos) = self.index.get(key) {
            self.entries[pos].1 = value.to_string();
        } else {
            self.index.insert(key.to_string(), self.entries.len());
            self.entries.push((key.to_string(), value.to_string()));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Apply every entry in order. Each pass sees the previous pass's output,
    /// so a value containing a later key gets rewritten again.
    pub fn apply(&self, input: &str) -> String {
        self.entries
            .iter()
            .fold(input.to_string(), |text, (key, value)| text.replace(key.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn builtins_are_present_without_custom_entries() {
        let table = ReplacementTable::build(&[]);
        assert_eq!(table.len(), OVERRIDABLE_REPLACEMENTS.len() + FIXED_REPLACEMENTS.len());
        assert_eq!(table.get("&"), Some(" and "));
        assert_eq!(table.get("ß"), Some("ss"));
    }

    #[test]
    fn custom_overrides_soft_defaults() {
        let table = ReplacementTable::build(&pairs(&[("&", " und ")]));
        assert_eq!(table.get("&"), Some(" und "));
        // position of the first insertion is kept
        assert_eq!(table.iter().next(), Some(("&", " und ")));
    }

    #[test]
    fn fixed_entries_beat_custom() {
        let table = ReplacementTable::build(&pairs(&[("ä", "a")]));
        assert_eq!(table.get("ä"), Some("ae"));
    }

    #[test]
    fn last_duplicate_within_custom_wins() {
        let table = ReplacementTable::build(&pairs(&[("@", " at "), ("@", " around ")]));
        assert_eq!(table.get("@"), Some(" around "));
    }

    #[test]
    fn keys_match_literally() {
        let mut table = ReplacementTable::default();
        table.insert(".*", "X");
        table.insert("(", "[");
        assert_eq!(table.apply("a.*b.c(d"), "aXb.c[d");
    }

    #[test]
    fn replacement_is_global_and_non_overlapping() {
        let mut table = ReplacementTable::default();
        table.insert("aa", "b");
        assert_eq!(table.apply("aaaaa"), "bba");
    }

    #[test]
    fn passes_are_sequential() {
        let mut table = ReplacementTable::default();
        table.insert("a", "b");
        table.insert("b", "c");
        assert_eq!(table.apply("ab"), "cc");

        // reversed order leaves the first pass's output alone
        let mut table = ReplacementTable::default();
        table.insert("b", "c");
        table.insert("a", "b");
        assert_eq!(table.apply("ab"), "bc");
    }

    #[test]
    fn empty_key_inserts_between_every_char() {
        let mut table = ReplacementTable::default();
        table.insert("", "-");
        assert_eq!(table.apply("ab"), "-a-b-");
    }
}
