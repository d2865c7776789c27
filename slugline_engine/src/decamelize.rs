//! camelCase and acronym word-boundary splitting.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LOWER_THEN_UPPER: Regex = Regex::new(r"([a-z0-9])([A-Z])").expect("valid boundary pattern");
    static ref ACRONYM_THEN_WORD: Regex = Regex::new(r"([A-Z]+)([A-Z][a-z0-9]+)").expect("valid acronym pattern");
}

/// Insert a space at `aB` boundaries, then between a leading acronym and the
/// word that follows it (`HTTPServer` -> `HTTP Server`).
pub fn decamelize(input: &str) -> String {
    let split = LOWER_THEN_UPPER.replace_all(input, "${1} ${2}");
    ACRONYM_THEN_WORD.replace_all(&split, "${1} ${2}").into_owned()
}
