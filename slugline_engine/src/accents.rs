//! Diacritic stripping: a Latin deburr pass followed by NFKD.

use slugline_data::deburr::{deburr_letter, is_combining_mark};
use unicode_normalization::UnicodeNormalization;

/// Map accented Latin letters to their ASCII base and drop combining marks.
pub fn deburr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if let Some(base) = deburr_letter(ch) {
            out.push_str(base);
        } else if !is_combining_mark(ch) {
            out.push(ch);
        }
    }
    out
}

/// Compatibility decomposition of whatever the deburr table missed. Marks it
/// leaves behind are removed later by the filter.
pub fn decompose(input: &str) -> String {
    input.nfkd().collect()
}
