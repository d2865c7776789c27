//! Script-aware filtering and separator cleanup.

use slugline_data::scripts::is_script_char;

/// Characters that survive filtering: ASCII digits and letters (lowercase
/// only unless `keep_upper`) plus the CJK/Hangul/Kana script ranges.
pub fn is_allowed(c: char, keep_upper: bool) -> bool {
    c.is_ascii_digit() || c.is_ascii_lowercase() || (keep_upper && c.is_ascii_uppercase()) || is_script_char(c)
}

/// Replace each maximal run of disallowed characters with one `separator`.
pub fn replace_disallowed(input: &str, separator: &str, keep_upper: bool) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;
    for ch in input.chars() {
        if is_allowed(ch, keep_upper) {
            out.push(ch);
            in_run = false;
        } else if !in_run {
            out.push_str(separator);
            in_run = true;
        }
    }
    out
}

pub fn strip_backslashes(input: &str) -> String {
    input.replace('\\', "")
}

/// Fold repeated separators into one and drop them from both ends.
pub fn collapse_separators(input: &str, separator: &str) -> String {
    if separator.is_empty() {
        return input.to_string();
    }
    input
        .split(separator)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_become_a_single_separator() {
        assert_eq!(replace_disallowed("hello world!", "-", false), "hello-world-");
        assert_eq!(replace_disallowed("a  ,  b", "_", false), "a_b");
    }

    #[test]
    fn uppercase_survives_only_when_kept() {
        assert_eq!(replace_disallowed("Hi", "-", false), "-i");
        assert_eq!(replace_disallowed("Hi", "-", true), "Hi");
    }

    #[test]
    fn script_characters_survive() {
        assert_eq!(replace_disallowed("日本語 test", "-", false), "日本語-test");
        assert_eq!(replace_disallowed("ラーメン", "-", false), "ラ-メン");
    }

    #[test]
    fn separator_itself_counts_as_disallowed() {
        assert_eq!(replace_disallowed("--trim--me--", "-", false), "-trim-me-");
    }

    #[test]
    fn collapse_trims_and_dedupes() {
        assert_eq!(collapse_separators("-trim--me-", "-"), "trim-me");
        assert_eq!(collapse_separators("---", "-"), "");
        assert_eq!(collapse_separators("", "-"), "");
        assert_eq!(collapse_separators("a__b__", "__"), "a__b");
    }

    #[test]
    fn collapse_leaves_clean_input_alone() {
        assert_eq!(collapse_separators("already-clean", "-"), "already-clean");
        assert_eq!(collapse_separators("no_dashes_here", "-"), "no_dashes_here");
    }

    #[test]
    fn backslashes_are_removed() {
        assert_eq!(strip_backslashes(r"a\b\\c"), "abc");
    }
}
