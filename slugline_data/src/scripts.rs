//! CJK, Hangul and Kana blocks that pass through the filter stage untouched.
//!
//! Ranges follow the CJK letter set from `ikatyang/cjk-regex`.

use std::cmp::Ordering;

/// Closed code-point intervals, sorted and non-overlapping.
pub const SCRIPT_RANGES: &[(char, char)] = &[
    ('\u{1100}', '\u{11FF}'), // Hangul Jamo
    ('\u{2E80}', '\u{2E99}'), // CJK Radicals Supplement
    ('\u{2E9B}', '\u{2EF3}'),
    ('\u{2F00}', '\u{2FD5}'), // Kangxi Radicals
    ('\u{3005}', '\u{3005}'),
    ('\u{3007}', '\u{3007}'),
    ('\u{3021}', '\u{3029}'), // Hangzhou numerals
    ('\u{3038}', '\u{303B}'),
    ('\u{3041}', '\u{3096}'), // Hiragana
    ('\u{309D}', '\u{309F}'),
    ('\u{30A1}', '\u{30FA}'), // Katakana
    ('\u{30FD}', '\u{30FF}'),
    ('\u{3105}', '\u{312E}'), // Bopomofo
    ('\u{3131}', '\u{318E}'), // Hangul Compatibility Jamo
    ('\u{31A0}', '\u{31BA}'), // Bopomofo Extended
    ('\u{31F0}', '\u{321E}'), // Katakana Phonetic Extensions, parenthesized Hangul
    ('\u{3260}', '\u{327E}'), // circled Hangul
    ('\u{32D0}', '\u{32FE}'), // circled Katakana
    ('\u{3300}', '\u{3357}'), // square Katakana words
    ('\u{3400}', '\u{4DB5}'), // CJK Extension A
    ('\u{4E00}', '\u{9FEA}'), // CJK Unified Ideographs
    ('\u{A960}', '\u{A97C}'), // Hangul Jamo Extended-A
    ('\u{AC00}', '\u{D7A3}'), // Hangul Syllables
    ('\u{D7B0}', '\u{D7C6}'), // Hangul Jamo Extended-B
    ('\u{D7CB}', '\u{D7FB}'),
    ('\u{F900}', '\u{FA6D}'), // CJK Compatibility Ideographs
    ('\u{FA70}', '\u{FAD9}'),
    ('\u{FF66}', '\u{FF6F}'), // halfwidth Katakana
    ('\u{FF71}', '\u{FF9D}'),
    ('\u{FFA0}', '\u{FFBE}'), // halfwidth Hangul
    ('\u{FFC2}', '\u{FFC7}'),
    ('\u{FFCA}', '\u{FFCF}'),
    ('\u{FFD2}', '\u{FFD7}'),
    ('\u{FFDA}', '\u{FFDC}'),
];

/// Returns true if `c` falls inside one of the [`SCRIPT_RANGES`].
///
/// ```
/// use slugline_data::scripts::is_script_char;
///
/// assert!(is_script_char('語'));
/// assert!(is_script_char('한'));
/// assert!(!is_script_char('a'));
/// ```
pub fn is_script_char(c: char) -> bool {
    SCRIPT_RANGES
        .binary_search_by(|&(low, high)| {
            if high < c {
                Ordering::Less
            } else if low > c {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_are_sorted_and_disjoint() {
        for (low, high) in SCRIPT_RANGES {
            assert!(low <= high, "{low:?} > {high:?}");
        }
        for pair in SCRIPT_RANGES.windows(2) {
            assert!(pair[0].1 < pair[1].0, "{:?} overlaps {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn common_scripts_are_allowed() {
        for c in ['日', '本', '語', 'あ', 'ア', 'ㄅ', 'ㄱ', '한', '々', '〇', 'ｱ', '丽'] {
            assert!(is_script_char(c), "{c:?} should be allowed");
        }
    }

    #[test]
    fn range_edges_are_inclusive() {
        assert!(is_script_char('\u{1100}'));
        assert!(is_script_char('\u{11FF}'));
        assert!(is_script_char('\u{FFDC}'));
        assert!(!is_script_char('\u{10FF}'));
        assert!(!is_script_char('\u{1200}'));
        assert!(!is_script_char('\u{FFDD}'));
    }

    #[test]
    fn gaps_between_ranges_are_rejected() {
        // 2E9A, 3006 and 3097 sit between allowed ranges
        assert!(!is_script_char('\u{2E9A}'));
        assert!(!is_script_char('\u{3006}'));
        assert!(!is_script_char('\u{3097}'));
        // prolonged sound mark and middle dot are punctuation here
        assert!(!is_script_char('ー'));
        assert!(!is_script_char('・'));
    }

    #[test]
    fn latin_and_punctuation_are_not_script_chars() {
        for c in ['a', 'Z', '0', '-', ' ', 'é', 'ß', '。', '、'] {
            assert!(!is_script_char(c), "{c:?} should not be a script char");
        }
    }
}
