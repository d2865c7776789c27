//! Built-in replacement tables.
//!
//! The engine merges these with the caller's replacements in the order
//! overridable < custom < fixed, so a fixed entry always has the last word.

/// Soft defaults. A custom replacement with the same key takes precedence.
pub const OVERRIDABLE_REPLACEMENTS: &[(&str, &str)] = &[
    ("&", " and "),
    ("🦄", " unicorn "),
    ("♥", " love "),
    // currency
    ("$", " dollar "),
    ("€", " euro "),
    ("£", " pound "),
    ("¥", " yen "),
];

/// Always applied last; custom replacements cannot change these.
pub const FIXED_REPLACEMENTS: &[(&str, &str)] = &[
    // German umlauts
    ("ß", "ss"),
    ("ä", "ae"),
    ("Ä", "Ae"),
    ("ö", "oe"),
    ("Ö", "Oe"),
    ("ü", "ue"),
    ("Ü", "Ue"),
    // Vietnamese stroke d
    ("đ", "d"),
    ("Đ", "D"),
];
