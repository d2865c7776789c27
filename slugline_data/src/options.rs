use serde::{Deserialize, Serialize};

/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Configuration for a single slugify call.
///
/// Missing fields fall back to their defaults when deserialized, so a config
/// file only needs to name what it changes:
///
/// ```
/// use slugline_data::SlugOptions;
///
/// let opts: SlugOptions = toml::from_str("separator = \"_\"").unwrap();
/// assert_eq!(opts.separator, "_");
/// assert!(opts.lowercase);
/// assert!(opts.decamelize);
/// assert!(opts.custom_replacements.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugOptions {
    /// Joins tokens and replaces runs of disallowed characters.
    pub separator: String,
    /// Lowercase the text before filtering.
    pub lowercase: bool,
    /// Split camelCase and acronym boundaries into separate tokens.
    pub decamelize: bool,
    /// Caller replacements, applied between the built-in soft defaults and
    /// the fixed built-ins.
    pub custom_replacements: Vec<(String, String)>,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            lowercase: true,
            decamelize: true,
            custom_replacements: Vec::new(),
        }
    }
}

impl SlugOptions {
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    #[must_use]
    pub fn with_decamelize(mut self, decamelize: bool) -> Self {
        self.decamelize = decamelize;
        self
    }

    /// Append a custom replacement. Later entries win over earlier ones with the same key.
    #[must_use]
    pub fn with_replacement(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_replacements.push((key.into(), value.into()));
        self
    }
}
