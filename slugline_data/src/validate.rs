use std::fmt;

use crate::SlugOptions;

/// A problem with a [`SlugOptions`] value that would break the output invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    EmptySeparator,
    BackslashInSeparator { separator: String },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::EmptySeparator => write!(f, "separator must not be empty"),
            OptionsError::BackslashInSeparator { separator } => {
                write!(f, "separator '{separator}' contains a backslash, which the filter stage strips")
            },
        }
    }
}

impl std::error::Error for OptionsError {}

/// Check options before running the pipeline and return every problem found.
///
/// ```
/// use slugline_data::{OptionsError, SlugOptions, validate_options};
///
/// assert!(validate_options(&SlugOptions::default()).is_empty());
///
/// let bad = SlugOptions::default().with_separator("");
/// assert_eq!(validate_options(&bad), vec![OptionsError::EmptySeparator]);
/// ```
pub fn validate_options(options: &SlugOptions) -> Vec<OptionsError> {
    let mut errors = Vec::new();

    if options.separator.is_empty() {
        errors.push(OptionsError::EmptySeparator);
    }
    if options.separator.contains('\\') {
        errors.push(OptionsError::BackslashInSeparator {
            separator: options.separator.clone(),
        });
    }

    errors
}
