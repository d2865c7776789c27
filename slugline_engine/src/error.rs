//! Error type for the slug pipeline and its configuration loader.

use std::path::PathBuf;

use slugline_data::OptionsError;
use thiserror::Error;

/// Everything that can stop a slug from being produced.
#[derive(Debug, Error)]
pub enum SlugError {
    #[error("expected a string, got `{found}`")]
    InvalidInputType { found: &'static str },
    #[error("invalid slug options: {}", list_errors(.0))]
    InvalidOptions(Vec<OptionsError>),
    #[error("unable to read config '{}'", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config '{}'", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

fn list_errors(errors: &[OptionsError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_error_names_the_received_type() {
        let err = SlugError::InvalidInputType { found: "number" };
        assert_eq!(err.to_string(), "expected a string, got `number`");
    }

    #[test]
    fn option_errors_are_listed() {
        let err = SlugError::InvalidOptions(vec![
            OptionsError::EmptySeparator,
            OptionsError::BackslashInSeparator {
                separator: "\\".into(),
            },
        ]);
        let msg = err.to_string();
        assert!(msg.starts_with("invalid slug options: separator must not be empty; "));
        assert!(msg.contains("backslash"));
    }
}
