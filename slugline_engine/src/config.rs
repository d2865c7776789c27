//! Loading [`SlugOptions`] from TOML.
//!
//! Every field is optional; missing ones take their defaults:
//!
//! ```toml
//! separator = "_"
//! lowercase = true
//! decamelize = false
//! custom_replacements = [["&", " and "], ["@", " at "]]
//! ```

use std::fs;
use std::path::Path;

use log::{info, warn};
use slugline_data::SlugOptions;

use crate::error::SlugError;
use crate::pipeline::check_options;

/// Read, parse, and validate an options file.
///
/// # Errors
/// Fails if the file can't be read, isn't valid TOML for [`SlugOptions`], or
/// names an invalid separator.
pub fn load_options(path: &Path) -> Result<SlugOptions, SlugError> {
    let src = fs::read_to_string(path).map_err(|source| SlugError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let options = parse_options(&src, path)?;
    info!(
        "loaded slug options from '{}' ({} custom replacements)",
        path.display(),
        options.custom_replacements.len()
    );
    Ok(options)
}

/// Parse and validate options from TOML text. `origin` is only used in error messages.
///
/// # Errors
/// See [`load_options`].
pub fn parse_options(src: &str, origin: &Path) -> Result<SlugOptions, SlugError> {
    let options: SlugOptions = toml::from_str(src).map_err(|source| SlugError::ConfigParse {
        path: origin.to_path_buf(),
        source,
    })?;
    if let Err(err) = check_options(&options) {
        warn!("rejecting options from '{}': {err}", origin.display());
        return Err(err);
    }
    Ok(options)
}
