//! Shared data for slugline: per-call options and the read-only tables the
//! pipeline consults.

pub mod deburr;
pub mod options;
pub mod scripts;
pub mod tables;
pub mod validate;

pub use options::{DEFAULT_SEPARATOR, SlugOptions};
pub use validate::{OptionsError, validate_options};
