#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! Script-aware slug generation.
//!
//! Input runs through a fixed sequence of stages:
//! replace -> deburr -> normalize (NFKD) -> decamelize -> lowercase -> filter -> collapse.
//! ASCII alphanumerics and CJK/Hangul/Kana characters survive; everything
//! else collapses into single separators.

pub const SLUGLINE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod accents;
pub mod config;
pub mod decamelize;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod replace;
pub mod trace;

// Re-exports for convenience
pub use config::{load_options, parse_options};
pub use error::SlugError;
pub use pipeline::{slugify, slugify_default, slugify_value, try_slugify};
pub use replace::ReplacementTable;
pub use slugline_data::SlugOptions;
pub use trace::{SlugTrace, Stage, slugify_traced};
