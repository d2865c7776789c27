//! The slug pipeline: replace, deburr, normalize, decamelize, filter, collapse.

use log::{debug, trace};
use serde_json::Value;
use slugline_data::{SlugOptions, validate_options};

use crate::accents::{deburr, decompose};
use crate::decamelize::decamelize;
use crate::error::SlugError;
use crate::filter::{collapse_separators, replace_disallowed, strip_backslashes};
use crate::replace::ReplacementTable;
use crate::trace::Stage;

/// Slugify `input` with `options`.
///
/// Options are not validated here; use [`try_slugify`] for options that come
/// from outside the program.
///
/// ```
/// use slugline_engine::{SlugOptions, slugify};
///
/// assert_eq!(slugify("Hello World!", &SlugOptions::default()), "hello-world");
/// ```
pub fn slugify(input: &str, options: &SlugOptions) -> String {
    run_pipeline(input, options, |stage, output| trace!("{stage}: {output:?}"))
}

/// Slugify with default options.
pub fn slugify_default(input: &str) -> String {
    slugify(input, &SlugOptions::default())
}

/// Validate `options`, then slugify.
///
/// # Errors
/// Returns [`SlugError::InvalidOptions`] when the separator is empty or
/// contains a backslash.
pub fn try_slugify(input: &str, options: &SlugOptions) -> Result<String, SlugError> {
    check_options(options)?;
    Ok(slugify(input, options))
}

/// Slugify an untyped value, rejecting anything that is not a JSON string.
///
/// # Errors
/// [`SlugError::InvalidInputType`] for non-string input, checked before
/// anything else; [`SlugError::InvalidOptions`] for bad options.
pub fn slugify_value(input: &Value, options: &SlugOptions) -> Result<String, SlugError> {
    let Value::String(text) = input else {
        return Err(SlugError::InvalidInputType {
            found: json_type_name(input),
        });
    };
    try_slugify(text, options)
}

pub(crate) fn check_options(options: &SlugOptions) -> Result<(), SlugError> {
    let errors = validate_options(options);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(SlugError::InvalidOptions(errors))
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Run every stage in order, handing each intermediate result to `record`.
pub(crate) fn run_pipeline(input: &str, options: &SlugOptions, mut record: impl FnMut(Stage, &str)) -> String {
    let table = ReplacementTable::build(&options.custom_replacements);
    debug!(
        "slugify: separator={:?} lowercase={} decamelize={} replacements={}",
        options.separator,
        options.lowercase,
        options.decamelize,
        table.len()
    );

    let mut text = table.apply(input);
    record(Stage::Replace, &text);

    text = deburr(&text);
    record(Stage::Deburr, &text);

    text = decompose(&text);
    record(Stage::Normalize, &text);

    if options.decamelize {
        text = decamelize(&text);
        record(Stage::Decamelize, &text);
    }

    if options.lowercase {
        text = text.to_lowercase();
        record(Stage::Lowercase, &text);
    }

    text = replace_disallowed(&text, &options.separator, !options.lowercase);
    text = strip_backslashes(&text);
    record(Stage::Filter, &text);

    text = collapse_separators(&text, &options.separator);
    record(Stage::Collapse, &text);

    text
}
