//! # numwords
//!
//! numwords turns numbers into English cardinal words and reads them back.
//! It names every magnitude up to the trillions, prefixes `"negative"` for
//! values below zero, and can append a cents suffix for currency amounts.
//!
//! ```
//! use numwords::{ConvertOptions, convert, convert_with, parse_integer};
//!
//! let words = convert(123_456_789).unwrap();
//! assert_eq!(words,
//!            "one hundred twenty-three million four hundred fifty-six thousand seven \
//!             hundred eighty-nine");
//! assert_eq!(parse_integer(&words).unwrap(), 123_456_789);
//!
//! let price = convert_with(19, Some(99), &ConvertOptions::currency()).unwrap();
//! assert_eq!(price, "nineteen and ninety-nine cents");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Turns numbers into English words.
///
/// This module declares the conversion entry points, the `Amount` and
/// `ConvertOptions` types, the group word tables, and the `Scale` enum. Every
/// function is pure and safe to call from any thread.
///
/// # Responsibilities
/// - Splits magnitudes into three-digit groups and names each one.
/// - Applies scale words and skips empty groups.
/// - Renders signs and optional cents suffixes.
pub mod converter;
/// Provides unified error types for conversion and parsing.
///
/// This module defines all errors that can be raised while converting numbers
/// to words or words to numbers. Each failure is reported atomically: no
/// function in this crate returns a partial phrase or a partial value.
///
/// # Responsibilities
/// - Defines error enums for both directions.
/// - Attaches the rejected value or the byte offset of the offending word.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Reads English number words back into numbers.
///
/// This module tokenizes a phrase with a `logos` lexer and parses the tokens
/// with a small recursive-descent grammar that mirrors the converter's output.
///
/// # Responsibilities
/// - Accepts everything the converter produces, case-insensitively.
/// - Rejects malformed phrases with a positioned error.
pub mod parser;
/// General utilities for safe numeric conversion.
///
/// This module provides the checked conversions used when numbers arrive as
/// floats or signed fractions.
///
/// # Responsibilities
/// - Rejects non-finite and fractional floats without silent data loss.
/// - Rounds currency amounts to whole cents.
pub mod util;

pub use converter::{
    Amount, ConvertOptions, MAX_MAGNITUDE, convert, convert_amount, convert_f64,
    convert_signed_fraction, convert_str, convert_with, group::group_to_words, scale::Scale,
};
pub use error::{ConvertError, Error, ParseError};
pub use parser::core::{parse, parse_integer};

/// Converts or parses a single input, as the command-line tool does.
///
/// With `parse_mode` the input is read as number words and the number is
/// returned in decimal form (`-12.34`); otherwise the input is read as a
/// number and its words are returned.
///
/// # Errors
/// Returns the conversion or parse error for the input.
///
/// # Examples
/// ```
/// use numwords::{ConvertOptions, run_line};
///
/// let options = ConvertOptions::default();
/// assert_eq!(run_line("-42", false, &options).unwrap(), "negative forty-two");
/// assert_eq!(run_line("negative forty-two", true, &options).unwrap(), "-42");
/// assert!(run_line("forty-two", false, &options).is_err());
/// ```
pub fn run_line(input: &str, parse_mode: bool, options: &ConvertOptions) -> Result<String, Error> {
    log::debug!("input '{input}'");

    if parse_mode {
        return Ok(parse(input)?.to_string());
    }

    Ok(convert_str(input, options)?)
}

/// Runs every non-empty line of `text` through [`run_line`].
///
/// Blank lines are skipped but still counted, so a failure is reported with
/// the line number it has in the file: `"Line 3: <error>"`.
///
/// # Examples
/// ```
/// use numwords::{ConvertOptions, run_lines};
///
/// let results = run_lines("1\n\nten\n", false, &ConvertOptions::default());
/// assert_eq!(results[0], Ok("one".to_string()));
/// assert!(results[1].as_ref().unwrap_err().starts_with("Line 3: "));
/// ```
#[must_use]
pub fn run_lines(text: &str,
                 parse_mode: bool,
                 options: &ConvertOptions)
                 -> Vec<Result<String, String>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            run_line(line.trim(), parse_mode, options).map_err(|e| format!("Line {}: {e}", index + 1))
        })
        .collect()
}
