/// Builds the phrase for a single three-digit group.
///
/// Holds the irregular word tables (units, teens, tens) and the rules that
/// combine them: `"<digit> hundred"`, irregular teens, and hyphenated tens
/// such as `"forty-two"`.
pub mod group;
/// Turns whole numbers and amounts into complete phrases.
///
/// This module owns the public conversion entry points. It validates the
/// input, splits the magnitude into groups of three digits, names each group
/// with its scale word, and appends the optional cents suffix.
///
/// # Responsibilities
/// - Rejects values outside the nameable range and malformed fractions.
/// - Skips empty groups so `1_000_000` reads `"one million"`.
/// - Prefixes `"negative"` for values below zero.
pub mod number;
/// Named magnitude steps.
///
/// Declares the `Scale` enum (thousand, million, billion, trillion) shared by
/// the converter, which appends scale words, and the parser, which reads them.
pub mod scale;

pub use number::{
    Amount, ConvertOptions, ConvertResult, MAX_MAGNITUDE, convert, convert_amount, convert_f64,
    convert_signed_fraction, convert_str, convert_with,
};
