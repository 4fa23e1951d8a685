/// Numeric conversion helpers.
///
/// This module provides safe functions for turning caller-supplied floats and
/// signed fractions into the integer parts the converter works with, without
/// risking silent data loss or rounding errors.
///
/// All functions return a `Result`, which is `Ok` if the conversion is lossless
/// and valid, or a [`ConvertError`](crate::error::ConvertError) describing why
/// the value was rejected.
pub mod num;
