use crate::error::ConvertError;

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Number of cents in one whole unit.
pub const CENTS_PER_UNIT: u64 = 100;

/// Safely converts an `f64` to `i64` if the value is finite, exactly
/// representable, and not fractional.
///
/// ## Errors
/// Returns an error for non-finite, out-of-range, or fractional values.
///
/// ## Example
/// ```
/// use numwords::{error::ConvertError, util::num::f64_to_i64_checked};
///
/// assert_eq!(f64_to_i64_checked(-1000.0).unwrap(), -1000);
///
/// let err = f64_to_i64_checked(1.5).unwrap_err();
/// assert!(matches!(err, ConvertError::Fractional { .. }));
///
/// let err = f64_to_i64_checked(f64::INFINITY).unwrap_err();
/// assert!(matches!(err, ConvertError::NonFinite { .. }));
///
/// let err = f64_to_i64_checked(1e20).unwrap_err();
/// assert!(matches!(err, ConvertError::OutOfRange { .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64) -> Result<i64, ConvertError> {
    if !value.is_finite() {
        return Err(ConvertError::NonFinite { value: value.to_string() });
    }
    if value.abs() > MAX_SAFE_U64_INT as f64 {
        return Err(ConvertError::OutOfRange { value: value.to_string() });
    }
    if value.fract() != 0.0 {
        return Err(ConvertError::Fractional { value: value.to_string() });
    }
    Ok(value as i64)
}

/// Splits a decimal amount into its sign, whole part and cents.
///
/// The value is rounded to the nearest cent first, so `12.345` becomes twelve
/// and thirty-five cents and `0.001` becomes plain zero. The sign is taken
/// from the rounded value, which keeps `-0.001` from reading as negative.
///
/// # Returns
/// `(negative, whole, cents)` with `cents` in `0..=99`.
///
/// # Errors
/// Returns `NonFinite` for `NaN` and infinities, and `OutOfRange` when the
/// amount in cents is not exactly representable as an `f64`.
///
/// # Example
/// ```
/// use numwords::util::num::f64_to_cents_checked;
///
/// assert_eq!(f64_to_cents_checked(12.34).unwrap(), (false, 12, 34));
/// assert_eq!(f64_to_cents_checked(-0.5).unwrap(), (true, 0, 50));
/// assert_eq!(f64_to_cents_checked(-0.001).unwrap(), (false, 0, 0));
/// assert!(f64_to_cents_checked(f64::NAN).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_cents_checked(value: f64) -> Result<(bool, u64, u8), ConvertError> {
    if !value.is_finite() {
        return Err(ConvertError::NonFinite { value: value.to_string() });
    }
    let scaled = (value * CENTS_PER_UNIT as f64).round();
    if scaled.abs() > MAX_SAFE_U64_INT as f64 {
        return Err(ConvertError::OutOfRange { value: value.to_string() });
    }

    let total = scaled.abs() as u64;
    let cents = (total % CENTS_PER_UNIT) as u8;
    Ok((scaled < 0.0, total / CENTS_PER_UNIT, cents))
}

/// Safely converts a signed fraction to a cents value.
///
/// ## Errors
/// Returns `NegativeFraction` for values below zero and `InvalidFraction` for
/// values above 99.
///
/// ## Example
/// ```
/// use numwords::{error::ConvertError, util::num::i64_to_cents_checked};
///
/// assert_eq!(i64_to_cents_checked(7).unwrap(), 7);
///
/// let err = i64_to_cents_checked(-5).unwrap_err();
/// assert_eq!(err, ConvertError::NegativeFraction { fraction: -5 });
///
/// let err = i64_to_cents_checked(100).unwrap_err();
/// assert_eq!(err, ConvertError::InvalidFraction { fraction: 100 });
/// ```
pub fn i64_to_cents_checked(fraction: i64) -> Result<u8, ConvertError> {
    if fraction < 0 {
        return Err(ConvertError::NegativeFraction { fraction });
    }

    u8::try_from(fraction).ok()
                          .filter(|&cents| u64::from(cents) < CENTS_PER_UNIT)
                          .ok_or(ConvertError::InvalidFraction { fraction })
}
