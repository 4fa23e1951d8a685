use std::fmt;

use log::{debug, trace};

use crate::{
    converter::{
        group::{UNITS, push_group, push_word},
        scale::Scale,
    },
    error::ConvertError,
    util::num::{CENTS_PER_UNIT, f64_to_cents_checked, f64_to_i64_checked, i64_to_cents_checked},
};

pub type ConvertResult<T> = Result<T, ConvertError>;

/// Largest magnitude the scale words can name: 999 trillion 999 billion ...
/// 999.
pub const MAX_MAGNITUDE: u64 = 999_999_999_999_999;

/// Number of decimal digits in one group.
const GROUP_SIZE: u64 = 1_000;

/// Options that change how a conversion treats fractional input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Render a fractional part as an `"and <n> cents"` suffix instead of
    /// rejecting it.
    pub currency: bool,
}

impl ConvertOptions {
    /// Options with currency mode enabled.
    #[must_use]
    pub const fn currency() -> Self {
        Self { currency: true }
    }
}

/// A sign-magnitude number with an optional cents fraction.
///
/// This is what the parser produces and what [`convert_amount`] consumes. The
/// sign lives outside the magnitude so that amounts such as `-0.50` can be
/// represented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Amount {
    /// Whether the amount is below zero.
    pub negative: bool,
    /// The whole part.
    pub whole:    u64,
    /// The cents part, if one was given.
    pub cents:    Option<u8>,
}

impl Amount {
    /// Builds an amount without cents from a signed integer.
    ///
    /// # Example
    /// ```
    /// use numwords::converter::Amount;
    ///
    /// let amount = Amount::integer(-42);
    /// assert!(amount.negative);
    /// assert_eq!(amount.whole, 42);
    /// assert_eq!(amount.cents, None);
    /// ```
    #[must_use]
    pub const fn integer(n: i64) -> Self {
        Self { negative: n < 0,
               whole:    n.unsigned_abs(),
               cents:    None, }
    }

    /// Returns `true` when both the whole part and the cents are zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.whole == 0 && self.cents.unwrap_or(0) == 0
    }

    /// Returns the amount as a signed integer, or `None` when it carries cents
    /// or does not fit an `i64`.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        if self.cents.is_some() {
            return None;
        }
        let whole = i64::try_from(self.whole).ok()?;
        Some(if self.negative { -whole } else { whole })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative && !self.is_zero() {
            write!(f, "-")?;
        }
        match self.cents {
            Some(cents) => write!(f, "{}.{cents:02}", self.whole),
            None => write!(f, "{}", self.whole),
        }
    }
}

/// Converts an integer to English words.
///
/// # Errors
/// Returns `ConvertError::OutOfRange` when `|n|` exceeds [`MAX_MAGNITUDE`].
///
/// # Example
/// ```
/// use numwords::convert;
///
/// assert_eq!(convert(0).unwrap(), "zero");
/// assert_eq!(convert(-42).unwrap(), "negative forty-two");
/// assert_eq!(convert(1_000_000).unwrap(), "one million");
/// assert!(convert(i64::MAX).is_err());
/// ```
pub fn convert(n: i64) -> ConvertResult<String> {
    convert_with(n, None, &ConvertOptions::default())
}

/// Converts an integer and an optional cents fraction to English words.
///
/// # Errors
/// - `FractionWithoutCurrency` if `cents` is given without currency mode.
/// - `InvalidFraction` if `cents` is above 99.
/// - `OutOfRange` if `|n|` exceeds [`MAX_MAGNITUDE`].
///
/// # Example
/// ```
/// use numwords::{ConvertOptions, convert_with, error::ConvertError};
///
/// let words = convert_with(42, Some(15), &ConvertOptions::currency()).unwrap();
/// assert_eq!(words, "forty-two and fifteen cents");
///
/// let err = convert_with(42, Some(15), &ConvertOptions::default()).unwrap_err();
/// assert_eq!(err, ConvertError::FractionWithoutCurrency);
/// ```
pub fn convert_with(n: i64, cents: Option<u8>, options: &ConvertOptions) -> ConvertResult<String> {
    debug!("converting {n} (cents: {cents:?}, currency: {})", options.currency);

    if cents.is_some() && !options.currency {
        return Err(ConvertError::FractionWithoutCurrency);
    }

    render(n < 0, n.unsigned_abs(), cents)
}

/// Converts an integer and a signed fraction, validating the fraction first.
///
/// Use this when the fraction comes from a signed source. The sign of the
/// amount must be carried by `n`.
///
/// # Errors
/// - `NegativeFraction` if `fraction` is below zero.
/// - `InvalidFraction` if `fraction` is above 99.
/// - Everything [`convert_with`] returns.
///
/// # Example
/// ```
/// use numwords::{ConvertOptions, convert_signed_fraction, error::ConvertError};
///
/// let options = ConvertOptions::currency();
/// assert_eq!(convert_signed_fraction(-3, 1, &options).unwrap(),
///            "negative three and one cent");
///
/// let err = convert_signed_fraction(-3, -1, &options).unwrap_err();
/// assert_eq!(err, ConvertError::NegativeFraction { fraction: -1 });
/// ```
pub fn convert_signed_fraction(n: i64,
                               fraction: i64,
                               options: &ConvertOptions)
                               -> ConvertResult<String> {
    let cents = i64_to_cents_checked(fraction)?;
    convert_with(n, Some(cents), options)
}

/// Converts a floating-point value.
///
/// Without currency mode the value must be an exact integer. With currency
/// mode it is rounded to the nearest cent; a zero cents part adds no suffix.
///
/// # Errors
/// - `NonFinite` for `NaN` and infinities.
/// - `Fractional` for non-integral values without currency mode.
/// - `OutOfRange` for magnitudes that cannot be named or represented exactly.
///
/// # Example
/// ```
/// use numwords::{ConvertOptions, convert_f64, error::ConvertError};
///
/// let currency = ConvertOptions::currency();
/// assert_eq!(convert_f64(12.34, &currency).unwrap(), "twelve and thirty-four cents");
/// assert_eq!(convert_f64(7.0, &currency).unwrap(), "seven");
/// assert_eq!(convert_f64(1e3, &ConvertOptions::default()).unwrap(), "one thousand");
///
/// let err = convert_f64(1.5, &ConvertOptions::default()).unwrap_err();
/// assert!(matches!(err, ConvertError::Fractional { .. }));
/// ```
pub fn convert_f64(value: f64, options: &ConvertOptions) -> ConvertResult<String> {
    debug!("converting float {value} (currency: {})", options.currency);

    if options.currency {
        let (negative, whole, cents) = f64_to_cents_checked(value)?;
        let cents = (cents != 0).then_some(cents);
        return render(negative, whole, cents);
    }

    let n = f64_to_i64_checked(value)?;
    render(n < 0, n.unsigned_abs(), None)
}

/// Converts an [`Amount`], such as one returned by [`parse`](crate::parse).
///
/// A present `cents` field always produces a suffix, even when it is zero.
///
/// # Errors
/// - `InvalidFraction` if `cents` is above 99.
/// - `OutOfRange` if `whole` exceeds [`MAX_MAGNITUDE`].
///
/// # Example
/// ```
/// use numwords::{Amount, convert_amount};
///
/// let amount = Amount { negative: true, whole: 0, cents: Some(50) };
/// assert_eq!(convert_amount(&amount).unwrap(), "negative zero and fifty cents");
/// ```
pub fn convert_amount(amount: &Amount) -> ConvertResult<String> {
    debug!("converting amount {amount}");

    render(amount.negative, amount.whole, amount.cents)
}

/// Validates the parts and builds the full phrase.
///
/// Nothing is written until every check has passed, so a failed conversion
/// never leaks a partial phrase.
fn render(negative: bool, whole: u64, cents: Option<u8>) -> ConvertResult<String> {
    if whole > MAX_MAGNITUDE {
        let sign = if negative { "-" } else { "" };
        return Err(ConvertError::OutOfRange { value: format!("{sign}{whole}") });
    }
    if let Some(c) = cents
       && u64::from(c) >= CENTS_PER_UNIT
    {
        return Err(ConvertError::InvalidFraction { fraction: i64::from(c) });
    }

    let mut out = String::new();

    if negative && (whole != 0 || cents.unwrap_or(0) != 0) {
        push_word(&mut out, "negative");
    }

    push_magnitude(&mut out, whole);

    if let Some(c) = cents {
        push_word(&mut out, "and");
        push_magnitude(&mut out, u64::from(c));
        push_word(&mut out, if c == 1 { "cent" } else { "cents" });
    }

    Ok(out)
}

/// Appends the words for `magnitude`, which must not exceed
/// [`MAX_MAGNITUDE`].
#[allow(clippy::cast_possible_truncation)]
fn push_magnitude(out: &mut String, magnitude: u64) {
    if magnitude == 0 {
        push_word(out, UNITS[0]);
        return;
    }

    let mut groups = Vec::with_capacity(Scale::ALL.len());
    let mut rest = magnitude;
    while rest > 0 {
        groups.push((rest % GROUP_SIZE) as u16);
        rest /= GROUP_SIZE;
    }

    for (index, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        let Some(scale) = Scale::from_index(index) else {
            continue;
        };
        trace!("group {group} at scale {scale:?}");

        push_group(out, group);
        if let Some(word) = scale.word() {
            push_word(out, word);
        }
    }
}

/// Converts a number written as text, such as a command-line argument.
///
/// Integers are converted exactly. Anything else that parses as a float goes
/// through [`convert_f64`].
///
/// # Errors
/// - `NotANumber` if `input` is neither an integer nor a float.
/// - Everything [`convert_with`] and [`convert_f64`] return.
///
/// # Example
/// ```
/// use numwords::{ConvertOptions, convert_str};
///
/// let currency = ConvertOptions::currency();
/// assert_eq!(convert_str(" 105 ", &currency).unwrap(), "one hundred five");
/// assert_eq!(convert_str("0.01", &currency).unwrap(), "zero and one cent");
/// assert!(convert_str("twelve", &currency).is_err());
/// ```
pub fn convert_str(input: &str, options: &ConvertOptions) -> ConvertResult<String> {
    let trimmed = input.trim();

    if let Ok(n) = trimmed.parse::<i64>() {
        return convert_with(n, None, options);
    }
    if !trimmed.is_empty()
       && let Ok(value) = trimmed.parse::<f64>()
    {
        return convert_f64(value, options);
    }

    Err(ConvertError::NotANumber { input: trimmed.to_string() })
}
