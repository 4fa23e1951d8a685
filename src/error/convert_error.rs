#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while converting a number to words.
pub enum ConvertError {
    /// The magnitude is larger than the largest nameable value.
    OutOfRange {
        /// The rejected value, rendered as text so floats survive intact.
        value: String,
    },
    /// A floating-point input was `NaN` or infinite.
    NonFinite {
        /// The rejected value.
        value: String,
    },
    /// A floating-point input had a fractional part where an integer was
    /// required.
    Fractional {
        /// The rejected value.
        value: String,
    },
    /// A fraction was negative. The sign belongs to the whole part.
    NegativeFraction {
        /// The rejected fraction.
        fraction: i64,
    },
    /// A cents fraction was outside `0..=99`.
    InvalidFraction {
        /// The rejected fraction.
        fraction: i64,
    },
    /// A fraction was supplied without enabling currency mode.
    FractionWithoutCurrency,
    /// Text input did not hold a number.
    NotANumber {
        /// The rejected text.
        input: String,
    },
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { value } => write!(f,
                                                 "Invalid input: {value} is outside the supported range of \u{b1}{}.",
                                                 crate::converter::MAX_MAGNITUDE),
            Self::NonFinite { value } => {
                write!(f, "Invalid input: {value} is not a finite number.")
            },
            Self::Fractional { value } => write!(f,
                                                 "Invalid input: {value} has a fractional part. Enable currency mode to convert cents."),
            Self::NegativeFraction { fraction } => write!(f,
                                                          "Invalid input: fraction {fraction} is negative. Put the sign on the whole part."),
            Self::InvalidFraction { fraction } => {
                write!(f, "Invalid input: fraction {fraction} is not between 0 and 99.")
            },
            Self::FractionWithoutCurrency => {
                write!(f, "Invalid input: a fraction requires currency mode.")
            },
            Self::NotANumber { input } => {
                write!(f, "Invalid input: '{input}' is not a number.")
            },
        }
    }
}

impl std::error::Error for ConvertError {}
