use std::fmt;

/// Conversion errors.
///
/// Defines all error types that can occur while turning a number into words.
/// Conversion errors include values outside the nameable range, non-finite or
/// fractional floats, and malformed cent fractions.
pub mod convert_error;
/// Parsing errors.
///
/// Contains all error types that can be raised while reading English number
/// words back into a number. Parse errors carry the byte offset of the
/// offending word so callers can point at it.
pub mod parse_error;

pub use convert_error::ConvertError;
pub use parse_error::ParseError;

/// Umbrella error for callers that drive both directions, such as the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A number could not be turned into words.
    Convert(ConvertError),
    /// Words could not be turned into a number.
    Parse(ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Convert(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Convert(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<ConvertError> for Error {
    fn from(value: ConvertError) -> Self {
        Self::Convert(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}
