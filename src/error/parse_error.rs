#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reading number words.
pub enum ParseError {
    /// The input held nothing but whitespace.
    Empty,
    /// A word is not part of the number vocabulary.
    UnknownWord {
        /// The word encountered.
        word:     String,
        /// Byte offset of the word in the input.
        position: usize,
    },
    /// A known word appeared where the grammar does not allow it.
    UnexpectedWord {
        /// The word encountered.
        word:     String,
        /// Byte offset of the word in the input.
        position: usize,
    },
    /// The input ended in the middle of a number, e.g. after a hyphen.
    UnexpectedEnd {
        /// Byte offset where more input was expected.
        position: usize,
    },
    /// A scale word was not smaller than the one before it
    /// (`"one thousand two million"`, `"one thousand thousand"`).
    ScaleOutOfOrder {
        /// The scale word encountered.
        scale:    String,
        /// Byte offset of the scale word.
        position: usize,
    },
    /// A scale word was not preceded by a nonzero group.
    EmptyGroup {
        /// The scale word encountered.
        scale:    String,
        /// Byte offset of the scale word.
        position: usize,
    },
    /// The cents part was not between 0 and 99.
    InvalidFraction {
        /// The parsed fraction.
        fraction: u64,
        /// Byte offset of the fraction.
        position: usize,
    },
    /// A cents suffix was found where only an integer was requested.
    FractionNotAllowed {
        /// Byte offset of the `and` that starts the suffix.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Parse error: input is empty."),
            Self::UnknownWord { word, position } => {
                write!(f, "Parse error at {position}: unknown word '{word}'.")
            },
            Self::UnexpectedWord { word, position } => {
                write!(f, "Parse error at {position}: unexpected word '{word}'.")
            },
            Self::UnexpectedEnd { position } => {
                write!(f, "Parse error at {position}: unexpected end of input.")
            },
            Self::ScaleOutOfOrder { scale, position } => write!(f,
                                                                "Parse error at {position}: scale '{scale}' must be smaller than the scale before it."),
            Self::EmptyGroup { scale, position } => write!(f,
                                                           "Parse error at {position}: scale '{scale}' needs a number in front of it."),
            Self::InvalidFraction { fraction, position } => write!(f,
                                                                   "Parse error at {position}: {fraction} cents is not between 0 and 99."),
            Self::FractionNotAllowed { position } => {
                write!(f, "Parse error at {position}: expected a whole number without cents.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
