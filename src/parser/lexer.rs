use std::fmt;

use logos::Logos;

use crate::{
    converter::{
        group::{TEENS, TENS, UNITS},
        scale::Scale,
    },
    error::ParseError,
};

/// Represents a lexical token in a number phrase.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Any run of ASCII letters, classified against the number vocabulary.
    #[regex(r"[a-zA-Z]+", classify)]
    Word(Word),
    /// `-`, joining a tens word to a units word.
    #[token("-")]
    Hyphen,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// A classified word.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Word {
    /// `zero`
    Zero,
    /// `one` to `nine`, carrying the digit.
    Unit(u8),
    /// `ten` to `nineteen`, carrying the value.
    Teen(u8),
    /// `twenty` to `ninety`, carrying the value.
    Tens(u8),
    /// `hundred`
    Hundred,
    /// `thousand`, `million`, `billion` or `trillion`.
    Scale(Scale),
    /// `negative` or `minus`
    Negative,
    /// `and`, introducing the cents suffix.
    And,
    /// `cent` or `cents`
    Cent,
    /// A word outside the vocabulary, kept as written.
    Unknown(String),
}

impl Word {
    /// Classifies a single word, ignoring ASCII case.
    ///
    /// # Example
    /// ```
    /// use numwords::{converter::scale::Scale, parser::lexer::Word};
    ///
    /// assert_eq!(Word::from_text("Forty"), Word::Tens(40));
    /// assert_eq!(Word::from_text("MILLION"), Word::Scale(Scale::Million));
    /// assert_eq!(Word::from_text("fourty"), Word::Unknown("fourty".to_string()));
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_text(text: &str) -> Self {
        let lower = text.to_ascii_lowercase();
        let word = lower.as_str();

        match word {
            "hundred" => return Self::Hundred,
            "negative" | "minus" => return Self::Negative,
            "and" => return Self::And,
            "cent" | "cents" => return Self::Cent,
            _ => {},
        }

        if let Some(digit) = UNITS.iter().position(|&w| w == word) {
            return if digit == 0 { Self::Zero } else { Self::Unit(digit as u8) };
        }
        if let Some(units) = TEENS.iter().position(|&w| w == word) {
            return Self::Teen(10 + units as u8);
        }
        if let Some(tens) = TENS.iter().position(|&w| !w.is_empty() && w == word) {
            return Self::Tens(tens as u8 * 10);
        }
        if let Some(scale) = Scale::ALL.iter().find(|s| s.word() == Some(word)) {
            return Self::Scale(*scale);
        }

        Self::Unknown(text.to_string())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "{}", UNITS[0]),
            Self::Unit(d) => write!(f, "{}", UNITS[usize::from(*d)]),
            Self::Teen(v) => write!(f, "{}", TEENS[usize::from(*v - 10)]),
            Self::Tens(v) => write!(f, "{}", TENS[usize::from(*v / 10)]),
            Self::Hundred => write!(f, "hundred"),
            Self::Scale(s) => write!(f, "{s}"),
            Self::Negative => write!(f, "negative"),
            Self::And => write!(f, "and"),
            Self::Cent => write!(f, "cents"),
            Self::Unknown(w) => write!(f, "{w}"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(w) => write!(f, "{w}"),
            Self::Hyphen => write!(f, "-"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Splits `source` into tokens paired with their byte offsets.
///
/// # Errors
/// Returns `ParseError::UnknownWord` for characters outside the vocabulary,
/// such as digits, punctuation other than `-`, or non-ASCII letters. The
/// error names the whole whitespace-separated word holding the character.
///
/// # Example
/// ```
/// use numwords::parser::lexer::{Token, Word, tokenize};
///
/// let tokens = tokenize("forty-two").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Word(Word::Tens(40)), 0),
///                 (Token::Hyphen, 5),
///                 (Token::Word(Word::Unit(2)), 6)]);
///
/// assert!(tokenize("forty 2").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(tok) = token {
            tokens.push((tok, position));
        } else {
            let (start, word) = word_around(source, position);
            return Err(ParseError::UnknownWord { word: word.to_string(),
                                                 position: start });
        }
    }

    Ok(tokens)
}

/// Classifies the word under the lexer cursor.
fn classify(lex: &logos::Lexer<Token>) -> Word {
    Word::from_text(lex.slice())
}

/// Returns the whitespace-separated word that contains byte `position`,
/// together with its starting offset.
fn word_around(source: &str, position: usize) -> (usize, &str) {
    let start = source[..position].rfind(char::is_whitespace)
                                  .map_or(0, |i| {
                                      i + source[i..].chars().next().map_or(1, char::len_utf8)
                                  });
    let end = source[position..].find(char::is_whitespace)
                                .map_or(source.len(), |i| position + i);
    (start, &source[start..end])
}
