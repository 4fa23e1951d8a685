/// The grammar for English number words.
///
/// Consumes the token stream produced by the lexer and rebuilds the
/// [`Amount`](crate::converter::Amount) it describes, enforcing the same rules
/// the converter follows when it writes numbers out.
///
/// # Responsibilities
/// - Reads an optional sign, the whole part, and an optional cents suffix.
/// - Requires scale words to appear in strictly descending order.
/// - Reports errors with the byte offset of the offending word.
pub mod core;
/// The lexer module tokenizes number phrases.
///
/// Splits the input into words and hyphens and classifies each word against
/// the converter's vocabulary: units, teens, tens, `hundred`, scale words, and
/// the `negative`, `and` and `cents` markers. Matching is case-insensitive.
pub mod lexer;
