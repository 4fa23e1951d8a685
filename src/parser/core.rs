use std::iter::Peekable;

use log::{debug, trace};

use crate::{
    converter::{Amount, scale::Scale},
    error::ParseError,
    parser::lexer::{Token, Word, tokenize},
    util::num::CENTS_PER_UNIT,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses English number words into an [`Amount`].
///
/// Grammar (simplified):
/// ```text
///     amount := ["negative"] (zero | number) ["and" (zero | number) ("cent" | "cents")]
///     number := group scale { group scale } [group]
///     group  := [unit "hundred"] [teen | tens ["-"] [unit] | unit]
/// ```
/// Scales must strictly descend. The hyphen between tens and units may be
/// replaced by a space.
///
/// # Errors
/// Returns a `ParseError` pointing at the first word that does not fit the
/// grammar.
///
/// # Example
/// ```
/// use numwords::{Amount, parse};
///
/// let amount = parse("negative twelve and thirty-four cents").unwrap();
/// assert_eq!(amount, Amount { negative: true, whole: 12, cents: Some(34) });
/// ```
pub fn parse(source: &str) -> ParseResult<Amount> {
    parse_amount(source).map(|(amount, _)| amount)
}

/// Parses English number words into a signed integer.
///
/// # Errors
/// Everything [`parse`] returns, plus `FractionNotAllowed` when the phrase has
/// a cents suffix.
///
/// # Example
/// ```
/// use numwords::{convert, parse_integer};
///
/// assert_eq!(parse_integer("one million two").unwrap(), 1_000_002);
///
/// let n = -987_654_321;
/// assert_eq!(parse_integer(&convert(n).unwrap()).unwrap(), n);
///
/// assert!(parse_integer("one and five cents").is_err());
/// ```
#[allow(clippy::cast_possible_wrap)]
pub fn parse_integer(source: &str) -> ParseResult<i64> {
    let (amount, and_position) = parse_amount(source)?;

    if let Some(position) = and_position {
        return Err(ParseError::FractionNotAllowed { position });
    }

    // The grammar caps `whole` at MAX_MAGNITUDE, well inside `i64`.
    let whole = amount.whole as i64;
    Ok(if amount.negative { -whole } else { whole })
}

/// Parses a full phrase, also returning the offset of the `and` that starts
/// the cents suffix, if any.
fn parse_amount(source: &str) -> ParseResult<(Amount, Option<usize>)> {
    debug!("parsing '{source}'");

    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let end = source.len();
    let mut iter = tokens.iter().peekable();

    let negative = matches!(iter.peek(), Some((Token::Word(Word::Negative), _)));
    if negative {
        iter.next();
    }

    let whole = parse_whole(&mut iter, end)?;

    let mut and_position = None;
    let mut cents = None;
    if let Some((Token::Word(Word::And), position)) = iter.peek() {
        and_position = Some(*position);
        iter.next();
        cents = Some(parse_cents(&mut iter, end)?);
    }

    if let Some(token) = iter.next() {
        return Err(unexpected(token));
    }

    Ok((Amount { negative, whole, cents }, and_position))
}

/// Parses `zero` or a nonzero number.
///
/// # Errors
/// - `UnexpectedEnd` if the stream is exhausted.
/// - Propagates errors from [`parse_number`].
fn parse_whole<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<u64>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Word(Word::Zero), _)) => {
            tokens.next();
            Ok(0)
        },
        Some(_) => parse_number(tokens, end),
        None => Err(ParseError::UnexpectedEnd { position: end }),
    }
}

/// Parses the fraction after `and`, including the closing `cents` word.
///
/// # Errors
/// - `InvalidFraction` if the fraction is above 99.
/// - `UnexpectedEnd` or `UnexpectedWord` if `cent`/`cents` is missing.
fn parse_cents<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<u8>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let position = tokens.peek().map_or(end, |(_, p)| *p);
    let fraction = parse_whole(tokens, end)?;

    match tokens.next() {
        Some((Token::Word(Word::Cent), _)) => {},
        Some(token) => return Err(unexpected(token)),
        None => return Err(ParseError::UnexpectedEnd { position: end }),
    }

    u8::try_from(fraction).ok()
                          .filter(|&c| u64::from(c) < CENTS_PER_UNIT)
                          .ok_or(ParseError::InvalidFraction { fraction, position })
}

/// Parses a nonzero number made of groups and scale words.
///
/// Each group may be followed by a scale smaller than the previous one; a
/// trailing group without a scale ends the number.
///
/// # Errors
/// - `EmptyGroup` if a scale word has no group in front of it.
/// - `ScaleOutOfOrder` if a scale is not smaller than the previous one.
/// - `UnexpectedWord`/`UnknownWord` if no number starts here.
fn parse_number<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<u64>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut total: u64 = 0;
    let mut last_scale: Option<Scale> = None;

    loop {
        let group = parse_group(tokens, end)?;

        match (group, tokens.peek()) {
            (group, Some((Token::Word(Word::Scale(scale)), position))) => {
                let Some(group) = group else {
                    return Err(ParseError::EmptyGroup { scale:    scale.to_string(),
                                                        position: *position, });
                };
                if last_scale.is_some_and(|last| *scale >= last) {
                    return Err(ParseError::ScaleOutOfOrder { scale:    scale.to_string(),
                                                             position: *position, });
                }
                trace!("group {group} at scale {scale:?}");

                total += u64::from(group) * scale.value();
                last_scale = Some(*scale);
                tokens.next();
            },
            (Some(group), _) => {
                trace!("trailing group {group}");
                total += u64::from(group);
                break;
            },
            (None, Some(token)) if last_scale.is_none() => return Err(unexpected(token)),
            (None, None) if last_scale.is_none() => {
                return Err(ParseError::UnexpectedEnd { position: end });
            },
            (None, _) => break,
        }
    }

    Ok(total)
}

/// Parses a single group in `1..=999`, or returns `None` when the next token
/// cannot start a group.
///
/// # Errors
/// - `UnexpectedEnd` if the input ends after `hundred`'s digit or a hyphen.
/// - `UnexpectedWord`/`UnknownWord` if a hyphen is not followed by a unit.
fn parse_group<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Option<u16>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut value: u16 = 0;
    let mut found = false;

    if let Some((Token::Word(Word::Unit(digit)), _)) = tokens.peek() {
        let digit = u16::from(*digit);
        tokens.next();
        if !matches!(tokens.peek(), Some((Token::Word(Word::Hundred), _))) {
            return Ok(Some(digit));
        }
        tokens.next();
        value = digit * 100;
        found = true;
    }

    match tokens.peek() {
        Some((Token::Word(Word::Teen(teen)), _)) => {
            value += u16::from(*teen);
            found = true;
            tokens.next();
        },
        Some((Token::Word(Word::Tens(tens)), _)) => {
            value += u16::from(*tens);
            found = true;
            tokens.next();
            value += parse_units_after_tens(tokens, end)?;
        },
        Some((Token::Word(Word::Unit(digit)), _)) if found => {
            value += u16::from(*digit);
            tokens.next();
        },
        _ => {},
    }

    Ok(found.then_some(value))
}

/// Parses the optional units digit after a tens word, with or without a
/// hyphen in between.
fn parse_units_after_tens<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<u16>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Hyphen, _)) => {
            tokens.next();
            match tokens.next() {
                Some((Token::Word(Word::Unit(digit)), _)) => Ok(u16::from(*digit)),
                Some(token) => Err(unexpected(token)),
                None => Err(ParseError::UnexpectedEnd { position: end }),
            }
        },
        Some((Token::Word(Word::Unit(digit)), _)) => {
            let digit = u16::from(*digit);
            tokens.next();
            Ok(digit)
        },
        _ => Ok(0),
    }
}

/// Builds the error for a token the grammar cannot place.
fn unexpected((token, position): &(Token, usize)) -> ParseError {
    match token {
        Token::Word(Word::Unknown(word)) => ParseError::UnknownWord { word:     word.clone(),
                                                                      position: *position, },
        other => ParseError::UnexpectedWord { word:     other.to_string(),
                                              position: *position, },
    }
}
