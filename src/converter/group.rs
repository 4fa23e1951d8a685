use crate::{converter::ConvertResult, error::ConvertError};

/// Words for the digits `0..=9`.
pub const UNITS: [&str; 10] =
    ["zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];
/// Irregular words for `10..=19`, indexed by the units digit.
pub const TEENS: [&str; 10] = ["ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen",
                               "sixteen", "seventeen", "eighteen", "nineteen"];
/// Words for the tens digit. Indices 0 and 1 are never looked up.
pub const TENS: [&str; 10] =
    ["", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety"];

/// Largest value a single group can hold.
pub const MAX_GROUP: u16 = 999;

/// Returns the English phrase for a value in `0..=999`.
///
/// Zero reads `"zero"`; every other value follows the group rules used inside
/// larger numbers. No `"and"` is placed after `"hundred"`.
///
/// # Errors
/// Returns `ConvertError::OutOfRange` for values above 999.
///
/// # Example
/// ```
/// use numwords::converter::group::group_to_words;
///
/// assert_eq!(group_to_words(0).unwrap(), "zero");
/// assert_eq!(group_to_words(15).unwrap(), "fifteen");
/// assert_eq!(group_to_words(42).unwrap(), "forty-two");
/// assert_eq!(group_to_words(900).unwrap(), "nine hundred");
/// assert_eq!(group_to_words(101).unwrap(), "one hundred one");
/// assert!(group_to_words(1000).is_err());
/// ```
pub fn group_to_words(group: u16) -> ConvertResult<String> {
    if group > MAX_GROUP {
        return Err(ConvertError::OutOfRange { value: group.to_string() });
    }
    if group == 0 {
        return Ok(UNITS[0].to_string());
    }

    let mut out = String::new();
    push_group(&mut out, group);
    Ok(out)
}

/// Appends the phrase for a nonzero group to `out`, separated from any
/// existing text by a single space.
///
/// Callers guarantee `1..=999`.
pub(crate) fn push_group(out: &mut String, group: u16) {
    debug_assert!((1..=MAX_GROUP).contains(&group));

    let hundreds = usize::from(group / 100);
    let rest = usize::from(group % 100);

    if hundreds > 0 {
        push_word(out, UNITS[hundreds]);
        push_word(out, "hundred");
    }

    match rest {
        0 => {},
        1..=9 => push_word(out, UNITS[rest]),
        10..=19 => push_word(out, TEENS[rest - 10]),
        _ => {
            push_word(out, TENS[rest / 10]);
            if rest % 10 != 0 {
                out.push('-');
                out.push_str(UNITS[rest % 10]);
            }
        },
    }
}

/// Appends `word`, inserting a single space unless `out` is empty.
pub(crate) fn push_word(out: &mut String, word: &str) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(word);
}
