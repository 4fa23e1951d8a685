use numwords::{
    Amount, ConvertError, ConvertOptions, MAX_MAGNITUDE, convert, convert_amount, convert_f64,
    convert_signed_fraction, convert_str, convert_with, group_to_words,
};
use rstest::rstest;

fn assert_words(n: i64, expected: &str) {
    match convert(n) {
        Ok(words) => assert_eq!(words, expected, "wrong words for {n}"),
        Err(e) => panic!("Conversion of {n} failed: {e}"),
    }
}

fn assert_clean(words: &str) {
    assert_eq!(words, words.trim(), "surrounding whitespace in '{words}'");
    assert!(!words.contains("  "), "double space in '{words}'");
}

/// A spread of values touching every scale, every group shape, and the
/// boundaries between groups.
fn samples() -> Vec<i64> {
    let mut values = vec![0, 1, 9, 10, 11, 19, 20, 21, 99, 100, 101, 110, 999, 1_000, 1_001,
                          1_010, 1_100, 9_999, 10_000, 100_000, 999_999, 1_000_000, 1_000_001,
                          12_000_345, 1_000_000_000, 1_002_003_004, 1_000_000_000_000,
                          999_000_000_000_001, MAX_MAGNITUDE as i64];
    let mut n: i64 = 7;
    while n < MAX_MAGNITUDE as i64 / 13 {
        values.push(n);
        n = n * 13 + 5;
    }
    values
}

#[test]
fn zero_is_zero() {
    assert_words(0, "zero");
}

#[test]
fn negative_prefix() {
    assert_words(-42, "negative forty-two");
    assert_words(-1, "negative one");
}

#[test]
fn scale_boundaries_have_no_filler() {
    assert_words(1_000, "one thousand");
    assert_words(1_000_000, "one million");
    assert_words(1_000_000_000, "one billion");
    assert_words(1_000_000_000_000, "one trillion");
    assert_words(1_000_001, "one million one");
    assert_words(1_000_000_100, "one billion one hundred");
}

#[test]
fn full_phrase() {
    assert_words(123_456_789,
                 "one hundred twenty-three million four hundred fifty-six thousand seven \
                  hundred eighty-nine");
}

#[test]
fn largest_supported_value() {
    assert_words(MAX_MAGNITUDE as i64,
                 "nine hundred ninety-nine trillion nine hundred ninety-nine billion nine \
                  hundred ninety-nine million nine hundred ninety-nine thousand nine hundred \
                  ninety-nine");
}

#[rstest]
#[case(5, "five")]
#[case(13, "thirteen")]
#[case(40, "forty")]
#[case(42, "forty-two")]
#[case(100, "one hundred")]
#[case(105, "one hundred five")]
#[case(118, "one hundred eighteen")]
#[case(999, "nine hundred ninety-nine")]
fn groups(#[case] group: u16, #[case] expected: &str) {
    assert_eq!(group_to_words(group).unwrap(), expected);
    assert_words(i64::from(group), expected);
}

#[rstest]
#[case(MAX_MAGNITUDE as i64 + 1)]
#[case(-(MAX_MAGNITUDE as i64) - 1)]
#[case(i64::MAX)]
#[case(i64::MIN)]
fn out_of_range(#[case] n: i64) {
    assert!(matches!(convert(n), Err(ConvertError::OutOfRange { .. })));
}

#[test]
fn output_is_clean_for_samples() {
    for n in samples() {
        let words = convert(n).unwrap();
        assert_clean(&words);
        for scale in ["thousand", "million", "billion", "trillion"] {
            assert!(words.matches(scale).count() <= 1, "repeated '{scale}' in '{words}'");
        }
    }
}

#[test]
fn negation_only_adds_prefix() {
    for n in samples().into_iter().filter(|&n| n > 0) {
        assert_eq!(convert(-n).unwrap(), format!("negative {}", convert(n).unwrap()));
    }
}

#[rstest]
#[case(42, 15, "forty-two and fifteen cents")]
#[case(0, 1, "zero and one cent")]
#[case(1, 0, "one and zero cents")]
#[case(-1_000, 99, "negative one thousand and ninety-nine cents")]
fn currency_suffix(#[case] n: i64, #[case] cents: u8, #[case] expected: &str) {
    assert_eq!(convert_with(n, Some(cents), &ConvertOptions::currency()).unwrap(), expected);
}

#[test]
fn currency_without_fraction_is_plain() {
    assert_eq!(convert_with(7, None, &ConvertOptions::currency()).unwrap(), "seven");
}

#[test]
fn fraction_requires_currency() {
    assert_eq!(convert_with(7, Some(1), &ConvertOptions::default()),
               Err(ConvertError::FractionWithoutCurrency));
}

#[test]
fn malformed_fractions() {
    let options = ConvertOptions::currency();
    assert_eq!(convert_with(7, Some(100), &options),
               Err(ConvertError::InvalidFraction { fraction: 100 }));
    assert_eq!(convert_signed_fraction(-7, -50, &options),
               Err(ConvertError::NegativeFraction { fraction: -50 }));
    assert_eq!(convert_signed_fraction(7, 250, &options),
               Err(ConvertError::InvalidFraction { fraction: 250 }));
}

#[test]
fn amounts() {
    let negative_cents = Amount { negative: true,
                                  whole:    0,
                                  cents:    Some(50), };
    assert_eq!(convert_amount(&negative_cents).unwrap(), "negative zero and fifty cents");

    let negative_zero = Amount { negative: true,
                                 whole:    0,
                                 cents:    None, };
    assert_eq!(convert_amount(&negative_zero).unwrap(), "zero");

    let too_large = Amount { negative: false,
                             whole:    MAX_MAGNITUDE + 1,
                             cents:    None, };
    assert!(matches!(convert_amount(&too_large), Err(ConvertError::OutOfRange { .. })));
}

#[test]
fn floats() {
    let plain = ConvertOptions::default();
    let currency = ConvertOptions::currency();

    assert_eq!(convert_f64(-3.0, &plain).unwrap(), "negative three");
    assert_eq!(convert_f64(12.34, &currency).unwrap(), "twelve and thirty-four cents");
    assert_eq!(convert_f64(0.999, &currency).unwrap(), "one");
    assert_eq!(convert_f64(-0.05, &currency).unwrap(), "negative zero and five cents");

    assert!(matches!(convert_f64(1.5, &plain), Err(ConvertError::Fractional { .. })));
    assert!(matches!(convert_f64(f64::NAN, &plain), Err(ConvertError::NonFinite { .. })));
    assert!(matches!(convert_f64(f64::NEG_INFINITY, &currency),
                     Err(ConvertError::NonFinite { .. })));
    assert!(matches!(convert_f64(1e18, &plain), Err(ConvertError::OutOfRange { .. })));
}

#[test]
fn text_input() {
    let plain = ConvertOptions::default();
    let currency = ConvertOptions::currency();

    assert_eq!(convert_str("-42", &plain).unwrap(), "negative forty-two");
    assert_eq!(convert_str("1000000", &plain).unwrap(), "one million");
    assert_eq!(convert_str("5.25", &currency).unwrap(), "five and twenty-five cents");

    assert!(matches!(convert_str("5.25", &plain), Err(ConvertError::Fractional { .. })));
    assert!(matches!(convert_str("", &plain), Err(ConvertError::NotANumber { .. })));
    assert!(matches!(convert_str("ten", &plain), Err(ConvertError::NotANumber { .. })));
}
