use numwords::{ConvertError, ConvertOptions, Error, ParseError, run_line, run_lines};

fn assert_line(input: &str, parse_mode: bool, currency: bool, expected: &str) {
    let options = ConvertOptions { currency };
    match run_line(input, parse_mode, &options) {
        Ok(output) => assert_eq!(output, expected, "wrong output for '{input}'"),
        Err(e) => panic!("Input '{input}' failed: {e}"),
    }
}

#[test]
fn converts_negative_integers() {
    assert_line("-42", false, false, "negative forty-two");
    assert_line("-1000000", false, false, "negative one million");
}

#[test]
fn converts_currency() {
    assert_line("-0.5", false, true, "negative zero and fifty cents");
    assert_line("12.34", false, true, "twelve and thirty-four cents");
}

#[test]
fn parses_words_to_decimal_text() {
    assert_line("negative forty-two", true, false, "-42");
    assert_line("twelve and thirty-four cents", true, false, "12.34");
    assert_line("negative zero and five cents", true, false, "-0.05");
    assert_line("zero", true, false, "0");
}

#[test]
fn failing_lines_keep_their_error() {
    let options = ConvertOptions::default();

    assert!(matches!(run_line("1.5", false, &options),
                     Err(Error::Convert(ConvertError::Fractional { .. }))));
    assert!(matches!(run_line("forty-two", false, &options),
                     Err(Error::Convert(ConvertError::NotANumber { .. }))));
    assert!(matches!(run_line("forty two thousand thousand", true, &options),
                     Err(Error::Parse(ParseError::EmptyGroup { .. }))));
}

#[test]
fn file_lines_report_their_line_number() {
    let text = "7\n\n   \n-3\nseven\n1.25\n";
    let results = run_lines(text, false, &ConvertOptions::default());

    assert_eq!(results.len(), 4);
    assert_eq!(results[0], Ok("seven".to_string()));
    assert_eq!(results[1], Ok("negative three".to_string()));
    assert_eq!(results[2],
               Err("Line 5: Invalid input: 'seven' is not a number.".to_string()));
    assert!(results[3].as_ref().is_err_and(|e| e.starts_with("Line 6: ")));
}

#[test]
fn file_lines_in_parse_mode() {
    let results = run_lines("one hundred one\nnine and ninety-nine cents\n",
                            true,
                            &ConvertOptions::default());
    assert_eq!(results, vec![Ok("101".to_string()), Ok("9.99".to_string())]);
}
