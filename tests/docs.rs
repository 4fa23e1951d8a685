use std::fs;

use numwords::{ConvertOptions, convert_str, parse};
use walkdir::WalkDir;

#[test]
fn doc_examples_work() {
    let mut count = 0;

    for entry in WalkDir::new("docs").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "md")
                                     })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (options, line) in extract_example_lines(&content) {
            count += 1;
            let Some((input, expected)) = line.split_once("=>") else {
                panic!("Malformed example in {path:?}: {line}");
            };
            let (input, expected) = (input.trim(), expected.trim());

            match convert_str(input, &options) {
                Ok(words) => assert_eq!(words, expected, "example in {path:?}: {line}"),
                Err(e) => panic!("Example in {path:?} failed:\n{line}\nError: {e}"),
            }

            let amount = parse(expected).unwrap_or_else(|e| {
                                            panic!("Example words in {path:?} do not parse:\n{line}\nError: {e}")
                                        });
            assert_eq!(convert_str(&amount.to_string(), &options).unwrap(), expected);
        }
    }

    assert!(count > 0, "No numwords examples found in docs");
}

/// Collects the lines of every ```` ```numwords ```` block together with the
/// options the block asks for.
fn extract_example_lines(content: &str) -> Vec<(ConvertOptions, String)> {
    let mut lines = Vec::new();
    let mut current = None;

    for line in content.lines() {
        let trimmed = line.trim();
        if let Some(info) = trimmed.strip_prefix("```numwords") {
            current = Some(ConvertOptions { currency: info.trim() == "currency" });
            continue;
        }
        if current.is_some() && trimmed.starts_with("```") {
            current = None;
            continue;
        }
        if let Some(options) = current
           && !trimmed.is_empty()
        {
            lines.push((options, trimmed.to_string()));
        }
    }

    lines
}
