use retok::{PatternSpec, RetokError, lex};

fn spec(name: &str, pattern: &str) -> PatternSpec {
    PatternSpec::new(name, pattern).expect("pattern should compile")
}

fn compile_and_count(pattern: &str, input: &str) -> Result<usize, RetokError> {
    let specs = vec![PatternSpec::new("Rule", pattern)?];
    Ok(lex(&specs, input)?.len())
}

#[test]
fn lex_reports_offset_of_first_unrecognized_byte() {
    let specs = vec![spec("Word", "[a-z]+"), spec("Space", r"\s+").ignored()];
    let err = lex(&specs, "ab ?cd").expect_err("? is unrecognized");

    assert_eq!(err.offset, 3);
    assert_eq!(err.span.offset(), 3);
    assert_eq!(err.span.len(), 1);
}

#[test]
fn lex_error_at_input_start() {
    let specs = vec![spec("Word", "[a-z]+")];
    let err = lex(&specs, "?").expect_err("? is unrecognized");
    assert_eq!(err.offset, 0);
}

#[test]
fn lex_error_span_covers_a_whole_multibyte_character() {
    let specs = vec![spec("Word", "[a-z]+")];
    let err = lex(&specs, "ab\u{00e9}").expect_err("é is unrecognized");

    assert_eq!(err.offset, 2);
    assert_eq!(err.span.len(), 2);
}

#[test]
fn lex_error_message_names_the_offset() {
    let specs = vec![spec("Word", "[a-z]+")];
    let err = lex(&specs, "ab1").expect_err("digit is unrecognized");
    assert_eq!(err.to_string(), "unrecognized input at byte 2");
}

#[test]
fn pattern_and_scan_errors_unify_under_the_crate_error() {
    assert_eq!(compile_and_count("[a-z]+", "abc").expect("scans"), 1);

    let err = compile_and_count("[unclosed", "abc").expect_err("pattern is invalid");
    assert!(matches!(err, RetokError::Pattern(_)));

    let err = compile_and_count("[a-z]+", "123").expect_err("digits are unrecognized");
    assert!(matches!(err, RetokError::Scan(_)));
    // The unified wrapper is transparent.
    assert_eq!(err.to_string(), "unrecognized input at byte 0");
}
