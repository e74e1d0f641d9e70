use retok::PatternSpec;

#[test]
fn match_at_reports_prefix_length() {
    let spec = PatternSpec::new("Number", r"\d+").expect("pattern should compile");
    assert_eq!(spec.match_at("123ab"), Some(3));
}

#[test]
fn match_at_never_reports_interior_matches() {
    let spec = PatternSpec::new("Number", r"\d+").expect("pattern should compile");
    assert_eq!(spec.match_at("ab123"), None);
}

#[test]
fn alternation_stays_anchored() {
    // Without grouping, "break|const" anchored naively would still match
    // "const" anywhere in the region.
    let spec = PatternSpec::new("Keyword", "break|const").expect("pattern should compile");
    assert_eq!(spec.match_at("const x"), Some(5));
    assert_eq!(spec.match_at("x const"), None);
}

#[test]
fn match_is_greedy_over_the_prefix() {
    let spec = PatternSpec::new("Word", r"[a-zA-Z]\w*").expect("pattern should compile");
    assert_eq!(spec.match_at("x1 22"), Some(2));
}

#[test]
fn empty_region_does_not_match_a_one_or_more_pattern() {
    let spec = PatternSpec::new("Space", r"\s+").expect("pattern should compile");
    assert_eq!(spec.match_at(""), None);
}

#[test]
fn invalid_pattern_fails_at_construction() {
    let err = PatternSpec::new("Broken", "[unclosed").expect_err("pattern is invalid");
    assert_eq!(err.name, "Broken");
    assert_eq!(err.to_string(), "invalid pattern for token rule `Broken`");
}

#[test]
fn rules_are_not_ignorable_by_default() {
    let spec = PatternSpec::new("Word", "[a-z]+").expect("pattern should compile");
    assert!(!spec.is_ignorable());
    assert_eq!(spec.name(), "Word");

    let spec = spec.ignored();
    assert!(spec.is_ignorable());
}
