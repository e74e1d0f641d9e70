use retok::diagnostics::position;

#[test]
fn first_line_positions() {
    let pos = position("abc", 0);
    assert_eq!((pos.line, pos.col), (1, 1));

    let pos = position("abc", 2);
    assert_eq!((pos.line, pos.col), (1, 3));
}

#[test]
fn positions_after_newlines() {
    let input = "ab\ncd\ne";

    let pos = position(input, 3);
    assert_eq!((pos.line, pos.col), (2, 1));

    let pos = position(input, 6);
    assert_eq!((pos.line, pos.col), (3, 1));
}

#[test]
fn offset_of_a_newline_belongs_to_its_line() {
    let pos = position("ab\ncd", 2);
    assert_eq!((pos.line, pos.col), (1, 3));
}

#[test]
fn offset_past_the_end_is_clamped() {
    let pos = position("ab", 10);
    assert_eq!((pos.line, pos.col), (1, 3));
}
