pub mod cursor;
pub mod escape;
pub mod pattern;
pub mod scanner;
pub mod token;

use crate::errors::ScanError;
use pattern::PatternSpec;
use scanner::Scanner;
use token::Token;

/// Tokenize the whole input against an ordered rule list.
///
/// Stops with a [`ScanError`] at the first position no rule recognizes.
/// Trailing ignorable input is consumed silently.
pub fn lex<'a>(specs: &'a [PatternSpec], input: &'a str) -> Result<Vec<Token<'a>>, ScanError> {
    let mut scanner = Scanner::new(specs, input);
    let mut tokens = Vec::new();

    while scanner.has_more() {
        match scanner.next_token() {
            Some(token) => tokens.push(token),
            None if scanner.has_more() => {
                let len = scanner
                    .remainder()
                    .chars()
                    .next()
                    .map_or(0, char::len_utf8);
                return Err(ScanError::new(scanner.pos(), len));
            }
            None => break,
        }
    }

    Ok(tokens)
}
