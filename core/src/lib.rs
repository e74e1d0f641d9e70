pub mod diagnostics;
pub mod errors;
pub mod lexer;

pub use errors::{PatternError, RetokError, ScanError};
pub use lexer::escape::escape_literal;
pub use lexer::lex;
pub use lexer::pattern::PatternSpec;
pub use lexer::scanner::Scanner;
pub use lexer::token::{Span, Token};
