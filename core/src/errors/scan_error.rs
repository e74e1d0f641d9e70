use miette::Diagnostic;
use thiserror::Error;

/// No token rule matched at the scanner's cursor.
#[derive(Debug, Error, Diagnostic)]
#[error("unrecognized input at byte {offset}")]
#[diagnostic(help("no token rule matches here"))]
pub struct ScanError {
    pub offset: usize,

    #[label("no token rule matches")]
    pub span: miette::SourceSpan,
}

impl ScanError {
    pub fn new(offset: usize, length: usize) -> Self {
        Self {
            offset,
            span: (offset, length).into(),
        }
    }
}
