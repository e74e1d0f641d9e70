mod pattern_error;
mod scan_error;

pub use pattern_error::PatternError;
pub use scan_error::ScanError;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type wrapping all retok errors.
#[derive(Debug, Error, Diagnostic)]
pub enum RetokError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Scan(#[from] ScanError),
}
