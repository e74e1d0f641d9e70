use miette::Diagnostic;
use thiserror::Error;

/// A token rule whose pattern failed to compile.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid pattern for token rule `{name}`")]
#[diagnostic(help("the pattern must be a valid regular expression"))]
pub struct PatternError {
    pub name: String,

    #[source]
    pub source: regex::Error,
}
