use serde::Deserialize;

use retok::{PatternError, PatternSpec, escape_literal};

/// One rule in a `--rules` file. List order is priority order.
#[derive(Debug, Deserialize)]
pub struct RuleDef {
    pub name: String,
    pub pattern: String,
    #[serde(default)]
    pub ignore: bool,
}

/// Compile rule definitions, keeping their order.
pub fn compile(defs: &[RuleDef]) -> Result<Vec<PatternSpec>, PatternError> {
    defs.iter()
        .map(|def| {
            let spec = PatternSpec::new(&def.name, &def.pattern)?;
            Ok(if def.ignore { spec.ignored() } else { spec })
        })
        .collect()
}

/// The built-in rule set: a small C-like token vocabulary.
pub fn default_rules() -> Result<Vec<PatternSpec>, PatternError> {
    Ok(vec![
        PatternSpec::new("Keyword", "break|const|if|nullptr|while")?,
        PatternSpec::new("Word", r"[a-zA-Z]\w*")?,
        PatternSpec::new("Number", r"\d+")?,
        PatternSpec::new("String", r#""[^"]*""#)?,
        PatternSpec::new("Shift", "<<")?,
        PatternSpec::new("Deref", "->")?,
        PatternSpec::new("Scope", "::")?,
        PatternSpec::new("Punctuation", &format!("[{}]", escape_literal("[](){}.=:;")))?,
        PatternSpec::new("Space", r"\s+")?.ignored(),
    ])
}
