use regex::Regex;

use crate::errors::PatternError;

/// A named token rule.
///
/// The pattern is compiled anchored to the start of the region being
/// matched, so a rule can never claim text that does not begin at the
/// scanner's cursor. Rules are immutable once built; their order in the
/// owning list breaks ties between equal-length matches.
#[derive(Debug)]
pub struct PatternSpec {
    name: String,
    re: Regex,
    ignorable: bool,
}

impl PatternSpec {
    /// Compile a rule from a regex pattern.
    ///
    /// The pattern is wrapped in a non-capturing group before anchoring,
    /// so top-level alternations keep their meaning. An invalid pattern is
    /// reported here, never at scan time.
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<Self, PatternError> {
        let name = name.into();
        let re = Regex::new(&format!(r"\A(?:{pattern})")).map_err(|source| PatternError {
            name: name.clone(),
            source,
        })?;
        Ok(Self {
            name,
            re,
            ignorable: false,
        })
    }

    /// Mark tokens of this rule as consumed but never emitted.
    pub fn ignored(mut self) -> Self {
        self.ignorable = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_ignorable(&self) -> bool {
        self.ignorable
    }

    /// Length in bytes of the longest prefix of `region` this rule
    /// matches, or `None` if it does not match there at all.
    pub fn match_at(&self, region: &str) -> Option<usize> {
        let found = self.re.find(region)?;
        debug_assert_eq!(found.start(), 0, "anchored pattern matched past region start");
        Some(found.end())
    }
}
