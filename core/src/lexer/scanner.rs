use super::cursor::Cursor;
use super::pattern::PatternSpec;
use super::token::{Span, Token};

/// Splits an input string into tokens by trying every rule at the cursor
/// and taking the longest match.
pub struct Scanner<'a> {
    specs: &'a [PatternSpec],
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Borrows the rule list and the input for the scanner's lifetime.
    /// Neither is copied or mutated.
    pub fn new(specs: &'a [PatternSpec], input: &'a str) -> Self {
        Self {
            specs,
            cursor: Cursor::new(input),
        }
    }

    /// Whether any input remains to be scanned.
    pub fn has_more(&self) -> bool {
        !self.cursor.is_at_end()
    }

    /// Current byte position in the input.
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// The unconsumed tail of the input. After a `None` from
    /// [`next_token`](Self::next_token) this starts with the text no rule
    /// recognized.
    pub fn remainder(&self) -> &'a str {
        self.cursor.rest()
    }

    /// Scan the next token.
    ///
    /// Every rule is tried against the unconsumed input; the longest match
    /// wins and the rule listed first wins ties. Ignorable winners are
    /// consumed and scanning continues past them.
    ///
    /// `None` means no rule matched: the cursor stays put and scanning
    /// cannot make further progress. Callers must check
    /// [`has_more`](Self::has_more) before calling; once the input is
    /// exhausted there is nothing left to scan.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        debug_assert!(self.has_more(), "next_token called with no input remaining");

        loop {
            let region = self.cursor.rest();
            let mut best: Option<(usize, &'a PatternSpec)> = None;
            for spec in self.specs {
                if let Some(len) = spec.match_at(region) {
                    // Strictly greater, so the earlier rule keeps ties.
                    if best.is_none_or(|(best_len, _)| len > best_len) {
                        best = Some((len, spec));
                    }
                }
            }

            let (len, spec) = best?;
            if len == 0 {
                // A zero-length winner would never advance the cursor.
                return None;
            }

            let start = self.cursor.pos();
            self.cursor.advance_by(len);

            if spec.is_ignorable() {
                if self.cursor.is_at_end() {
                    // Ignorable input ran to the end of the buffer; the
                    // stream is exhausted, not stuck.
                    return None;
                }
                continue;
            }

            return Some(Token {
                spec,
                text: self.cursor.slice_from(start),
                span: Span::new(start, self.cursor.pos()),
            });
        }
    }
}
