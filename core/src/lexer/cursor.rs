/// Forward-only read position over the input string.
pub struct Cursor<'src> {
    input: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(input: &'src str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current byte position in the input.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Advance past `n` bytes, saturating at the end of the input.
    ///
    /// `n` must land on a character boundary; match lengths from the
    /// pattern engine always do.
    pub fn advance_by(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.input.len());
    }

    /// The unconsumed tail of the input.
    pub fn rest(&self) -> &'src str {
        &self.input[self.pos..]
    }

    /// Slice of the input from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.input[start..self.pos]
    }

    /// Whether the cursor has reached the end.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }
}
