/// 1-based line/column position in the input.
#[derive(Debug, Clone, Copy)]
pub struct SourcePos {
    pub line: usize,
    pub col: usize,
}

/// Line/column of the byte offset `byte` in `input`.
///
/// Offsets past the end report the position just after the last character.
pub fn position(input: &str, byte: usize) -> SourcePos {
    let mut line = 1;
    let mut line_start = 0;
    for (idx, ch) in input.char_indices() {
        if idx >= byte {
            break;
        }
        if ch == '\n' {
            line += 1;
            line_start = idx + 1;
        }
    }
    let byte = byte.min(input.len());
    SourcePos {
        line,
        col: byte - line_start + 1,
    }
}
