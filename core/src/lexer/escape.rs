/// Characters that carry meaning in the pattern syntax.
const METACHARACTERS: &str = r"\^$.|?*+()[]{}";

/// Escape `text` so the pattern engine treats every character literally.
///
/// Meant for splicing raw text into a larger pattern, e.g. building a
/// character class out of punctuation. The input is walked once and each
/// metacharacter gets exactly one backslash, so adjacent metacharacters
/// never double-escape.
pub fn escape_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if METACHARACTERS.contains(ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
