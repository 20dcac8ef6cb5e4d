//! Utility functions for line-oriented text processing.

/// Prefixes every line of `text` with `prefix`.
///
/// Lines are split on `\n` only, so a trailing newline yields a final empty
/// line that is prefixed as well, and `\r` stays with its line. The number
/// of lines and their content are otherwise preserved.
///
/// # Example
///
/// ```rust
/// use shakedown_console::prefix_lines;
///
/// assert_eq!(prefix_lines("a\nb", "> "), "> a\n> b");
/// assert_eq!(prefix_lines("a\n", "> "), "> a\n> ");
/// ```
pub fn prefix_lines(text: &str, prefix: &str) -> String {
    let mut result = String::with_capacity(text.len() + prefix.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            result.push('\n');
        }
        result.push_str(prefix);
        result.push_str(line);
    }
    result
}
