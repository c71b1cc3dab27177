/// Compares two lines while ignoring the style of their trailing line
/// terminator.
///
/// Exactly one terminator is stripped from the end of each line before
/// comparison, where a terminator is either `"\n"` or `"\r\n"`. A carriage
/// return that is not followed by a line feed is content, not a terminator.
///
/// ## Example
///
/// ```
/// use linediff::lines_equal;
///
/// assert!(lines_equal("a\r\n", "a\n"));
/// assert!(lines_equal("a", "a\n")); // final line of a file may lack one
/// assert!(!lines_equal("a\r", "a"));
/// ```
#[must_use]
pub fn lines_equal(a: &str, b: &str) -> bool {
    strip_terminator(a) == strip_terminator(b)
}

fn strip_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}
