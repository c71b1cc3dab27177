/// Splits text into lines, each keeping its trailing `'\n'` when the source
/// has one. A trailing empty fragment (text ending exactly at a terminator)
/// is not produced.
///
/// This is the sole definition of a "line" for the rest of the crate.
///
/// ## Example
///
/// ```not_rust
/// "a\nb\n" -> ["a\n", "b\n"]
/// "a\nb"   -> ["a\n", "b"]
/// ""       -> []
/// ```
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(ToOwned::to_owned).collect()
}
