/// Return the first `count` characters of `text`.
///
/// Total function: every input maps to a string, nothing panics.
/// - `None`, `""`, or `count <= 0` yields `""`.
/// - Text with at most `count` characters is returned unchanged.
/// - Otherwise the result is the prefix holding exactly `count` characters.
///
/// Characters are Unicode scalar values, and the same unit is used for
/// both the length check and the slice boundary, so a multi-byte
/// character is never split.
pub fn take_first(text: Option<&str>, count: i64) -> &str {
    let Some(text) = text else {
        return "";
    };
    if text.is_empty() || count <= 0 {
        return "";
    }

    // Byte offset of the character just past the prefix; None means the
    // whole string fits within count.
    match text.char_indices().nth(count as usize) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
