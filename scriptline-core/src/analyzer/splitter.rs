//! Line splitting.
//!
//! A script line has the shape `"<character>:<dialogue>"`. The splitter
//! separates the two fields at the FIRST colon; any further colons belong
//! to the dialogue. Lines that are empty after trimming, or that carry no
//! colon at all, are malformed and yield `None`, and the caller skips them.

use memchr::memchr;

/// Splits a raw line into `(character, dialogue)` fields.
///
/// The line is trimmed first, then cut at the first `:`. The character
/// field is trimmed of surrounding whitespace and may be empty (a colon
/// with nothing before it is still a well-formed line). The dialogue
/// field is returned verbatim, leading whitespace and embedded colons
/// included; downstream normalization deals with both.
///
/// Both returned slices borrow from `line`; no allocation.
///
/// # Example
///
/// ```
/// use scriptline_core::analyzer::splitter::split_line;
///
/// assert_eq!(split_line("Alice: hello"), Some(("Alice", " hello")));
/// assert_eq!(split_line("no separator here"), None);
/// assert_eq!(split_line("   "), None);
/// ```
#[inline]
pub fn split_line(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    // `:` is a single ASCII byte, so the byte offset is a char boundary.
    let colon = memchr(b':', trimmed.as_bytes())?;

    let character = trimmed[..colon].trim();
    let dialogue = &trimmed[colon + 1..];

    Some((character, dialogue))
}
