//! Construction-time field normalization

/// Capitalize every whitespace-separated word.
///
/// The first character of each word is upper-cased and the remaining
/// characters are lower-cased. Whitespace is preserved as-is. The result
/// is stable under repeated application.
///
/// ```
/// use recordkit_core::normalize::capitalize_words;
///
/// assert_eq!(capitalize_words("the great gatsby"), "The Great Gatsby");
/// ```
pub fn capitalize_words(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for c in input.chars() {
        if c.is_whitespace() {
            out.push(c);
            at_word_start = true;
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}
