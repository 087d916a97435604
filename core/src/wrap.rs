//! Greedy word wrapping.
//!
//! Lines are built by joining whitespace-separated words with single spaces
//! for as long as the line stays within `width` characters. Words are never
//! broken: a word longer than `width` occupies a line of its own.

/// Wraps `text` into lines of at most `width` characters.
///
/// Width is measured in Unicode scalar values. Runs of whitespace (including
/// leading and trailing whitespace) act as single separators and never
/// appear in the output. Empty or whitespace-only text yields no lines.
///
/// # Examples
///
/// ```
/// use schema_extractor_core::wrap;
///
/// assert_eq!(wrap("aa bb  cc\tdd", 5), ["aa bb", "cc dd"]);
/// assert_eq!(wrap("tiny enormousword x", 4), ["tiny", "enormousword", "x"]);
/// assert!(wrap("   ", 10).is_empty());
/// ```
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
            continue;
        }

        if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
