//! Domain Services
//!
//! Pure display rules for course content.

/// Truncate text to `limit` words, appending `more` when anything was
/// cut. Whitespace runs collapse to single spaces either way.
pub fn trim_words(text: &str, limit: usize, more: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= limit {
        return words.join(" ");
    }
    let mut trimmed = words[..limit].join(" ");
    trimmed.push_str(more);
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(trim_words("a short description", 20, "..."), "a short description");
    }

    #[test]
    fn test_exact_limit_gets_no_marker() {
        assert_eq!(trim_words("one two three", 3, "..."), "one two three");
    }

    #[test]
    fn test_long_text_truncated_with_marker() {
        let text = "w ".repeat(25);
        let trimmed = trim_words(&text, 20, "...");
        assert_eq!(trimmed.split_whitespace().count(), 20);
        assert!(trimmed.ends_with("w..."));
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(trim_words("spaced   out\n\twords", 20, "..."), "spaced out words");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(trim_words("", 20, "..."), "");
    }
}
