//! Text normalization for spam classification
//!
//! Reduces a submission body to the characters the keyword rules are
//! tuned against: ASCII letters and digits, Hangul, spaces and
//! newlines, with blank lines collapsed and everything lowercased.

use regex::Regex;
use std::sync::LazyLock;

// A newline, optional whitespace, then another newline: a blank line.
static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Whether `c` falls in the Hangul range the classifier recognizes:
/// compatibility jamo (U+3131) through the last precomposed syllable
/// (U+D7A3).
pub fn is_hangul(c: char) -> bool {
    ('\u{3131}'..='\u{D7A3}').contains(&c)
}

/// Whether any character of `text` is Hangul.
pub fn contains_hangul(text: &str) -> bool {
    text.chars().any(is_hangul)
}

/// Collapse every run of blank lines into a single newline.
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_LINES.replace_all(text, "\n").into_owned()
}

/// Normalize a submission body for keyword matching.
///
/// Strips every character that is not an ASCII letter, an ASCII digit,
/// Hangul, a space or a newline, collapses blank lines, and lowercases.
/// Total over any input; the empty string maps to itself. Idempotent.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|&c| c.is_ascii_alphanumeric() || is_hangul(c) || c == ' ' || c == '\n')
        .collect();

    collapse_blank_lines(&stripped).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_symbols() {
        assert_eq!(normalize("Hello, World! 안녕?"), "hello world 안녕");
    }

    #[test]
    fn test_normalize_collapses_blank_lines() {
        assert_eq!(normalize("a\n\n\nb"), "a\nb");
        assert_eq!(normalize("a\n   \nb"), "a\nb");
        assert_eq!(normalize("a\nb\nc"), "a\nb\nc");
    }

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("BUY NOW"), "buy now");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_output_alphabet() {
        let out = normalize("a~!@#$%^&*()_+ B\t1\r\n가-힣 ㄱ");
        assert!(out
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || is_hangul(c) || c == ' ' || c == '\n'));
        assert_eq!(out, out.to_lowercase());
    }

    #[test]
    fn test_normalize_idempotent() {
        let messy = "Check THIS!!\n\n  \n<b>out</b>\n\n한글 1337\r\n";
        let once = normalize(messy);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_hangul_range() {
        assert!(is_hangul('ㄱ'));
        assert!(is_hangul('가'));
        assert!(is_hangul('힣'));
        assert!(!is_hangul('a'));
        assert!(!is_hangul('9'));
    }

    #[test]
    fn test_contains_hangul() {
        assert!(contains_hangul("hello 안녕"));
        assert!(!contains_hangul("hello world"));
        assert!(!contains_hangul(""));
    }
}
