//! Text normalization and tokenization shared by the scorer backends.

use once_cell::sync::Lazy;
use regex::Regex;

/// `\s` plus the ASCII information separators U+001C..U+001F, which Python's
/// `re` and `str.split` treat as whitespace.
static RE_NOT_ALNUM_OR_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s\x1C-\x1F]").expect("valid regex"));

static RE_NOT_WORD_OR_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s]").expect("valid regex"));

/// Two or more word characters between word boundaries.
static RE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("valid regex"));

/// Lowercases and drops every character that is not an ASCII letter, digit
/// or whitespace.
pub fn clean_text(text: &str) -> String {
    RE_NOT_ALNUM_OR_SPACE
        .replace_all(&text.to_lowercase(), "")
        .into_owned()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Whitespace-separated words of a cleaned document.
pub fn words(clean: &str) -> impl Iterator<Item = &str> {
    clean.split(is_separator).filter(|word| !word.is_empty())
}

/// Vectorizer tokens of an already-cleaned document, in order.
pub fn analyzer_tokens(clean: &str) -> Vec<&str> {
    RE_TOKEN.find_iter(clean).map(|m| m.as_str()).collect()
}

/// Tokens for the bag-of-words backend: lowercase, strip punctuation,
/// split on whitespace, keep tokens longer than two characters.
pub fn bag_of_words_tokens(text: &str) -> Vec<String> {
    RE_NOT_WORD_OR_SPACE
        .replace_all(&text.to_lowercase(), "")
        .split_whitespace()
        .filter(|word| word.chars().count() > 2)
        .map(str::to_string)
        .collect()
}
