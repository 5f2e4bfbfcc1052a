//! Shared text-cleaning utilities used by the rankers and pattern rules.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));
static SYMBOLS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s.,!?;:\-()]").expect("symbols regex"));
static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").expect("url regex"));
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+").expect("email regex"));

/// Collapse whitespace runs and drop characters that never carry meaning for
/// the extraction heuristics (URLs, emails, stray symbols).
pub fn clean_text(text: &str) -> String {
    let text = URL.replace_all(text, "");
    let text = EMAIL.replace_all(&text, "");
    let text = SYMBOLS.replace_all(&text, "");
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Trim and collapse internal whitespace.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split text into sentences on terminal punctuation followed by whitespace
/// or end of input. The terminator stays attached to its sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') {
            let at_boundary = match chars.peek() {
                None => true,
                Some(next) => next.is_whitespace(),
            };
            if at_boundary {
                let sentence = normalize_whitespace(&current);
                if sentence.chars().any(|c| c.is_alphanumeric()) {
                    sentences.push(sentence);
                }
                current.clear();
            }
        }
    }

    let tail = normalize_whitespace(&current);
    if tail.chars().any(|c| c.is_alphanumeric()) {
        sentences.push(tail);
    }

    sentences
}

/// Strip surrounding punctuation from a token.
pub fn strip_word_punct(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric())
}

/// Whether a token starts with an uppercase letter.
pub fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_uppercase())
}

/// Number of whitespace-separated words.
pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

/// Uppercase the first letter, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Lowercase the first letter, leaving the rest untouched.
pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clean_text_collapses_whitespace_and_symbols() {
        let cleaned = clean_text("Hello   world! @#$ This\tis fine.");
        assert_eq!(cleaned, "Hello world! This is fine.");
    }

    #[test]
    fn clean_text_strips_urls_and_emails() {
        let cleaned = clean_text("See https://example.com/page or mail me@example.com today.");
        assert_eq!(cleaned, "See or mail today.");
    }

    #[test]
    fn split_sentences_on_terminal_punctuation() {
        let sentences = split_sentences("First sentence. Second one! Third? Trailing");
        assert_eq!(
            sentences,
            vec!["First sentence.", "Second one!", "Third?", "Trailing"]
        );
    }

    #[test]
    fn split_sentences_keeps_decimal_numbers_whole() {
        let sentences = split_sentences("The value is 3.5 units. Done.");
        assert_eq!(sentences, vec!["The value is 3.5 units.", "Done."]);
    }

    #[test]
    fn split_sentences_ignores_bare_punctuation() {
        assert!(split_sentences("... !!!").is_empty());
    }

    #[test]
    fn token_helpers() {
        assert_eq!(strip_word_punct("(word),"), "word");
        assert!(is_capitalized("Rust"));
        assert!(!is_capitalized("rust"));
        assert_eq!(word_count("one two  three"), 3);
        assert_eq!(capitalize_first("hello"), "Hello");
        assert_eq!(lowercase_first("Hello"), "hello");
    }
}
