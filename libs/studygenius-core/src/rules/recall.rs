//! Recall rules: fill-in-the-blank and true/false statements.

use crate::language::Language;
use crate::types::Pair;
use rand::{Rng, RngCore};

/// Marker substituted for the removed word.
pub const BLANK: &str = "______";

/// Generic determiners/pronouns never worth blanking, even when they pass
/// the length filter.
const GENERIC_WORDS: &[&str] = &["this", "that", "they", "them", "their", "there"];

/// Polarity flips tried in priority order; only the first applicable one is
/// used.
const POLARITY_FLIPS: &[(&str, &str)] = &[
    ("is", "is not"),
    ("are", "are not"),
    ("can", "cannot"),
    ("will", "will not"),
    ("does", "does not"),
    ("has", "has not"),
    ("have", "have not"),
];

/// Blank one important word, chosen uniformly at random among qualifying
/// positions. The answer is the removed word, case preserved.
pub fn fill_in_blank(language: &Language, sentence: &str, rng: &mut dyn RngCore) -> Option<Pair> {
    let sentence = sentence.trim();
    let words: Vec<&str> = sentence.split_whitespace().collect();
    if words.len() < 8 {
        return None;
    }

    let candidates: Vec<usize> = words
        .iter()
        .enumerate()
        .filter(|(_, word)| {
            word.len() > 4
                && word.chars().all(|c| c.is_alphabetic())
                && !language.is_stopword(word)
                && !GENERIC_WORDS.contains(&word.to_lowercase().as_str())
        })
        .map(|(i, _)| i)
        .collect();

    if candidates.is_empty() {
        return None;
    }
    let blank_index = candidates[rng.gen_range(0..candidates.len())];
    let answer = words[blank_index].to_string();

    let mut question_words = words;
    question_words[blank_index] = BLANK;
    Some(Pair::new(
        format!("Fill in the blank: {}", question_words.join(" ")),
        answer,
    ))
}

/// Emit the literal sentence as a "True" statement and, when a polarity flip
/// applies, a paired "False" statement.
pub fn true_false(sentence: &str) -> Vec<Pair> {
    let sentence = sentence.trim();
    if sentence.split_whitespace().count() < 6 {
        return Vec::new();
    }

    let mut pairs = vec![Pair::new(format!("True or False: {sentence}"), "True")];

    if let Some(negated) = negate(sentence) {
        pairs.push(Pair::new(format!("True or False: {negated}"), "False"));
    }

    pairs
}

/// Apply the first polarity flip whose word occurs in the sentence.
///
/// The flip word is located case-insensitively but spliced at the exact byte
/// range, so capitalized auxiliaries flip too.
fn negate(sentence: &str) -> Option<String> {
    for (original, replacement) in POLARITY_FLIPS {
        let needle = format!(" {original} ");
        if let Some(pos) = find_ascii_ci(sentence, &needle) {
            let mut negated = String::with_capacity(sentence.len() + replacement.len());
            negated.push_str(&sentence[..pos]);
            negated.push_str(&format!(" {replacement} "));
            negated.push_str(&sentence[pos + needle.len()..]);
            return Some(negated);
        }
    }
    None
}

/// ASCII-case-insensitive substring search. The returned offset is a char
/// boundary because the matched region equals the ASCII needle.
fn find_ascii_ci(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}
