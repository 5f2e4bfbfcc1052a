//! Question-forming rules applied to one ranked sentence at a time.
//!
//! Each rule either recognizes its rhetorical shape and returns a pair, or
//! returns `None`. Rules only read the sentence; they are safe to run in any
//! order.

use crate::text;
use crate::types::Pair;
use once_cell::sync::Lazy;
use regex::Regex;

static COPULA_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s(?i:is|are)\s").expect("copula split regex"));
static LEADING_ARTICLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[Tt]he\s+").expect("article regex"));

/// Causal connectors, in match-priority order.
static CAUSAL_CONNECTORS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        "because",
        "since",
        "due to",
        "as a result of",
        "therefore",
        "consequently",
    ]
    .iter()
    .map(|kw| {
        let pattern = format!(r"(?i)\b{}\b", kw.replace(' ', r"\s+"));
        (Regex::new(&pattern).expect("causal regex"), *kw)
    })
    .collect()
});

/// Temporal shapes, in match-priority order: dates/years, "during the X",
/// "when X".
static TIME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b(?:in|during|at|on|when|after|before)\s+\d+",
        r"(?i)\b(?:in|during)\s+the\s+\w+",
        r"(?i)\bwhen\s+\w+",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("time regex"))
    .collect()
});

/// Locational shapes, in match-priority order.
static LOCATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\bin\s+(?:the\s+)?(\w+(?:\s+\w+)?)\s+(?:field|domain|area|industry)",
        r"(?i)\bat\s+(\w+(?:\s+\w+)?)",
        r"(?i)\bwithin\s+(\w+(?:\s+\w+)?)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("location regex"))
    .collect()
});

const PROCESS_NOUNS: &[&str] = &[
    "process",
    "method",
    "way",
    "procedure",
    "technique",
    "approach",
    "algorithm",
];

const SUBJECT_FILLERS: &[&str] = &["the", "a", "an", "this", "that"];

/// `"<subject> is <definition>"` → `"What is <subject>?"`.
///
/// Falls back to the first capitalized token of a long sentence, with the
/// whole sentence as the answer.
pub fn what_question(sentence: &str) -> Option<Pair> {
    let sentence = sentence.trim();

    if let Some(split) = COPULA_SPLIT.find(sentence) {
        let subject = LEADING_ARTICLE
            .replace(sentence[..split.start()].trim(), "")
            .trim()
            .to_string();
        let definition = sentence[split.end()..].trim().trim_end_matches('.');

        if !subject.is_empty()
            && text::word_count(&subject) <= 5
            && text::word_count(definition) >= 3
        {
            return Some(Pair::new(format!("What is {subject}?"), definition));
        }
    }

    let words: Vec<&str> = sentence.split_whitespace().collect();
    if words.len() > 8 {
        if let Some(term) = words
            .iter()
            .map(|w| text::strip_word_punct(w))
            .find(|w| text::is_capitalized(w) && w.len() > 3)
        {
            return Some(Pair::new(
                format!("What is {term}?"),
                sentence.trim_end_matches('.'),
            ));
        }
    }

    None
}

/// Splits on the first causal connector → `"Why <effect>?"` / `"Because <cause>"`.
pub fn why_question(sentence: &str) -> Option<Pair> {
    let sentence = sentence.trim();

    for (pattern, _) in CAUSAL_CONNECTORS.iter() {
        let Some(split) = pattern.find(sentence) else {
            continue;
        };
        let effect = sentence[..split.start()]
            .trim()
            .trim_end_matches([',', '.'])
            .trim();
        let cause = sentence[split.end()..].trim();

        if text::word_count(effect) >= 3 && text::word_count(cause) >= 3 {
            return Some(Pair::new(
                format!("Why {}?", effect.to_lowercase()),
                format!("Because {}", cause.to_lowercase().trim_end_matches('.')),
            ));
        }
        return None;
    }

    None
}

/// Process-noun plus function-verb trigger → `"How does <subject> work?"`.
pub fn how_question(sentence: &str) -> Option<Pair> {
    let sentence = sentence.trim();
    let lower = sentence.to_lowercase();

    let has_process_noun = PROCESS_NOUNS.iter().any(|kw| lower.contains(kw));
    let has_function_verb = lower.contains("work") || lower.contains("function");
    if !has_process_noun || !has_function_verb {
        return None;
    }

    let words: Vec<&str> = sentence.split_whitespace().collect();
    if words.len() <= 6 {
        return None;
    }

    let mut subject_words = Vec::new();
    for word in words.iter().take(5) {
        if !SUBJECT_FILLERS.contains(&word.to_lowercase().as_str()) {
            subject_words.push(*word);
        }
        if subject_words.len() >= 2 {
            break;
        }
    }
    if subject_words.is_empty() {
        return None;
    }

    let subject = subject_words
        .join(" ")
        .trim_end_matches([',', '.'])
        .to_lowercase();
    Some(Pair::new(
        format!("How does {subject} work?"),
        sentence.trim_end_matches('.'),
    ))
}

/// Removes the first temporal span to form the stem; the span is the answer.
pub fn when_question(sentence: &str) -> Option<Pair> {
    let sentence = sentence.trim();

    for pattern in TIME_PATTERNS.iter() {
        let Some(found) = pattern.find(sentence) else {
            continue;
        };
        let time_phrase = found.as_str().to_string();
        let stem = text::normalize_whitespace(&format!(
            "{} {}",
            &sentence[..found.start()],
            &sentence[found.end()..]
        ));

        if text::word_count(&stem) >= 4 {
            return Some(Pair::new(
                format!("When {}?", stem.to_lowercase().trim_end_matches('.')),
                time_phrase,
            ));
        }
        return None;
    }

    None
}

/// Locational span plus a leading capitalized subject →
/// `"Where is <subject> commonly used?"` / `"In <location>"`.
pub fn where_question(sentence: &str) -> Option<Pair> {
    let sentence = sentence.trim();

    for pattern in LOCATION_PATTERNS.iter() {
        let Some(caps) = pattern.captures(sentence) else {
            continue;
        };
        let location = caps.get(1)?.as_str();

        let subject_words: Vec<&str> = sentence
            .split_whitespace()
            .take(5)
            .map(text::strip_word_punct)
            .filter(|w| {
                text::is_capitalized(w)
                    && !["the", "in", "at", "this"].contains(&w.to_lowercase().as_str())
            })
            .collect();

        if subject_words.is_empty() || subject_words.len() > 2 {
            return None;
        }
        return Some(Pair::new(
            format!("Where is {} commonly used?", subject_words.join(" ")),
            format!("In {location}"),
        ));
    }

    None
}
