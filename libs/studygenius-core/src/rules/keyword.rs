//! Keyword/definition extraction over the raw document text.
//!
//! Four shapes are recognized, in fixed order:
//! - `Term is/are/means/refers to/defined as <definition>`
//! - `Term: <explanation>`
//! - `Term - <explanation>` (hyphen, en-dash, em-dash)
//! - `Term (<explanation>)`

use crate::text;
use crate::types::Pair;
use once_cell::sync::Lazy;
use regex::Regex;

/// Subjects that are pronoun stand-ins rather than terms.
const REJECTED_SUBJECTS: &[&str] = &["this", "that", "these", "those", "it", "they"];

static DEFINITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z][A-Za-z\s]+?)\s+(?:is|are|means|refers to|defined as)\s+([^.!?]+[.!?])")
        .expect("definition regex")
});
static COLON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z][A-Za-z\s]+?):\s+([^.!?]+[.!?])").expect("colon regex"));
static DASH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z][A-Za-z\s]+?)\s*[-\u{2013}\u{2014}]\s*([^.!?]+[.!?])").expect("dash regex")
});
static PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z][A-Za-z\s]+?)\s*\(([^)]+)\)").expect("parenthetical regex"));

/// Word-boundary check for an existing copula inside a definition.
static HAS_COPULA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:is|are|refers|means)\b").expect("copula regex"));

static LEADING_ARTICLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[Tt]he\s+").expect("article regex"));

/// Scan the full text with every keyword pattern, in order.
///
/// A sentence may satisfy several patterns and contribute several pairs;
/// deduplication is the orchestrator's concern.
pub fn extract_keyword_definitions(raw_text: &str) -> Vec<Pair> {
    // (pattern, whether the pattern itself carries a copula connector)
    let patterns: [(&Regex, bool); 4] = [
        (&DEFINITION, true),
        (&COLON, false),
        (&DASH, false),
        (&PARENTHETICAL, false),
    ];

    let mut pairs = Vec::new();
    for (pattern, has_connector) in patterns {
        for caps in pattern.captures_iter(raw_text) {
            let (Some(keyword), Some(definition)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            if let Some(pair) =
                build_pair(keyword.as_str(), definition.as_str(), has_connector)
            {
                pairs.push(pair);
            }
        }
    }
    pairs
}

fn build_pair(keyword: &str, definition: &str, pattern_has_connector: bool) -> Option<Pair> {
    let keyword = LEADING_ARTICLE.replace(keyword.trim(), "").trim().to_string();
    let definition = definition
        .trim()
        .trim_end_matches(['.', ',', '!', '?'])
        .trim()
        .to_string();

    let keyword_words = text::word_count(&keyword);
    let definition_words = text::word_count(&definition);
    if !(1..=4).contains(&keyword_words) || !(3..=30).contains(&definition_words) {
        return None;
    }
    if REJECTED_SUBJECTS.contains(&keyword.to_lowercase().as_str()) {
        return None;
    }

    let mut definition = text::capitalize_first(&definition);

    // Patterns without their own connector get a copula so the back of the
    // card reads as a sentence fragment ("Neural networks" / "are ...").
    if !pattern_has_connector && !HAS_COPULA.is_match(&definition) {
        let copula = if keyword.ends_with('s') { "are" } else { "is" };
        definition = format!("{} {}", copula, text::lowercase_first(&definition));
    }

    Some(Pair::new(keyword, definition))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn definition_pattern_extracts_subject_and_definition() {
        let text = "Artificial Intelligence is a branch of computer science that aims to \
                    create intelligent machines.";
        let pairs = extract_keyword_definitions(text);
        assert!(!pairs.is_empty());
        assert_eq!(pairs[0].prompt, "Artificial Intelligence");
        assert!(pairs[0]
            .answer
            .to_lowercase()
            .starts_with("a branch of computer science"));
    }

    #[test]
    fn leading_article_is_stripped() {
        let text = "The Transformer is an architecture built entirely on attention.";
        let pairs = extract_keyword_definitions(text);
        assert_eq!(pairs[0].prompt, "Transformer");
    }

    #[test]
    fn colon_pattern_synthesizes_copula() {
        let text = "Gradient Descent: an iterative optimization procedure for neural models.";
        let pairs = extract_keyword_definitions(text);
        let pair = pairs
            .iter()
            .find(|p| p.prompt == "Gradient Descent")
            .expect("colon pair");
        assert!(pair.answer.starts_with("is an iterative optimization"));
    }

    #[test]
    fn plural_term_gets_plural_copula() {
        let text = "Neural Networks: layered systems of connected artificial neurons.";
        let pairs = extract_keyword_definitions(text);
        let pair = pairs
            .iter()
            .find(|p| p.prompt == "Neural Networks")
            .expect("colon pair");
        assert!(pair.answer.starts_with("are layered systems"));
    }

    #[test]
    fn parenthetical_pattern_matches() {
        let text = "Support Vector Machines (supervised models that separate classes with a \
                    maximal margin) remain popular.";
        let pairs = extract_keyword_definitions(text);
        assert!(pairs.iter().any(|p| p.prompt == "Support Vector Machines"));
    }

    #[test]
    fn pronoun_subjects_are_rejected() {
        let text = "It is a widely known fact about these systems.";
        let pairs = extract_keyword_definitions(text);
        assert!(pairs.iter().all(|p| p.prompt.to_lowercase() != "it"));
    }

    #[test]
    fn overly_long_definitions_are_rejected() {
        let long_def = ["word"; 40].join(" ");
        let text = format!("Overfitting means {long_def}.");
        let pairs = extract_keyword_definitions(&text);
        assert!(pairs.iter().all(|p| p.prompt != "Overfitting"));
    }

    #[test]
    fn short_definitions_are_rejected() {
        let text = "Bias means error.";
        let pairs = extract_keyword_definitions(text);
        assert!(pairs.is_empty());
    }
}
