//! Extractive sentence ranking.
//!
//! Generators depend on the [`SentenceRanker`] trait only; the bundled
//! implementations are interchangeable and callers may substitute their own.

use crate::error::{GenerateError, Result};
use crate::language::Language;
use crate::text;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Trait for extractive sentence rankers.
///
/// `rank` returns up to `count` representative sentences in ranking order,
/// not document order.
pub trait SentenceRanker: Send + Sync {
    /// Ranker identifier, used in fallback logging.
    fn name(&self) -> &'static str;

    /// Select up to `count` representative sentences from `text`.
    fn rank(&self, text: &str, count: usize) -> Result<Vec<String>>;
}

/// Word-frequency ranker in the style of Luhn's significance heuristic.
///
/// Sentences score by the summed document frequency of their significant
/// stems (non-stopword, alphabetic, longer than three characters),
/// normalized by sentence length. Ties keep document order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyRanker {
    language: Language,
}

impl FrequencyRanker {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    fn significant_stems(&self, sentence: &str) -> Vec<String> {
        sentence
            .split_whitespace()
            .map(text::strip_word_punct)
            .filter(|w| w.len() > 3 && w.chars().all(|c| c.is_alphabetic()))
            .filter(|w| !self.language.is_stopword(w))
            .map(|w| self.language.stem(w))
            .collect()
    }
}

impl SentenceRanker for FrequencyRanker {
    fn name(&self) -> &'static str {
        "frequency"
    }

    fn rank(&self, text: &str, count: usize) -> Result<Vec<String>> {
        let cleaned = text::clean_text(text);
        let sentences = text::split_sentences(&cleaned);
        if sentences.is_empty() {
            return Err(GenerateError::ranker("no sentences in input"));
        }

        let mut frequencies: HashMap<String, usize> = HashMap::new();
        for sentence in &sentences {
            for stem in self.significant_stems(sentence) {
                *frequencies.entry(stem).or_insert(0) += 1;
            }
        }

        let mut scored: Vec<(usize, f64, &String)> = sentences
            .iter()
            .enumerate()
            .map(|(idx, sentence)| {
                let total: usize = self
                    .significant_stems(sentence)
                    .iter()
                    .filter_map(|stem| frequencies.get(stem))
                    .sum();
                let words = text::word_count(sentence).max(1);
                (idx, total as f64 / words as f64, sentence)
            })
            .collect();

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });

        Ok(scored
            .into_iter()
            .take(count)
            .map(|(_, _, s)| s.clone())
            .collect())
    }
}

/// Positional ranker: the first `count` sentences in document order.
///
/// Deliberately dumb; exists as the last link of the fallback chain.
#[derive(Debug, Clone, Default)]
pub struct LeadRanker;

impl SentenceRanker for LeadRanker {
    fn name(&self) -> &'static str {
        "lead"
    }

    fn rank(&self, text: &str, count: usize) -> Result<Vec<String>> {
        let cleaned = text::clean_text(text);
        let sentences = text::split_sentences(&cleaned);
        if sentences.is_empty() {
            return Err(GenerateError::ranker("no sentences in input"));
        }
        Ok(sentences.into_iter().take(count).collect())
    }
}

/// Ordered fallback chain over rankers.
///
/// Tries each ranker in turn and returns the first non-empty result. A
/// ranker failure is logged and the next one is tried; only when every
/// ranker fails does the error propagate.
pub struct AutoRanker {
    rankers: Vec<Box<dyn SentenceRanker>>,
}

impl AutoRanker {
    pub fn new(rankers: Vec<Box<dyn SentenceRanker>>) -> Self {
        Self { rankers }
    }
}

impl Default for AutoRanker {
    fn default() -> Self {
        Self {
            rankers: vec![
                Box::new(FrequencyRanker::new(Language::english())),
                Box::new(LeadRanker),
            ],
        }
    }
}

impl SentenceRanker for AutoRanker {
    fn name(&self) -> &'static str {
        "auto"
    }

    fn rank(&self, text: &str, count: usize) -> Result<Vec<String>> {
        let mut last_error = GenerateError::ranker("no rankers configured");
        for ranker in &self.rankers {
            match ranker.rank(text, count) {
                Ok(sentences) if !sentences.is_empty() => return Ok(sentences),
                Ok(_) => {
                    tracing::warn!(ranker = ranker.name(), "ranker returned no sentences");
                    last_error = GenerateError::ranker(format!(
                        "{} ranker returned no sentences",
                        ranker.name()
                    ));
                }
                Err(e) => {
                    tracing::warn!(ranker = ranker.name(), error = %e, "ranker failed");
                    last_error = e;
                }
            }
        }
        Err(last_error)
    }
}
