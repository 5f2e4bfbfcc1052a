//! Core types for study artifact generation.

use serde::{Deserialize, Serialize};

/// A prompt/answer pair produced by a pattern rule.
///
/// For flashcards the prompt is a front-of-card term or question; for quiz
/// generation it is a question and the answer is the correct option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub prompt: String,
    pub answer: String,
}

impl Pair {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }
}

/// A front/back flashcard. Flip state belongs to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

impl From<Pair> for Flashcard {
    fn from(pair: Pair) -> Self {
        Self {
            front: pair.prompt,
            back: pair.answer,
        }
    }
}

/// A multiple-choice quiz question.
///
/// Invariant: `options[correct_index]` equals the original answer string and
/// options are pairwise distinct (case-insensitive, non-containing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl QuizQuestion {
    /// The correct answer string.
    pub fn answer(&self) -> &str {
        &self.options[self.correct_index]
    }
}

/// Generation thresholds, passed explicitly at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Minimum trimmed input length in characters. Shorter input yields an
    /// empty result instead of an error.
    pub min_text_chars: usize,
    /// Requested count used when the caller does not supply one.
    pub default_count: usize,
    /// Fraction of source sentences a ranker targets when no explicit count
    /// is given.
    pub summary_ratio: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_text_chars: 50,
            default_count: 10,
            summary_ratio: 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pair_converts_to_flashcard() {
        let pair = Pair::new("What is Rust?", "A systems programming language");
        let card = Flashcard::from(pair);
        assert_eq!(card.front, "What is Rust?");
        assert_eq!(card.back, "A systems programming language");
    }

    #[test]
    fn quiz_question_answer_accessor() {
        let q = QuizQuestion {
            question: "Q".to_string(),
            options: vec!["a".to_string(), "b".to_string()],
            correct_index: 1,
        };
        assert_eq!(q.answer(), "b");
    }

    #[test]
    fn default_config_carries_thresholds() {
        let config = GeneratorConfig::default();
        assert_eq!(config.min_text_chars, 50);
        assert_eq!(config.default_count, 10);
    }
}
