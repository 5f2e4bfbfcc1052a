//! Flashcard generation: keyword cards, question cards, and a last-resort
//! blanking fallback, assembled into a shuffled fixed-size set.

use crate::error::Result;
use crate::language::Language;
use crate::ranker::{AutoRanker, SentenceRanker};
use crate::rules::{self, RuleContext, SentenceRule};
use crate::text;
use crate::types::{Flashcard, GeneratorConfig, Pair};
use rand::seq::SliceRandom;
use rand::RngCore;

/// Connectives never worth blanking in the fallback pass.
const CONNECTIVES: &[&str] = &["the", "and", "but", "or", "however", "therefore"];

/// Determiners rejected as capitalized blank candidates.
const DETERMINERS: &[&str] = &["the", "this", "that", "these", "those"];

/// Generates front/back flashcards from raw document text.
pub struct FlashcardGenerator {
    config: GeneratorConfig,
    language: Language,
    ranker: Box<dyn SentenceRanker>,
    rules: Vec<SentenceRule>,
}

impl Default for FlashcardGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default(), Language::english())
    }
}

impl FlashcardGenerator {
    pub fn new(config: GeneratorConfig, language: Language) -> Self {
        Self {
            config,
            language,
            ranker: Box::new(AutoRanker::default()),
            rules: rules::flashcard_rules(),
        }
    }

    /// Replace the rule table the question cards draw from.
    pub fn with_rules(mut self, rules: Vec<SentenceRule>) -> Self {
        self.rules = rules;
        self
    }

    /// Substitute the sentence ranker (tests stub it out here).
    pub fn with_ranker(mut self, ranker: Box<dyn SentenceRanker>) -> Self {
        self.ranker = ranker;
        self
    }

    /// Generate up to `count` flashcards using the process-wide RNG.
    pub fn generate(&self, raw_text: &str, count: usize) -> Result<Vec<Flashcard>> {
        self.generate_with_rng(raw_text, count, &mut rand::thread_rng())
    }

    /// Generate up to `count` flashcards from an injected RNG.
    ///
    /// Empty or too-short input yields an empty set, never an error; a
    /// ranker failure propagates.
    pub fn generate_with_rng(
        &self,
        raw_text: &str,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Flashcard>> {
        if raw_text.trim().chars().count() < self.config.min_text_chars || count == 0 {
            return Ok(Vec::new());
        }

        // Keyword/definition cards come from the raw text, not the ranked
        // sentences, so colon/dash shapes survive sentence splitting.
        let mut cards: Vec<Pair> = rules::keyword::extract_keyword_definitions(raw_text)
            .into_iter()
            .take(count / 2)
            .collect();

        self.add_question_cards(raw_text, count, &mut cards, rng)?;

        if cards.len() < count {
            self.add_blanked_cards(raw_text, count, &mut cards, rng)?;
        }

        cards.shuffle(rng);
        cards.truncate(count);
        tracing::debug!(cards = cards.len(), requested = count, "flashcards generated");
        Ok(cards.into_iter().map(Flashcard::from).collect())
    }

    /// One question card per ranked sentence, the matching rule chosen
    /// uniformly at random rather than by table order, to diversify card
    /// types.
    fn add_question_cards(
        &self,
        raw_text: &str,
        count: usize,
        cards: &mut Vec<Pair>,
        rng: &mut dyn RngCore,
    ) -> Result<()> {
        let sentences = self.ranker.rank(raw_text, count)?;
        let ctx = RuleContext {
            language: &self.language,
        };

        for sentence in &sentences {
            if cards.len() >= count {
                break;
            }
            if text::word_count(sentence) < 5 {
                continue;
            }

            let mut matches = Vec::new();
            for rule in &self.rules {
                match rule.apply(&ctx, sentence, rng) {
                    Ok(pairs) => matches.extend(pairs),
                    Err(e) => {
                        tracing::warn!(rule = rule.kind.as_str(), error = %e, "rule failed");
                    }
                }
            }
            if let Some(pair) = matches.choose(rng) {
                cards.push(pair.clone());
            }
        }
        Ok(())
    }

    /// Last-resort fallback: blank the most distinctive word of re-ranked
    /// sentences until the set is full.
    fn add_blanked_cards(
        &self,
        raw_text: &str,
        count: usize,
        cards: &mut Vec<Pair>,
        _rng: &mut dyn RngCore,
    ) -> Result<()> {
        let sentences = self.ranker.rank(raw_text, count * 2)?;

        for sentence in &sentences {
            if cards.len() >= count {
                break;
            }
            let words: Vec<&str> = sentence.split_whitespace().collect();
            if words.len() <= 8 {
                continue;
            }
            if let Some(pair) = blank_distinctive_word(&words) {
                cards.push(pair);
            }
        }
        Ok(())
    }

    /// Render a plain-text study sheet.
    pub fn format_flashcards(&self, cards: &[Flashcard]) -> String {
        if cards.is_empty() {
            return "No flashcards could be generated from the provided text.".to_string();
        }

        let mut out = format!("Generated Flashcards:\n{}\n\n", "=".repeat(50));
        for (i, card) in cards.iter().enumerate() {
            out.push_str(&format!("Card {}:\n", i + 1));
            out.push_str(&format!("Q: {}\n", card.front));
            out.push_str(&format!("A: {}\n", card.back));
            out.push_str(&format!("{}\n\n", "-".repeat(30)));
        }
        out
    }
}

/// Pick the blank target: the first capitalized non-determiner token longer
/// than 3 chars, else the first token longer than 6 chars that is not a
/// connective, else the middle word unconditionally.
fn blank_distinctive_word(words: &[&str]) -> Option<Pair> {
    let mut capitalized = None;
    let mut long_word = None;

    for (i, word) in words.iter().enumerate() {
        let clean = text::strip_word_punct(word);
        if clean.is_empty() {
            continue;
        }
        let lower = clean.to_lowercase();
        if capitalized.is_none()
            && text::is_capitalized(clean)
            && clean.len() > 3
            && !DETERMINERS.contains(&lower.as_str())
        {
            capitalized = Some((i, clean));
        } else if long_word.is_none() && clean.len() > 6 && !CONNECTIVES.contains(&lower.as_str()) {
            long_word = Some((i, clean));
        }
    }

    let (index, answer) = capitalized
        .or(long_word)
        .unwrap_or((words.len() / 2, text::strip_word_punct(words[words.len() / 2])));
    if answer.is_empty() {
        return None;
    }

    let mut question_words: Vec<&str> = words.to_vec();
    question_words[index] = rules::recall::BLANK;
    let stem = question_words.join(" ");
    Some(Pair::new(
        format!("Complete the sentence: {}", stem.trim_end_matches('.')),
        answer,
    ))
}
