//! Core study-artifact library for StudyGenius.
//!
//! Turns raw document text into study material with a rule-based extraction
//! pipeline:
//! - Extractive sentence ranking behind the [`SentenceRanker`] trait
//! - Pattern rules deriving question/answer and term/definition pairs
//! - Flashcard assembly with layered fallbacks ([`FlashcardGenerator`])
//! - Quiz assembly with per-rule failure isolation ([`QuizGenerator`])
//! - Multiple-choice distractor synthesis ([`distractor`])
//!
//! Presentation, file I/O, and document parsing live with the caller: input
//! is plain text plus a requested count, output is plain data. All
//! randomness flows through an injected [`rand::RngCore`] so callers and
//! tests can pin seeds.

pub mod distractor;
pub mod error;
pub mod flashcards;
pub mod language;
pub mod quiz;
pub mod ranker;
pub mod rules;
pub mod text;
pub mod types;

pub use error::{GenerateError, Result};
pub use flashcards::FlashcardGenerator;
pub use language::Language;
pub use quiz::QuizGenerator;
pub use ranker::{AutoRanker, FrequencyRanker, LeadRanker, SentenceRanker};
pub use rules::{RuleContext, RuleKind, SentenceRule};
pub use types::{Flashcard, GeneratorConfig, Pair, QuizQuestion};
