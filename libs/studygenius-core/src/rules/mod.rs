//! Pattern rules and their dispatch tables.
//!
//! Every heuristic is an independent function from one sentence to zero or
//! more pairs. Orchestrators iterate an ordered rule table and never name
//! individual heuristics, so adding or removing one touches only this
//! module. Precedence among overlapping matches is "first rule in the table
//! wins" and is part of the observable behavior.

pub mod keyword;
pub mod question;
pub mod recall;

use crate::error::Result;
use crate::language::Language;
use crate::types::Pair;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// The rhetorical shape a rule targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    What,
    How,
    Why,
    When,
    Where,
    FillBlank,
    TrueFalse,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::What => "what",
            Self::How => "how",
            Self::Why => "why",
            Self::When => "when",
            Self::Where => "where",
            Self::FillBlank => "fill_blank",
            Self::TrueFalse => "true_false",
        }
    }
}

/// Read-only data shared by every rule invocation.
pub struct RuleContext<'a> {
    pub language: &'a Language,
}

/// Signature shared by every sentence rule.
pub type RuleFn = fn(&RuleContext<'_>, &str, &mut dyn RngCore) -> Result<Vec<Pair>>;

/// One entry of a rule table.
pub struct SentenceRule {
    pub kind: RuleKind,
    apply: RuleFn,
}

impl SentenceRule {
    pub fn new(kind: RuleKind, apply: RuleFn) -> Self {
        Self { kind, apply }
    }

    /// Run the rule against one sentence. `Err` means the rule itself
    /// misbehaved; a non-match is `Ok(vec![])`.
    pub fn apply(
        &self,
        ctx: &RuleContext<'_>,
        sentence: &str,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Pair>> {
        (self.apply)(ctx, sentence, rng)
    }
}

fn what_rule(_: &RuleContext<'_>, sentence: &str, _: &mut dyn RngCore) -> Result<Vec<Pair>> {
    Ok(question::what_question(sentence).into_iter().collect())
}

fn how_rule(_: &RuleContext<'_>, sentence: &str, _: &mut dyn RngCore) -> Result<Vec<Pair>> {
    Ok(question::how_question(sentence).into_iter().collect())
}

fn why_rule(_: &RuleContext<'_>, sentence: &str, _: &mut dyn RngCore) -> Result<Vec<Pair>> {
    Ok(question::why_question(sentence).into_iter().collect())
}

fn when_rule(_: &RuleContext<'_>, sentence: &str, _: &mut dyn RngCore) -> Result<Vec<Pair>> {
    Ok(question::when_question(sentence).into_iter().collect())
}

fn where_rule(_: &RuleContext<'_>, sentence: &str, _: &mut dyn RngCore) -> Result<Vec<Pair>> {
    Ok(question::where_question(sentence).into_iter().collect())
}

fn fill_blank_rule(
    ctx: &RuleContext<'_>,
    sentence: &str,
    rng: &mut dyn RngCore,
) -> Result<Vec<Pair>> {
    Ok(recall::fill_in_blank(ctx.language, sentence, rng)
        .into_iter()
        .collect())
}

fn true_false_rule(_: &RuleContext<'_>, sentence: &str, _: &mut dyn RngCore) -> Result<Vec<Pair>> {
    Ok(recall::true_false(sentence))
}

/// All seven question rules, in quiz precedence order.
pub fn quiz_rules() -> Vec<SentenceRule> {
    vec![
        SentenceRule::new(RuleKind::What, what_rule),
        SentenceRule::new(RuleKind::How, how_rule),
        SentenceRule::new(RuleKind::Why, why_rule),
        SentenceRule::new(RuleKind::When, when_rule),
        SentenceRule::new(RuleKind::Where, where_rule),
        SentenceRule::new(RuleKind::FillBlank, fill_blank_rule),
        SentenceRule::new(RuleKind::TrueFalse, true_false_rule),
    ]
}

/// The five question rules flashcards draw from, in their precedence order.
pub fn flashcard_rules() -> Vec<SentenceRule> {
    vec![
        SentenceRule::new(RuleKind::What, what_rule),
        SentenceRule::new(RuleKind::Why, why_rule),
        SentenceRule::new(RuleKind::How, how_rule),
        SentenceRule::new(RuleKind::When, when_rule),
        SentenceRule::new(RuleKind::Where, where_rule),
    ]
}
