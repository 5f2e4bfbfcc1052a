//! Error types for studygenius-core.

use thiserror::Error;

/// Result type alias using GenerateError.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Errors that can occur during artifact generation.
///
/// Insufficient input (empty or below the minimum length) is not an error:
/// generators return an empty collection for it so callers can surface their
/// own message.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The sentence ranker produced nothing usable. Propagated to the caller;
    /// there is no fallback past the ranker chain itself.
    #[error("sentence ranking failed: {message}")]
    Ranker { message: String },

    /// A single pattern rule failed while matching. Swallowed at the call
    /// site: the rule contributes zero pairs and generation continues.
    #[error("{rule} rule failed: {message}")]
    Rule {
        rule: &'static str,
        message: String,
    },
}

impl GenerateError {
    pub fn ranker(message: impl Into<String>) -> Self {
        Self::Ranker {
            message: message.into(),
        }
    }

    pub fn rule(rule: &'static str, message: impl Into<String>) -> Self {
        Self::Rule {
            rule,
            message: message.into(),
        }
    }
}
