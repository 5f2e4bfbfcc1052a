//! Language data: stopword set and a small suffix stemmer.
//!
//! This is the only per-process shared state the generators read. It is
//! immutable after construction and safe for concurrent reads. Other
//! languages are supported by supplying a custom word list.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// English stopwords used by the significance heuristics and the ranker.
const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "cannot", "could", "did", "do", "does", "doing", "down", "during", "each",
    "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here",
    "hers", "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it",
    "its", "itself", "just", "me", "more", "most", "my", "myself", "no", "nor", "not", "now",
    "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out",
    "over", "own", "same", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this",
    "those", "through", "to", "too", "under", "until", "up", "very", "was", "we", "were",
    "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with", "would",
    "you", "your", "yours", "yourself", "yourselves",
];

/// Stopword set and stemmer for one language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    stopwords: HashSet<String>,
}

impl Language {
    /// Build a language from a custom word list.
    pub fn new(name: impl Into<String>, stopwords: impl IntoIterator<Item = String>) -> Self {
        Self {
            name: name.into(),
            stopwords: stopwords.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// English with the embedded stopword list.
    pub fn english() -> Self {
        Self {
            name: "english".to_string(),
            stopwords: ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Case-insensitive stopword check.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Strip common inflectional suffixes. Crude on purpose: it only has to
    /// collapse word forms for frequency counting, not produce real stems.
    pub fn stem(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        for suffix in ["ing", "ed", "ly", "ies", "s"] {
            if let Some(stripped) = lower.strip_suffix(suffix) {
                if stripped.len() >= 3 {
                    return stripped.to_string();
                }
                break;
            }
        }
        lower
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::english()
    }
}
