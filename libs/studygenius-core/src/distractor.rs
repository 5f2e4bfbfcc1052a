//! Plausible-but-wrong option synthesis for multiple-choice questions.

use rand::seq::SliceRandom;
use rand::RngCore;

/// Lexical triggers for single-token answers: (substring, triad of
/// same-category alternatives). First matching trigger wins.
const CATEGORY_TRIADS: &[(&[&str], [&str; 3])] = &[
    (
        &["learning", "machine"],
        ["Deep learning", "Supervised learning", "Neural networks"],
    ),
    (&["data"], ["Information", "Statistics", "Database"]),
    (&["network"], ["Algorithm", "Model", "System"]),
    (&["algorithm"], ["Method", "Process", "Technique"]),
];

/// Generic distractors appended after any category triad.
const GENERIC_POOL: &[&str] = &[
    "Artificial intelligence",
    "Data processing",
    "Statistical analysis",
    "Pattern recognition",
    "Computer science",
    "Information technology",
    "None of the above",
    "Cannot be determined",
];

/// Last-resort pool, exempt from the near-duplicate filter.
const FINAL_POOL: &[&str] = &["Not mentioned in the text", "All of the above", "Insufficient data"];

/// Build up to four shuffled options around `answer` and report the answer's
/// resulting index.
///
/// Candidates are accepted only when case-insensitively distinct from and
/// not containing (or contained in) any option already present. When the
/// filtered pools run dry the final pool is drained without the substring
/// filter; a degenerate answer can still end up with fewer than four
/// options, which is accepted rather than an error.
pub fn synthesize(answer: &str, rng: &mut dyn RngCore) -> (Vec<String>, usize) {
    let mut options = vec![answer.to_string()];

    let mut candidates: Vec<&str> = Vec::new();
    let answer_lower = answer.to_lowercase();
    if answer_lower.split_whitespace().count() == 1 {
        if let Some((_, triad)) = CATEGORY_TRIADS
            .iter()
            .find(|(triggers, _)| triggers.iter().any(|t| answer_lower.contains(t)))
        {
            candidates.extend(triad);
        }
    }
    candidates.extend(GENERIC_POOL);

    for candidate in candidates {
        if options.len() >= 4 {
            break;
        }
        if is_near_duplicate(candidate, &options) {
            continue;
        }
        options.push(candidate.to_string());
    }

    for candidate in FINAL_POOL {
        if options.len() >= 4 {
            break;
        }
        if options.iter().any(|existing| existing == candidate) {
            continue;
        }
        options.push(candidate.to_string());
    }

    options.shuffle(rng);
    let correct_index = options
        .iter()
        .position(|option| option == answer)
        .unwrap_or(0);

    (options, correct_index)
}

/// Case-insensitive equality or substring containment in either direction.
fn is_near_duplicate(candidate: &str, options: &[String]) -> bool {
    let candidate = candidate.to_lowercase();
    options.iter().any(|existing| {
        let existing = existing.to_lowercase();
        existing.contains(&candidate) || candidate.contains(&existing)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn four_distinct_options_around_the_answer() {
        let mut rng = StdRng::seed_from_u64(3);
        let (options, correct_index) = synthesize("Neural networks", &mut rng);

        assert_eq!(options.len(), 4);
        assert_eq!(options[correct_index], "Neural networks");
        for (i, a) in options.iter().enumerate() {
            for b in options.iter().skip(i + 1) {
                let (a, b) = (a.to_lowercase(), b.to_lowercase());
                assert!(!a.contains(&b) && !b.contains(&a), "near-duplicates: {a} / {b}");
            }
        }
    }

    #[test]
    fn single_token_answer_draws_category_triad() {
        let mut rng = StdRng::seed_from_u64(3);
        let (options, _) = synthesize("algorithms", &mut rng);
        for expected in ["Method", "Process", "Technique"] {
            assert!(options.iter().any(|o| o == expected), "missing {expected}");
        }
    }

    #[test]
    fn multi_word_answer_skips_category_triads() {
        let mut rng = StdRng::seed_from_u64(3);
        let (options, _) = synthesize("machine learning models", &mut rng);
        assert!(!options.iter().any(|o| o == "Deep learning"));
    }

    #[test]
    fn answer_overlapping_the_pool_is_not_duplicated() {
        let mut rng = StdRng::seed_from_u64(3);
        let (options, correct_index) = synthesize("Artificial intelligence", &mut rng);
        let hits = options
            .iter()
            .filter(|o| o.eq_ignore_ascii_case("artificial intelligence"))
            .count();
        assert_eq!(hits, 1);
        assert_eq!(options[correct_index], "Artificial intelligence");
    }

    #[test]
    fn correct_index_tracks_shuffle_for_any_seed() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (options, correct_index) = synthesize("Backpropagation", &mut rng);
            assert_eq!(options[correct_index], "Backpropagation");
        }
    }
}
