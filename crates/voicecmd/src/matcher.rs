//! Fuzzy title matching
//!
//! Resolves a spoken title fragment against a snapshot of the user's todos.
//! Per-candidate similarity: case-insensitive exact match scores 1.0 and
//! short-circuits the other checks, substring containment in either
//! direction scores 0.85, otherwise normalized Levenshtein similarity
//! (`1 - distance / max_chars`). Comparisons are char-based so Urdu script
//! is measured correctly.
//!
//! A best score below the configured threshold is reported as no match
//! rather than a wrong guess. Candidates tied at the best score are all
//! surfaced for disambiguation, never picked silently.

use serde::{Deserialize, Serialize};
use todos::Todo;
use tracing::debug;
use ts_rs::TS;

use crate::config::MatcherConfig;

/// Similarity assigned to substring containment in either direction.
pub const SUBSTRING_SIMILARITY: f32 = 0.85;

/// Outcome of resolving a title fragment against the todo snapshot.
/// Ephemeral; consumed immediately by the executor.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub enum MatchOutcome {
    /// Single best candidate at or above the confidence threshold.
    Match { todo: Todo, similarity: f32 },
    /// Two or more candidates tied at the best score, in snapshot order.
    Ambiguous { candidates: Vec<Todo>, similarity: f32 },
    /// Best score below the threshold, or nothing to match against.
    NoMatch { best_similarity: f32 },
}

/// Find the best match for `fragment` in `todos`. Never fails; absence of
/// a confident match is an expected outcome, not an error.
pub fn find_best_match(fragment: &str, todos: &[Todo], config: &MatcherConfig) -> MatchOutcome {
    let fragment = fragment.trim();
    if fragment.is_empty() || todos.is_empty() {
        return MatchOutcome::NoMatch {
            best_similarity: 0.0,
        };
    }

    let mut best_similarity = 0.0f32;
    let mut candidates: Vec<Todo> = Vec::new();

    for todo in todos {
        let score = similarity(fragment, &todo.title);
        if score > best_similarity {
            best_similarity = score;
            candidates.clear();
            candidates.push(todo.clone());
        } else if (score - best_similarity).abs() < f32::EPSILON && score > 0.0 {
            candidates.push(todo.clone());
        }
    }

    debug!(
        fragment,
        best_similarity,
        tied = candidates.len(),
        "Fuzzy match scan complete"
    );

    // A zero threshold can clear with no accumulated candidates when every
    // todo scored exactly 0.0
    if candidates.is_empty() || best_similarity < config.min_similarity {
        return MatchOutcome::NoMatch { best_similarity };
    }

    if candidates.len() > 1 {
        MatchOutcome::Ambiguous {
            candidates,
            similarity: best_similarity,
        }
    } else {
        MatchOutcome::Match {
            todo: candidates.remove(0),
            similarity: best_similarity,
        }
    }
}

/// Similarity between a fragment and a candidate title, in [0, 1].
pub fn similarity(fragment: &str, title: &str) -> f32 {
    let a = fragment.to_lowercase();
    let b = title.to_lowercase();

    if a == b {
        return 1.0;
    }
    if a.contains(&b) || b.contains(&a) {
        return SUBSTRING_SIMILARITY;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let max_len = a_chars.len().max(b_chars.len());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein(&a_chars, &b_chars);
    1.0 - distance as f32 / max_len as f32
}

/// Char-based Levenshtein distance, two-row dynamic programming.
fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(prev[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut prev, &mut current);
    }

    prev[b.len()]
}
