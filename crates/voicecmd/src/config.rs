//! Engine configuration

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::command::Language;

/// Top-level configuration for the intent-resolution engine
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    pub language: Language,
    pub matcher: MatcherConfig,
}

impl EngineConfig {
    pub fn english() -> Self {
        Self {
            language: Language::En,
            matcher: MatcherConfig::default(),
        }
    }

    pub fn urdu() -> Self {
        Self {
            language: Language::Ur,
            matcher: MatcherConfig::default(),
        }
    }
}

/// Fuzzy title matcher configuration
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct MatcherConfig {
    /// Minimum similarity for a confident match. A best score below this
    /// yields "no match" rather than a wrong guess. Tunable default, not a
    /// hard contract.
    pub min_similarity: f32,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            min_similarity: 0.8,
        }
    }
}

impl MatcherConfig {
    /// Looser threshold for hosts feeding noisy transcripts.
    pub fn lenient() -> Self {
        Self {
            min_similarity: 0.6,
        }
    }
}
