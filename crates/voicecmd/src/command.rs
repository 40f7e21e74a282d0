//! Command and transcript types shared across the pipeline stages.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Recognition language for an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub enum Language {
    En,
    Ur,
}

impl Language {
    pub fn tag(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ur => "ur",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown language tag: {0} (expected \"en\" or \"ur\")")]
pub struct LanguageParseError(pub String);

impl std::str::FromStr for Language {
    type Err = LanguageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ur" => Ok(Language::Ur),
            other => Err(LanguageParseError(other.to_string())),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// The classified user action extracted from an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub enum VoiceAction {
    Create,
    Complete,
    Uncomplete,
    Delete,
    List,
    FilterCompleted,
    FilterPending,
    Search,
    Unknown,
}

impl VoiceAction {
    /// Actions that resolve a spoken fragment against existing todos.
    pub fn needs_match(&self) -> bool {
        matches!(
            self,
            VoiceAction::Complete | VoiceAction::Uncomplete | VoiceAction::Delete
        )
    }
}

/// One classified utterance. Created per recognized transcript, consumed
/// once by the executor, never persisted.
///
/// Invariant: when `action` requires a target (complete/uncomplete/delete)
/// the `title_fragment` is present and non-empty; the classifier falls back
/// to `Unknown` instead of emitting an empty fragment.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct VoiceCommand {
    pub action: VoiceAction,
    pub title_fragment: Option<String>,
    /// 0.9 for any pattern match, 0.0 for `Unknown`.
    pub confidence: f32,
    pub raw_text: String,
}

impl VoiceCommand {
    pub fn unknown(raw_text: impl Into<String>) -> Self {
        Self {
            action: VoiceAction::Unknown,
            title_fragment: None,
            confidence: 0.0,
            raw_text: raw_text.into(),
        }
    }
}

/// Event shape delivered by the speech-to-text collaborator.
///
/// Only events with `is_final = true` enter the pipeline; interim partials
/// are dropped so a cancelled utterance never produces a command.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptEvent {
    pub transcript: String,
    pub language: Language,
    pub is_final: bool,
}
