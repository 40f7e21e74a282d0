//! # Voicecmd - Voice Command Intent Resolution
//!
//! Turns finalized speech-to-text transcripts into classified todo commands
//! for a bilingual (English/Urdu) todo assistant: normalize the transcript,
//! classify it against ordered per-language pattern tables, resolve spoken
//! title fragments against the user's todos by fuzzy matching, and execute
//! the resolved command against a pluggable `TodoStore`.
//!
//! Each utterance runs one classify -> match -> execute pipeline to
//! completion; the classifier and matcher are pure computations, and the
//! only suspension points are the store calls.

pub mod command;
pub mod config;
pub mod executor;
pub mod intent;
pub mod matcher;
pub mod messages;
pub mod normalize;
pub mod pipeline;

#[cfg(test)]
mod executor_tests;

pub use command::{Language, TranscriptEvent, VoiceAction, VoiceCommand};
pub use config::{EngineConfig, MatcherConfig};
pub use executor::{CommandFailure, CommandOutcome};
pub use matcher::MatchOutcome;
pub use pipeline::VoicePipeline;
