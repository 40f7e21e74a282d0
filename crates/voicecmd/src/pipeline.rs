//! The per-utterance pipeline: normalize -> classify -> match -> execute.

use std::sync::Arc;
use std::time::Instant;

use todos::{MutationError, TodoStore};
use tracing::{debug, info, warn};

use crate::{
    command::{Language, TranscriptEvent, VoiceCommand},
    config::EngineConfig,
    executor::{self, CommandOutcome},
    intent,
    matcher::{self, MatchOutcome},
    normalize,
};

/// Wires the pipeline stages over a `TodoStore`.
///
/// Processing is synchronous per utterance: one transcript produces one
/// classify -> match -> execute run to completion. The classifier and
/// matcher are pure; the only awaits are the store calls. The todo snapshot
/// read for matching is read-only input, so there is no shared mutable
/// state here.
pub struct VoicePipeline {
    store: Arc<dyn TodoStore>,
    config: EngineConfig,
}

impl VoicePipeline {
    pub fn new(store: Arc<dyn TodoStore>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    pub fn language(&self) -> Language {
        self.config.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.config.language = language;
    }

    /// Handle a speech-to-text event. Interim (non-final) events are
    /// dropped without emitting a command, so a cancelled utterance never
    /// produces a partial result.
    pub async fn handle_event(&self, event: &TranscriptEvent) -> Option<CommandOutcome> {
        if !event.is_final {
            debug!("Ignoring interim transcript event");
            return None;
        }
        Some(
            self.run(&event.transcript, event.language)
                .await,
        )
    }

    /// Run one finalized transcript through the pipeline using the
    /// configured language.
    pub async fn handle_transcript(&self, transcript: &str) -> CommandOutcome {
        self.run(transcript, self.config.language).await
    }

    /// Normalize and classify a transcript without executing it. The
    /// returned command keeps the untouched utterance in `raw_text`.
    pub fn classify(&self, transcript: &str) -> VoiceCommand {
        Self::classify_transcript(transcript, self.config.language)
    }

    fn classify_transcript(transcript: &str, language: Language) -> VoiceCommand {
        let normalized = normalize::normalize(transcript);
        let mut command = intent::classify(&normalized, language);
        command.raw_text = transcript.to_string();
        command
    }

    async fn run(&self, transcript: &str, language: Language) -> CommandOutcome {
        let started = Instant::now();

        let command = Self::classify_transcript(transcript, language);

        let match_outcome = match self.resolve_target(&command).await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, "Todo snapshot unavailable for matching");
                return executor::mutation_failure(err, language);
            }
        };
        let outcome = executor::execute(&command, match_outcome, self.store.as_ref(), language).await;

        info!(
            action = ?command.action,
            success = outcome.success,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Voice command pipeline complete"
        );
        outcome
    }

    /// Fetch a todo snapshot and fuzzy-match the fragment for target
    /// actions; other actions skip matching entirely.
    async fn resolve_target(
        &self,
        command: &VoiceCommand,
    ) -> Result<Option<MatchOutcome>, MutationError> {
        if !command.action.needs_match() {
            return Ok(None);
        }
        let Some(fragment) = command.title_fragment.as_deref() else {
            return Ok(None);
        };

        let todos = self.store.list().await?;
        Ok(Some(matcher::find_best_match(
            fragment,
            &todos,
            &self.config.matcher,
        )))
    }
}
