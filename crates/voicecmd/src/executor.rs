//! Command execution
//!
//! Dispatches a classified command to the `TodoStore` and renders the
//! user-facing outcome. Per-command lifecycle:
//! `Received -> Classified -> (needs match? -> Matched | Ambiguous |
//! NotFound) -> Executed | Failed`. Every path terminates in a displayable
//! message; nothing here is fatal to the host and no retries happen
//! internally.

use serde::{Deserialize, Serialize};
use todos::{MutationError, Todo, TodoStore};
use tracing::{debug, info, warn};
use ts_rs::TS;

use crate::{
    command::{Language, VoiceAction, VoiceCommand},
    matcher::MatchOutcome,
    messages,
};

/// Failure taxonomy surfaced alongside the user-facing message.
#[derive(Debug, Clone, thiserror::Error, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub enum CommandFailure {
    #[error("Command not recognized")]
    UnrecognizedCommand,

    #[error("Command requires a todo title")]
    MissingTitle,

    #[error("No todo matched \"{fragment}\" (best similarity {best_similarity:.2})")]
    NoMatchFound { fragment: String, best_similarity: f32 },

    #[error("Multiple todos tied for best match")]
    AmbiguousMatch { candidates: Vec<Todo> },

    #[error("Mutation failed: {detail}")]
    MutationFailed { detail: String },
}

/// Result surfaced to the UI sink for display.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct CommandOutcome {
    pub success: bool,
    pub message: String,
    pub failure: Option<CommandFailure>,
}

impl CommandOutcome {
    pub fn executed(message: String) -> Self {
        Self {
            success: true,
            message,
            failure: None,
        }
    }

    pub fn failed(message: String, failure: CommandFailure) -> Self {
        Self {
            success: false,
            message,
            failure: Some(failure),
        }
    }
}

/// Execute a classified command against the store.
///
/// `match_outcome` carries the fuzzy-match resolution for target actions
/// (complete/uncomplete/delete); other actions ignore it.
pub async fn execute(
    command: &VoiceCommand,
    match_outcome: Option<MatchOutcome>,
    store: &dyn TodoStore,
    language: Language,
) -> CommandOutcome {
    debug!(action = ?command.action, raw = %command.raw_text, "Executing command");

    match command.action {
        VoiceAction::Create => create(command, store, language).await,
        VoiceAction::Complete => {
            resolve_and_mutate(command, match_outcome, store, language, Mutation::Complete).await
        }
        VoiceAction::Uncomplete => {
            resolve_and_mutate(command, match_outcome, store, language, Mutation::Uncomplete).await
        }
        VoiceAction::Delete => {
            resolve_and_mutate(command, match_outcome, store, language, Mutation::Delete).await
        }
        VoiceAction::List => list(store, language, None).await,
        VoiceAction::FilterCompleted => list(store, language, Some(true)).await,
        VoiceAction::FilterPending => list(store, language, Some(false)).await,
        VoiceAction::Search => search(command, store, language).await,
        VoiceAction::Unknown => {
            warn!(raw = %command.raw_text, "Unrecognized command");
            CommandOutcome::failed(
                messages::unrecognized(language),
                CommandFailure::UnrecognizedCommand,
            )
        }
    }
}

async fn create(
    command: &VoiceCommand,
    store: &dyn TodoStore,
    language: Language,
) -> CommandOutcome {
    let title = match command.title_fragment.as_deref() {
        Some(title) if !title.trim().is_empty() => title.trim(),
        _ => {
            return CommandOutcome::failed(
                messages::missing_title(language),
                CommandFailure::MissingTitle,
            )
        }
    };

    match store.create(title).await {
        Ok(todo) => {
            info!(id = %todo.id, title = %todo.title, "Created todo by voice");
            CommandOutcome::executed(messages::created(language, &todo.title))
        }
        Err(err) => mutation_failure(err, language),
    }
}

enum Mutation {
    Complete,
    Uncomplete,
    Delete,
}

async fn resolve_and_mutate(
    command: &VoiceCommand,
    match_outcome: Option<MatchOutcome>,
    store: &dyn TodoStore,
    language: Language,
    mutation: Mutation,
) -> CommandOutcome {
    // The classifier never emits a target action without a fragment, but a
    // hand-built command can
    let fragment = match command.title_fragment.as_deref() {
        Some(fragment) if !fragment.is_empty() => fragment,
        _ => {
            return CommandOutcome::failed(
                messages::missing_title(language),
                CommandFailure::MissingTitle,
            )
        }
    };

    let outcome = match_outcome.unwrap_or(MatchOutcome::NoMatch {
        best_similarity: 0.0,
    });

    let (todo, similarity) = match outcome {
        MatchOutcome::Match { todo, similarity } => (todo, similarity),
        MatchOutcome::Ambiguous {
            candidates,
            similarity,
        } => {
            warn!(
                fragment,
                similarity,
                tied = candidates.len(),
                "Ambiguous voice target"
            );
            return CommandOutcome::failed(
                messages::ambiguous(language, &candidates),
                CommandFailure::AmbiguousMatch { candidates },
            );
        }
        MatchOutcome::NoMatch { best_similarity } => {
            debug!(fragment, best_similarity, "No confident match for target");
            return CommandOutcome::failed(
                messages::not_found(language, fragment),
                CommandFailure::NoMatchFound {
                    fragment: fragment.to_string(),
                    best_similarity,
                },
            );
        }
    };

    debug!(id = %todo.id, similarity, "Matched voice target");

    let result = match mutation {
        Mutation::Complete => store
            .set_completed(todo.id, true)
            .await
            .map(|t| messages::completed(language, &t.title)),
        Mutation::Uncomplete => store
            .set_completed(todo.id, false)
            .await
            .map(|t| messages::reopened(language, &t.title)),
        Mutation::Delete => store
            .delete(todo.id)
            .await
            .map(|_| messages::deleted(language, &todo.title)),
    };

    match result {
        Ok(message) => {
            info!(id = %todo.id, "Executed voice mutation");
            CommandOutcome::executed(message)
        }
        Err(err) => mutation_failure(err, language),
    }
}

async fn list(
    store: &dyn TodoStore,
    language: Language,
    completed_filter: Option<bool>,
) -> CommandOutcome {
    match store.list().await {
        Ok(todos) => match completed_filter {
            None => CommandOutcome::executed(messages::todo_list(language, &todos)),
            Some(completed) => {
                let filtered: Vec<Todo> = todos
                    .into_iter()
                    .filter(|t| t.completed == completed)
                    .collect();
                CommandOutcome::executed(messages::filtered_list(language, &filtered, completed))
            }
        },
        Err(err) => mutation_failure(err, language),
    }
}

async fn search(
    command: &VoiceCommand,
    store: &dyn TodoStore,
    language: Language,
) -> CommandOutcome {
    let fragment = match command.title_fragment.as_deref() {
        Some(fragment) if !fragment.is_empty() => fragment,
        _ => {
            return CommandOutcome::failed(
                messages::missing_title(language),
                CommandFailure::MissingTitle,
            )
        }
    };

    match store.list().await {
        Ok(todos) => {
            let needle = fragment.to_lowercase();
            let hits: Vec<Todo> = todos
                .into_iter()
                .filter(|t| t.title.to_lowercase().contains(&needle))
                .collect();
            CommandOutcome::executed(messages::search_results(language, fragment, &hits))
        }
        Err(err) => mutation_failure(err, language),
    }
}

pub(crate) fn mutation_failure(err: MutationError, language: Language) -> CommandOutcome {
    warn!(error = %err, "Store mutation failed");
    let detail = err.to_string();
    let message = messages::mutation_failed(language, &detail);
    CommandOutcome::failed(message, CommandFailure::MutationFailed { detail })
}
