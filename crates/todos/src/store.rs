//! The asynchronous mutation interface the voice engine dispatches into.

use async_trait::async_trait;
use uuid::Uuid;

use crate::model::Todo;

/// Errors surfaced by a todo store implementation
#[derive(Debug, thiserror::Error)]
pub enum MutationError {
    #[error("Todo not found: {id}")]
    NotFound { id: Uuid },

    #[error("Todo title must not be empty")]
    EmptyTitle,

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Mutation interface for the todo collection.
///
/// Implementations own the retry/timeout policy of their backend; callers
/// only ever see success or a `MutationError`.
#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn create(&self, title: &str) -> Result<Todo, MutationError>;

    async fn set_completed(&self, id: Uuid, completed: bool) -> Result<Todo, MutationError>;

    async fn delete(&self, id: Uuid) -> Result<(), MutationError>;

    /// Snapshot of the current todo list in insertion order.
    async fn list(&self) -> Result<Vec<Todo>, MutationError>;
}
