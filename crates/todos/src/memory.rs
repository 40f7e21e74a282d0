//! Reference in-memory store used by tests and the CLI host.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::{
    model::Todo,
    store::{MutationError, TodoStore},
};

/// In-memory `TodoStore` backed by a `RwLock`-guarded vector.
///
/// `list` preserves insertion order, which hosts rely on for stable display
/// and disambiguation ordering.
#[derive(Debug, Default)]
pub struct InMemoryTodoStore {
    todos: RwLock<Vec<Todo>>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn create(&self, title: &str) -> Result<Todo, MutationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(MutationError::EmptyTitle);
        }

        let todo = Todo::new(title);
        debug!(id = %todo.id, title = %todo.title, "Created todo");

        self.todos.write().await.push(todo.clone());
        Ok(todo)
    }

    async fn set_completed(&self, id: Uuid, completed: bool) -> Result<Todo, MutationError> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(MutationError::NotFound { id })?;

        todo.completed = completed;
        todo.updated_at = Utc::now();
        debug!(id = %id, completed, "Updated todo completion");
        Ok(todo.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), MutationError> {
        let mut todos = self.todos.write().await;
        let before = todos.len();
        todos.retain(|t| t.id != id);

        if todos.len() == before {
            return Err(MutationError::NotFound { id });
        }
        debug!(id = %id, "Deleted todo");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Todo>, MutationError> {
        Ok(self.todos.read().await.clone())
    }
}
