//! Tests for the command executor and its failure taxonomy

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use todos::{InMemoryTodoStore, MutationError, Todo, TodoStore};
    use uuid::Uuid;

    use crate::{
        command::{Language, VoiceAction, VoiceCommand},
        executor::{execute, CommandFailure},
        matcher::MatchOutcome,
    };

    fn command(action: VoiceAction, fragment: Option<&str>) -> VoiceCommand {
        VoiceCommand {
            action,
            title_fragment: fragment.map(str::to_string),
            confidence: if action == VoiceAction::Unknown { 0.0 } else { 0.9 },
            raw_text: "test".to_string(),
        }
    }

    /// Store whose mutations always fail, for MutationFailed paths.
    struct FailingStore;

    #[async_trait]
    impl TodoStore for FailingStore {
        async fn create(&self, _title: &str) -> Result<Todo, MutationError> {
            Err(MutationError::Backend("connection refused".to_string()))
        }

        async fn set_completed(&self, id: Uuid, _completed: bool) -> Result<Todo, MutationError> {
            Err(MutationError::NotFound { id })
        }

        async fn delete(&self, _id: Uuid) -> Result<(), MutationError> {
            Err(MutationError::Backend("connection refused".to_string()))
        }

        async fn list(&self) -> Result<Vec<Todo>, MutationError> {
            Err(MutationError::Backend("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_create_success_message() {
        let store = InMemoryTodoStore::new();
        let cmd = command(VoiceAction::Create, Some("Buy milk"));

        let outcome = execute(&cmd, None, &store, Language::En).await;
        assert!(outcome.success);
        assert_eq!(outcome.message, "Created todo: \"Buy milk\"");
        assert!(outcome.failure.is_none());

        let todos = store.list().await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "Buy milk");
    }

    #[tokio::test]
    async fn test_create_without_title_fails() {
        let store = InMemoryTodoStore::new();
        let cmd = command(VoiceAction::Create, None);

        let outcome = execute(&cmd, None, &store, Language::En).await;
        assert!(!outcome.success);
        assert!(matches!(outcome.failure, Some(CommandFailure::MissingTitle)));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_complete_with_match() {
        let store = InMemoryTodoStore::new();
        let todo = store.create("Buy milk").await.unwrap();

        let cmd = command(VoiceAction::Complete, Some("Buy milk"));
        let outcome = execute(
            &cmd,
            Some(MatchOutcome::Match {
                todo: todo.clone(),
                similarity: 1.0,
            }),
            &store,
            Language::En,
        )
        .await;

        assert!(outcome.success);
        assert_eq!(outcome.message, "Completed todo: \"Buy milk\"");
        assert!(store.list().await.unwrap()[0].completed);
    }

    #[tokio::test]
    async fn test_uncomplete_with_match() {
        let store = InMemoryTodoStore::new();
        let todo = store.create("Buy milk").await.unwrap();
        store.set_completed(todo.id, true).await.unwrap();

        let cmd = command(VoiceAction::Uncomplete, Some("Buy milk"));
        let outcome = execute(
            &cmd,
            Some(MatchOutcome::Match {
                todo: todo.clone(),
                similarity: 1.0,
            }),
            &store,
            Language::En,
        )
        .await;

        assert!(outcome.success);
        assert_eq!(outcome.message, "Reopened todo: \"Buy milk\"");
        assert!(!store.list().await.unwrap()[0].completed);
    }

    #[tokio::test]
    async fn test_delete_with_match() {
        let store = InMemoryTodoStore::new();
        let todo = store.create("Buy milk").await.unwrap();

        let cmd = command(VoiceAction::Delete, Some("Buy milk"));
        let outcome = execute(
            &cmd,
            Some(MatchOutcome::Match {
                todo,
                similarity: 1.0,
            }),
            &store,
            Language::En,
        )
        .await;

        assert!(outcome.success);
        assert_eq!(outcome.message, "Deleted todo: \"Buy milk\"");
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_no_match_outcome_fails_without_mutating() {
        let store = InMemoryTodoStore::new();
        store.create("Buy milk").await.unwrap();

        let cmd = command(VoiceAction::Delete, Some("Nonexistent"));
        let outcome = execute(
            &cmd,
            Some(MatchOutcome::NoMatch {
                best_similarity: 0.3,
            }),
            &store,
            Language::En,
        )
        .await;

        assert!(!outcome.success);
        assert_eq!(outcome.message, "Todo not found: Nonexistent");
        match outcome.failure {
            Some(CommandFailure::NoMatchFound {
                fragment,
                best_similarity,
            }) => {
                assert_eq!(fragment, "Nonexistent");
                assert_eq!(best_similarity, 0.3);
            }
            other => panic!("expected NoMatchFound, got {other:?}"),
        }
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_ambiguous_outcome_surfaces_candidates() {
        let store = InMemoryTodoStore::new();
        let a = store.create("Buy Milk").await.unwrap();
        let b = store.create("buy milk").await.unwrap();

        let cmd = command(VoiceAction::Complete, Some("buy milk"));
        let outcome = execute(
            &cmd,
            Some(MatchOutcome::Ambiguous {
                candidates: vec![a, b],
                similarity: 1.0,
            }),
            &store,
            Language::En,
        )
        .await;

        assert!(!outcome.success);
        assert!(outcome.message.contains("Multiple todos match"));
        match outcome.failure {
            Some(CommandFailure::AmbiguousMatch { candidates }) => {
                assert_eq!(candidates.len(), 2);
            }
            other => panic!("expected AmbiguousMatch, got {other:?}"),
        }
        // Neither todo was touched
        assert!(store.list().await.unwrap().iter().all(|t| !t.completed));
    }

    #[tokio::test]
    async fn test_list_and_filters() {
        let store = InMemoryTodoStore::new();
        let milk = store.create("Buy milk").await.unwrap();
        store.create("Walk the dog").await.unwrap();
        store.set_completed(milk.id, true).await.unwrap();

        let outcome = execute(&command(VoiceAction::List, None), None, &store, Language::En).await;
        assert!(outcome.success);
        assert!(outcome.message.contains("You have 2 todos:"));
        assert!(outcome.message.contains("[x] Buy milk"));
        assert!(outcome.message.contains("[ ] Walk the dog"));

        let outcome = execute(
            &command(VoiceAction::FilterCompleted, None),
            None,
            &store,
            Language::En,
        )
        .await;
        assert!(outcome.message.contains("Buy milk"));
        assert!(!outcome.message.contains("Walk the dog"));

        let outcome = execute(
            &command(VoiceAction::FilterPending, None),
            None,
            &store,
            Language::En,
        )
        .await;
        assert!(outcome.message.contains("Walk the dog"));
        assert!(!outcome.message.contains("Buy milk"));
    }

    #[tokio::test]
    async fn test_search_filters_by_containment() {
        let store = InMemoryTodoStore::new();
        store.create("Buy milk").await.unwrap();
        store.create("Buy bread").await.unwrap();
        store.create("Walk the dog").await.unwrap();

        let cmd = command(VoiceAction::Search, Some("buy"));
        let outcome = execute(&cmd, None, &store, Language::En).await;
        assert!(outcome.success);
        assert!(outcome.message.contains("Buy milk"));
        assert!(outcome.message.contains("Buy bread"));
        assert!(!outcome.message.contains("Walk the dog"));

        let cmd = command(VoiceAction::Search, Some("xyz"));
        let outcome = execute(&cmd, None, &store, Language::En).await;
        assert!(outcome.success);
        assert_eq!(outcome.message, "No todos matching: xyz");
    }

    #[tokio::test]
    async fn test_unknown_action_is_unrecognized() {
        let store = InMemoryTodoStore::new();
        let cmd = command(VoiceAction::Unknown, None);

        let outcome = execute(&cmd, None, &store, Language::En).await;
        assert!(!outcome.success);
        assert_eq!(
            outcome.message,
            "I didn't understand that command. Please try again."
        );
        assert!(matches!(
            outcome.failure,
            Some(CommandFailure::UnrecognizedCommand)
        ));
    }

    #[tokio::test]
    async fn test_mutation_failure_preserves_cause() {
        let store = FailingStore;
        let cmd = command(VoiceAction::Create, Some("Buy milk"));

        let outcome = execute(&cmd, None, &store, Language::En).await;
        assert!(!outcome.success);
        match outcome.failure {
            Some(CommandFailure::MutationFailed { detail }) => {
                assert!(detail.contains("connection refused"));
            }
            other => panic!("expected MutationFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_urdu_messages() {
        let store = InMemoryTodoStore::new();
        let cmd = command(VoiceAction::Create, Some("دودھ خریدیں"));

        let outcome = execute(&cmd, None, &store, Language::Ur).await;
        assert!(outcome.success);
        assert_eq!(outcome.message, "نیا کام بنایا گیا: \"دودھ خریدیں\"");

        let cmd = command(VoiceAction::Unknown, None);
        let outcome = execute(&cmd, None, &store, Language::Ur).await;
        assert!(!outcome.success);
        assert!(matches!(
            outcome.failure,
            Some(CommandFailure::UnrecognizedCommand)
        ));
    }
}
