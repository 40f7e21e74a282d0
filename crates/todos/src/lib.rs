//! # Todos - Domain model and mutation interface
//!
//! The todo domain shared by the voice-command engine and its hosts: the
//! `Todo` record, the asynchronous `TodoStore` mutation trait, and a
//! reference in-memory implementation used by tests and the CLI.

pub mod memory;
pub mod model;
pub mod store;

pub use memory::InMemoryTodoStore;
pub use model::Todo;
pub use store::{MutationError, TodoStore};
