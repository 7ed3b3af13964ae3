//! Todo repository trait
//!
//! Defines the interface for todo storage operations.

use async_trait::async_trait;

use super::model::{TodoItem, UpdateTodo};
use crate::Result;

/// Repository interface for todo CRUD operations
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// List items, optionally filtered by completion state
    async fn list(&self, completed: Option<bool>) -> Result<Vec<TodoItem>>;

    /// Insert a new item with `completed = false`
    async fn create(&self, task: &str, priority: &str) -> Result<TodoItem>;

    /// Mark every item completed; returns the affected-row count
    async fn complete_all(&self) -> Result<u64>;

    /// Partially update an item; omitted fields keep their stored values
    async fn update(&self, id: i64, changes: UpdateTodo) -> Result<TodoItem>;

    /// Delete an item by ID
    async fn delete(&self, id: i64) -> Result<()>;
}
