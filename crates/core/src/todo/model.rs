//! Todo item model definitions

use serde::{Deserialize, Serialize};

/// Priority assigned to new items when the caller does not supply one.
pub const DEFAULT_PRIORITY: &str = "medium";

/// A single to-do item
///
/// `completed` is stored in SQLite as an integer 0/1 and normalized to a
/// boolean at the store boundary, so it is always a JSON boolean here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: i64,
    pub task: String,
    pub completed: bool,
    /// Free-form priority text; no enumeration is enforced.
    pub priority: String,
}

/// Partial update of a todo item.
///
/// A `None` field keeps the stored value; the store expresses this with a
/// per-column `COALESCE` so omitted fields are never read back first.
#[derive(Debug, Clone, Default)]
pub struct UpdateTodo {
    pub task: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<String>,
}
