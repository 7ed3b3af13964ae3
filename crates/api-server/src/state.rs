//! Application state

use std::sync::Arc;

use todo_core::todo::SqliteTodoStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    todo_store: SqliteTodoStore,
}

impl AppState {
    /// Create a new AppState backed by the database at `db_path`
    pub async fn new(db_path: &str) -> todo_core::Result<Self> {
        let todo_store = SqliteTodoStore::new(db_path).await?;

        Ok(Self {
            inner: Arc::new(AppStateInner { todo_store }),
        })
    }

    /// Get reference to the todo store
    pub fn todo_store(&self) -> &SqliteTodoStore {
        &self.inner.todo_store
    }
}
