//! SQLite-backed todo storage implementation
//!
//! Persists items in a single `todos` table. Every operation is one
//! parameterized statement; targeted mutations use the affected-row count
//! as the existence check instead of probing the row first.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::time::Duration;

use async_trait::async_trait;

use super::model::{TodoItem, UpdateTodo};
use super::repository::TodoRepository;
use crate::{Error, Result};

const COLUMNS: &str = "id, task, completed, priority";

/// SQLite-backed todo store
///
/// Wraps a connection pool; cloning shares the pool.
#[derive(Debug, Clone)]
pub struct SqliteTodoStore {
    pool: SqlitePool,
}

impl SqliteTodoStore {
    /// Open (or create) the database at `path` and ensure the schema exists.
    ///
    /// Pass `":memory:"` for an in-memory database (used by tests).
    pub async fn new(path: &str) -> Result<Self> {
        let in_memory = path == ":memory:";

        let options = if in_memory {
            SqliteConnectOptions::new().in_memory(true)
        } else {
            SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .busy_timeout(Duration::from_secs(5))
        };

        // An in-memory database exists per connection, so the pool must be
        // pinned to a single connection for every handle to see the same data.
        let max_connections = if in_memory { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;

        tracing::info!(path, "connected to SQLite database");
        Ok(store)
    }

    /// Create the `todos` table if it does not exist. Idempotent.
    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS todos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                task TEXT NOT NULL,
                completed INTEGER NOT NULL DEFAULT 0,
                priority TEXT NOT NULL DEFAULT 'medium'
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Convert a SQLite row to a TodoItem, normalizing `completed` from 0/1.
fn row_to_todo(row: &SqliteRow) -> TodoItem {
    TodoItem {
        id: row.get("id"),
        task: row.get("task"),
        completed: row.get::<i64, _>("completed") != 0,
        priority: row.get("priority"),
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoStore {
    async fn list(&self, completed: Option<bool>) -> Result<Vec<TodoItem>> {
        let rows = match completed {
            Some(flag) => {
                sqlx::query(&format!(
                    "SELECT {COLUMNS} FROM todos WHERE completed = ?"
                ))
                .bind(i64::from(flag))
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(&format!("SELECT {COLUMNS} FROM todos"))
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(rows.iter().map(row_to_todo).collect())
    }

    async fn create(&self, task: &str, priority: &str) -> Result<TodoItem> {
        let row = sqlx::query(&format!(
            "INSERT INTO todos (task, completed, priority) VALUES (?, 0, ?) RETURNING {COLUMNS}"
        ))
        .bind(task)
        .bind(priority)
        .fetch_one(&self.pool)
        .await?;

        Ok(row_to_todo(&row))
    }

    async fn complete_all(&self) -> Result<u64> {
        let result = sqlx::query("UPDATE todos SET completed = 1")
            .execute(&self.pool)
            .await?;

        let affected = result.rows_affected();
        tracing::info!(affected, "marked all to-do items as completed");
        Ok(affected)
    }

    async fn update(&self, id: i64, changes: UpdateTodo) -> Result<TodoItem> {
        // COALESCE keeps the stored value for every field bound as NULL, so
        // omitted fields are never read back before the write.
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET task = COALESCE(?, task),
                completed = COALESCE(?, completed),
                priority = COALESCE(?, priority)
            WHERE id = ?
            "#,
        )
        .bind(changes.task)
        .bind(changes.completed.map(i64::from))
        .bind(changes.priority)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::TodoNotFound(id));
        }

        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM todos WHERE id = ?"))
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row_to_todo(&row))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::TodoNotFound(id));
        }

        Ok(())
    }
}
