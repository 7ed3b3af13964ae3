//! Todo API endpoints
//!
//! RESTful API for todo CRUD operations.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use todo_core::todo::{TodoItem, TodoRepository, UpdateTodo, DEFAULT_PRIORITY};
use todo_core::Error;

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListTodosQuery {
    #[serde(default)]
    pub completed: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub task: String,
    #[serde(default)]
    pub priority: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub priority: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Map a repository error to an HTTP status and JSON error body
fn error_response(err: Error) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        Error::TodoNotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "To-Do item not found".to_string(),
            }),
        ),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: other.to_string(),
            }),
        ),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /todos - List todo items, optionally filtered by completion state
async fn list_todos(
    State(state): State<AppState>,
    Query(query): Query<ListTodosQuery>,
) -> Result<Json<Vec<TodoItem>>, (StatusCode, Json<ErrorResponse>)> {
    // The string "true" selects completed items; any other value selects
    // pending ones. No parameter returns everything.
    let filter = query.completed.map(|v| v == "true");

    let todos = state
        .todo_store()
        .list(filter)
        .await
        .map_err(error_response)?;

    Ok(Json(todos))
}

/// POST /todos - Create a new todo item
async fn create_todo(
    State(state): State<AppState>,
    Json(req): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoItem>), (StatusCode, Json<ErrorResponse>)> {
    if req.task.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Task cannot be empty".to_string(),
            }),
        ));
    }

    let priority = req
        .priority
        .unwrap_or_else(|| DEFAULT_PRIORITY.to_string());

    let created = state
        .todo_store()
        .create(&req.task, &priority)
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /todos/complete-all - Mark every todo item as completed
async fn complete_all(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    state
        .todo_store()
        .complete_all()
        .await
        .map_err(error_response)?;

    Ok(Json(MessageResponse {
        message: "All to-do items marked as completed".to_string(),
    }))
}

/// PUT /todos/:id - Partially update a todo item
async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTodoRequest>,
) -> Result<Json<TodoItem>, (StatusCode, Json<ErrorResponse>)> {
    let changes = UpdateTodo {
        task: req.task,
        completed: req.completed,
        priority: req.priority,
    };

    let updated = state
        .todo_store()
        .update(id, changes)
        .await
        .map_err(error_response)?;

    Ok(Json(updated))
}

/// DELETE /todos/:id - Delete a todo item
async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    state
        .todo_store()
        .delete(id)
        .await
        .map_err(error_response)?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/complete-all", put(complete_all))
        .route("/todos/{id}", put(update_todo).delete(delete_todo))
}
