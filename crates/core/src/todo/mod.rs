//! Todo module
//!
//! This module contains todo-item types and storage logic.

mod model;
mod repository;
mod sqlite_store;

pub use model::*;
pub use repository::TodoRepository;
pub use sqlite_store::SqliteTodoStore;
