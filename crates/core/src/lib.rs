//! Core library for the todo API
//!
//! This crate contains the domain model and storage logic:
//! - Todo item model
//! - Repository trait and SQLite-backed store

pub mod error;
pub mod todo;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
