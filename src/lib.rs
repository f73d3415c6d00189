//! Tasktrack - a personal task tracker for the command line.
//!
//! This library provides the core functionality for the `tt` CLI tool:
//! a task store with interchangeable file and database backends, the
//! command layer, and the interactive shell.

pub mod action_log;
pub mod cli;
pub mod commands;
pub mod models;
pub mod shell;
pub mod storage;

/// Library-level error type for tasktrack operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Task with ID {0} not found")]
    NotFound(u64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for tasktrack operations.
pub type Result<T> = std::result::Result<T, Error>;
