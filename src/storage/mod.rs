//! Storage layer for tasktrack data.
//!
//! This module handles persistence of the task collection.
//!
//! ## Storage Backends
//!
//! Tasktrack supports two interchangeable backends:
//!
//! - **JSON backend** (default): a single `tasks.json` file holding the
//!   whole collection; every mutation rewrites the file in full.
//! - **SQLite backend**: a `tasks` table in `tasks.db`; every mutation is
//!   a single statement confirmed with `RETURNING`.
//!
//! Both live under the tasktrack data directory (see [`data_dir`]).

pub mod json;
pub mod sqlite;

pub use json::JsonStore;
pub use sqlite::SqliteStore;

use crate::models::Task;
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Trait for task stores that own the task collection and its persistence.
///
/// Every mutating operation persists synchronously before returning. Stores
/// are handles passed explicitly through commands and the shell; there is no
/// process-global collection.
pub trait TaskStore {
    /// Create a task with the given title and description.
    ///
    /// Allocates a fresh id, stamps the creation time, sets status to
    /// `Pending`, and persists. No validation is performed on the strings.
    fn add_task(&mut self, title: &str, description: &str) -> Result<Task>;

    /// List all tasks in ascending id order.
    fn list_tasks(&self) -> Result<Vec<Task>>;

    /// Mark the task with the given id as completed.
    ///
    /// Returns the updated task, or `NotFound` if no task has that id.
    fn mark_complete(&mut self, id: u64) -> Result<Task>;

    /// Delete the task with the given id permanently (no tombstone).
    ///
    /// Returns the removed task, or `NotFound` if no task has that id.
    /// Remaining ids are left untouched; see [`TaskStore::renumber`].
    fn delete_task(&mut self, id: u64) -> Result<Task>;

    /// Reassign all remaining ids to their 1-based positional rank.
    ///
    /// Previously issued ids become invalid without notice, so this is
    /// never performed implicitly; callers opt in. The allocator continues
    /// at N+1 afterwards. Returns the renumbered tasks.
    fn renumber(&mut self) -> Result<Vec<Task>>;

    /// Get the storage location description (for display purposes).
    fn location(&self) -> String;

    /// Get the backend type name.
    fn backend_type(&self) -> &'static str;
}

/// Available storage backend types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    /// JSON file storage (default) - tasks.json
    Json,
    /// SQLite table storage - tasks.db
    Sqlite,
}

impl BackendType {
    /// Parse a backend type from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" | "file" | "default" => Some(Self::Json),
            "sqlite" | "db" | "database" => Some(Self::Sqlite),
            _ => None,
        }
    }

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Sqlite => "sqlite",
        }
    }
}

impl std::fmt::Display for BackendType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BackendType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| {
            Error::InvalidInput(format!("unknown backend '{}' (expected json or sqlite)", s))
        })
    }
}

/// File name of the JSON collection within the data directory.
pub const TASKS_FILE: &str = "tasks.json";

/// File name of the SQLite database within the data directory.
pub const TASKS_DB: &str = "tasks.db";

/// Resolve the tasktrack data directory.
///
/// Priority: explicit path > `TT_DATA_DIR` env var > `dirs::data_dir()/tasktrack`.
/// The directory is created if it does not exist.
pub fn data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match explicit {
        Some(path) => path,
        None => match std::env::var_os("TT_DATA_DIR") {
            Some(path) => PathBuf::from(path),
            None => dirs::data_dir()
                .ok_or_else(|| Error::Other("Could not determine data directory".to_string()))?
                .join("tasktrack"),
        },
    };

    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Open a task store of the given backend type in the data directory.
pub fn open_store(backend: BackendType, dir: &Path) -> Result<Box<dyn TaskStore>> {
    match backend {
        BackendType::Json => Ok(Box::new(JsonStore::open(dir.join(TASKS_FILE))?)),
        BackendType::Sqlite => Ok(Box::new(SqliteStore::open(dir.join(TASKS_DB))?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_type_parse() {
        assert_eq!(BackendType::parse("json"), Some(BackendType::Json));
        assert_eq!(BackendType::parse("file"), Some(BackendType::Json));
        assert_eq!(BackendType::parse("SQLite"), Some(BackendType::Sqlite));
        assert_eq!(BackendType::parse("db"), Some(BackendType::Sqlite));
        assert_eq!(BackendType::parse("postgres"), None);
    }

    #[test]
    fn test_backend_type_display() {
        assert_eq!(BackendType::Json.to_string(), "json");
        assert_eq!(BackendType::Sqlite.to_string(), "sqlite");
    }

    #[test]
    fn test_data_dir_explicit_wins() {
        let temp = tempfile::TempDir::new().unwrap();
        let target = temp.path().join("store");
        let dir = data_dir(Some(target.clone())).unwrap();
        assert_eq!(dir, target);
        assert!(dir.exists());
    }

    #[test]
    fn test_open_store_both_backends() {
        let temp = tempfile::TempDir::new().unwrap();
        let json = open_store(BackendType::Json, temp.path()).unwrap();
        assert_eq!(json.backend_type(), "json");
        let sqlite = open_store(BackendType::Sqlite, temp.path()).unwrap();
        assert_eq!(sqlite.backend_type(), "sqlite");
    }
}
