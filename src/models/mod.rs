//! Data models for tasktrack entities.
//!
//! This module defines the core data structures:
//! - `Task` - A user-created record of work
//! - `TaskStatus` - Lifecycle state (Pending -> Completed)

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task status in the workflow.
///
/// A task starts `Pending` and transitions once to `Completed`;
/// no further transitions are defined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    /// Get the string representation (matches the persisted form).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A task tracked by tasktrack.
///
/// Field names in the serialized form match the on-disk JSON format:
/// `id`, `title`, `description`, `status`, `createdDate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier within the store, assigned at creation
    pub id: u64,

    /// Short text label
    pub title: String,

    /// Free-text description
    pub description: String,

    /// Current status
    #[serde(default)]
    pub status: TaskStatus,

    /// Creation timestamp (UTC), truncated to second precision.
    /// Immutable after creation.
    #[serde(with = "timestamp")]
    pub created_date: NaiveDateTime,
}

impl Task {
    /// Create a new pending task stamped with the current UTC time.
    pub fn new(id: u64, title: String, description: String) -> Self {
        Self {
            id,
            title,
            description,
            status: TaskStatus::default(),
            created_date: now(),
        }
    }
}

/// Current UTC time truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    use chrono::Timelike;
    let now = chrono::Utc::now().naive_utc();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Serde helpers for the `"YYYY-MM-DD HH:MM:SS"` timestamp format used
/// in the JSON file and the database table.
pub mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }

    /// Format a timestamp as it appears on disk and in listings.
    pub fn format(dt: &NaiveDateTime) -> String {
        dt.format(FORMAT).to_string()
    }

    /// Parse a timestamp in the on-disk format.
    pub fn parse(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(s, FORMAT)
    }
}
