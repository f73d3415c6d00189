//! Action logging for tasktrack commands.
//!
//! Every CLI invocation is appended to `<data-dir>/action.log` in JSONL
//! format. Logging never fails a command; write errors degrade to a
//! stderr warning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Represents a single action log entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionLog {
    /// ISO 8601 timestamp when the action occurred
    pub timestamp: DateTime<Utc>,

    /// Command name (e.g., "add", "list", "migrate", "shell")
    pub command: String,

    /// Command arguments as JSON
    pub args: serde_json::Value,

    /// Whether the command succeeded
    pub success: bool,

    /// Error message if the command failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Command execution duration in milliseconds
    pub duration_ms: u64,

    /// User who executed the command
    pub user: String,
}

/// Append an entry to the action log in the given data directory.
pub fn log_action(
    data_dir: &Path,
    command: &str,
    args: serde_json::Value,
    success: bool,
    error: Option<String>,
    duration_ms: u64,
) {
    let entry = ActionLog {
        timestamp: Utc::now(),
        command: command.to_string(),
        args,
        success,
        error,
        duration_ms,
        user: current_user(),
    };

    if let Err(e) = write_entry(&data_dir.join("action.log"), &entry) {
        eprintln!("Warning: Failed to write action log: {}", e);
    }
}

fn write_entry(path: &Path, entry: &ActionLog) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(entry)?;
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", json)?;
    Ok(())
}

/// Get the current user's username.
fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}
