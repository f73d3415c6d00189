//! Command implementations for the tasktrack CLI.
//!
//! This module contains the business logic for each CLI command. Every
//! command takes an explicit store handle and returns a result struct
//! implementing [`Output`], which main prints as JSON (default) or
//! human-readable text (`-H`).

use crate::models::{timestamp, Task};
use crate::storage::{self, SqliteStore, TaskStore, TASKS_FILE};
use crate::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Command results that can be serialized to JSON or formatted for humans.
pub trait Output {
    /// Serialize to JSON string.
    fn to_json(&self) -> String;

    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

fn json_of<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!(r#"{{"error": "{}"}}"#, e))
}

/// Result of `tt add`.
#[derive(Debug, Serialize)]
pub struct AddResult {
    pub task: Task,
}

impl Output for AddResult {
    fn to_json(&self) -> String {
        json_of(self)
    }

    fn to_human(&self) -> String {
        format!("Task '{}' added successfully!", self.task.title)
    }
}

/// Result of `tt list`.
#[derive(Debug, Serialize)]
pub struct ListResult {
    pub tasks: Vec<Task>,
}

impl Output for ListResult {
    fn to_json(&self) -> String {
        json_of(self)
    }

    fn to_human(&self) -> String {
        render_table(&self.tasks)
    }
}

/// Result of `tt done`.
#[derive(Debug, Serialize)]
pub struct CompleteResult {
    pub task: Task,
}

impl Output for CompleteResult {
    fn to_json(&self) -> String {
        json_of(self)
    }

    fn to_human(&self) -> String {
        format!("Task '{}' marked as completed!", self.task.title)
    }
}

/// Result of `tt delete`.
#[derive(Debug, Serialize)]
pub struct DeleteResult {
    pub task: Task,
    /// Remaining tasks after renumbering, present only when ids were
    /// reassigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renumbered: Option<Vec<Task>>,
}

impl Output for DeleteResult {
    fn to_json(&self) -> String {
        json_of(self)
    }

    fn to_human(&self) -> String {
        match &self.renumbered {
            Some(tasks) => format!(
                "Task '{}' deleted successfully! Renumbered {} remaining task(s).",
                self.task.title,
                tasks.len()
            ),
            None => format!("Task '{}' deleted successfully!", self.task.title),
        }
    }
}

/// Result of `tt renumber`.
#[derive(Debug, Serialize)]
pub struct RenumberResult {
    pub tasks: Vec<Task>,
}

impl Output for RenumberResult {
    fn to_json(&self) -> String {
        json_of(self)
    }

    fn to_human(&self) -> String {
        format!("Renumbered {} task(s) to ids 1..{}.", self.tasks.len(), self.tasks.len())
    }
}

/// Result of `tt migrate`.
#[derive(Debug, Serialize)]
pub struct MigrateResult {
    pub migrated: usize,
}

impl Output for MigrateResult {
    fn to_json(&self) -> String {
        json_of(self)
    }

    fn to_human(&self) -> String {
        format!("Migration completed. Copied {} task(s).", self.migrated)
    }
}

/// Add a task. Any strings are accepted, including empty ones.
pub fn add(store: &mut dyn TaskStore, title: &str, description: &str) -> Result<AddResult> {
    let task = store.add_task(title, description)?;
    Ok(AddResult { task })
}

/// List all tasks in ascending id order.
pub fn list(store: &dyn TaskStore) -> Result<ListResult> {
    let tasks = store.list_tasks()?;
    Ok(ListResult { tasks })
}

/// Mark a task as completed.
pub fn complete(store: &mut dyn TaskStore, id: u64) -> Result<CompleteResult> {
    let task = store.mark_complete(id)?;
    Ok(CompleteResult { task })
}

/// Delete a task, optionally renumbering the remaining ids to 1..N.
pub fn delete(store: &mut dyn TaskStore, id: u64, renumber: bool) -> Result<DeleteResult> {
    let task = store.delete_task(id)?;
    let renumbered = if renumber {
        Some(store.renumber()?)
    } else {
        None
    };
    Ok(DeleteResult { task, renumbered })
}

/// Renumber all tasks to contiguous ids 1..N.
pub fn renumber(store: &mut dyn TaskStore) -> Result<RenumberResult> {
    let tasks = store.renumber()?;
    Ok(RenumberResult { tasks })
}

/// Copy every record from the JSON file into the SQLite table.
///
/// One-shot batch: reads the whole file collection, inserts each record
/// preserving title, description, status, and creation date (ids are
/// reassigned by the table's allocator). Runs to completion with no
/// resumability; a failure partway leaves a partially migrated table.
pub fn migrate(data_dir: &Path) -> Result<MigrateResult> {
    let file_path = data_dir.join(TASKS_FILE);
    let data = fs::read_to_string(&file_path)?;
    let tasks: Vec<Task> = serde_json::from_str(&data)?;

    let mut db = SqliteStore::open(data_dir.join(storage::TASKS_DB))?;

    let mut migrated = 0;
    for task in &tasks {
        db.insert_migrated(task)?;
        migrated += 1;
    }

    Ok(MigrateResult { migrated })
}

const TABLE_WIDTH: usize = 80;

/// Render the fixed-width task table, or the empty-state message.
///
/// Columns: ID (5), TITLE (20, truncated to 18), STATUS (10),
/// CREATED DATE (20), DESCRIPTION (30, truncated to 28).
pub fn render_table(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }

    let mut out = String::new();
    out.push('\n');
    out.push_str(&"=".repeat(TABLE_WIDTH));
    out.push('\n');
    out.push_str(&format!(
        "{:<5} {:<20} {:<10} {:<20} {:<30}\n",
        "ID", "TITLE", "STATUS", "CREATED DATE", "DESCRIPTION"
    ));
    out.push_str(&"-".repeat(TABLE_WIDTH));
    out.push('\n');

    for task in tasks {
        out.push_str(&format!(
            "{:<5} {:<20} {:<10} {:<20} {:<30}\n",
            task.id,
            truncate(&task.title, 18),
            task.status.as_str(),
            timestamp::format(&task.created_date),
            truncate(&task.description, 28),
        ));
    }

    out.push_str(&"=".repeat(TABLE_WIDTH));
    out.push('\n');
    out
}

/// Truncate a string to at most `max` characters (not bytes).
fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
