//! JSON file storage backend.
//!
//! The whole collection lives in a single `tasks.json` file as a JSON
//! array of task objects. Every mutation rewrites the file in full; this
//! is an explicit design constraint (no partial writes), acceptable at
//! the scale this tool targets. The file is unsafe against concurrent
//! external writers.

use crate::models::Task;
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed task store.
pub struct JsonStore {
    /// Path to the tasks.json file
    path: PathBuf,
    /// In-memory collection, kept in ascending id order
    tasks: Vec<Task>,
    /// Next id to allocate, seeded from max(existing ids) + 1 on load
    next_id: u64,
}

impl JsonStore {
    /// Open or create a store backed by the given file.
    ///
    /// A missing file yields an empty store. An unreadable or malformed
    /// file logs a warning and resets the store to empty; the bad data is
    /// lost on the next mutation. This mirrors the documented
    /// malformed-persisted-data policy.
    pub fn open(path: PathBuf) -> Result<Self> {
        let tasks = match Self::load(&path) {
            Ok(tasks) => tasks,
            Err(e) => {
                eprintln!(
                    "Warning: could not load task data from {} ({}); starting with an empty task list",
                    path.display(),
                    e
                );
                Vec::new()
            }
        };

        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;

        Ok(Self {
            path,
            tasks,
            next_id,
        })
    }

    fn load(path: &Path) -> Result<Vec<Task>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(path)?;
        let mut tasks: Vec<Task> = serde_json::from_str(&data)?;
        tasks.sort_by_key(|t| t.id);
        Ok(tasks)
    }

    /// Rewrite the whole collection to disk.
    fn save(&self) -> Result<()> {
        let data = serde_json::to_string(&self.tasks)?;
        fs::write(&self.path, data)?;
        Ok(())
    }

    fn position(&self, id: u64) -> Result<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(Error::NotFound(id))
    }
}

impl super::TaskStore for JsonStore {
    fn add_task(&mut self, title: &str, description: &str) -> Result<Task> {
        let task = Task::new(self.next_id, title.to_string(), description.to_string());
        self.next_id += 1;
        self.tasks.push(task.clone());
        self.save()?;
        Ok(task)
    }

    fn list_tasks(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    fn mark_complete(&mut self, id: u64) -> Result<Task> {
        let pos = self.position(id)?;
        self.tasks[pos].status = crate::models::TaskStatus::Completed;
        self.save()?;
        Ok(self.tasks[pos].clone())
    }

    fn delete_task(&mut self, id: u64) -> Result<Task> {
        let pos = self.position(id)?;
        let removed = self.tasks.remove(pos);
        self.save()?;
        Ok(removed)
    }

    fn renumber(&mut self) -> Result<Vec<Task>> {
        for (rank, task) in self.tasks.iter_mut().enumerate() {
            task.id = rank as u64 + 1;
        }
        self.next_id = self.tasks.len() as u64 + 1;
        self.save()?;
        Ok(self.tasks.clone())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn backend_type(&self) -> &'static str {
        "json"
    }
}
