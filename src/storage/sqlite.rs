//! SQLite storage backend.
//!
//! Tasks live in a single `tasks` table; id allocation delegates to the
//! table's AUTOINCREMENT primary key. Every mutation is a single statement
//! confirmed with `RETURNING`, relying on the engine's statement-level
//! atomicity. No application-level transactions span operations.

use crate::models::{timestamp, Task, TaskStatus};
use crate::{Error, Result};
use rusqlite::{params, Connection, Row};
use std::path::PathBuf;

/// Table-backed task store.
pub struct SqliteStore {
    path: PathBuf,
    conn: Connection,
}

impl SqliteStore {
    /// Open or create a store backed by the given database file.
    pub fn open(path: PathBuf) -> Result<Self> {
        let conn = Connection::open(&path)?;
        Self::init_schema(&conn)?;
        Ok(Self { path, conn })
    }

    /// Initialize the schema.
    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'Pending',
                created_date TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%S', 'now'))
            );
            "#,
        )?;
        Ok(())
    }

    /// Insert a record preserving its status and creation date.
    ///
    /// Used by the migration utility; the id column is left to the table's
    /// allocator, matching the original file-to-table copy.
    pub fn insert_migrated(&mut self, task: &Task) -> Result<Task> {
        let inserted = self.conn.query_row(
            r#"
            INSERT INTO tasks (title, description, status, created_date)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, title, description, status, created_date
            "#,
            params![
                task.title,
                task.description,
                task.status.as_str(),
                timestamp::format(&task.created_date),
            ],
            row_to_task,
        )?;
        Ok(inserted)
    }
}

/// Map a `tasks` row to a `Task`.
fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    let status_str: String = row.get(3)?;
    let status = match status_str.as_str() {
        "Completed" => TaskStatus::Completed,
        _ => TaskStatus::Pending,
    };
    let created_str: String = row.get(4)?;
    let created_date = timestamp::parse(&created_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        status,
        created_date,
    })
}

/// Translate no-rows from a RETURNING statement into NotFound.
fn or_not_found(result: rusqlite::Result<Task>, id: u64) -> Result<Task> {
    match result {
        Ok(task) => Ok(task),
        Err(rusqlite::Error::QueryReturnedNoRows) => Err(Error::NotFound(id)),
        Err(e) => Err(e.into()),
    }
}

impl super::TaskStore for SqliteStore {
    fn add_task(&mut self, title: &str, description: &str) -> Result<Task> {
        let created = timestamp::format(&crate::models::now());
        let task = self.conn.query_row(
            r#"
            INSERT INTO tasks (title, description, status, created_date)
            VALUES (?1, ?2, 'Pending', ?3)
            RETURNING id, title, description, status, created_date
            "#,
            params![title, description, created],
            row_to_task,
        )?;
        Ok(task)
    }

    fn list_tasks(&self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, description, status, created_date FROM tasks ORDER BY id",
        )?;
        let tasks = stmt
            .query_map([], row_to_task)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tasks)
    }

    fn mark_complete(&mut self, id: u64) -> Result<Task> {
        or_not_found(
            self.conn.query_row(
                r#"
                UPDATE tasks SET status = 'Completed' WHERE id = ?1
                RETURNING id, title, description, status, created_date
                "#,
                params![id],
                row_to_task,
            ),
            id,
        )
    }

    fn delete_task(&mut self, id: u64) -> Result<Task> {
        or_not_found(
            self.conn.query_row(
                r#"
                DELETE FROM tasks WHERE id = ?1
                RETURNING id, title, description, status, created_date
                "#,
                params![id],
                row_to_task,
            ),
            id,
        )
    }

    fn renumber(&mut self) -> Result<Vec<Task>> {
        let ids: Vec<u64> = {
            let mut stmt = self.conn.prepare("SELECT id FROM tasks ORDER BY id")?;
            stmt.query_map([], |row| row.get(0))?
                .collect::<rusqlite::Result<Vec<_>>>()?
        };

        // Ranks are assigned ascending, so each new id is <= the old one
        // and never collides with a not-yet-updated row.
        for (rank, old_id) in ids.iter().enumerate() {
            let new_id = rank as u64 + 1;
            if new_id != *old_id {
                self.conn.execute(
                    "UPDATE tasks SET id = ?1 WHERE id = ?2",
                    params![new_id, old_id],
                )?;
            }
        }

        // Rewind the AUTOINCREMENT counter to the compacted range.
        self.conn.execute(
            "UPDATE sqlite_sequence SET seq = ?1 WHERE name = 'tasks'",
            params![ids.len() as u64],
        )?;

        self.list_tasks()
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn backend_type(&self) -> &'static str {
        "sqlite"
    }
}
