//! CLI argument definitions for tasktrack.

use crate::storage::BackendType;
use clap::{Parser, Subcommand};

/// Tasktrack - a personal task tracker for the command line.
///
/// Run `tt` with no subcommand for the interactive menu.
#[derive(Parser, Debug)]
#[command(name = "tt")]
#[command(author, version, about = "A personal task tracker for the command line", long_about = None)]
pub struct Cli {
    /// Output in human-readable format instead of JSON
    #[arg(short = 'H', long = "human", global = true)]
    pub human_readable: bool,

    /// Storage backend to use (json or sqlite)
    #[arg(short = 'b', long = "backend", global = true, default_value = "json")]
    pub backend: String,

    /// Data directory holding tasks.json and tasks.db.
    /// Defaults to the platform data dir; can also be set via TT_DATA_DIR.
    #[arg(long = "data-dir", global = true, env = "TT_DATA_DIR")]
    pub data_dir: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse the backend flag into a backend type.
    pub fn backend_type(&self) -> crate::Result<BackendType> {
        self.backend.parse()
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task title
        title: String,

        /// Task description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List all tasks
    List,

    /// Mark a task as completed
    Done {
        /// Task ID
        id: u64,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: u64,

        /// Reassign remaining ids to 1..N after deleting.
        /// Changes previously issued ids; off by default.
        #[arg(long)]
        renumber: bool,
    },

    /// Reassign all task ids to contiguous 1..N
    Renumber,

    /// Copy all tasks from the JSON file into the SQLite table (one-shot)
    Migrate,

    /// Run the interactive menu (same as running `tt` with no subcommand)
    Shell,
}
