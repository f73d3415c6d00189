//! Common test utilities for tasktrack integration tests.
//!
//! Provides `TestEnv` for isolated test environments that don't pollute
//! the user's real data directory.

#![allow(dead_code)]

use assert_cmd::Command;
pub use tempfile::TempDir;

/// A test environment with an isolated data directory.
///
/// The `tt()` method returns a `Command` that sets `TT_DATA_DIR`
/// per-invocation, making tests parallel-safe.
pub struct TestEnv {
    pub data_dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment with an isolated data directory.
    pub fn new() -> Self {
        Self {
            data_dir: TempDir::new().unwrap(),
        }
    }

    /// Get a Command for the tt binary with isolated data directory.
    pub fn tt(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_tt"));
        cmd.env("TT_DATA_DIR", self.data_dir.path());
        cmd
    }

    /// Get the path to the data directory.
    pub fn data_path(&self) -> &std::path::Path {
        self.data_dir.path()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
