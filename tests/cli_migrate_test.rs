//! Integration tests for the `tt migrate` command.
//!
//! These tests verify the one-shot copy from the JSON file into the
//! SQLite table: row counts, field preservation, and failure modes.

mod common;

use common::TestEnv;
use predicates::prelude::*;

/// Seed the JSON backend with tasks through the CLI.
fn seed_tasks(env: &TestEnv, titles: &[&str]) {
    for title in titles {
        env.tt()
            .args(["add", title, "-d", &format!("description of {}", title)])
            .assert()
            .success();
    }
}

#[test]
fn test_migrate_copies_all_tasks() {
    let env = TestEnv::new();
    seed_tasks(&env, &["one", "two", "three"]);

    env.tt()
        .args(["migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"migrated\":3"));

    env.tt()
        .args(["-b", "sqlite", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\":\"one\""))
        .stdout(predicate::str::contains("\"title\":\"two\""))
        .stdout(predicate::str::contains("\"title\":\"three\""));
}

#[test]
fn test_migrate_human_output() {
    let env = TestEnv::new();
    seed_tasks(&env, &["only"]);

    env.tt()
        .args(["-H", "migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Migration completed. Copied 1 task(s)."));
}

#[test]
fn test_migrate_preserves_status_and_description() {
    let env = TestEnv::new();
    seed_tasks(&env, &["pending task", "done task"]);
    env.tt().args(["done", "2"]).assert().success();

    env.tt().args(["migrate"]).assert().success();

    env.tt()
        .args(["-b", "sqlite", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"description\":\"description of done task\""))
        .stdout(predicate::str::contains("\"status\":\"Completed\""))
        .stdout(predicate::str::contains("\"status\":\"Pending\""));
}

#[test]
fn test_migrate_assigns_fresh_table_ids() {
    let env = TestEnv::new();
    seed_tasks(&env, &["a", "b", "c"]);
    // Leave a gap in the file ids
    env.tt().args(["delete", "2"]).assert().success();

    env.tt()
        .args(["migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"migrated\":2"));

    // Table ids come from the table's allocator, contiguous from 1
    env.tt()
        .args(["-b", "sqlite", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\":1"))
        .stdout(predicate::str::contains("\"id\":2"))
        .stdout(predicate::str::contains("\"id\":3").not());
}

#[test]
fn test_migrate_without_source_file_fails() {
    let env = TestEnv::new();

    env.tt()
        .args(["migrate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_migrate_leaves_source_file_intact() {
    let env = TestEnv::new();
    seed_tasks(&env, &["keep me"]);

    env.tt().args(["migrate"]).assert().success();

    env.tt()
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\":\"keep me\""));
}

#[test]
fn test_migrate_twice_duplicates_rows() {
    // The utility has no resumability or dedup; running it twice copies
    // the collection twice.
    let env = TestEnv::new();
    seed_tasks(&env, &["dup"]);

    env.tt().args(["migrate"]).assert().success();
    env.tt().args(["migrate"]).assert().success();

    env.tt()
        .args(["-b", "sqlite", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\":2"));
}
