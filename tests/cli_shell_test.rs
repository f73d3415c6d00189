//! Integration tests for the interactive shell.
//!
//! Sessions are driven by piping a scripted menu dialogue to stdin,
//! both via `tt shell` and via `tt` with no subcommand.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_shell_shows_menu_and_exits() {
    let env = TestEnv::new();

    env.tt()
        .arg("shell")
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("TASK MANAGER"))
        .stdout(predicate::str::contains("1. Add Task"))
        .stdout(predicate::str::contains("5. Exit"))
        .stdout(predicate::str::contains("Exiting Task Manager. Goodbye!"));
}

#[test]
fn test_no_subcommand_runs_shell() {
    let env = TestEnv::new();

    env.tt()
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("TASK MANAGER"));
}

#[test]
fn test_shell_list_empty() {
    let env = TestEnv::new();

    env.tt()
        .arg("shell")
        .write_stdin("2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn test_shell_add_and_list() {
    let env = TestEnv::new();

    env.tt()
        .arg("shell")
        .write_stdin("1\nBuy milk\n2% or whole\n2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter task title: "))
        .stdout(predicate::str::contains("Task 'Buy milk' added successfully!"))
        .stdout(predicate::str::contains("Buy milk"))
        .stdout(predicate::str::contains("Pending"));
}

#[test]
fn test_shell_complete_unknown_id() {
    let env = TestEnv::new();
    env.tt().args(["add", "a"]).assert().success();
    env.tt().args(["add", "b"]).assert().success();

    env.tt()
        .arg("shell")
        .write_stdin("3\n999\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task with ID 999 not found."));
}

#[test]
fn test_shell_non_numeric_id_reprompts() {
    let env = TestEnv::new();

    env.tt()
        .arg("shell")
        .write_stdin("4\nnot-a-number\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid task ID. Please enter a number."));
}

#[test]
fn test_shell_invalid_choice() {
    let env = TestEnv::new();

    env.tt()
        .arg("shell")
        .write_stdin("8\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please try again."));
}

#[test]
fn test_shell_eof_exits_cleanly() {
    let env = TestEnv::new();

    env.tt().arg("shell").write_stdin("").assert().success();
}

#[test]
fn test_shell_changes_visible_to_cli() {
    let env = TestEnv::new();

    env.tt()
        .arg("shell")
        .write_stdin("1\nFrom the shell\ndetails\n5\n")
        .assert()
        .success();

    env.tt()
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\":\"From the shell\""));
}

#[test]
fn test_shell_on_sqlite_backend() {
    let env = TestEnv::new();

    env.tt()
        .args(["-b", "sqlite", "shell"])
        .write_stdin("1\nDb task\nstored in sqlite\n2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task 'Db task' added successfully!"))
        .stdout(predicate::str::contains("Db task"));
}
