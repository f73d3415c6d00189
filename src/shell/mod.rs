//! Interactive shell for tasktrack.
//!
//! A line-oriented numbered menu on stdin/stdout, dispatching to an
//! explicit store handle. Store and input errors are printed and absorbed
//! locally; the loop continues until the user exits or stdin closes.

use crate::commands::render_table;
use crate::storage::TaskStore;
use crate::{Error, Result};
use std::io::{BufRead, Write};

const MENU: &str = "\nTASK MANAGER\n1. Add Task\n2. List Tasks\n3. Mark Task as Complete\n4. Delete Task\n5. Exit";

/// Run the interactive menu loop against the given store.
///
/// Generic over the input and output streams so sessions can be driven
/// from tests. Returns when the user chooses Exit or input reaches EOF.
pub fn run<R: BufRead, W: Write>(store: &mut dyn TaskStore, input: &mut R, out: &mut W) -> Result<()> {
    loop {
        writeln!(out, "{}", MENU)?;

        let choice = match prompt(input, out, "Enter your choice (1-5): ")? {
            Some(line) => line,
            None => break, // EOF
        };

        match choice.as_str() {
            "1" => {
                let Some(title) = prompt(input, out, "Enter task title: ")? else {
                    break;
                };
                let Some(description) = prompt(input, out, "Enter task description: ")? else {
                    break;
                };
                match store.add_task(&title, &description) {
                    Ok(task) => writeln!(out, "Task '{}' added successfully!", task.title)?,
                    Err(e) => writeln!(out, "Error: {}", e)?,
                }
            }
            "2" => {
                match store.list_tasks() {
                    Ok(tasks) => writeln!(out, "{}", render_table(&tasks))?,
                    Err(e) => writeln!(out, "Error: {}", e)?,
                }
            }
            "3" => {
                let Some(id) = prompt_id(input, out, "Enter task ID to mark as complete: ")? else {
                    break;
                };
                if let Some(id) = id {
                    match store.mark_complete(id) {
                        Ok(task) => {
                            writeln!(out, "Task '{}' marked as completed!", task.title)?
                        }
                        Err(e) => writeln!(out, "{}", absorb(e))?,
                    }
                }
            }
            "4" => {
                let Some(id) = prompt_id(input, out, "Enter task ID to delete: ")? else {
                    break;
                };
                if let Some(id) = id {
                    match store.delete_task(id) {
                        Ok(task) => writeln!(out, "Task '{}' deleted successfully!", task.title)?,
                        Err(e) => writeln!(out, "{}", absorb(e))?,
                    }
                }
            }
            "5" => {
                writeln!(out, "Exiting Task Manager. Goodbye!")?;
                break;
            }
            _ => {
                writeln!(out, "Invalid choice. Please try again.")?;
            }
        }
    }

    Ok(())
}

/// Print a prompt and read one trimmed line. `None` means EOF.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a task id. Outer `None` means EOF; inner `None` means the
/// entry was not a number (a message is printed and the menu re-shown).
fn prompt_id<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> Result<Option<Option<u64>>> {
    let Some(line) = prompt(input, out, text)? else {
        return Ok(None);
    };

    match line.parse::<u64>() {
        Ok(id) => Ok(Some(Some(id))),
        Err(_) => {
            writeln!(out, "Invalid task ID. Please enter a number.")?;
            Ok(Some(None))
        }
    }
}

/// Render an absorbed store error as a user-facing message.
fn absorb(e: Error) -> String {
    match e {
        Error::NotFound(id) => format!("Task with ID {} not found.", id),
        other => format!("Error: {}", other),
    }
}
