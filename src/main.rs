//! Tasktrack CLI - a personal task tracker for the command line.

use clap::Parser;
use std::io;
use std::process;
use std::time::Instant;
use tasktrack::cli::{Cli, Commands};
use tasktrack::commands::{self, Output};
use tasktrack::storage::{self, TaskStore};
use tasktrack::{action_log, shell};

fn main() {
    let cli = Cli::parse();
    let human = cli.human_readable;

    // Resolve backend and data directory up front; both are needed for
    // every command.
    let backend = match cli.backend_type() {
        Ok(backend) => backend,
        Err(e) => fail(&e, human),
    };
    let data_dir = match storage::data_dir(cli.data_dir.clone()) {
        Ok(dir) => dir,
        Err(e) => fail(&e, human),
    };

    // Serialize command for logging
    let (cmd_name, args_json) = serialize_command(&cli.command);

    // Start timing
    let start = Instant::now();

    // Execute command
    let result = run_command(cli.command, backend, &data_dir, human);

    // Calculate duration
    let duration = start.elapsed().as_millis() as u64;

    // Determine success/error
    let (success, error) = match &result {
        Ok(_) => (true, None),
        Err(e) => (false, Some(e.to_string())),
    };

    // Log the action (warns on stderr if the log cannot be written)
    action_log::log_action(&data_dir, &cmd_name, args_json, success, error, duration);

    // Handle result
    if let Err(e) = result {
        fail(&e, human);
    }
}

fn run_command(
    command: Option<Commands>,
    backend: storage::BackendType,
    data_dir: &std::path::Path,
    human: bool,
) -> Result<(), tasktrack::Error> {
    match command {
        Some(Commands::Add { title, description }) => {
            let mut store = storage::open_store(backend, data_dir)?;
            let result = commands::add(store.as_mut(), &title, &description)?;
            output(&result, human);
        }

        Some(Commands::List) => {
            let store = storage::open_store(backend, data_dir)?;
            let result = commands::list(store.as_ref())?;
            output(&result, human);
        }

        Some(Commands::Done { id }) => {
            let mut store = storage::open_store(backend, data_dir)?;
            let result = commands::complete(store.as_mut(), id)?;
            output(&result, human);
        }

        Some(Commands::Delete { id, renumber }) => {
            let mut store = storage::open_store(backend, data_dir)?;
            let result = commands::delete(store.as_mut(), id, renumber)?;
            output(&result, human);
        }

        Some(Commands::Renumber) => {
            let mut store = storage::open_store(backend, data_dir)?;
            let result = commands::renumber(store.as_mut())?;
            output(&result, human);
        }

        Some(Commands::Migrate) => {
            let result = commands::migrate(data_dir)?;
            output(&result, human);
        }

        // No subcommand runs the interactive menu, like the shell command.
        Some(Commands::Shell) | None => {
            let mut store = storage::open_store(backend, data_dir)?;
            run_shell(store.as_mut())?;
        }
    }

    Ok(())
}

/// Run the interactive shell on real stdin/stdout.
fn run_shell(store: &mut dyn TaskStore) -> Result<(), tasktrack::Error> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(store, &mut stdin.lock(), &mut stdout.lock())
}

/// Print output in JSON or human-readable format.
fn output<T: Output>(result: &T, human: bool) {
    if human {
        println!("{}", result.to_human());
    } else {
        println!("{}", result.to_json());
    }
}

/// Print an error in the selected format and exit with status 1.
fn fail(e: &tasktrack::Error, human: bool) -> ! {
    if human {
        eprintln!("Error: {}", e);
    } else {
        eprintln!(
            "{}",
            serde_json::json!({ "error": e.to_string() })
        );
    }
    process::exit(1);
}

/// Serialize the command name and arguments for the action log.
fn serialize_command(command: &Option<Commands>) -> (String, serde_json::Value) {
    match command {
        Some(Commands::Add { title, description }) => (
            "add".to_string(),
            serde_json::json!({ "title": title, "description": description }),
        ),
        Some(Commands::List) => ("list".to_string(), serde_json::Value::Null),
        Some(Commands::Done { id }) => ("done".to_string(), serde_json::json!({ "id": id })),
        Some(Commands::Delete { id, renumber }) => (
            "delete".to_string(),
            serde_json::json!({ "id": id, "renumber": renumber }),
        ),
        Some(Commands::Renumber) => ("renumber".to_string(), serde_json::Value::Null),
        Some(Commands::Migrate) => ("migrate".to_string(), serde_json::Value::Null),
        Some(Commands::Shell) | None => ("shell".to_string(), serde_json::Value::Null),
    }
}
