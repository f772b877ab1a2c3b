//! Interactive session: banner, prompt, and line dispatch.
//!
//! Reads one line at a time, splits it on whitespace, and dispatches the
//! first token to a command handler operating on an explicit `TaskStore`
//! passed by reference. Recoverable errors (validation, not-found) are
//! printed and the session continues; only end-of-input ends it.

use crate::display;
use crate::error::{Result, TaskmanError};
use crate::store::{Filter, LoadOutcome, SortOrder, TaskStore};
use crate::task::Priority;
use chrono::{Duration, Local, NaiveDate};
use colored::*;
use log::{info, warn};
use std::io::{self, BufRead, Write};

const BANNER: &str = r#"
####################################################
 _            _
| |_ __ _ ___| | ___ __ ___   __ _ _ __
| __/ _` / __| |/ / '_ ` _ \ / _` | '_ \
| || (_| \__ \   <| | | | | | (_| | | | |
 \__\__,_|___/_|\_\_| |_| |_|\__,_|_| |_|
####################################################"#;

/// What the session should do after a dispatched line.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionAction {
    Continue,
    Exit,
}

/// Run the interactive session until `exit` or end of input.
pub fn run(store: &mut TaskStore, prompt: &str) -> eyre::Result<()> {
    println!("{}", BANNER.cyan());
    println!("Type \"help\" for available commands.");

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("{}", prompt);
        io::stdout().flush()?;

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(err) => {
                // Losing stdin ends the session gracefully, not fatally.
                warn!("Failed to read input: {}", err);
                break;
            }
        }

        if dispatch(store, &line) == SessionAction::Exit {
            break;
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Tokenize one input line and run the matching command handler.
pub fn dispatch(store: &mut TaskStore, line: &str) -> SessionAction {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&command, args)) = tokens.split_first() else {
        return SessionAction::Continue;
    };

    info!("Dispatching command: {}", command);

    let result = match command {
        "add" => handle_add(store, args),
        "list" => handle_list(store, args),
        "summary" => {
            display::render_summary(&store.summary());
            Ok(())
        }
        "search" => {
            display::render(&store.search(&args.join(" ")));
            Ok(())
        }
        "complete" => handle_complete(store, args, true),
        "uncomplete" => handle_complete(store, args, false),
        "delete" => handle_delete(store, args),
        "save" => handle_save(store),
        "load" => {
            handle_load(store);
            Ok(())
        }
        "help" => {
            print_help();
            Ok(())
        }
        "exit" => return SessionAction::Exit,
        _ => {
            println!(
                "Unknown command: {}. Type \"help\" for available commands.",
                command
            );
            Ok(())
        }
    };

    if let Err(err) = result {
        println!("{}", err.to_string().red());
    }

    SessionAction::Continue
}

fn handle_add(store: &mut TaskStore, args: &[&str]) -> Result<()> {
    let today = Local::now().date_naive();
    let (title, due_date, priority) = parse_add_args(args, today)?;
    let task = store.add_task(&title, due_date, priority)?;
    println!("{} {} ({})", "Added:".green(), task.title, task.id);
    Ok(())
}

fn handle_list(store: &TaskStore, args: &[&str]) -> Result<()> {
    let (filter, order) = parse_list_args(args)?;
    display::render(&store.select(filter, order));
    Ok(())
}

fn handle_complete(store: &mut TaskStore, args: &[&str], completed: bool) -> Result<()> {
    let verb = if completed { "complete" } else { "uncomplete" };
    let Some(id) = args.first() else {
        println!("{}", format!("Usage: {} <id>", verb).yellow());
        return Ok(());
    };

    if completed {
        store.complete(id)?;
        println!("{} {}", "Completed:".green(), id);
    } else {
        store.uncomplete(id)?;
        println!("{} {}", "Uncompleted:".yellow(), id);
    }
    Ok(())
}

fn handle_delete(store: &mut TaskStore, args: &[&str]) -> Result<()> {
    let Some(id) = args.first() else {
        println!("{}", "Usage: delete <id>".yellow());
        return Ok(());
    };

    store.delete(id)?;
    println!("{} {}", "Deleted:".red(), id);
    Ok(())
}

fn handle_save(store: &TaskStore) -> Result<()> {
    store.save()?;
    println!(
        "{} {} tasks to {}",
        "Saved".green(),
        store.len(),
        store.data_file().display()
    );
    Ok(())
}

fn handle_load(store: &mut TaskStore) {
    match store.load() {
        LoadOutcome::Loaded(count) => {
            println!("{} {} tasks", "Loaded".green(), count);
        }
        LoadOutcome::Missing => {
            println!("{}", "Nothing to load: no data file found.".yellow());
        }
        LoadOutcome::Unreadable => {
            println!(
                "{}",
                "Nothing to load: data file could not be parsed.".yellow()
            );
        }
    }
}

/// Parse `add` arguments: leading priority/due flags, then the title.
///
/// `--due <days>` sets the due date to `today + days`; days must be a
/// non-negative integer. The first token that is not a recognized flag
/// starts the title.
pub fn parse_add_args(
    args: &[&str],
    today: NaiveDate,
) -> Result<(String, Option<NaiveDate>, Priority)> {
    let mut priority = Priority::Medium;
    let mut due_date = None;
    let mut index = 0;

    while index < args.len() {
        match args[index] {
            "--low" => priority = Priority::Low,
            "--medium" => priority = Priority::Medium,
            "--high" => priority = Priority::High,
            "--due" => {
                index += 1;
                let raw = args
                    .get(index)
                    .ok_or_else(|| TaskmanError::InvalidDueDays("missing value".to_string()))?;
                let days: i64 = raw
                    .parse()
                    .map_err(|_| TaskmanError::InvalidDueDays(raw.to_string()))?;
                if days < 0 {
                    return Err(TaskmanError::InvalidDueDays(raw.to_string()));
                }
                due_date = Some(today + Duration::days(days));
            }
            _ => break,
        }
        index += 1;
    }

    let title = args[index..].join(" ");
    if title.trim().is_empty() {
        return Err(TaskmanError::EmptyTitle);
    }

    Ok((title, due_date, priority))
}

/// Parse `list` arguments: optional sort flag and completion filter keyword.
pub fn parse_list_args(args: &[&str]) -> Result<(Filter, SortOrder)> {
    let mut filter = Filter::All;
    let mut order = SortOrder::None;

    for arg in args {
        match *arg {
            "--highest" => order = SortOrder::Highest,
            "--lowest" => order = SortOrder::Lowest,
            keyword => filter = keyword.parse()?,
        }
    }

    Ok((filter, order))
}

fn print_help() {
    println!("Available commands:");
    println!("  add [--low|--medium|--high] [--due <days>] <title>  - Add a new task");
    println!("  list [--highest|--lowest] [completed|uncompleted]   - List tasks");
    println!("  summary                                             - Show task counts");
    println!("  search <keyword>                                    - Search tasks by title");
    println!("  complete <id>                                       - Mark a task completed");
    println!("  uncomplete <id>                                     - Mark a task not completed");
    println!("  delete <id>                                         - Delete a task");
    println!("  save                                                - Save tasks to the data file");
    println!("  load                                                - Load tasks from the data file");
    println!("  help                                                - Show this help");
    println!("  exit                                                - Exit the session");
}
