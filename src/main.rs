use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

use taskman::cli::{Cli, Commands};
use taskman::config::Config;
use taskman::display;
use taskman::repl;
use taskman::store::{Filter, SortOrder, TaskStore};

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskman")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("taskman.log");

    // Setup env_logger with file output; stdout stays clean for the session
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    let mut store = TaskStore::new(&config.data_file);

    match &cli.command {
        None => {
            // Default: interactive session over whatever is already persisted
            store.load();
            repl::run(&mut store, &config.prompt)
        }
        Some(command @ Commands::Add { title, due, .. }) => {
            handle_add_command(&mut store, &title.join(" "), *due, command)
        }
        Some(Commands::List {
            highest,
            lowest,
            filter,
        }) => handle_list_command(&mut store, *highest, *lowest, filter.as_deref()),
    }
}

/// One-shot `taskman add`: load, add, save, exit.
fn handle_add_command(
    store: &mut TaskStore,
    title: &str,
    due_days: Option<u32>,
    command: &Commands,
) -> Result<()> {
    store.load();

    let due_date =
        due_days.map(|days| chrono::Local::now().date_naive() + chrono::Duration::days(days as i64));
    let task = store.add_task(title, due_date, command.priority())?;
    println!("{} {} ({})", "Added:".green(), task.title, task.id);

    store.save().context("Failed to save tasks")?;
    Ok(())
}

/// One-shot `taskman list`: load, render, exit.
fn handle_list_command(
    store: &mut TaskStore,
    highest: bool,
    lowest: bool,
    filter: Option<&str>,
) -> Result<()> {
    store.load();

    let filter = filter.unwrap_or("all").parse::<Filter>()?;
    let order = if highest {
        SortOrder::Highest
    } else if lowest {
        SortOrder::Lowest
    } else {
        SortOrder::None
    };

    display::render(&store.select(filter, order));
    Ok(())
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
