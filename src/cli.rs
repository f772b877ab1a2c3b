//! CLI definitions using clap.
//!
//! With no subcommand, taskman starts the interactive session. The `add` and
//! `list` subcommands run a single command against the data file and exit.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::task::Priority;

/// taskman - An interactive task list manager
#[derive(Parser, Debug)]
#[command(name = "taskman")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// One-shot subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a task and exit
    Add {
        /// Low priority
        #[arg(long, conflicts_with_all = ["medium", "high"])]
        low: bool,

        /// Medium priority (the default)
        #[arg(long, conflicts_with = "high")]
        medium: bool,

        /// High priority
        #[arg(long)]
        high: bool,

        /// Due this many days from today
        #[arg(long, value_name = "DAYS")]
        due: Option<u32>,

        /// Task title
        #[arg(required = true)]
        title: Vec<String>,
    },

    /// List tasks and exit
    List {
        /// Highest priority first
        #[arg(long, conflicts_with = "lowest")]
        highest: bool,

        /// Lowest priority first
        #[arg(long)]
        lowest: bool,

        /// Completion filter (completed, uncompleted)
        filter: Option<String>,
    },
}

impl Commands {
    /// Resolve the priority flags of an `add` invocation.
    pub fn priority(&self) -> Priority {
        match self {
            Commands::Add { low: true, .. } => Priority::Low,
            Commands::Add { high: true, .. } => Priority::High,
            _ => Priority::Medium,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        // No args should result in None command (interactive mode)
        let cli = Cli::try_parse_from(["taskman"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["taskman", "-v"]).unwrap();
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_cli_config_option() {
        let cli = Cli::try_parse_from(["taskman", "-c", "/path/to/config.yml"]).unwrap();
        assert_eq!(
            cli.config.as_ref(),
            Some(&PathBuf::from("/path/to/config.yml"))
        );
    }

    #[test]
    fn test_add_command_joins_title() {
        let cli = Cli::try_parse_from(["taskman", "add", "Buy", "milk"]).unwrap();
        match cli.command {
            Some(Commands::Add { title, due, .. }) => {
                assert_eq!(title, vec!["Buy".to_string(), "milk".to_string()]);
                assert!(due.is_none());
            }
            _ => panic!("Expected add command"),
        }
    }

    #[test]
    fn test_add_command_priority_flags() {
        let cli = Cli::try_parse_from(["taskman", "add", "--high", "File", "taxes"]).unwrap();
        assert_eq!(cli.command.unwrap().priority(), Priority::High);

        let cli = Cli::try_parse_from(["taskman", "add", "--low", "Water", "plants"]).unwrap();
        assert_eq!(cli.command.unwrap().priority(), Priority::Low);

        let cli = Cli::try_parse_from(["taskman", "add", "Buy", "milk"]).unwrap();
        assert_eq!(cli.command.unwrap().priority(), Priority::Medium);
    }

    #[test]
    fn test_add_command_conflicting_priorities_rejected() {
        let result = Cli::try_parse_from(["taskman", "add", "--low", "--high", "Title"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_add_command_due_days() {
        let cli = Cli::try_parse_from(["taskman", "add", "--due", "3", "Pay", "rent"]).unwrap();
        match cli.command {
            Some(Commands::Add { due, .. }) => assert_eq!(due, Some(3)),
            _ => panic!("Expected add command"),
        }
    }

    #[test]
    fn test_add_command_negative_due_rejected() {
        let result = Cli::try_parse_from(["taskman", "add", "--due", "-1", "Title"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_add_command_requires_title() {
        let result = Cli::try_parse_from(["taskman", "add"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_command() {
        let cli = Cli::try_parse_from(["taskman", "list"]).unwrap();
        match cli.command {
            Some(Commands::List {
                highest,
                lowest,
                filter,
            }) => {
                assert!(!highest);
                assert!(!lowest);
                assert!(filter.is_none());
            }
            _ => panic!("Expected list command"),
        }
    }

    #[test]
    fn test_list_command_with_sort_and_filter() {
        let cli = Cli::try_parse_from(["taskman", "list", "--highest", "uncompleted"]).unwrap();
        match cli.command {
            Some(Commands::List {
                highest, filter, ..
            }) => {
                assert!(highest);
                assert_eq!(filter, Some("uncompleted".to_string()));
            }
            _ => panic!("Expected list command"),
        }
    }

    #[test]
    fn test_list_conflicting_sorts_rejected() {
        let result = Cli::try_parse_from(["taskman", "list", "--highest", "--lowest"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_help_works() {
        // Verify help doesn't panic
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(["taskman", "--version"]);
        // Version flag causes early exit with error (expected)
        assert!(result.is_err());
    }
}
