//! taskman - an interactive task list manager
//!
//! Tasks live in an in-memory ordered collection owned by [`store::TaskStore`]
//! and persist to a local JSON file. The interactive session in [`repl`]
//! dispatches line-oriented commands against an explicit store instance.

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod id;
pub mod repl;
pub mod store;
pub mod task;

pub use error::{Result, TaskmanError};
