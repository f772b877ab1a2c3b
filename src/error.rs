//! Error types for taskman
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in taskman
#[derive(Debug, Error)]
pub enum TaskmanError {
    /// Task title was empty after trimming whitespace
    #[error("Task title cannot be empty")]
    EmptyTitle,

    /// Task not found in the store
    #[error("Task not found: {0}")]
    TaskNotFound(String),

    /// Due-date offset was not a non-negative integer
    #[error("Invalid due days: {0}")]
    InvalidDueDays(String),

    /// Unknown list filter keyword
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for taskman operations
pub type Result<T> = std::result::Result<T, TaskmanError>;
