//! Task record and related types
//!
//! The Task is the core record in taskman: one to-do item with an opaque id,
//! a title, a priority, an optional due date, and a completion flag.

use crate::error::{Result, TaskmanError};
use crate::id::generate_task_id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task priority, ranked Low < Medium < High
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Numeric rank used for priority ordering (High=3, Medium=2, Low=1)
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier (timestamp + random suffix: "1738300800123-a1b2")
    pub id: String,

    /// Display title, never empty
    pub title: String,

    /// Priority level, defaults to Medium
    pub priority: Priority,

    /// Completion flag, false at creation
    pub completed: bool,

    /// Optional due date, serialized as YYYY-MM-DD
    #[serde(rename = "dueDate")]
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Create a new task with a fresh id.
    ///
    /// The title is trimmed; an empty result is rejected so the store never
    /// holds a task without a visible title.
    pub fn new(title: &str, due_date: Option<NaiveDate>, priority: Priority) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskmanError::EmptyTitle);
        }

        Ok(Self {
            id: generate_task_id(),
            title: title.to_string(),
            priority,
            completed: false,
            due_date,
        })
    }

    /// Returns true if the task is past due as of `today`.
    ///
    /// Completed tasks are never overdue; the comparison is strict, so a task
    /// due today is not overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => !self.completed && due < today,
            None => false,
        }
    }

    /// Case-insensitive substring match against the title.
    ///
    /// An empty keyword matches every task.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        self.title
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }
}
