//! TaskStore implementation with JSON file persistence.
//!
//! The TaskStore owns the ordered task collection (insertion order is the
//! canonical order) and provides all mutation, query, and persistence
//! operations. The whole collection is saved and loaded wholesale; there is
//! no partial or incremental persistence.

use crate::error::{Result, TaskmanError};
use crate::task::{Priority, Task};
use chrono::NaiveDate;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Completion filter for list/display selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Uncompleted,
}

impl FromStr for Filter {
    type Err = TaskmanError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(Filter::All),
            "completed" => Ok(Filter::Completed),
            "uncompleted" => Ok(Filter::Uncompleted),
            other => Err(TaskmanError::UnknownFilter(other.to_string())),
        }
    }
}

/// Priority ordering applied to the displayed subset only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Store (insertion) order
    #[default]
    None,
    /// Highest priority first
    Highest,
    /// Lowest priority first
    Lowest,
}

/// Counts reported by the `summary` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

/// Outcome of a load operation.
///
/// A missing or unparseable data file is an expected first-run condition,
/// not an error; the caller reports it and carries on with an empty store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// File read and parsed; collection replaced with this many tasks
    Loaded(usize),
    /// No data file at the configured path
    Missing,
    /// File exists but could not be read or parsed
    Unreadable,
}

/// TaskStore manages the in-memory task collection and its JSON data file.
pub struct TaskStore {
    /// Ordered task collection; insertion order is canonical
    tasks: Vec<Task>,

    /// Path to the JSON data file
    data_file: PathBuf,
}

impl TaskStore {
    /// Create an empty store persisting to the given data file path.
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            tasks: Vec::new(),
            data_file: data_file.into(),
        }
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Path of the JSON data file this store persists to.
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Add a new task at the end of the collection.
    ///
    /// Rejects titles that are empty after trimming. The generated id is
    /// re-rolled until it is distinct from every id currently in the store.
    pub fn add_task(
        &mut self,
        title: &str,
        due_date: Option<NaiveDate>,
        priority: Priority,
    ) -> Result<&Task> {
        let mut task = Task::new(title, due_date, priority)?;
        while self.find_index(&task.id).is_some() {
            task.id = crate::id::generate_task_id();
        }

        info!("Adding task {}: {}", task.id, task.title);
        self.tasks.push(task);
        Ok(self.tasks.last().unwrap())
    }

    /// Select the display subset: filter by completion, then order by
    /// priority rank.
    ///
    /// `sort_by_key` is stable, so equal-priority tasks keep their relative
    /// insertion order. The underlying collection is never reordered.
    pub fn select(&self, filter: Filter, order: SortOrder) -> Vec<&Task> {
        let mut selected: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|task| match filter {
                Filter::All => true,
                Filter::Completed => task.completed,
                Filter::Uncompleted => !task.completed,
            })
            .collect();

        match order {
            SortOrder::None => {}
            SortOrder::Highest => {
                selected.sort_by_key(|task| std::cmp::Reverse(task.priority.rank()))
            }
            SortOrder::Lowest => selected.sort_by_key(|task| task.priority.rank()),
        }

        selected
    }

    /// Tasks whose title contains the keyword, case-insensitively.
    pub fn search(&self, keyword: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.matches_keyword(keyword))
            .collect()
    }

    /// Total/pending/completed counts.
    pub fn summary(&self) -> Summary {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        Summary {
            total: self.tasks.len(),
            pending: self.tasks.len() - completed,
            completed,
        }
    }

    /// Mark a task completed. Idempotent; absent ids report not-found.
    pub fn complete(&mut self, id: &str) -> Result<()> {
        self.set_completed(id, true)
    }

    /// Mark a task not completed. Idempotent; absent ids report not-found.
    pub fn uncomplete(&mut self, id: &str) -> Result<()> {
        self.set_completed(id, false)
    }

    fn set_completed(&mut self, id: &str, completed: bool) -> Result<()> {
        let index = self
            .find_index(id)
            .ok_or_else(|| TaskmanError::TaskNotFound(id.to_string()))?;
        self.tasks[index].completed = completed;
        info!("Task {} completed={}", id, completed);
        Ok(())
    }

    /// Remove exactly one task by id, preserving the order of the rest.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let index = self
            .find_index(id)
            .ok_or_else(|| TaskmanError::TaskNotFound(id.to_string()))?;
        let removed = self.tasks.remove(index);
        info!("Deleted task {}: {}", removed.id, removed.title);
        Ok(())
    }

    fn find_index(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    /// Persist the entire collection to the data file as a JSON array.
    ///
    /// The parent directory is created if missing. Serialization completes
    /// in memory before anything touches the filesystem, so a failed save
    /// never leaves a truncated file behind and the in-memory store is
    /// unaffected either way.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.tasks)?;
        fs::write(&self.data_file, json)?;

        info!(
            "Saved {} tasks to {}",
            self.tasks.len(),
            self.data_file.display()
        );
        Ok(())
    }

    /// Replace the collection wholesale with the contents of the data file.
    ///
    /// A missing file or unparseable content resets the store to empty and
    /// reports a benign outcome; this matches first-run behavior. Load never
    /// merges with the current in-memory tasks.
    pub fn load(&mut self) -> LoadOutcome {
        if !self.data_file.exists() {
            info!("No data file at {}", self.data_file.display());
            self.tasks.clear();
            return LoadOutcome::Missing;
        }

        let content = match fs::read_to_string(&self.data_file) {
            Ok(content) => content,
            Err(err) => {
                warn!("Failed to read {}: {}", self.data_file.display(), err);
                self.tasks.clear();
                return LoadOutcome::Unreadable;
            }
        };

        match serde_json::from_str::<Vec<Task>>(&content) {
            Ok(tasks) => {
                info!(
                    "Loaded {} tasks from {}",
                    tasks.len(),
                    self.data_file.display()
                );
                let count = tasks.len();
                self.tasks = tasks;
                LoadOutcome::Loaded(count)
            }
            Err(err) => {
                warn!("Failed to parse {}: {}", self.data_file.display(), err);
                self.tasks.clear();
                LoadOutcome::Unreadable
            }
        }
    }
}
