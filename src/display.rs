//! Table rendering for task listings.
//!
//! Display is a pure function over a task slice: it decides colors and
//! overdue highlighting but never touches stored data.

use crate::store::Summary;
use crate::task::{Priority, Task};
use chrono::{Local, NaiveDate};
use colored::*;

/// Render tasks as an aligned table to stdout.
///
/// Overdue tasks (due date strictly before today, not completed) are
/// highlighted red with an "overdue" tag.
pub fn render(tasks: &[&Task]) {
    render_for_date(tasks, Local::now().date_naive());
}

/// Render against an explicit "today", so the overdue cut is testable.
pub fn render_for_date(tasks: &[&Task], today: NaiveDate) {
    for line in render_lines(tasks, today) {
        println!("{}", line);
    }
}

/// Build the rendered lines without printing them.
pub fn render_lines(tasks: &[&Task], today: NaiveDate) -> Vec<String> {
    if tasks.is_empty() {
        return vec!["No tasks.".dimmed().to_string()];
    }

    let title_width = tasks
        .iter()
        .map(|task| task.title.chars().count())
        .max()
        .unwrap_or(0)
        .max("Title".len());

    // Pad before coloring; ANSI escapes would throw off format widths.
    let mut lines = Vec::with_capacity(tasks.len() + 1);
    lines.push(format!(
        "{}       {}  {}  {}",
        format!("{:<18}", "ID").bold(),
        format!("{:<title_width$}", "Title").bold(),
        format!("{:<8}", "Priority").bold(),
        "Due".bold(),
    ));

    for task in tasks {
        let checkbox = if task.completed { "[x]" } else { "[ ]" };
        let priority = colorize_priority(task.priority);
        let due = match task.due_date {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => "-".to_string(),
        };

        let line = if task.is_overdue(today) {
            format!(
                "{:<18}  {}  {:<title_width$}  {:<8}  {} {}",
                task.id,
                checkbox,
                task.title,
                task.priority.as_str(),
                due,
                "(overdue)"
            )
            .red()
            .to_string()
        } else {
            format!(
                "{:<18}  {}  {:<title_width$}  {:<8}  {}",
                task.id, checkbox, task.title, priority, due,
            )
        };
        lines.push(line);
    }

    lines
}

/// Print the total/pending/completed counts.
pub fn render_summary(summary: &Summary) {
    println!("Total: {}", summary.total);
    println!("Pending: {}", summary.pending.to_string().yellow());
    println!("Completed: {}", summary.completed.to_string().green());
}

fn colorize_priority(priority: Priority) -> String {
    match priority {
        Priority::High => format!("{:<8}", "high").red().to_string(),
        Priority::Medium => format!("{:<8}", "medium").yellow().to_string(),
        Priority::Low => format!("{:<8}", "low").green().to_string(),
    }
}
