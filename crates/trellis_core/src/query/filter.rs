//! Task ordering and filtering.
//!
//! # Invariants
//! - Order is priority descending (high=3, low=1), then deadline
//!   ascending with missing deadlines sorting earliest.
//! - Filtering is a read-side computation; the stored order is never
//!   rewritten.

use crate::model::task::{Priority, Task, TaskStatus};
use crate::model::team::MemberId;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Consumer-facing task order: priority descending, then deadline
/// ascending. Tasks without a deadline sort as earliest.
pub fn task_order(a: &Task, b: &Task) -> Ordering {
    b.priority
        .rank()
        .cmp(&a.priority.rank())
        .then_with(|| deadline_key(a).cmp(&deadline_key(b)))
}

fn deadline_key(task: &Task) -> NaiveDate {
    task.deadline.unwrap_or(NaiveDate::MIN)
}

/// Returns the tasks in consumer order.
pub fn sorted_tasks(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.sort_by(task_order);
    tasks
}

/// Read-side task filter. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Case-insensitive substring match on the description.
    pub search: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    /// Matches tasks whose `member_ids` contain this assignee.
    pub member: Option<MemberId>,
    /// Inclusive due-date range. Tasks without a deadline pass both
    /// bounds, as in the original.
    pub due_after: Option<NaiveDate>,
    pub due_before: Option<NaiveDate>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !task.description.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if self.status.is_some_and(|status| status != task.status) {
            return false;
        }
        if self
            .priority
            .is_some_and(|priority| priority != task.priority)
        {
            return false;
        }
        if self
            .member
            .is_some_and(|member| !task.member_ids.contains(&member))
        {
            return false;
        }
        if let Some(deadline) = task.deadline {
            if self.due_after.is_some_and(|start| deadline < start) {
                return false;
            }
            if self.due_before.is_some_and(|end| deadline > end) {
                return false;
            }
        }
        true
    }
}

/// Applies the filter, preserving input order.
pub fn filter_tasks(tasks: &[Task], filter: &TaskFilter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| filter.matches(task))
        .cloned()
        .collect()
}
