//! Upcoming-deadline alert derivation.
//!
//! # Invariants
//! - A task qualifies when its deadline is strictly after `today` and
//!   at most [`UPCOMING_WINDOW_DAYS`] out.
//! - No persistence and no dedup across repeated derivations.

use crate::model::task::{Task, TaskId};
use chrono::{Days, NaiveDate};
use std::time::Duration;

/// Selection window for upcoming deadlines.
pub const UPCOMING_WINDOW_DAYS: u64 = 7;

/// How long a derived alert is meant to stay on screen.
pub const ALERT_DISPLAY_WINDOW: Duration = Duration::from_secs(5);

/// One display message for a task due soon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineAlert {
    pub task_id: TaskId,
    pub message: String,
}

/// Selects tasks due strictly within the next seven days and maps
/// them to display messages.
pub fn upcoming_deadline_alerts(tasks: &[Task], today: NaiveDate) -> Vec<DeadlineAlert> {
    let horizon = today
        .checked_add_days(Days::new(UPCOMING_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MAX);

    tasks
        .iter()
        .filter_map(|task| {
            let deadline = task.deadline?;
            if deadline > today && deadline <= horizon {
                Some(DeadlineAlert {
                    task_id: task.id,
                    message: format!(
                        "Task \"{}\" due on {}",
                        task.description,
                        deadline.format("%Y-%m-%d")
                    ),
                })
            } else {
                None
            }
        })
        .collect()
}
