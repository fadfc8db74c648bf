//! Task domain model.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `status` starts as `todo`; only the store transitions it.
//! - `project_id` must reference an existing project at creation time
//!   (caller-enforced, as in the original UI).

use crate::model::DraftValidationError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Completed,
}

/// Task urgency level with a fixed numeric ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Numeric rank used by the read-side sort order (high=3, low=1).
    pub fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

/// Canonical task record as persisted under the `tasks` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    /// Due date; tasks without one sort before all dated tasks.
    pub deadline: Option<NaiveDate>,
    pub priority: Priority,
    /// Owning project reference; exactly one per task.
    pub project_id: Uuid,
    /// Assigned member references. Dangling ids are tolerated on read.
    pub member_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub status: TaskStatus,
}

/// Caller-supplied payload for task creation, missing the
/// store-assigned fields (`id`, `created_at`, `status`).
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub description: String,
    pub deadline: Option<NaiveDate>,
    pub priority: Priority,
    pub project_id: Uuid,
    pub member_ids: Vec<Uuid>,
}

impl TaskDraft {
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if self.description.trim().is_empty() {
            return Err(DraftValidationError::EmptyDescription);
        }
        Ok(())
    }
}

impl Task {
    /// Materializes a task from a draft with a fresh stable id,
    /// creation timestamp, and `status = todo`.
    pub fn from_draft(draft: TaskDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: draft.description,
            deadline: draft.deadline,
            priority: draft.priority,
            project_id: draft.project_id,
            member_ids: draft.member_ids,
            created_at: Utc::now(),
            status: TaskStatus::Todo,
        }
    }
}
