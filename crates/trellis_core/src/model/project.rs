//! Project domain model.
//!
//! # Invariants
//! - `status` is derived from task completion, not freely settable:
//!   a non-empty, fully-completed task set makes a project
//!   `completed`; a `completed` project reverts to `active` otherwise.
//! - Derivation never produces `archived`.

use crate::model::DraftValidationError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a project.
pub type ProjectId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
    Archived,
}

/// Canonical project record as persisted under the `projects` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub deadline: Option<NaiveDate>,
    /// Member references. Dangling ids are tolerated on read.
    pub members: Vec<Uuid>,
}

/// Caller-supplied payload for project creation, missing the
/// store-assigned fields (`id`, `created_at`, `status`).
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub deadline: Option<NaiveDate>,
    pub members: Vec<Uuid>,
}

impl ProjectDraft {
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if self.title.trim().is_empty() {
            return Err(DraftValidationError::EmptyTitle);
        }
        Ok(())
    }
}

impl Project {
    /// Materializes a project from a draft with a fresh stable id,
    /// creation timestamp, and `status = active`.
    pub fn from_draft(draft: ProjectDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            status: ProjectStatus::Active,
            created_at: Utc::now(),
            deadline: draft.deadline,
            members: draft.members,
        }
    }
}
