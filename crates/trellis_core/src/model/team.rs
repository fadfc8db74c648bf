//! Team member domain model.
//!
//! Member names carry no uniqueness constraint. Removing a member does
//! not retract their id from task/project member lists; readers
//! resolve dangling references to placeholders instead.

use crate::model::DraftValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a team member.
pub type MemberId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Admin,
    Regular,
}

/// Canonical member record as persisted under the `teamMembers` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: MemberId,
    pub name: String,
    pub email: Option<String>,
    pub role: MemberRole,
    pub joined_at: DateTime<Utc>,
}

/// Caller-supplied payload for member creation, missing the
/// store-assigned fields (`id`, `joined_at`).
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDraft {
    pub name: String,
    pub email: Option<String>,
    pub role: MemberRole,
}

impl MemberDraft {
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if self.name.trim().is_empty() {
            return Err(DraftValidationError::EmptyName);
        }
        Ok(())
    }
}

impl TeamMember {
    /// Materializes a member from a draft with a fresh stable id and
    /// join timestamp.
    pub fn from_draft(draft: MemberDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            email: draft.email,
            role: draft.role,
            joined_at: Utc::now(),
        }
    }
}
