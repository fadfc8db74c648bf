//! Domain models for projects, tasks, team members and sessions.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep wire names identical to the original storage format
//!   (`camelCase` fields, `kebab-case` status values).
//!
//! # Invariants
//! - Every entity is identified by a stable v4 UUID assigned at
//!   creation, never by the caller's draft.
//! - Drafts are validated before an entity is materialized from them.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod auth;
pub mod project;
pub mod task;
pub mod team;
pub mod ui;

/// Validation error for entity drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftValidationError {
    /// Project draft has an empty title.
    EmptyTitle,
    /// Task draft has an empty description.
    EmptyDescription,
    /// Member draft has an empty name.
    EmptyName,
}

impl Display for DraftValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "project title must not be empty"),
            Self::EmptyDescription => write!(f, "task description must not be empty"),
            Self::EmptyName => write!(f, "member name must not be empty"),
        }
    }
}

impl Error for DraftValidationError {}
