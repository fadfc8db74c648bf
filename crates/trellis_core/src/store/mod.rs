//! Collection stores over key-value storage.
//!
//! # Responsibility
//! - Provide CRUD entry points for the three persisted collections and
//!   the session-scoped authentication state.
//! - Persist the full resulting collection after every mutation.
//!
//! # Invariants
//! - Stores hold an injected `Storage` handle; no ambient globals.
//! - Malformed stored content is logged and read as an empty
//!   collection, never repaired and never fatal.

use crate::model::DraftValidationError;
use crate::storage::{Storage, StorageError};
use log::error;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod auth;
pub mod project_store;
pub mod task_store;
pub mod team_store;

/// Persistent storage keys, one JSON array per collection.
pub const PROJECTS_KEY: &str = "projects";
pub const TASKS_KEY: &str = "tasks";
pub const TEAM_MEMBERS_KEY: &str = "teamMembers";
/// Session-scoped key holding the serialized auth state.
pub const AUTH_KEY: &str = "authentication";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for collection mutations and reads.
#[derive(Debug)]
pub enum StoreError {
    Validation(DraftValidationError),
    Storage(StorageError),
    NotFound(Uuid),
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "entity not found: {id}"),
            Self::Encode(err) => write!(f, "failed to encode collection: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<DraftValidationError> for StoreError {
    fn from(value: DraftValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Loads a collection from its storage key.
///
/// A missing key yields an empty collection. Malformed content is
/// logged and also yields an empty collection, per the degradation
/// policy.
pub(crate) fn load_collection<T, S>(storage: &S, key: &str) -> StoreResult<Vec<T>>
where
    T: DeserializeOwned,
    S: Storage,
{
    let Some(raw) = storage.get_item(key)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(err) => {
            error!("event=storage_decode module=store status=error key={key} error={err}");
            Ok(Vec::new())
        }
    }
}

/// Serializes and writes the full collection to its storage key.
pub(crate) fn save_collection<T, S>(storage: &S, key: &str, items: &[T]) -> StoreResult<()>
where
    T: Serialize,
    S: Storage,
{
    let raw = serde_json::to_string(items).map_err(StoreError::Encode)?;
    storage.set_item(key, &raw)?;
    Ok(())
}
