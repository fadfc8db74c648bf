//! Session authentication model.
//!
//! The password is stored in plaintext, faithfully carried over from
//! the original application. Known weak point; do not extend.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub password: String,
}

/// Ephemeral session wrapper persisted under the session-scoped
/// `authentication` key; absent when logged out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    pub user: User,
}
