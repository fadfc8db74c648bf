//! Session-scoped authentication state.
//!
//! Lifecycle: created on login, persisted under the session key,
//! destroyed on logout or session end. Session scope is modeled by the
//! backend choice; an in-memory backend lives for the process.

use crate::model::auth::{AuthState, User};
use crate::storage::Storage;
use crate::store::{StoreError, StoreResult, AUTH_KEY};
use log::{error, info};

pub struct AuthSession<S: Storage> {
    storage: S,
}

impl<S: Storage> AuthSession<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Creates and persists a session for the given user.
    pub fn login(&self, user: User) -> StoreResult<AuthState> {
        let state = AuthState { user };
        let raw = serde_json::to_string(&state).map_err(StoreError::Encode)?;
        self.storage.set_item(AUTH_KEY, &raw)?;
        info!(
            "event=login module=auth status=ok user_id={}",
            state.user.id
        );
        Ok(state)
    }

    /// Reads the current session, if any.
    ///
    /// Malformed stored content is logged and read as logged-out.
    pub fn current(&self) -> StoreResult<Option<AuthState>> {
        let Some(raw) = self.storage.get_item(AUTH_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(state) => Ok(Some(state)),
            Err(err) => {
                error!("event=storage_decode module=auth status=error key={AUTH_KEY} error={err}");
                Ok(None)
            }
        }
    }

    /// Destroys the session. Idempotent.
    pub fn logout(&self) -> StoreResult<()> {
        self.storage.remove_item(AUTH_KEY)?;
        info!("event=logout module=auth status=ok");
        Ok(())
    }
}
