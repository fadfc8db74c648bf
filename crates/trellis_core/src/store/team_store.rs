//! Team member collection store.
//!
//! No referential-integrity cascade: removing a member leaves their id
//! in existing task/project member lists. Readers resolve those
//! through the placeholder helpers in `query::stats`.

use crate::model::team::{MemberDraft, MemberId, TeamMember};
use crate::storage::Storage;
use crate::store::{load_collection, save_collection, StoreError, StoreResult, TEAM_MEMBERS_KEY};
use log::info;

pub struct TeamStore<S: Storage> {
    storage: S,
}

impl<S: Storage> TeamStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn all(&self) -> StoreResult<Vec<TeamMember>> {
        load_collection(&self.storage, TEAM_MEMBERS_KEY)
    }

    /// Validates the draft, materializes a member and persists it.
    pub fn add(&self, draft: MemberDraft) -> StoreResult<TeamMember> {
        draft.validate()?;
        let member = TeamMember::from_draft(draft);
        let mut members = self.all()?;
        members.push(member.clone());
        save_collection(&self.storage, TEAM_MEMBERS_KEY, &members)?;
        info!(
            "event=member_add module=store status=ok member_id={}",
            member.id
        );
        Ok(member)
    }

    /// Replaces the stored member with the same id in full.
    pub fn update(&self, member: TeamMember) -> StoreResult<()> {
        let mut members = self.all()?;
        let slot = members
            .iter_mut()
            .find(|stored| stored.id == member.id)
            .ok_or(StoreError::NotFound(member.id))?;
        *slot = member;
        save_collection(&self.storage, TEAM_MEMBERS_KEY, &members)
    }

    /// Removes the member if present; idempotent for unknown ids.
    pub fn remove(&self, id: MemberId) -> StoreResult<()> {
        let mut members = self.all()?;
        members.retain(|member| member.id != id);
        save_collection(&self.storage, TEAM_MEMBERS_KEY, &members)
    }
}
