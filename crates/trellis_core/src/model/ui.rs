//! In-memory UI flags. Never persisted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActiveModal {
    CreateProject,
    InviteMember,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    pub is_sidebar_collapsed: bool,
    pub active_modal: Option<ActiveModal>,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.is_sidebar_collapsed = !self.is_sidebar_collapsed;
    }

    pub fn open_modal(&mut self, modal: ActiveModal) {
        self.active_modal = Some(modal);
    }

    pub fn close_modal(&mut self) {
        self.active_modal = None;
    }
}
