//! Core domain logic for Trellis.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod route;
pub mod service;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::auth::{AuthState, User};
pub use model::project::{Project, ProjectDraft, ProjectId, ProjectStatus};
pub use model::task::{Priority, Task, TaskDraft, TaskId, TaskStatus};
pub use model::team::{MemberDraft, MemberId, MemberRole, TeamMember};
pub use model::ui::{ActiveModal, UiState};
pub use model::DraftValidationError;
pub use query::filter::{filter_tasks, sorted_tasks, task_order, TaskFilter};
pub use query::notify::{
    upcoming_deadline_alerts, DeadlineAlert, ALERT_DISPLAY_WINDOW, UPCOMING_WINDOW_DAYS,
};
pub use query::stats::{
    assignee_names, project_progress, project_title, tasks_per_member, totals, DashboardTotals,
    MemberTaskLoad, ProjectProgress,
};
pub use route::Route;
pub use service::workspace::Workspace;
pub use storage::{MemoryStorage, SqliteStorage, Storage, StorageError};
pub use store::auth::AuthSession;
pub use store::project_store::ProjectStore;
pub use store::task_store::TaskStore;
pub use store::team_store::TeamStore;
pub use store::{StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
