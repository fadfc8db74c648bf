//! Workspace use-case service.
//!
//! # Responsibility
//! - Own the three collection stores, the auth session, and the
//!   in-memory UI flags behind one injected-state handle.
//! - Re-derive every project's status after each task mutation, so
//!   callers cannot forget the recomputation.
//!
//! # Invariants
//! - The task write and the dependent project-status writes remain
//!   separate persisted operations (no cross-collection transaction).

use crate::model::auth::{AuthState, User};
use crate::model::project::{Project, ProjectDraft, ProjectId, ProjectStatus};
use crate::model::task::{Task, TaskDraft, TaskId};
use crate::model::team::{MemberDraft, MemberId, TeamMember};
use crate::model::ui::UiState;
use crate::storage::{MemoryStorage, Storage};
use crate::store::auth::AuthSession;
use crate::store::project_store::ProjectStore;
use crate::store::task_store::TaskStore;
use crate::store::team_store::TeamStore;
use crate::store::StoreResult;

/// Application state handle over a shared storage backend.
///
/// The collection stores share clones of the persistent backend; the
/// auth session uses a separate, session-scoped backend.
pub struct Workspace<S: Storage + Clone, A: Storage = MemoryStorage> {
    tasks: TaskStore<S>,
    projects: ProjectStore<S>,
    team: TeamStore<S>,
    session: AuthSession<A>,
    ui: UiState,
}

impl<S: Storage + Clone> Workspace<S, MemoryStorage> {
    /// Creates a workspace with a process-lifetime session scope.
    pub fn new(storage: S) -> Self {
        Self::with_session(storage, MemoryStorage::default())
    }
}

impl<S: Storage + Clone, A: Storage> Workspace<S, A> {
    /// Creates a workspace with an explicit session backend.
    pub fn with_session(storage: S, session: A) -> Self {
        Self {
            tasks: TaskStore::new(storage.clone()),
            projects: ProjectStore::new(storage.clone()),
            team: TeamStore::new(storage),
            session: AuthSession::new(session),
            ui: UiState::default(),
        }
    }

    // Tasks. Every mutation re-derives all project statuses.

    pub fn add_task(&self, draft: TaskDraft) -> StoreResult<Task> {
        let task = self.tasks.add(draft)?;
        self.refresh_project_statuses()?;
        Ok(task)
    }

    pub fn update_task(&self, task: Task) -> StoreResult<()> {
        self.tasks.update(task)?;
        self.refresh_project_statuses()
    }

    pub fn delete_task(&self, id: TaskId) -> StoreResult<()> {
        self.tasks.delete(id)?;
        self.refresh_project_statuses()
    }

    pub fn complete_task(&self, id: TaskId) -> StoreResult<()> {
        self.tasks.mark_complete(id)?;
        self.refresh_project_statuses()
    }

    pub fn start_task(&self, id: TaskId) -> StoreResult<()> {
        self.tasks.mark_in_progress(id)?;
        self.refresh_project_statuses()
    }

    pub fn tasks(&self) -> StoreResult<Vec<Task>> {
        self.tasks.all()
    }

    // Projects.

    pub fn add_project(&self, draft: ProjectDraft) -> StoreResult<Project> {
        self.projects.add(draft)
    }

    pub fn update_project(&self, project: Project) -> StoreResult<()> {
        self.projects.update(project)
    }

    pub fn delete_project(&self, id: ProjectId) -> StoreResult<()> {
        self.projects.delete(id)
    }

    pub fn derive_project_status(&self, id: ProjectId) -> StoreResult<Option<ProjectStatus>> {
        let tasks = self.tasks.all()?;
        self.projects.derive_status(id, &tasks)
    }

    pub fn projects(&self) -> StoreResult<Vec<Project>> {
        self.projects.all()
    }

    // Team.

    pub fn add_member(&self, draft: MemberDraft) -> StoreResult<TeamMember> {
        self.team.add(draft)
    }

    pub fn update_member(&self, member: TeamMember) -> StoreResult<()> {
        self.team.update(member)
    }

    pub fn remove_member(&self, id: MemberId) -> StoreResult<()> {
        self.team.remove(id)
    }

    pub fn team_members(&self) -> StoreResult<Vec<TeamMember>> {
        self.team.all()
    }

    // Session and UI flags.

    pub fn login(&self, user: User) -> StoreResult<AuthState> {
        self.session.login(user)
    }

    pub fn current_auth(&self) -> StoreResult<Option<AuthState>> {
        self.session.current()
    }

    pub fn logout(&self) -> StoreResult<()> {
        self.session.logout()
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut UiState {
        &mut self.ui
    }

    fn refresh_project_statuses(&self) -> StoreResult<()> {
        let tasks = self.tasks.all()?;
        for project in self.projects.all()? {
            self.projects.derive_status(project.id, &tasks)?;
        }
        Ok(())
    }
}
