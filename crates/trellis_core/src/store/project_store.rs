//! Project collection store and status derivation.
//!
//! # Invariants
//! - Every mutation rewrites the full `projects` collection afterward,
//!   except `derive_status`, which persists only on change.
//! - Derivation is caller-invoked; it is not triggered by task
//!   mutations at this layer (the workspace service wires that up).

use crate::model::project::{Project, ProjectDraft, ProjectId, ProjectStatus};
use crate::model::task::{Task, TaskStatus};
use crate::storage::Storage;
use crate::store::{load_collection, save_collection, StoreError, StoreResult, PROJECTS_KEY};
use log::info;

pub struct ProjectStore<S: Storage> {
    storage: S,
}

impl<S: Storage> ProjectStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn all(&self) -> StoreResult<Vec<Project>> {
        load_collection(&self.storage, PROJECTS_KEY)
    }

    /// Validates the draft, materializes an `active` project and
    /// persists it.
    pub fn add(&self, draft: ProjectDraft) -> StoreResult<Project> {
        draft.validate()?;
        let project = Project::from_draft(draft);
        let mut projects = self.all()?;
        projects.push(project.clone());
        save_collection(&self.storage, PROJECTS_KEY, &projects)?;
        info!(
            "event=project_add module=store status=ok project_id={}",
            project.id
        );
        Ok(project)
    }

    /// Replaces the stored project with the same id in full.
    pub fn update(&self, project: Project) -> StoreResult<()> {
        let mut projects = self.all()?;
        let slot = projects
            .iter_mut()
            .find(|stored| stored.id == project.id)
            .ok_or(StoreError::NotFound(project.id))?;
        *slot = project;
        save_collection(&self.storage, PROJECTS_KEY, &projects)
    }

    /// Removes the project if present; idempotent for unknown ids.
    pub fn delete(&self, id: ProjectId) -> StoreResult<()> {
        let mut projects = self.all()?;
        projects.retain(|project| project.id != id);
        save_collection(&self.storage, PROJECTS_KEY, &projects)
    }

    /// Recomputes the project's status from its tasks.
    ///
    /// A non-empty task set that is 100% `completed` promotes the
    /// project to `completed`; otherwise a currently-`completed`
    /// project reverts to `active`. An `archived` project with an
    /// incomplete task set is left alone, and derivation never
    /// produces `archived`.
    ///
    /// Persists only on change. Returns the new status when the
    /// project changed, `None` otherwise (including for unknown ids).
    pub fn derive_status(
        &self,
        project_id: ProjectId,
        tasks: &[Task],
    ) -> StoreResult<Option<ProjectStatus>> {
        let mut projects = self.all()?;
        let Some(project) = projects.iter_mut().find(|p| p.id == project_id) else {
            return Ok(None);
        };

        let mut project_tasks = tasks.iter().filter(|t| t.project_id == project_id);
        let has_tasks = project_tasks.clone().next().is_some();
        let all_completed = has_tasks && project_tasks.all(|t| t.status == TaskStatus::Completed);

        let next = if all_completed && project.status != ProjectStatus::Completed {
            Some(ProjectStatus::Completed)
        } else if !all_completed && project.status == ProjectStatus::Completed {
            Some(ProjectStatus::Active)
        } else {
            None
        };

        if let Some(status) = next {
            project.status = status;
            save_collection(&self.storage, PROJECTS_KEY, &projects)?;
            info!(
                "event=project_status module=store status=ok project_id={project_id} derived={status:?}"
            );
        }

        Ok(next)
    }
}
