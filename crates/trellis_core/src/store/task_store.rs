//! Task collection store.
//!
//! # Invariants
//! - Every mutation rewrites the full `tasks` collection afterward.
//! - `add` assigns id, creation timestamp, and `status = todo`.
//! - `update` and the status transitions require an existing id;
//!   `delete` is idempotent.

use crate::model::task::{Task, TaskDraft, TaskId, TaskStatus};
use crate::storage::Storage;
use crate::store::{load_collection, save_collection, StoreError, StoreResult, TASKS_KEY};
use log::info;

pub struct TaskStore<S: Storage> {
    storage: S,
}

impl<S: Storage> TaskStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Loads the stored collection in insertion order.
    pub fn all(&self) -> StoreResult<Vec<Task>> {
        load_collection(&self.storage, TASKS_KEY)
    }

    /// Validates the draft, materializes a task and persists it.
    pub fn add(&self, draft: TaskDraft) -> StoreResult<Task> {
        draft.validate()?;
        let task = Task::from_draft(draft);
        let mut tasks = self.all()?;
        tasks.push(task.clone());
        save_collection(&self.storage, TASKS_KEY, &tasks)?;
        info!(
            "event=task_add module=store status=ok task_id={} project_id={}",
            task.id, task.project_id
        );
        Ok(task)
    }

    /// Replaces the stored task with the same id in full.
    pub fn update(&self, task: Task) -> StoreResult<()> {
        let mut tasks = self.all()?;
        let slot = tasks
            .iter_mut()
            .find(|stored| stored.id == task.id)
            .ok_or(StoreError::NotFound(task.id))?;
        *slot = task;
        save_collection(&self.storage, TASKS_KEY, &tasks)
    }

    /// Removes the task if present. Removing an unknown id is a no-op;
    /// the resulting collection is persisted either way.
    pub fn delete(&self, id: TaskId) -> StoreResult<()> {
        let mut tasks = self.all()?;
        tasks.retain(|task| task.id != id);
        save_collection(&self.storage, TASKS_KEY, &tasks)
    }

    /// Sets `status = completed`.
    pub fn mark_complete(&self, id: TaskId) -> StoreResult<()> {
        self.set_status(id, TaskStatus::Completed)
    }

    /// Sets `status = in-progress`.
    pub fn mark_in_progress(&self, id: TaskId) -> StoreResult<()> {
        self.set_status(id, TaskStatus::InProgress)
    }

    fn set_status(&self, id: TaskId, status: TaskStatus) -> StoreResult<()> {
        let mut tasks = self.all()?;
        let task = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))?;
        task.status = status;
        save_collection(&self.storage, TASKS_KEY, &tasks)
    }
}
