//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `trellis_core` wiring:
//!   seed an in-memory workspace and print the derived project status.
//! - Keep output deterministic for quick local sanity checks.

use std::error::Error;
use trellis_core::{MemoryStorage, Priority, ProjectDraft, TaskDraft, Workspace};

fn main() -> Result<(), Box<dyn Error>> {
    println!("trellis_core version={}", trellis_core::core_version());

    let workspace = Workspace::new(MemoryStorage::default());

    let project = workspace.add_project(ProjectDraft {
        title: "smoke".to_string(),
        description: "cli probe".to_string(),
        deadline: None,
        members: Vec::new(),
    })?;

    let task = workspace.add_task(TaskDraft {
        description: "verify wiring".to_string(),
        deadline: None,
        priority: Priority::Medium,
        project_id: project.id,
        member_ids: Vec::new(),
    })?;
    workspace.complete_task(task.id)?;

    let projects = workspace.projects()?;
    let status = projects
        .first()
        .map(|p| format!("{:?}", p.status))
        .unwrap_or_else(|| "missing".to_string());
    println!("projects={} tasks=1 derived_status={status}", projects.len());

    Ok(())
}
