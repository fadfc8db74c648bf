//! Dashboard aggregates and join placeholders.
//!
//! Missing referenced entities resolve to placeholder strings rather
//! than errors; the application degrades instead of failing.

use crate::model::project::{Project, ProjectId};
use crate::model::task::{Task, TaskStatus};
use crate::model::team::{MemberId, TeamMember};

/// Placeholder for a dangling project reference.
pub const UNKNOWN_PROJECT: &str = "Unknown";
/// Placeholder for a missing or dangling assignee reference.
pub const UNASSIGNED_MEMBER: &str = "Unassigned";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardTotals {
    pub projects: usize,
    pub tasks: usize,
    pub members: usize,
}

/// Headline counters shown on the dashboard.
pub fn totals(projects: &[Project], tasks: &[Task], members: &[TeamMember]) -> DashboardTotals {
    DashboardTotals {
        projects: projects.len(),
        tasks: tasks.len(),
        members: members.len(),
    }
}

/// One bar of the tasks-per-member chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberTaskLoad {
    pub member_id: MemberId,
    pub name: String,
    pub tasks: usize,
}

/// Counts, per member, the tasks whose assignee list contains them.
pub fn tasks_per_member(members: &[TeamMember], tasks: &[Task]) -> Vec<MemberTaskLoad> {
    members
        .iter()
        .map(|member| MemberTaskLoad {
            member_id: member.id,
            name: member.name.clone(),
            tasks: tasks
                .iter()
                .filter(|task| task.member_ids.contains(&member.id))
                .count(),
        })
        .collect()
}

/// One bar of the project-progress chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectProgress {
    pub project_id: ProjectId,
    pub title: String,
    /// Rounded percentage of completed tasks; 0 for task-less projects.
    pub percent_complete: u8,
}

/// Computes per-project completion percentages.
pub fn project_progress(projects: &[Project], tasks: &[Task]) -> Vec<ProjectProgress> {
    projects
        .iter()
        .map(|project| {
            let project_tasks: Vec<&Task> = tasks
                .iter()
                .filter(|task| task.project_id == project.id)
                .collect();
            let completed = project_tasks
                .iter()
                .filter(|task| task.status == TaskStatus::Completed)
                .count();
            let percent_complete = if project_tasks.is_empty() {
                0
            } else {
                ((completed * 100) as f64 / project_tasks.len() as f64).round() as u8
            };
            ProjectProgress {
                project_id: project.id,
                title: project.title.clone(),
                percent_complete,
            }
        })
        .collect()
}

/// Resolves a task's project title, substituting [`UNKNOWN_PROJECT`]
/// for a dangling reference.
pub fn project_title(projects: &[Project], project_id: ProjectId) -> &str {
    projects
        .iter()
        .find(|project| project.id == project_id)
        .map(|project| project.title.as_str())
        .unwrap_or(UNKNOWN_PROJECT)
}

/// Resolves a task's assignee names. An empty assignee list and any
/// dangling member id both render as [`UNASSIGNED_MEMBER`].
pub fn assignee_names(members: &[TeamMember], task: &Task) -> Vec<String> {
    if task.member_ids.is_empty() {
        return vec![UNASSIGNED_MEMBER.to_string()];
    }
    task.member_ids
        .iter()
        .map(|member_id| {
            members
                .iter()
                .find(|member| member.id == *member_id)
                .map(|member| member.name.clone())
                .unwrap_or_else(|| UNASSIGNED_MEMBER.to_string())
        })
        .collect()
}
