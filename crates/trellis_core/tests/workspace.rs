use trellis_core::{
    ActiveModal, MemoryStorage, Priority, ProjectDraft, ProjectStatus, TaskDraft, User, Workspace,
};
use uuid::Uuid;

fn workspace() -> Workspace<MemoryStorage> {
    Workspace::new(MemoryStorage::default())
}

fn project_draft(title: &str) -> ProjectDraft {
    ProjectDraft {
        title: title.to_string(),
        description: String::new(),
        deadline: None,
        members: Vec::new(),
    }
}

fn task_for(project_id: Uuid, description: &str) -> TaskDraft {
    TaskDraft {
        description: description.to_string(),
        deadline: None,
        priority: Priority::Medium,
        project_id,
        member_ids: Vec::new(),
    }
}

fn status_of(ws: &Workspace<MemoryStorage>, project_id: Uuid) -> ProjectStatus {
    ws.projects()
        .unwrap()
        .into_iter()
        .find(|p| p.id == project_id)
        .expect("project should exist")
        .status
}

#[test]
fn task_mutations_rederive_project_status() {
    let ws = workspace();
    let project = ws.add_project(project_draft("launch")).unwrap();

    let a = ws.add_task(task_for(project.id, "a")).unwrap();
    let b = ws.add_task(task_for(project.id, "b")).unwrap();
    assert_eq!(status_of(&ws, project.id), ProjectStatus::Active);

    ws.complete_task(a.id).unwrap();
    assert_eq!(status_of(&ws, project.id), ProjectStatus::Active);

    ws.complete_task(b.id).unwrap();
    assert_eq!(status_of(&ws, project.id), ProjectStatus::Completed);

    // a new incomplete task reverts the project without any extra call
    ws.add_task(task_for(project.id, "c")).unwrap();
    assert_eq!(status_of(&ws, project.id), ProjectStatus::Active);

    // deleting it completes the set again
    let c = ws
        .tasks()
        .unwrap()
        .into_iter()
        .find(|t| t.description == "c")
        .unwrap();
    ws.delete_task(c.id).unwrap();
    assert_eq!(status_of(&ws, project.id), ProjectStatus::Completed);
}

#[test]
fn starting_a_task_reverts_a_completed_project() {
    let ws = workspace();
    let project = ws.add_project(project_draft("ship")).unwrap();
    let task = ws.add_task(task_for(project.id, "only")).unwrap();

    ws.complete_task(task.id).unwrap();
    assert_eq!(status_of(&ws, project.id), ProjectStatus::Completed);

    ws.start_task(task.id).unwrap();
    assert_eq!(status_of(&ws, project.id), ProjectStatus::Active);
}

#[test]
fn session_lifecycle_through_the_workspace() {
    let ws = workspace();
    assert_eq!(ws.current_auth().unwrap(), None);

    let state = ws
        .login(User {
            id: Uuid::new_v4(),
            name: "sam".to_string(),
            email: None,
            password: "hunter2".to_string(),
        })
        .unwrap();
    assert_eq!(ws.current_auth().unwrap(), Some(state));

    ws.logout().unwrap();
    assert_eq!(ws.current_auth().unwrap(), None);
}

#[test]
fn ui_flags_live_in_memory_only() {
    let storage = MemoryStorage::default();
    let mut ws = Workspace::new(storage.clone());

    ws.ui_mut().toggle_sidebar();
    ws.ui_mut().open_modal(ActiveModal::InviteMember);
    assert!(ws.ui().is_sidebar_collapsed);

    // a fresh workspace over the same storage starts from defaults
    let fresh = Workspace::new(storage);
    assert!(!fresh.ui().is_sidebar_collapsed);
    assert_eq!(fresh.ui().active_modal, None);
}
