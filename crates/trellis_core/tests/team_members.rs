use trellis_core::{
    MemberDraft, MemberRole, MemoryStorage, Priority, StoreError, TaskDraft, TaskStore, TeamStore,
};
use uuid::Uuid;

fn member_draft(name: &str) -> MemberDraft {
    MemberDraft {
        name: name.to_string(),
        email: None,
        role: MemberRole::Regular,
    }
}

#[test]
fn add_update_remove_lifecycle() {
    let store = TeamStore::new(MemoryStorage::default());

    let mut member = store.add(member_draft("Dana")).unwrap();
    assert_eq!(member.role, MemberRole::Regular);

    member.role = MemberRole::Admin;
    member.email = Some("dana@example.com".to_string());
    store.update(member.clone()).unwrap();

    let all = store.all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], member);

    store.remove(member.id).unwrap();
    assert!(store.all().unwrap().is_empty());

    // unknown ids are a no-op
    store.remove(member.id).unwrap();
}

#[test]
fn update_unknown_member_returns_not_found() {
    let store = TeamStore::new(MemoryStorage::default());
    let mut member = store.add(member_draft("Kim")).unwrap();

    member.id = Uuid::new_v4();
    let err = store.update(member).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[test]
fn duplicate_names_are_allowed() {
    let store = TeamStore::new(MemoryStorage::default());
    let first = store.add(member_draft("Alex")).unwrap();
    let second = store.add(member_draft("Alex")).unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(store.all().unwrap().len(), 2);
}

#[test]
fn empty_name_is_rejected() {
    let store = TeamStore::new(MemoryStorage::default());
    let err = store.add(member_draft(" ")).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
}

// Documents the current behavior: member removal does not cascade into
// task member lists, so the dangling id stays behind.
#[test]
fn removing_a_member_leaves_dangling_task_references() {
    let storage = MemoryStorage::default();
    let team = TeamStore::new(storage.clone());
    let tasks = TaskStore::new(storage);

    let member = team.add(member_draft("Robin")).unwrap();
    let task = tasks
        .add(TaskDraft {
            description: "assigned work".to_string(),
            deadline: None,
            priority: Priority::Medium,
            project_id: Uuid::new_v4(),
            member_ids: vec![member.id],
        })
        .unwrap();

    team.remove(member.id).unwrap();

    let stored = tasks.all().unwrap();
    assert_eq!(stored[0].id, task.id);
    assert!(stored[0].member_ids.contains(&member.id));
}
