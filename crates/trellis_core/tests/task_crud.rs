use std::collections::HashSet;
use trellis_core::{
    MemoryStorage, Priority, StoreError, TaskDraft, TaskStatus, TaskStore,
};
use uuid::Uuid;

fn draft(description: &str) -> TaskDraft {
    TaskDraft {
        description: description.to_string(),
        deadline: None,
        priority: Priority::Medium,
        project_id: Uuid::new_v4(),
        member_ids: Vec::new(),
    }
}

#[test]
fn add_assigns_todo_status_and_fresh_ids() {
    let store = TaskStore::new(MemoryStorage::default());

    let first = store.add(draft("write report")).unwrap();
    let second = store.add(draft("review report")).unwrap();
    let third = store.add(draft("ship report")).unwrap();

    assert_eq!(first.status, TaskStatus::Todo);
    assert_eq!(second.status, TaskStatus::Todo);

    let ids: HashSet<_> = [first.id, second.id, third.id].into_iter().collect();
    assert_eq!(ids.len(), 3, "rapid successive adds must not collide");
}

#[test]
fn mutations_persist_the_full_collection() {
    let storage = MemoryStorage::default();
    let store = TaskStore::new(storage.clone());

    let task = store.add(draft("persisted")).unwrap();

    let reread = TaskStore::new(storage);
    let all = reread.all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], task);
}

#[test]
fn update_replaces_by_id_in_full() {
    let store = TaskStore::new(MemoryStorage::default());
    let mut task = store.add(draft("original")).unwrap();

    task.description = "rewritten".to_string();
    task.priority = Priority::High;
    store.update(task.clone()).unwrap();

    let all = store.all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], task);
}

#[test]
fn update_unknown_id_returns_not_found() {
    let store = TaskStore::new(MemoryStorage::default());
    let mut task = store.add(draft("known")).unwrap();

    task.id = Uuid::new_v4();
    let err = store.update(task.clone()).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == task.id));
}

#[test]
fn delete_removes_and_is_idempotent() {
    let store = TaskStore::new(MemoryStorage::default());
    let task = store.add(draft("short-lived")).unwrap();

    store.delete(task.id).unwrap();
    assert!(store.all().unwrap().is_empty());

    store.delete(task.id).unwrap();
    assert!(store.all().unwrap().is_empty());
}

#[test]
fn status_transitions_update_only_the_status() {
    let store = TaskStore::new(MemoryStorage::default());
    let task = store.add(draft("lifecycle")).unwrap();

    store.mark_in_progress(task.id).unwrap();
    assert_eq!(store.all().unwrap()[0].status, TaskStatus::InProgress);

    store.mark_complete(task.id).unwrap();
    let stored = &store.all().unwrap()[0];
    assert_eq!(stored.status, TaskStatus::Completed);
    assert_eq!(stored.description, task.description);

    let err = store.mark_complete(Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[test]
fn empty_description_is_rejected() {
    let store = TaskStore::new(MemoryStorage::default());
    let err = store.add(draft("   ")).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert!(store.all().unwrap().is_empty());
}
