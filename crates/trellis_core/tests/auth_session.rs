use trellis_core::storage::Storage;
use trellis_core::{AuthSession, MemoryStorage, User};
use uuid::Uuid;

fn user(name: &str) -> User {
    User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: Some(format!("{name}@example.com")),
        password: "hunter2".to_string(),
    }
}

#[test]
fn login_persists_and_current_reads_back() {
    let storage = MemoryStorage::default();
    let session = AuthSession::new(storage.clone());

    let state = session.login(user("sam")).unwrap();
    assert_eq!(session.current().unwrap(), Some(state));

    // the session key holds the serialized state
    assert!(storage.get_item("authentication").unwrap().is_some());
}

#[test]
fn logout_destroys_the_session_and_is_idempotent() {
    let storage = MemoryStorage::default();
    let session = AuthSession::new(storage.clone());

    session.login(user("sam")).unwrap();
    session.logout().unwrap();

    assert_eq!(session.current().unwrap(), None);
    assert_eq!(storage.get_item("authentication").unwrap(), None);

    session.logout().unwrap();
    assert_eq!(session.current().unwrap(), None);
}

#[test]
fn malformed_session_content_reads_as_logged_out() {
    let storage = MemoryStorage::default();
    storage.set_item("authentication", "{not json").unwrap();

    let session = AuthSession::new(storage);
    assert_eq!(session.current().unwrap(), None);
}
