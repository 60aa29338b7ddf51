//! Integration tests for the file-backed session store.

use civic_core::error::CivicError;
use civic_core::models::session::SessionUser;
use civic_core::models::user::Role;
use civic_core::repository::{IssueRepository, SessionStore};
use civic_store::{FileSessionStore, StoreConfig, StoreManager};

fn admin() -> SessionUser {
    SessionUser {
        id: 2,
        name: "Admin User".into(),
        email: "admin@city.gov".into(),
        role: Role::Admin,
        token: "dummy-jwt-token-1700000000000".into(),
    }
}

#[tokio::test]
async fn empty_store_has_no_session() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSessionStore::new(dir.path(), "civic_user");
    assert_eq!(store.get().await.unwrap(), None);
}

#[tokio::test]
async fn set_then_get_restores_user() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSessionStore::new(dir.path(), "civic_user");

    store.set(&admin()).await.unwrap();

    // A fresh handle on the same key sees the persisted record.
    let reopened = FileSessionStore::new(dir.path(), "civic_user");
    assert_eq!(reopened.get().await.unwrap(), Some(admin()));
    assert!(reopened.path().ends_with("civic_user.json"));
}

#[tokio::test]
async fn clear_removes_record_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSessionStore::new(dir.path(), "civic_user");

    store.set(&admin()).await.unwrap();
    store.clear().await.unwrap();
    assert_eq!(store.get().await.unwrap(), None);

    store.clear().await.unwrap();
}

#[tokio::test]
async fn set_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSessionStore::new(dir.path().join("nested/deeper"), "civic_user");
    store.set(&admin()).await.unwrap();
    assert!(store.get().await.unwrap().is_some());
}

#[tokio::test]
async fn corrupt_record_is_a_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSessionStore::new(dir.path(), "civic_user");
    tokio::fs::write(store.path(), b"{not json").await.unwrap();

    let err = store.get().await.unwrap_err();
    assert!(matches!(err, CivicError::Storage(_)), "got: {err:?}");
}

#[tokio::test]
async fn manager_wires_configured_stores() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        session_dir: dir.path().to_path_buf(),
        session_key: "custom_key".into(),
        seed_fixtures: false,
    };

    let manager = StoreManager::open(&config).unwrap();

    assert!(manager.sessions().path().ends_with("custom_key.json"));
    assert!(manager.issues().list().await.unwrap().is_empty());
}
