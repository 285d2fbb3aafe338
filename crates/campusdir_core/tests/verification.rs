use campusdir_core::db::open_db_in_memory;
use campusdir_core::{
    NewResource, RepoError, ResourcePatch, ResourceRepository, ResourceValidationError,
    SqliteRecordStore,
};
use std::thread::sleep;
use std::time::Duration;

fn classroom() -> NewResource {
    NewResource {
        name: "Room A".to_string(),
        kind: "classroom".to_string(),
        category: "academic".to_string(),
        wing: None,
        floor: None,
        room: None,
        status: "available".to_string(),
        updated_by: "admin".to_string(),
        owned_by: None,
        stall_number: None,
    }
}

#[test]
fn verify_stamps_actor_and_timestamp() {
    let conn = open_db_in_memory().unwrap();
    let repo = ResourceRepository::new(SqliteRecordStore::new(&conn));

    let created = repo.create(&classroom()).unwrap();
    assert!(!created.is_verified());

    let verified = repo.verify(created.id, "inspector1").unwrap();

    assert_eq!(verified.verified_by.as_deref(), Some("inspector1"));
    let verified_at = verified.verified_at.unwrap();
    assert!(verified_at >= created.last_updated);
    assert_eq!(verified.last_updated, verified_at);
    assert!(verified.is_verified());
}

#[test]
fn reverification_overwrites_prior_verifier() {
    let conn = open_db_in_memory().unwrap();
    let repo = ResourceRepository::new(SqliteRecordStore::new(&conn));

    let created = repo.create(&classroom()).unwrap();
    let first = repo.verify(created.id, "alice").unwrap();

    sleep(Duration::from_millis(2));
    let second = repo.verify(created.id, "bob").unwrap();

    assert_eq!(second.verified_by.as_deref(), Some("bob"));
    assert!(second.verified_at.unwrap() > first.verified_at.unwrap());
}

#[test]
fn verification_is_idempotent_by_actor() {
    let conn = open_db_in_memory().unwrap();
    let repo = ResourceRepository::new(SqliteRecordStore::new(&conn));

    let created = repo.create(&classroom()).unwrap();
    let first = repo.verify(created.id, "alice").unwrap();

    sleep(Duration::from_millis(2));
    let second = repo.verify(created.id, "alice").unwrap();

    assert_eq!(second.verified_by.as_deref(), Some("alice"));
    assert!(second.verified_at.unwrap() > first.verified_at.unwrap());
}

#[test]
fn verify_rejects_blank_actor() {
    let conn = open_db_in_memory().unwrap();
    let repo = ResourceRepository::new(SqliteRecordStore::new(&conn));

    let created = repo.create(&classroom()).unwrap();
    let err = repo.verify(created.id, "  ").unwrap_err();

    assert!(matches!(
        err,
        RepoError::Validation(ResourceValidationError::BlankActor)
    ));

    let loaded = repo.get(created.id).unwrap();
    assert!(!loaded.is_verified());
}

#[test]
fn verify_unknown_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = ResourceRepository::new(SqliteRecordStore::new(&conn));

    let err = repo.verify(404, "inspector1").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(404)));
}

#[test]
fn general_update_leaves_verification_fields_untouched() {
    let conn = open_db_in_memory().unwrap();
    let repo = ResourceRepository::new(SqliteRecordStore::new(&conn));

    let created = repo.create(&classroom()).unwrap();
    assert_eq!(created.status, "available");
    assert_eq!(created.verified_by, None);

    let verified = repo.verify(created.id, "inspector1").unwrap();
    assert_eq!(verified.verified_by.as_deref(), Some("inspector1"));
    assert!(verified.verified_at.is_some());

    let patch = ResourcePatch {
        status: Some("maintenance".to_string()),
        ..ResourcePatch::default()
    };
    let updated = repo.update(created.id, &patch).unwrap();

    assert_eq!(updated.status, "maintenance");
    assert_eq!(updated.verified_by.as_deref(), Some("inspector1"));
    assert_eq!(updated.verified_at, verified.verified_at);
}
