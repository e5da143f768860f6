//! End-to-end tests for the account store: bootstrap, credential checks,
//! role management, and deletion, each against a fresh on-disk database.

use std::path::{Path, PathBuf};

use eyeshield_core::config::SecurityConfig;
use eyeshield_core::db::Store;
use eyeshield_core::models::Role;
use eyeshield_core::services::{SeaOrmUserService, UserService};

/// Low-cost Argon2 params so the suite stays fast.
fn test_security() -> SecurityConfig {
    SecurityConfig {
        argon2_memory_cost_kib: 1024,
        argon2_time_cost: 1,
        argon2_parallelism: 1,
    }
}

fn temp_db_path() -> PathBuf {
    std::env::temp_dir().join(format!("eyeshield-test-{}.db", uuid::Uuid::new_v4()))
}

async fn open_service_at(db_path: &Path) -> SeaOrmUserService {
    let store = Store::with_pool_options(&format!("sqlite:{}", db_path.display()), 1, 1)
        .await
        .expect("failed to open store");

    SeaOrmUserService::with_security(store, test_security())
}

async fn fresh_service() -> (SeaOrmUserService, PathBuf) {
    let db_path = temp_db_path();
    let service = open_service_at(&db_path).await;
    (service, db_path)
}

fn cleanup(db_path: &Path) {
    let _ = std::fs::remove_file(db_path);
}

#[tokio::test]
async fn bootstrap_seeds_exactly_one_default_admin() {
    let (service, db_path) = fresh_service().await;

    let users = service.get_all_users().await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "admin");
    assert_eq!(users[0].role, Role::Admin);

    assert_eq!(
        service.verify_user("admin", "admin123").await,
        Some(Role::Admin)
    );
    assert_eq!(service.verify_user("admin", "wrong").await, None);

    cleanup(&db_path);
}

#[tokio::test]
async fn create_then_verify_returns_the_granted_role() {
    let (service, db_path) = fresh_service().await;

    assert!(service.create_user("bob", "hunter2", Role::Viewer).await);
    assert_eq!(
        service.verify_user("bob", "hunter2").await,
        Some(Role::Viewer)
    );

    // Role::default covers the "role omitted" case of the desktop frontend.
    assert!(service.create_user("carol", "pw", Role::default()).await);
    assert_eq!(
        service.verify_user("carol", "pw").await,
        Some(Role::Clinician)
    );

    cleanup(&db_path);
}

#[tokio::test]
async fn duplicate_username_leaves_existing_row_untouched() {
    let (service, db_path) = fresh_service().await;

    assert!(service.create_user("alice", "first-pw", Role::Clinician).await);
    assert!(!service.create_user("alice", "second-pw", Role::Admin).await);

    // Original credentials and role survive the rejected insert.
    assert_eq!(
        service.verify_user("alice", "first-pw").await,
        Some(Role::Clinician)
    );
    assert_eq!(service.verify_user("alice", "second-pw").await, None);

    cleanup(&db_path);
}

#[tokio::test]
async fn wrong_passwords_never_match() {
    let (service, db_path) = fresh_service().await;

    assert!(service.create_user("dana", "correct-horse", Role::Viewer).await);

    for wrong in ["correct-hors", "correct-horse ", "CORRECT-HORSE", "x"] {
        assert_eq!(service.verify_user("dana", wrong).await, None);
    }

    cleanup(&db_path);
}

#[tokio::test]
async fn unknown_username_is_no_match() {
    let (service, db_path) = fresh_service().await;

    assert_eq!(service.verify_user("nobody", "anything").await, None);

    cleanup(&db_path);
}

#[tokio::test]
async fn role_update_shows_up_in_listing() {
    let (service, db_path) = fresh_service().await;

    assert!(service.create_user("erin", "pw", Role::Viewer).await);
    assert!(service.update_user_role("erin", Role::Admin).await);

    let users = service.get_all_users().await;
    assert!(
        users
            .iter()
            .any(|u| u.username == "erin" && u.role == Role::Admin)
    );

    // Updating an account that does not exist reports failure.
    assert!(!service.update_user_role("ghost", Role::Admin).await);

    cleanup(&db_path);
}

#[tokio::test]
async fn out_of_enumeration_role_never_reaches_storage() {
    let (service, db_path) = fresh_service().await;

    assert!(service.create_user("frank", "pw", Role::Viewer).await);

    // The only way in is through Role's FromStr, which rejects strangers.
    assert!("bogus".parse::<Role>().is_err());

    let users = service.get_all_users().await;
    assert!(
        users
            .iter()
            .any(|u| u.username == "frank" && u.role == Role::Viewer)
    );

    cleanup(&db_path);
}

#[tokio::test]
async fn delete_is_idempotent_and_revokes_access() {
    let (service, db_path) = fresh_service().await;

    assert!(service.create_user("gus", "pw", Role::Clinician).await);
    assert!(service.delete_user("gus").await);
    assert_eq!(service.verify_user("gus", "pw").await, None);

    // Deleting an account that never existed is a successful no-op.
    assert!(service.delete_user("never-there").await);

    cleanup(&db_path);
}

#[tokio::test]
async fn empty_credentials_are_rejected_before_storage() {
    let (service, db_path) = fresh_service().await;

    assert!(!service.create_user("", "x", Role::Admin).await);
    assert!(!service.create_user("bob", "", Role::Admin).await);

    assert_eq!(service.verify_user("", "x").await, None);
    assert_eq!(service.verify_user("bob", "").await, None);

    // Nothing beyond the bootstrap admin was created.
    assert_eq!(service.get_all_users().await.len(), 1);

    cleanup(&db_path);
}

#[tokio::test]
async fn reopening_an_existing_database_does_not_reseed() {
    let db_path = temp_db_path();

    {
        let service = open_service_at(&db_path).await;
        assert!(service.create_user("holly", "pw", Role::Viewer).await);
    }

    let service = open_service_at(&db_path).await;
    let users = service.get_all_users().await;

    let admins = users.iter().filter(|u| u.role == Role::Admin).count();
    assert_eq!(admins, 1, "bootstrap must run once per database, not per open");
    assert!(users.iter().any(|u| u.username == "holly"));
    assert_eq!(
        service.verify_user("admin", "admin123").await,
        Some(Role::Admin)
    );

    cleanup(&db_path);
}
