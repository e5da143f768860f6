//! Domain service for account management and credential checks.
//!
//! This is the only surface the login and user-administration screens talk
//! to. Every operation resolves to a definite outcome — a bool, an optional
//! role, or a (possibly empty) listing. Storage faults are logged and folded
//! into the failure value rather than propagated; the caller presents
//! failure to the end user and never has to unwind.

use serde::Serialize;

use crate::models::Role;

/// Account listing entry (no credential material).
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub username: String,
    pub role: Role,
}

/// Domain service trait for account management.
#[async_trait::async_trait]
pub trait UserService: Send + Sync {
    /// Creates an account. Returns false when username or password is empty,
    /// when the username is already taken, or on a storage fault. Empty
    /// fields are rejected before storage is touched.
    async fn create_user(&self, username: &str, password: &str, role: Role) -> bool;

    /// Verifies credentials and returns the account role on a match.
    ///
    /// `None` covers every non-match: empty input, unknown username, wrong
    /// password, storage fault. Callers cannot distinguish these cases,
    /// which is intentional for a login surface.
    async fn verify_user(&self, username: &str, password: &str) -> Option<Role>;

    /// Lists all accounts. Order carries no meaning.
    async fn get_all_users(&self) -> Vec<UserInfo>;

    /// Changes an account's role. Returns false when the username does not
    /// exist or on a storage fault.
    async fn update_user_role(&self, username: &str, new_role: Role) -> bool;

    /// Deletes an account. Deleting an unknown username is a successful
    /// no-op; only a storage fault yields false.
    async fn delete_user(&self, username: &str) -> bool;
}
