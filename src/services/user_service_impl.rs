//! `SeaORM` implementation of the `UserService` trait.

use async_trait::async_trait;
use tracing::warn;

use crate::config::SecurityConfig;
use crate::db::Store;
use crate::models::Role;
use crate::services::user_service::{UserInfo, UserService};

pub struct SeaOrmUserService {
    store: Store,
    security: SecurityConfig,
}

impl SeaOrmUserService {
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self::with_security(store, SecurityConfig::default())
    }

    #[must_use]
    pub const fn with_security(store: Store, security: SecurityConfig) -> Self {
        Self { store, security }
    }
}

#[async_trait]
impl UserService for SeaOrmUserService {
    async fn create_user(&self, username: &str, password: &str, role: Role) -> bool {
        if username.is_empty() || password.is_empty() {
            return false;
        }

        match self
            .store
            .create_user(username, password, role, Some(&self.security))
            .await
        {
            Ok(created) => created,
            Err(err) => {
                warn!("Failed to create user {username:?}: {err:#}");
                false
            }
        }
    }

    async fn verify_user(&self, username: &str, password: &str) -> Option<Role> {
        if username.is_empty() || password.is_empty() {
            return None;
        }

        match self.store.verify_user_credentials(username, password).await {
            Ok(role) => role,
            Err(err) => {
                warn!("Credential check failed for {username:?}: {err:#}");
                None
            }
        }
    }

    async fn get_all_users(&self) -> Vec<UserInfo> {
        let rows = match self.store.list_users().await {
            Ok(rows) => rows,
            Err(err) => {
                warn!("Failed to list users: {err:#}");
                return Vec::new();
            }
        };

        rows.into_iter()
            .filter_map(|row| match row.role.parse::<Role>() {
                Ok(role) => Some(UserInfo {
                    username: row.username,
                    role,
                }),
                Err(err) => {
                    warn!("Skipping user {:?}: {err}", row.username);
                    None
                }
            })
            .collect()
    }

    async fn update_user_role(&self, username: &str, new_role: Role) -> bool {
        match self.store.update_user_role(username, new_role).await {
            Ok(updated) => updated,
            Err(err) => {
                warn!("Failed to update role for {username:?}: {err:#}");
                false
            }
        }
    }

    async fn delete_user(&self, username: &str) -> bool {
        match self.store.delete_user(username).await {
            Ok(()) => true,
            Err(err) => {
                warn!("Failed to delete user {username:?}: {err:#}");
                false
            }
        }
    }
}
