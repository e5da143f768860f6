use anyhow::{Context, Result};
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
};
use tokio::task;

use crate::config::SecurityConfig;
use crate::entities::users;
use crate::models::Role;

/// Account row as exposed outside the db layer (no password hash).
#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: i32,
    pub username: String,
    pub role: String,
}

impl From<users::Model> for UserRow {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            role: model.role,
        }
    }
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Insert a new account with a freshly hashed password.
    ///
    /// Returns `Ok(false)` when the username is already taken (unique
    /// constraint), `Err` on any other storage fault.
    pub async fn create(
        &self,
        username: &str,
        password: &str,
        role: Role,
        config: Option<&SecurityConfig>,
    ) -> Result<bool> {
        let password = password.to_string();
        let config = config.cloned();

        // Argon2 is CPU-bound; keep it off the async runtime.
        let password_hash = task::spawn_blocking(move || hash_password(&password, config.as_ref()))
            .await
            .context("Password hashing task panicked")??;

        let user = users::ActiveModel {
            username: Set(username.to_string()),
            password_hash: Set(password_hash),
            role: Set(role.as_str().to_string()),
            ..Default::default()
        };

        match user.insert(&self.conn).await {
            Ok(_) => Ok(true),
            Err(err) => {
                if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                    Ok(false)
                } else {
                    Err(err).context("Failed to insert user")
                }
            }
        }
    }

    /// Get account by username (exact match).
    pub async fn get_by_username(&self, username: &str) -> Result<Option<UserRow>> {
        let user = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.conn)
            .await
            .context("Failed to query user by username")?;

        Ok(user.map(UserRow::from))
    }

    /// List all accounts. Order follows the storage engine and carries no
    /// meaning.
    pub async fn list(&self) -> Result<Vec<UserRow>> {
        let users = users::Entity::find()
            .all(&self.conn)
            .await
            .context("Failed to list users")?;

        Ok(users.into_iter().map(UserRow::from).collect())
    }

    /// Check a plaintext password against the stored hash and return the
    /// account role on a match. An absent user or a mismatch is `Ok(None)`,
    /// never an error.
    pub async fn verify_credentials(&self, username: &str, password: &str) -> Result<Option<Role>> {
        let user = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.conn)
            .await
            .context("Failed to query user for credential check")?;

        let Some(user) = user else {
            return Ok(None);
        };

        let password_hash = user.password_hash;
        let password = password.to_string();

        let is_valid = task::spawn_blocking(move || verify_password(&password, &password_hash))
            .await
            .context("Password verification task panicked")?;

        if !is_valid {
            return Ok(None);
        }

        let role = user
            .role
            .parse::<Role>()
            .with_context(|| format!("Stored role is corrupt for user {:?}", user.username))?;

        Ok(Some(role))
    }

    /// Change an account's role in place. Returns `Ok(false)` when the
    /// username does not exist.
    pub async fn update_role(&self, username: &str, role: Role) -> Result<bool> {
        let user = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.conn)
            .await
            .context("Failed to query user for role update")?;

        let Some(user) = user else {
            return Ok(false);
        };

        let mut active: users::ActiveModel = user.into();
        active.role = Set(role.as_str().to_string());
        active.update(&self.conn).await?;

        Ok(true)
    }

    /// Remove an account. Deleting a username that does not exist is a
    /// successful no-op.
    pub async fn delete(&self, username: &str) -> Result<()> {
        users::Entity::delete_many()
            .filter(users::Column::Username.eq(username))
            .exec(&self.conn)
            .await
            .context("Failed to delete user")?;

        Ok(())
    }
}

/// Hash a password using Argon2id with optional custom params.
/// If config is None, uses the argon2 crate's default params.
pub fn hash_password(password: &str, config: Option<&SecurityConfig>) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let argon2 = if let Some(cfg) = config {
        let params = Params::new(
            cfg.argon2_memory_cost_kib,
            cfg.argon2_time_cost,
            cfg.argon2_parallelism,
            None, // output length (use default)
        )
        .map_err(|e| anyhow::anyhow!("Invalid Argon2 params: {e}"))?;
        Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
    } else {
        Argon2::default()
    };

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;

    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC hash string.
/// A hash that fails to parse counts as a mismatch.
#[must_use]
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(password_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let hash = hash_password("s3cret", None).unwrap();
        assert!(verify_password("s3cret", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("same-input", None).unwrap();
        let b = hash_password("same-input", None).unwrap();
        assert_ne!(a, b);
        assert!(verify_password("same-input", &a));
        assert!(verify_password("same-input", &b));
    }

    #[test]
    fn custom_params_still_verify() {
        let config = SecurityConfig {
            argon2_memory_cost_kib: 1024,
            argon2_time_cost: 1,
            argon2_parallelism: 1,
        };
        let hash = hash_password("pw", Some(&config)).unwrap();
        assert!(verify_password("pw", &hash));
    }

    #[test]
    fn garbage_hash_is_a_mismatch() {
        assert!(!verify_password("pw", "not-a-phc-string"));
    }

    #[test]
    fn empty_password_still_hashes() {
        let hash = hash_password("", None).unwrap();
        assert!(verify_password("", &hash));
        assert!(!verify_password("x", &hash));
    }
}
