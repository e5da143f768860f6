use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::config::SecurityConfig;
use crate::models::Role;

pub mod migrator;
pub mod repositories;

pub use repositories::user::UserRow;

/// Handle to the application database.
///
/// Owns the connection pool and applies pending migrations on open, so a
/// `Store` is always in the ready state: schema present, default admin
/// seeded. Reopening an existing database is a no-op with respect to schema
/// and seed.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let path_str = db_url.trim_start_matches("sqlite:");
        if !path_str.starts_with(":memory:") {
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    pub async fn create_user(
        &self,
        username: &str,
        password: &str,
        role: Role,
        security: Option<&SecurityConfig>,
    ) -> Result<bool> {
        self.user_repo()
            .create(username, password, role, security)
            .await
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<UserRow>> {
        self.user_repo().get_by_username(username).await
    }

    pub async fn list_users(&self) -> Result<Vec<UserRow>> {
        self.user_repo().list().await
    }

    pub async fn verify_user_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Role>> {
        self.user_repo().verify_credentials(username, password).await
    }

    pub async fn update_user_role(&self, username: &str, role: Role) -> Result<bool> {
        self.user_repo().update_role(username, role).await
    }

    pub async fn delete_user(&self, username: &str) -> Result<()> {
        self.user_repo().delete(username).await
    }
}
