//! Application state

use sqlx::SqlitePool;

use crate::auth;
use crate::config::Config;
use crate::db;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Whether HTTP Basic auth is enforced
    pub auth_enabled: bool,
}

impl AppState {
    /// Open the store, apply the schema, and seed the admin user
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = db::connect(&config.database_url).await?;

        if let (Some(username), Some(password)) = (&config.admin_username, &config.admin_password)
        {
            let hash = auth::hash_password(password)
                .map_err(|e| format!("failed to hash admin password: {e}"))?;
            db::users::upsert(&pool, username, &hash).await?;
            tracing::info!(username = %username, "admin user ready");
        }

        Ok(Self {
            pool,
            auth_enabled: config.auth_enabled(),
        })
    }
}
