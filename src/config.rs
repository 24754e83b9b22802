//! Server configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server configuration, loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL (e.g. `sqlite://team_manager.db`)
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Admin username for HTTP Basic auth (auth disabled when unset)
    pub admin_username: Option<String>,
    /// Admin password, hashed at startup before it is stored
    pub admin_password: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let admin_username = std::env::var("ADMIN_USERNAME").ok().filter(|s| !s.is_empty());
        let admin_password = std::env::var("ADMIN_PASSWORD").ok().filter(|s| !s.is_empty());

        if admin_username.is_some() != admin_password.is_some() {
            return Err("ADMIN_USERNAME and ADMIN_PASSWORD must be set together".into());
        }
        if environment != "development" && admin_username.is_none() {
            return Err(format!(
                "ADMIN_USERNAME and ADMIN_PASSWORD must be set in {environment} environment"
            )
            .into());
        }

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://team_manager.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment,
            admin_username,
            admin_password,
        })
    }

    /// Basic auth is enforced whenever admin credentials are configured
    pub fn auth_enabled(&self) -> bool {
        self.admin_username.is_some()
    }
}
