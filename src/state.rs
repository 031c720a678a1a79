use sqlx::SqlitePool;
use tower_cookies::Key;
use crate::config::Config;
use crate::error::{AppError, Result};

/// The application's state.
///
/// Built once at startup and handed to every handler; nothing in it changes
/// while the process is serving.
#[derive(Clone)]
pub struct AppState {
    /// The database connection pool.
    pub db: SqlitePool,
    /// The application's configuration.
    pub config: Config,
    /// The key session cookies are signed with.
    pub cookie_key: Key,
}

impl AppState {
    /// Opens the database, ensures the schema exists and derives the cookie key.
    ///
    /// # Arguments
    ///
    /// * `config` - The application's configuration.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `AppState`.
    pub async fn new(config: &Config) -> Result<Self> {
        let db = crate::db::create_pool(&config.database_path).await?;
        crate::db::init_schema(&db).await?;
        tracing::info!(
            "SQLite pool initialized at {}",
            config.database_path.display()
        );

        Self::with_pool(db, config.clone())
    }

    /// Wraps an already-open pool.
    ///
    /// Fails if `config.secret_key` is shorter than 64 bytes.
    pub fn with_pool(db: SqlitePool, config: Config) -> Result<Self> {
        let cookie_key = Key::try_from(config.secret_key.as_slice())
            .map_err(|e| AppError::Internal(format!("Invalid cookie key: {}", e)))?;
        tracing::info!("Session cookie key loaded");

        Ok(AppState {
            db,
            config,
            cookie_key,
        })
    }
}
