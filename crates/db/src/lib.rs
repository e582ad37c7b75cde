//! Database layer for the heroes catalog.
//!
//! Owns pool construction, the embedded migrations (schema plus seed data;
//! the catalog is read-only at runtime, so every row originates here), the
//! entity models and the repositories.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Database connection settings, loaded from discrete environment variables.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DbConfig {
    /// Load connection settings from environment variables.
    ///
    /// | Env Var             | Default     |
    /// |---------------------|-------------|
    /// | `DATABASE_HOST`     | `localhost` |
    /// | `DATABASE_PORT`     | `5432`      |
    /// | `DATABASE_USER`     | `postgres`  |
    /// | `DATABASE_PASSWORD` | (empty)     |
    /// | `DATABASE_NAME`     | `heroes`    |
    pub fn from_env() -> Self {
        let host = std::env::var("DATABASE_HOST").unwrap_or_else(|_| "localhost".into());

        let port: u16 = std::env::var("DATABASE_PORT")
            .unwrap_or_else(|_| "5432".into())
            .parse()
            .expect("DATABASE_PORT must be a valid u16");

        let user = std::env::var("DATABASE_USER").unwrap_or_else(|_| "postgres".into());
        let password = std::env::var("DATABASE_PASSWORD").unwrap_or_default();
        let database = std::env::var("DATABASE_NAME").unwrap_or_else(|_| "heroes".into());

        Self {
            host,
            port,
            user,
            password,
            database,
        }
    }

    /// Compose the settings into a `postgres://` connection URL.
    pub fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.database
        )
    }
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations (schema and seed data).
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
