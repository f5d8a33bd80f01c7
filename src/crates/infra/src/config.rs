use config::{Config, ConfigError, Environment, File};
use dotenvy::dotenv;
use log::info;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Statement};
use serde::Deserialize;
use std::time::Duration;

/// Database settings, loaded from an optional `config` file overlaid with
/// environment variables (a `.env` file is honored when present).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: "postgres://localhost:5432/singers".to_string(),
            max_connections: 20,
            min_connections: 2,
            connect_timeout_secs: 3,
            acquire_timeout_secs: 8,
        }
    }
}

impl DatabaseConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenv().ok();

        Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::default())
            .build()?
            .try_deserialize()
    }
}

/// Open the connection pool and verify it with a probe query.
pub async fn init_db(cfg: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(cfg.database_url.clone());
    options
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;

    db.execute(Statement::from_string(
        DbBackend::Postgres,
        "SELECT 1".to_owned(),
    ))
    .await?;

    info!("database connection pool initialized");
    Ok(db)
}
