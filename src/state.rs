use std::sync::Arc;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::Config;
use crate::dispatch::RouteTable;
use crate::repositories::StageRepository;
use crate::services::StageService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// SeaORM database connection, opened once at startup
    pub db: DatabaseConnection,
    pub config: Config,
    pub stages: StageService,
    pub routes: Arc<RouteTable>,
}

impl AppState {
    /// Connect to the database, run migrations and wire the service layer
    pub async fn new(config: Config) -> Result<Self, AppStateError> {
        let mut opt = ConnectOptions::new(&config.database_url);
        opt.max_connections(config.database_max_connections)
            .min_connections(1)
            .sqlx_logging(true);

        let db = Database::connect(opt)
            .await
            .map_err(|e| AppStateError::Database(e.to_string()))?;

        // Migrations run on the same pool so in-memory databases see the schema
        sqlx::migrate!("./migrations")
            .run(db.get_sqlite_connection_pool())
            .await
            .map_err(|e| AppStateError::Migration(e.to_string()))?;

        let stages = StageService::new(StageRepository::new(db.clone()));

        Ok(Self {
            db,
            config,
            stages,
            routes: Arc::new(RouteTable::standard()),
        })
    }

    /// Private in-memory database with the schema applied. A single
    /// connection keeps every query on the same database.
    pub async fn in_memory() -> Result<Self, AppStateError> {
        Self::new(Config {
            database_url: "sqlite::memory:".to_string(),
            database_max_connections: 1,
            host: "127.0.0.1".to_string(),
            port: 0,
        })
        .await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("Database connection error: {0}")]
    Database(String),

    #[error("Migration error: {0}")]
    Migration(String),
}
