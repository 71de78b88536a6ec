use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::domain::common::DatabaseConfig;

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
}

impl From<&DatabaseConfig> for PostgresConfig {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            database_url: config.url(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let mut options = ConnectOptions::new(config.database_url);
        options
            .max_connections(10)
            .connect_timeout(Duration::from_secs(8))
            .sqlx_logging(false);

        let db = Database::connect(options).await?;

        sqlx::migrate!("./migrations")
            .run(db.get_postgres_connection_pool())
            .await?;
        info!("Database migrations applied");

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
