use std::{env, error::Error, path::PathBuf};

use metro::database::Database;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

pub mod data_model;
pub mod queries;

#[derive(Debug, Clone)]
pub struct DatabaseConnectionInfo {
    pub path: PathBuf,
}

impl DatabaseConnectionInfo {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env() -> Option<Self> {
        let path = env::var("METRO_DATABASE_PATH").ok()?;
        Some(Self::new(path))
    }

    pub(self) fn connect_options(&self) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(&self.path)
            .read_only(true)
    }
}

/// The bundled metro dataset, opened read-only.
#[derive(Debug, Clone)]
pub struct SqliteDatabase {
    connection: SqlitePool,
}

pub struct SqliteReader {
    pool: SqlitePool,
}

impl SqliteDatabase {
    pub async fn connect(
        database_connection_info: DatabaseConnectionInfo,
    ) -> Result<Self, Box<dyn Error>> {
        let pool = SqlitePoolOptions::new()
            .connect_with(database_connection_info.connect_options())
            .await?;
        log::info!(
            "opened metro database {}",
            database_connection_info.path.display()
        );
        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { connection: pool }
    }
}

impl Database for SqliteDatabase {
    type Reader = SqliteReader;

    fn reader(&self) -> Self::Reader {
        SqliteReader {
            pool: self.connection.clone(),
        }
    }
}
