use std::{env, path::PathBuf};

use database::DatabaseConnectionInfo;

/// Where the dataset is read from.
#[derive(Debug, Clone)]
pub enum Source {
    Sqlite(DatabaseConnectionInfo),
    Json(PathBuf),
}

impl Source {
    /// A SQLite path wins over a JSON path.
    pub fn from_args(database: Option<PathBuf>, dataset: Option<PathBuf>) -> Option<Self> {
        database
            .map(|path| Self::Sqlite(DatabaseConnectionInfo::new(path)))
            .or_else(|| dataset.map(Self::Json))
    }

    pub fn from_env() -> Option<Self> {
        DatabaseConnectionInfo::from_env()
            .map(Self::Sqlite)
            .or_else(|| env::var_os("METRO_DATASET_JSON").map(|path| Self::Json(path.into())))
    }
}
