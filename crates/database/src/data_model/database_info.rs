use async_trait::async_trait;
use chrono::NaiveDate;
use metro::database::{DatabaseInformationRepo, Result};
use model::database_info::DatabaseInformation;
use sqlx::prelude::FromRow;

use crate::{queries::database_info::get, SqliteReader};

#[derive(Debug, Clone, FromRow)]
pub struct DatabaseInformationRow {
    pub version_code: i64,
    pub version_name: String,
    pub release_date: NaiveDate,
}

impl DatabaseInformationRow {
    pub fn to_model(self) -> DatabaseInformation {
        DatabaseInformation {
            version_code: self.version_code,
            version_name: self.version_name,
            release_date: self.release_date,
        }
    }
}

#[async_trait]
impl DatabaseInformationRepo for SqliteReader {
    async fn information(&mut self) -> Result<DatabaseInformation> {
        get(&self.pool).await
    }
}
