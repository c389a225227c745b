use model::database_info::DatabaseInformation;

use crate::{
    database::{not_found_to_none, Database, DatabaseInformationRepo},
    RequestResult,
};

#[derive(Debug, Clone)]
pub struct DatabaseInformationRepository<D: Database> {
    database: D,
}

impl<D: Database> DatabaseInformationRepository<D> {
    pub fn new(database: D) -> Self {
        Self { database }
    }

    pub async fn get_information(&self) -> RequestResult<Option<DatabaseInformation>> {
        Ok(not_found_to_none(
            self.database.reader().information().await,
        )?)
    }
}
