use metro::database::Result;
use model::database_info::DatabaseInformation;
use sqlx::{Executor, Sqlite};

use crate::data_model::database_info::DatabaseInformationRow;

use super::convert_error;

/// The dataset carries a single information row.
pub async fn get<'c, E>(executor: E) -> Result<DatabaseInformation>
where
    E: Executor<'c, Database = Sqlite>,
{
    sqlx::query_as::<_, DatabaseInformationRow>(
        "
        SELECT version_code, version_name, release_date
        FROM database_information
        LIMIT 1;
        ",
    )
    .fetch_one(executor)
    .await
    .map(|row| row.to_model())
    .map_err(convert_error)
}
