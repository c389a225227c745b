use metro::database::Result;
use model::line::Line;
use sqlx::{Executor, Sqlite};
use utility::{id::Id, let_also::LetAlso};

use crate::data_model::{line::LineRow, to_models, DatabaseRow};

use super::convert_error;

pub async fn get<'c, E>(executor: E, id: Id<Line>) -> Result<Line>
where
    E: Executor<'c, Database = Sqlite>,
{
    sqlx::query_as::<_, LineRow>(
        "
        SELECT id, name_fa, name_en, type, color
        FROM lines
        WHERE id = ?;
        ",
    )
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map(|row| row.to_model())
    .map_err(convert_error)
}

/// All lines, the most recently added first.
pub async fn get_all<'c, E>(executor: E) -> Result<Vec<Line>>
where
    E: Executor<'c, Database = Sqlite>,
{
    sqlx::query_as(
        "
        SELECT id, name_fa, name_en, type, color
        FROM lines
        ORDER BY id DESC;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|rows: Vec<LineRow>| Ok(to_models(rows)))
}
