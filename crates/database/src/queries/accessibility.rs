use metro::database::Result;
use model::accessibility::{AccessibilityKind, AccessibilityLevel};
use sqlx::{Executor, Sqlite};
use utility::{id::Id, let_also::LetAlso};

use crate::data_model::accessibility::{table, AccessibilityLevelRow};

use super::convert_error;

pub async fn get<'c, E>(
    executor: E,
    kind: AccessibilityKind,
    id: Id<AccessibilityLevel>,
) -> Result<AccessibilityLevel>
where
    E: Executor<'c, Database = Sqlite>,
{
    let query = format!(
        "
        SELECT id, description_en, description_fa
        FROM {}
        WHERE id = ?;
        ",
        table(kind)
    );
    sqlx::query_as::<_, AccessibilityLevelRow>(&query)
        .bind(id.raw())
        .fetch_one(executor)
        .await
        .map(|row| row.to_model(kind))
        .map_err(convert_error)
}

pub async fn get_all<'c, E>(executor: E, kind: AccessibilityKind) -> Result<Vec<AccessibilityLevel>>
where
    E: Executor<'c, Database = Sqlite>,
{
    let query = format!(
        "
        SELECT id, description_en, description_fa
        FROM {};
        ",
        table(kind)
    );
    sqlx::query_as(&query)
        .fetch_all(executor)
        .await
        .map_err(convert_error)?
        .let_owned(|rows: Vec<AccessibilityLevelRow>| {
            Ok(rows
                .into_iter()
                .map(|row| row.to_model(kind))
                .collect::<Vec<_>>())
        })
}
