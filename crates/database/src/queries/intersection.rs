use metro::database::Result;
use model::{intersection::Intersection, station::Station};
use sqlx::{Executor, Sqlite};
use utility::{id::Id, let_also::LetAlso};

use crate::data_model::{intersection::IntersectionRow, to_models, DatabaseRow};

use super::convert_error;

pub async fn get<'c, E>(executor: E, id: Id<Intersection>) -> Result<Intersection>
where
    E: Executor<'c, Database = Sqlite>,
{
    sqlx::query_as::<_, IntersectionRow>(
        "
        SELECT id, station_id
        FROM intersections
        WHERE id = ?;
        ",
    )
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map(|row| row.to_model())
    .map_err(convert_error)
}

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<Intersection>>
where
    E: Executor<'c, Database = Sqlite>,
{
    sqlx::query_as(
        "
        SELECT id, station_id
        FROM intersections;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|rows: Vec<IntersectionRow>| Ok(to_models(rows)))
}

pub async fn get_by_station_id<'c, E>(executor: E, station_id: Id<Station>) -> Result<Intersection>
where
    E: Executor<'c, Database = Sqlite>,
{
    sqlx::query_as::<_, IntersectionRow>(
        "
        SELECT id, station_id
        FROM intersections
        WHERE station_id = ?
        LIMIT 1;
        ",
    )
    .bind(station_id.raw())
    .fetch_one(executor)
    .await
    .map(|row| row.to_model())
    .map_err(convert_error)
}
