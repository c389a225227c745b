use metro::database::Result;
use model::{line::Line, station::Station};
use sqlx::{Executor, Sqlite};
use utility::{id::Id, let_also::LetAlso};

use crate::data_model::{station::StationRow, to_models, DatabaseRow};

use super::{contains_pattern, convert_error};

pub async fn get<'c, E>(executor: E, id: Id<Station>) -> Result<Station>
where
    E: Executor<'c, Database = Sqlite>,
{
    sqlx::query_as::<_, StationRow>(
        "
        SELECT id, name_fa, name_en, line_id, position_in_line,
            location_lat, location_long, map_x, map_y,
            has_emergency_medical_services,
            accessibility_wheelchair_level, accessibility_blindness_level, wc
        FROM stations
        WHERE id = ?;
        ",
    )
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map(|row| row.to_model())
    .map_err(convert_error)
}

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<Station>>
where
    E: Executor<'c, Database = Sqlite>,
{
    sqlx::query_as(
        "
        SELECT id, name_fa, name_en, line_id, position_in_line,
            location_lat, location_long, map_x, map_y,
            has_emergency_medical_services,
            accessibility_wheelchair_level, accessibility_blindness_level, wc
        FROM stations;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|rows: Vec<StationRow>| Ok(to_models(rows)))
}

pub async fn get_by_line_id<'c, E>(executor: E, line_id: Id<Line>) -> Result<Vec<Station>>
where
    E: Executor<'c, Database = Sqlite>,
{
    sqlx::query_as(
        "
        SELECT id, name_fa, name_en, line_id, position_in_line,
            location_lat, location_long, map_x, map_y,
            has_emergency_medical_services,
            accessibility_wheelchair_level, accessibility_blindness_level, wc
        FROM stations
        WHERE line_id = ?;
        ",
    )
    .bind(line_id.raw())
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|rows: Vec<StationRow>| Ok(to_models(rows)))
}

/// Stations whose english or persian name contains `pattern`. SQLite folds
/// case for ASCII letters only, which covers the english names.
pub async fn search<'c, E>(executor: E, pattern: &str) -> Result<Vec<Station>>
where
    E: Executor<'c, Database = Sqlite>,
{
    let pattern = contains_pattern(pattern);
    sqlx::query_as(
        "
        SELECT id, name_fa, name_en, line_id, position_in_line,
            location_lat, location_long, map_x, map_y,
            has_emergency_medical_services,
            accessibility_wheelchair_level, accessibility_blindness_level, wc
        FROM stations
        WHERE name_en LIKE ? ESCAPE '\\' OR name_fa LIKE ? ESCAPE '\\';
        ",
    )
    .bind(&pattern)
    .bind(&pattern)
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|rows: Vec<StationRow>| Ok(to_models(rows)))
}
