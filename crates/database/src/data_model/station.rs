use async_trait::async_trait;
use metro::database::{Repo, Result, StationRepo};
use model::{
    line::Line,
    station::{Location, MapPosition, Station},
};
use sqlx::prelude::FromRow;
use utility::id::Id;

use crate::{
    queries::station::{get, get_all, get_by_line_id, search},
    SqliteReader,
};

use super::DatabaseRow;

#[derive(Debug, Clone, FromRow)]
pub struct StationRow {
    pub id: i64,
    pub name_fa: String,
    pub name_en: String,
    pub line_id: i64,
    pub position_in_line: i64,
    pub location_lat: Option<f64>,
    pub location_long: Option<f64>,
    pub map_x: Option<i64>,
    pub map_y: Option<i64>,
    pub has_emergency_medical_services: bool,
    pub accessibility_wheelchair_level: i64,
    pub accessibility_blindness_level: i64,
    pub wc: i64,
}

impl DatabaseRow for StationRow {
    type Model = Station;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id)
    }

    fn to_model(self) -> Self::Model {
        // a half filled coordinate pair is as good as none
        let location = self
            .location_lat
            .zip(self.location_long)
            .map(|(latitude, longitude)| Location {
                latitude,
                longitude,
            });
        let map_position = self.map_x.zip(self.map_y).map(|(x, y)| MapPosition { x, y });

        Station {
            id: self.get_id(),
            name_fa: self.name_fa,
            name_en: self.name_en,
            line_id: Id::new(self.line_id),
            position_in_line: self.position_in_line,
            location,
            map_position,
            has_emergency_medical_services: self.has_emergency_medical_services,
            accessibility_wheelchair_level_id: Id::new(self.accessibility_wheelchair_level),
            accessibility_blindness_level_id: Id::new(self.accessibility_blindness_level),
            wc_level_id: Id::new(self.wc),
        }
    }
}

// Repo

#[async_trait]
impl Repo<Station> for SqliteReader {
    async fn get(&mut self, id: Id<Station>) -> Result<Station> {
        get(&self.pool, id).await
    }

    async fn get_all(&mut self) -> Result<Vec<Station>> {
        get_all(&self.pool).await
    }
}

#[async_trait]
impl StationRepo for SqliteReader {
    async fn get_by_line_id(&mut self, line_id: Id<Line>) -> Result<Vec<Station>> {
        get_by_line_id(&self.pool, line_id).await
    }

    async fn search<S: Into<String> + Send>(&mut self, pattern: S) -> Result<Vec<Station>> {
        search(&self.pool, &pattern.into()).await
    }
}
