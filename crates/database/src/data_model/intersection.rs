use async_trait::async_trait;
use metro::database::{IntersectionRepo, Repo, Result};
use model::{intersection::Intersection, station::Station};
use sqlx::prelude::FromRow;
use utility::id::Id;

use crate::{
    queries::intersection::{get, get_all, get_by_station_id},
    SqliteReader,
};

use super::DatabaseRow;

#[derive(Debug, Clone, FromRow)]
pub struct IntersectionRow {
    pub id: i64,
    pub station_id: i64,
}

impl DatabaseRow for IntersectionRow {
    type Model = Intersection;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id)
    }

    fn to_model(self) -> Self::Model {
        Intersection {
            id: self.get_id(),
            station_id: Id::new(self.station_id),
        }
    }
}

// Repo

#[async_trait]
impl Repo<Intersection> for SqliteReader {
    async fn get(&mut self, id: Id<Intersection>) -> Result<Intersection> {
        get(&self.pool, id).await
    }

    async fn get_all(&mut self) -> Result<Vec<Intersection>> {
        get_all(&self.pool).await
    }
}

#[async_trait]
impl IntersectionRepo for SqliteReader {
    async fn get_by_station_id(&mut self, station_id: Id<Station>) -> Result<Intersection> {
        get_by_station_id(&self.pool, station_id).await
    }
}
