use model::{intersection::Intersection, station::Station};
use utility::id::Id;

use crate::{
    database::{not_found_to_none, Database, IntersectionRepo, Repo},
    RequestResult,
};

#[derive(Debug, Clone)]
pub struct IntersectionRepository<D: Database> {
    database: D,
}

impl<D: Database> IntersectionRepository<D> {
    pub fn new(database: D) -> Self {
        Self { database }
    }

    pub async fn get_intersections(&self) -> RequestResult<Vec<Intersection>> {
        Ok(Repo::<Intersection>::get_all(&mut self.database.reader()).await?)
    }

    pub async fn get_intersection(
        &self,
        id: Id<Intersection>,
    ) -> RequestResult<Option<Intersection>> {
        Ok(not_found_to_none(
            Repo::<Intersection>::get(&mut self.database.reader(), id).await,
        )?)
    }

    pub async fn get_intersection_by_station_id(
        &self,
        station_id: Id<Station>,
    ) -> RequestResult<Option<Intersection>> {
        Ok(not_found_to_none(
            self.database.reader().get_by_station_id(station_id).await,
        )?)
    }
}
