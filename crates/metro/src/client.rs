use crate::{
    database::Database,
    repository::{
        accessibility::AccessibilityRepository, database_info::DatabaseInformationRepository,
        intersection::IntersectionRepository, line::LineRepository,
    },
    station::StationRepository,
    statistics::StatRepository,
};

/// Entry point for callers. Hands out repositories which all read from the
/// same dataset.
#[derive(Debug, Clone)]
pub struct Client<D>
where
    D: Database,
{
    database: D,
}

impl<D> Client<D>
where
    D: Database,
{
    pub fn new(database: D) -> Self {
        Self { database }
    }

    pub fn lines(&self) -> LineRepository<D> {
        LineRepository::new(self.database.clone())
    }

    pub fn intersections(&self) -> IntersectionRepository<D> {
        IntersectionRepository::new(self.database.clone())
    }

    pub fn accessibility(&self) -> AccessibilityRepository<D> {
        AccessibilityRepository::new(self.database.clone())
    }

    pub fn database_information(&self) -> DatabaseInformationRepository<D> {
        DatabaseInformationRepository::new(self.database.clone())
    }

    pub fn stations(&self) -> StationRepository<D> {
        StationRepository::new(self.database.clone())
    }

    pub fn statistics(&self) -> StatRepository<D> {
        StatRepository::new(self.database.clone())
    }
}
