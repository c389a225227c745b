use std::{error, fmt::Debug, result};

use async_trait::async_trait;
use model::{
    accessibility::{AccessibilityKind, AccessibilityLevel},
    database_info::DatabaseInformation,
    intersection::Intersection,
    line::Line,
    station::Station,
};
use thiserror::Error;
use utility::id::{HasId, Id};

pub mod memory;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("no matching record")]
    NotFound,

    #[error(transparent)]
    Other(Box<dyn error::Error + Send + Sync>),
}

impl DatabaseError {
    pub fn other<E: error::Error + Send + Sync + 'static>(why: E) -> Self {
        Self::Other(Box::new(why))
    }
}

pub type Result<T> = result::Result<T, DatabaseError>;

/// Turns the store's `NotFound` into an absent value. Every other error is
/// passed through untouched.
pub fn not_found_to_none<O>(result: Result<O>) -> Result<Option<O>> {
    match result {
        Err(DatabaseError::NotFound) => Ok(None),
        result => result.map(Some),
    }
}

#[async_trait]
pub trait Repo<T: HasId>
where
    <T as HasId>::IdType: Debug + Clone,
{
    /// Fails with `DatabaseError::NotFound` if there is no record with this id.
    async fn get(&mut self, id: Id<T>) -> Result<T>;
    async fn get_all(&mut self) -> Result<Vec<T>>;
}

/// `get_all` of lines is required to return them ordered by id, descending.
pub trait LineRepo: Repo<Line> {}

#[async_trait]
pub trait StationRepo: Repo<Station> {
    async fn get_by_line_id(&mut self, line_id: Id<Line>) -> Result<Vec<Station>>;

    /// Case insensitive substring search over both station names.
    async fn search<S: Into<String> + Send>(&mut self, pattern: S)
        -> Result<Vec<Station>>;
}

#[async_trait]
pub trait IntersectionRepo: Repo<Intersection> {
    async fn get_by_station_id(&mut self, station_id: Id<Station>) -> Result<Intersection>;
}

#[async_trait]
pub trait AccessibilityRepo {
    async fn get_levels(&mut self, kind: AccessibilityKind) -> Result<Vec<AccessibilityLevel>>;

    async fn get_level(
        &mut self,
        kind: AccessibilityKind,
        id: Id<AccessibilityLevel>,
    ) -> Result<AccessibilityLevel>;
}

#[async_trait]
pub trait DatabaseInformationRepo {
    async fn information(&mut self) -> Result<DatabaseInformation>;
}

pub trait DatabaseOperations:
    LineRepo + StationRepo + IntersectionRepo + AccessibilityRepo + DatabaseInformationRepo
{
}

impl<T> DatabaseOperations for T where
    T: LineRepo + StationRepo + IntersectionRepo + AccessibilityRepo + DatabaseInformationRepo
{
}

/// A read-only reference dataset.
/// Concurrent reads are done by taking a separate reader per operation; the
/// handle itself is cheap to clone.
pub trait Database: Clone + Send + Sync + Sized + 'static {
    type Reader: DatabaseOperations + Send;

    fn reader(&self) -> Self::Reader;
}
