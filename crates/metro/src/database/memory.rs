//! A record store which keeps the whole dataset in memory. The dataset is read
//! from a JSON document once and shared by all readers.

use std::{error::Error, path::Path, sync::Arc};

use async_trait::async_trait;
use model::{
    accessibility::{AccessibilityKind, AccessibilityLevel},
    database_info::DatabaseInformation,
    intersection::Intersection,
    line::Line,
    station::Station,
};
use serde::{Deserialize, Serialize};
use utility::{id::Id, let_also::LetAlso};

use super::{
    AccessibilityRepo, Database, DatabaseError, DatabaseInformationRepo, IntersectionRepo,
    LineRepo, Repo, Result, StationRepo,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub lines: Vec<Line>,
    #[serde(default)]
    pub stations: Vec<Station>,
    #[serde(default)]
    pub intersections: Vec<Intersection>,
    #[serde(default)]
    pub accessibility_levels: Vec<AccessibilityLevel>,
    #[serde(default)]
    pub information: Option<DatabaseInformation>,
}

impl Dataset {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone)]
pub struct MemoryDatabase {
    dataset: Arc<Dataset>,
}

impl MemoryDatabase {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    pub async fn load<P: AsRef<Path>>(path: P) -> std::result::Result<Self, Box<dyn Error>> {
        let json = tokio::fs::read_to_string(path.as_ref()).await?;
        let dataset = Dataset::from_json(&json)?;
        log::info!(
            "loaded dataset {} with {} lines and {} stations",
            path.as_ref().display(),
            dataset.lines.len(),
            dataset.stations.len()
        );
        Ok(Self::new(dataset))
    }
}

impl Database for MemoryDatabase {
    type Reader = MemoryReader;

    fn reader(&self) -> Self::Reader {
        MemoryReader {
            dataset: self.dataset.clone(),
        }
    }
}

pub struct MemoryReader {
    dataset: Arc<Dataset>,
}

fn find<T: Clone, P: Fn(&T) -> bool>(records: &[T], predicate: P) -> Result<T> {
    records
        .iter()
        .find(|record| predicate(record))
        .cloned()
        .ok_or(DatabaseError::NotFound)
}

#[async_trait]
impl Repo<Line> for MemoryReader {
    async fn get(&mut self, id: Id<Line>) -> Result<Line> {
        find(&self.dataset.lines, |line| line.id == id)
    }

    async fn get_all(&mut self) -> Result<Vec<Line>> {
        self.dataset
            .lines
            .clone()
            .also(|lines| lines.sort_by(|a, b| b.id.cmp(&a.id)))
            .let_owned(Ok)
    }
}

impl LineRepo for MemoryReader {}

#[async_trait]
impl Repo<Station> for MemoryReader {
    async fn get(&mut self, id: Id<Station>) -> Result<Station> {
        find(&self.dataset.stations, |station| station.id == id)
    }

    async fn get_all(&mut self) -> Result<Vec<Station>> {
        Ok(self.dataset.stations.clone())
    }
}

#[async_trait]
impl StationRepo for MemoryReader {
    async fn get_by_line_id(&mut self, line_id: Id<Line>) -> Result<Vec<Station>> {
        self.dataset
            .stations
            .iter()
            .filter(|station| station.line_id == line_id)
            .cloned()
            .collect::<Vec<_>>()
            .let_owned(Ok)
    }

    async fn search<S: Into<String> + Send>(&mut self, pattern: S) -> Result<Vec<Station>> {
        let pattern = pattern.into().to_lowercase();
        self.dataset
            .stations
            .iter()
            .filter(|station| {
                station.name_en.to_lowercase().contains(&pattern)
                    || station.name_fa.to_lowercase().contains(&pattern)
            })
            .cloned()
            .collect::<Vec<_>>()
            .let_owned(Ok)
    }
}

#[async_trait]
impl Repo<Intersection> for MemoryReader {
    async fn get(&mut self, id: Id<Intersection>) -> Result<Intersection> {
        find(&self.dataset.intersections, |intersection| intersection.id == id)
    }

    async fn get_all(&mut self) -> Result<Vec<Intersection>> {
        Ok(self.dataset.intersections.clone())
    }
}

#[async_trait]
impl IntersectionRepo for MemoryReader {
    async fn get_by_station_id(&mut self, station_id: Id<Station>) -> Result<Intersection> {
        find(&self.dataset.intersections, |intersection| {
            intersection.station_id == station_id
        })
    }
}

#[async_trait]
impl AccessibilityRepo for MemoryReader {
    async fn get_levels(&mut self, kind: AccessibilityKind) -> Result<Vec<AccessibilityLevel>> {
        self.dataset
            .accessibility_levels
            .iter()
            .filter(|level| level.kind == kind)
            .cloned()
            .collect::<Vec<_>>()
            .let_owned(Ok)
    }

    async fn get_level(
        &mut self,
        kind: AccessibilityKind,
        id: Id<AccessibilityLevel>,
    ) -> Result<AccessibilityLevel> {
        find(&self.dataset.accessibility_levels, |level| {
            level.kind == kind && level.id == id
        })
    }
}

#[async_trait]
impl DatabaseInformationRepo for MemoryReader {
    async fn information(&mut self) -> Result<DatabaseInformation> {
        self.dataset
            .information
            .clone()
            .ok_or(DatabaseError::NotFound)
    }
}
