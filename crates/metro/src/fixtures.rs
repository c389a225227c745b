//! Test data shared by the unit tests of this crate.

use std::io;

use async_trait::async_trait;
use model::{
    accessibility::{AccessibilityKind, AccessibilityLevel},
    database_info::DatabaseInformation,
    intersection::Intersection,
    line::{Line, LineType},
    station::Station,
    ExampleData,
};
use utility::id::Id;

use crate::database::{
    memory::{Dataset, MemoryDatabase},
    AccessibilityRepo, Database, DatabaseError, DatabaseInformationRepo, IntersectionRepo,
    LineRepo, Repo, Result, StationRepo,
};

fn line(id: i64, name: &str, kind: LineType) -> Line {
    Line {
        id: Id::new(id),
        name_fa: name.to_owned(),
        name_en: name.to_owned(),
        kind,
        color: "#000000".to_owned(),
    }
}

fn level(kind: AccessibilityKind, id: i64) -> AccessibilityLevel {
    AccessibilityLevel {
        id: Id::new(id),
        kind,
        description_en: format!("{} {}", kind, id),
        description_fa: format!("{} {}", kind, id),
    }
}

/// `(id, name, line, ems, wheelchair, blindness, wc)`
fn station(
    (id, name, line, ems, wheelchair, blindness, wc): (i64, &str, i64, bool, i64, i64, i64),
) -> Station {
    Station {
        id: Id::new(id),
        name_fa: name.to_owned(),
        name_en: name.to_owned(),
        line_id: Id::new(line),
        position_in_line: id,
        location: None,
        map_position: None,
        has_emergency_medical_services: ems,
        accessibility_wheelchair_level_id: Id::new(wheelchair),
        accessibility_blindness_level_id: Id::new(blindness),
        wc_level_id: Id::new(wc),
    }
}

pub fn levels() -> Vec<AccessibilityLevel> {
    // deliberately out of order
    let mut levels = Vec::new();
    for id in [3, 1, 5, 2, 4] {
        levels.push(level(AccessibilityKind::Wheelchair, id));
    }
    for id in [2, 3, 1] {
        levels.push(level(AccessibilityKind::Blindness, id));
        levels.push(level(AccessibilityKind::Wc, id));
    }
    levels
}

/// Five distinct stops. "Darvazeh Dowlat" is listed on lines 1 and 4,
/// "Imam Khomeini" on lines 1 and 2 with the higher id listed first.
pub fn dataset() -> Dataset {
    let mut stations = [
        (1, "Tajrish", 1, true, 5, 1, 3),
        (2, "Gheytariyeh", 1, false, 1, 1, 1),
        (3, "Darvazeh Dowlat", 1, true, 3, 2, 2),
        (4, "Darvazeh Dowlat", 4, false, 2, 2, 1),
        (5, "Azadi Square", 4, false, 1, 3, 1),
        (7, "Imam Khomeini", 1, true, 4, 1, 2),
        (6, "Imam Khomeini", 2, true, 4, 1, 2),
    ]
    .map(station)
    .to_vec();
    stations[4].name_fa = "میدان آزادی".to_owned();

    Dataset {
        lines: vec![
            line(1, "Line 1", LineType::MetroLine),
            line(4, "Line 4", LineType::MetroLine),
            line(2, "Line 2", LineType::MetroLine),
        ],
        stations,
        intersections: vec![
            Intersection {
                id: Id::new(1),
                station_id: Id::new(3),
            },
            Intersection {
                id: Id::new(2),
                station_id: Id::new(4),
            },
            Intersection {
                id: Id::new(3),
                station_id: Id::new(6),
            },
            Intersection {
                id: Id::new(4),
                station_id: Id::new(7),
            },
        ],
        accessibility_levels: levels(),
        information: Some(DatabaseInformation::example_data()),
    }
}

pub fn database() -> MemoryDatabase {
    MemoryDatabase::new(dataset())
}

pub fn empty_database() -> MemoryDatabase {
    MemoryDatabase::new(Dataset {
        accessibility_levels: levels(),
        ..Dataset::default()
    })
}

/// A store whose every read fails with an I/O error.
#[derive(Debug, Clone)]
pub struct BrokenDatabase;

pub struct BrokenReader;

fn broken<T>() -> Result<T> {
    Err(DatabaseError::other(io::Error::other("disk on fire")))
}

impl Database for BrokenDatabase {
    type Reader = BrokenReader;

    fn reader(&self) -> Self::Reader {
        BrokenReader
    }
}

#[async_trait]
impl Repo<Line> for BrokenReader {
    async fn get(&mut self, _id: Id<Line>) -> Result<Line> {
        broken()
    }

    async fn get_all(&mut self) -> Result<Vec<Line>> {
        broken()
    }
}

impl LineRepo for BrokenReader {}

#[async_trait]
impl Repo<Station> for BrokenReader {
    async fn get(&mut self, _id: Id<Station>) -> Result<Station> {
        broken()
    }

    async fn get_all(&mut self) -> Result<Vec<Station>> {
        broken()
    }
}

#[async_trait]
impl StationRepo for BrokenReader {
    async fn get_by_line_id(&mut self, _line_id: Id<Line>) -> Result<Vec<Station>> {
        broken()
    }

    async fn search<S: Into<String> + Send>(&mut self, _pattern: S) -> Result<Vec<Station>> {
        broken()
    }
}

#[async_trait]
impl Repo<Intersection> for BrokenReader {
    async fn get(&mut self, _id: Id<Intersection>) -> Result<Intersection> {
        broken()
    }

    async fn get_all(&mut self) -> Result<Vec<Intersection>> {
        broken()
    }
}

#[async_trait]
impl IntersectionRepo for BrokenReader {
    async fn get_by_station_id(&mut self, _station_id: Id<Station>) -> Result<Intersection> {
        broken()
    }
}

#[async_trait]
impl AccessibilityRepo for BrokenReader {
    async fn get_levels(&mut self, _kind: AccessibilityKind) -> Result<Vec<AccessibilityLevel>> {
        broken()
    }

    async fn get_level(
        &mut self,
        _kind: AccessibilityKind,
        _id: Id<AccessibilityLevel>,
    ) -> Result<AccessibilityLevel> {
        broken()
    }
}

#[async_trait]
impl DatabaseInformationRepo for BrokenReader {
    async fn information(&mut self) -> Result<DatabaseInformation> {
        broken()
    }
}
