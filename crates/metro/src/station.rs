use std::{collections::HashMap, sync::Arc};

use indexmap::{map::Entry, IndexMap};
use model::{
    accessibility::{AccessibilityKind, AccessibilityLevel},
    line::Line,
    station::{ResolvedStation, Station, StationAttachments},
};
use utility::id::Id;

use crate::{
    database::{
        not_found_to_none, Database, DatabaseOperations, Repo, StationRepo,
    },
    IntegrityError, RequestResult,
};

const SEARCH_QUERY_MIN_LENGTH: usize = 1;

/// Joins raw stations with the records they reference.
#[derive(Debug, Clone)]
pub struct StationRepository<D: Database> {
    database: D,
}

impl<D: Database> StationRepository<D> {
    pub fn new(database: D) -> Self {
        Self { database }
    }

    /// Returns all stations in store order.
    ///
    /// With `complete` set, every station carries its line, intersection (if
    /// any) and accessibility levels, and a dangling reference to a line or a
    /// level fails the whole call. Without it stations are returned as stored.
    ///
    /// With `remove_duplicate` set, stations which are virtually the same are
    /// collapsed, see [`remove_duplicates`]. Collapsing happens after
    /// resolution, so a dangling reference of a dropped duplicate still fails
    /// the call.
    pub async fn get_stations(
        &self,
        complete: bool,
        remove_duplicate: bool,
    ) -> RequestResult<Vec<ResolvedStation>> {
        let mut reader = self.database.reader();
        let stations = Repo::<Station>::get_all(&mut reader).await?;
        let resolved = resolve_all(&mut reader, stations, complete).await?;
        if remove_duplicate {
            return Ok(collapse(resolved, |resolved| &resolved.station));
        }
        Ok(resolved)
    }

    pub async fn get_station(
        &self,
        id: Id<Station>,
        complete: bool,
    ) -> RequestResult<Option<ResolvedStation>> {
        let mut reader = self.database.reader();
        let Some(station) = not_found_to_none(Repo::<Station>::get(&mut reader, id).await)?
        else {
            return Ok(None);
        };
        let mut resolved = resolve_all(&mut reader, vec![station], complete).await?;
        Ok(resolved.pop())
    }

    /// Stations of one line in store order. Sorting by position in the line is
    /// left to the caller.
    pub async fn get_stations_by_line(
        &self,
        line_id: Id<Line>,
        complete: bool,
    ) -> RequestResult<Vec<ResolvedStation>> {
        let mut reader = self.database.reader();
        let stations = reader.get_by_line_id(line_id).await?;
        resolve_all(&mut reader, stations, complete).await
    }

    /// Stations whose english or persian name contains `query`. A blank query
    /// matches nothing.
    pub async fn search_stations(
        &self,
        query: &str,
        complete: bool,
    ) -> RequestResult<Vec<ResolvedStation>> {
        let query = query.trim();
        if query.chars().count() < SEARCH_QUERY_MIN_LENGTH {
            return Ok(Vec::new());
        }
        let mut reader = self.database.reader();
        let stations = reader.search(query).await?;
        resolve_all(&mut reader, stations, complete).await
    }
}

/// Collapses stations which are virtually the same (equal english name) into
/// one representative. The station with the lowest id is kept and takes the
/// place where its name was seen first.
pub fn remove_duplicates(stations: Vec<Station>) -> Vec<Station> {
    collapse(stations, |station| station)
}

fn collapse<T, F>(items: Vec<T>, station: F) -> Vec<T>
where
    F: Fn(&T) -> &Station,
{
    let mut by_name: IndexMap<String, T> = IndexMap::with_capacity(items.len());
    for item in items {
        match by_name.entry(station(&item).name_en.clone()) {
            Entry::Occupied(mut entry) => {
                if station(&item).id < station(entry.get()).id {
                    entry.insert(item);
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(item);
            }
        }
    }
    by_name.into_values().collect()
}

async fn resolve_all<R>(
    reader: &mut R,
    stations: Vec<Station>,
    complete: bool,
) -> RequestResult<Vec<ResolvedStation>>
where
    R: DatabaseOperations + Send,
{
    if !complete {
        return Ok(stations.into_iter().map(ResolvedStation::unresolved).collect());
    }

    let mut resolver = Resolver::new(reader);
    let mut resolved = Vec::with_capacity(stations.len());
    for station in stations {
        resolved.push(resolver.resolve(station).await?);
    }
    log::debug!(
        "resolved {} stations using {} lines",
        resolved.len(),
        resolver.lines.len()
    );
    Ok(resolved)
}

/// Looks up referenced records one id at a time. Records already fetched
/// during this pass are reused, so stations of the same line share one `Line`.
struct Resolver<'a, R> {
    reader: &'a mut R,
    lines: HashMap<Id<Line>, Arc<Line>>,
    levels: HashMap<(AccessibilityKind, Id<AccessibilityLevel>), Arc<AccessibilityLevel>>,
}

impl<'a, R> Resolver<'a, R>
where
    R: DatabaseOperations + Send,
{
    fn new(reader: &'a mut R) -> Self {
        Self {
            reader,
            lines: HashMap::new(),
            levels: HashMap::new(),
        }
    }

    async fn resolve(&mut self, station: Station) -> RequestResult<ResolvedStation> {
        let line = self.line(&station).await?;
        let intersection = not_found_to_none(self.reader.get_by_station_id(station.id).await)?
            .map(Arc::new);
        let accessibility_wheelchair = self.level(&station, AccessibilityKind::Wheelchair).await?;
        let accessibility_blindness = self.level(&station, AccessibilityKind::Blindness).await?;
        let wc = self.level(&station, AccessibilityKind::Wc).await?;

        Ok(ResolvedStation::resolved(
            station,
            StationAttachments {
                line,
                intersection,
                accessibility_wheelchair,
                accessibility_blindness,
                wc,
            },
        ))
    }

    async fn line(&mut self, station: &Station) -> RequestResult<Arc<Line>> {
        if let Some(line) = self.lines.get(&station.line_id) {
            return Ok(line.clone());
        }
        let Some(line) =
            not_found_to_none(Repo::<Line>::get(&mut *self.reader, station.line_id).await)?
        else {
            log::warn!(
                "station {} references unknown line {}",
                station.id,
                station.line_id
            );
            return Err(IntegrityError::MissingLine {
                station: station.id,
                line: station.line_id,
            }
            .into());
        };
        let line = Arc::new(line);
        self.lines.insert(station.line_id, line.clone());
        Ok(line)
    }

    async fn level(
        &mut self,
        station: &Station,
        kind: AccessibilityKind,
    ) -> RequestResult<Arc<AccessibilityLevel>> {
        let id = *station.accessibility_level_id(kind);
        if let Some(level) = self.levels.get(&(kind, id)) {
            return Ok(level.clone());
        }
        let Some(level) = not_found_to_none(self.reader.get_level(kind, id).await)? else {
            log::warn!(
                "station {} references unknown {} level {}",
                station.id,
                kind,
                id
            );
            return Err(IntegrityError::MissingAccessibilityLevel {
                station: station.id,
                kind,
                level: id,
            }
            .into());
        };
        if !level.is_in_range() {
            return Err(IntegrityError::LevelOutOfRange {
                kind,
                level: id,
                max: level.max_value(),
            }
            .into());
        }
        let level = Arc::new(level);
        self.levels.insert((kind, id), level.clone());
        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use model::{accessibility::LevelBound, ExampleData};

    use super::*;
    use crate::{
        database::memory::{Dataset, MemoryDatabase},
        fixtures, RequestError,
    };

    fn ids(stations: &[ResolvedStation]) -> Vec<i64> {
        stations.iter().map(|station| station.station.id.raw()).collect()
    }

    #[tokio::test]
    async fn complete_stations_carry_their_line() {
        let stations = StationRepository::new(fixtures::database())
            .get_stations(true, false)
            .await
            .unwrap();
        assert_eq!(stations.len(), 7);
        for station in &stations {
            let line = station.line().expect("complete station without line");
            assert_eq!(line.id, station.station.line_id);
        }
    }

    #[tokio::test]
    async fn incomplete_stations_have_no_attachments() {
        let stations = StationRepository::new(fixtures::database())
            .get_stations(false, false)
            .await
            .unwrap();
        assert_eq!(ids(&stations), vec![1, 2, 3, 4, 5, 7, 6]);
        assert!(stations.iter().all(|station| !station.is_complete()));
    }

    #[tokio::test]
    async fn intersections_and_levels_are_attached() {
        let stations = StationRepository::new(fixtures::database())
            .get_stations(true, false)
            .await
            .unwrap();
        let tajrish = &stations[0];
        assert!(!tajrish.is_intersection());
        let attachments = tajrish.attachments.as_ref().unwrap();
        assert_eq!(
            attachments.accessibility_wheelchair.bound(),
            Some(LevelBound::Max)
        );
        assert_eq!(
            attachments.accessibility_blindness.bound(),
            Some(LevelBound::Min)
        );
        assert_eq!(attachments.wc.id, Id::new(3));

        let darvazeh = &stations[2];
        assert_eq!(darvazeh.intersection().map(|i| i.id), Some(Id::new(1)));
    }

    #[tokio::test]
    async fn stations_of_a_line_share_one_line_record() {
        let stations = StationRepository::new(fixtures::database())
            .get_stations_by_line(Id::new(1), true)
            .await
            .unwrap();
        assert_eq!(ids(&stations), vec![1, 2, 3, 7]);
        let first = &stations[0].attachments.as_ref().unwrap().line;
        for station in &stations[1..] {
            assert!(Arc::ptr_eq(first, &station.attachments.as_ref().unwrap().line));
        }
    }

    #[tokio::test]
    async fn duplicates_collapse_to_lowest_id() {
        let repository = StationRepository::new(fixtures::database());

        let all = repository.get_stations(true, false).await.unwrap();
        let names = all
            .iter()
            .filter(|station| station.station.name_en == "Darvazeh Dowlat")
            .count();
        assert_eq!(names, 2);

        let unique = repository.get_stations(true, true).await.unwrap();
        // "Imam Khomeini" keeps id 6 but sits where id 7 was listed
        assert_eq!(ids(&unique), vec![1, 2, 3, 5, 6]);
        let names = unique
            .iter()
            .map(|station| station.station.name_en.as_str())
            .collect::<HashSet<_>>();
        assert_eq!(names.len(), unique.len());

        let again = repository.get_stations(true, true).await.unwrap();
        assert_eq!(ids(&again), ids(&unique));
    }

    #[test]
    fn remove_duplicates_does_not_depend_on_input_order() {
        let mut stations = fixtures::dataset().stations;
        let forward = remove_duplicates(stations.clone())
            .into_iter()
            .map(|station| station.id.raw())
            .collect::<HashSet<_>>();
        stations.reverse();
        let backward = remove_duplicates(stations)
            .into_iter()
            .map(|station| station.id.raw())
            .collect::<HashSet<_>>();
        assert_eq!(forward, backward);
    }

    #[tokio::test]
    async fn missing_line_is_an_integrity_error() {
        let mut dataset = fixtures::dataset();
        dataset.stations[1].line_id = Id::new(99);
        let repository = StationRepository::new(MemoryDatabase::new(dataset));

        let result = repository.get_stations(true, false).await;
        assert!(matches!(
            result,
            Err(RequestError::Integrity(IntegrityError::MissingLine { .. }))
        ));

        // raw attributes are still readable
        let raw = repository.get_stations(false, false).await.unwrap();
        assert_eq!(raw.len(), 7);
    }

    #[tokio::test]
    async fn dropped_duplicate_with_missing_line_still_fails() {
        let mut dataset = fixtures::dataset();
        // the second "Darvazeh Dowlat", which collapsing would discard
        dataset.stations[3].line_id = Id::new(99);
        let repository = StationRepository::new(MemoryDatabase::new(dataset));

        assert!(matches!(
            repository.get_stations(true, true).await,
            Err(RequestError::Integrity(IntegrityError::MissingLine { station, .. }))
                if station == Id::new(4)
        ));
        assert!(matches!(
            repository.get_stations(true, false).await,
            Err(RequestError::Integrity(IntegrityError::MissingLine { .. }))
        ));

        // nothing is resolved, so nothing is checked
        let raw = repository.get_stations(false, true).await.unwrap();
        assert_eq!(ids(&raw), vec![1, 2, 3, 5, 6]);
    }

    #[tokio::test]
    async fn missing_level_is_an_integrity_error() {
        let mut dataset = fixtures::dataset();
        dataset.stations[0].wc_level_id = Id::new(4);
        let result = StationRepository::new(MemoryDatabase::new(dataset))
            .get_stations(true, true)
            .await;
        assert!(matches!(
            result,
            Err(RequestError::Integrity(
                IntegrityError::MissingAccessibilityLevel {
                    kind: AccessibilityKind::Wc,
                    ..
                }
            ))
        ));
    }

    #[tokio::test]
    async fn level_outside_of_scale_is_an_integrity_error() {
        let mut dataset = fixtures::dataset();
        dataset.accessibility_levels.push(AccessibilityLevel {
            id: Id::new(6),
            kind: AccessibilityKind::Wheelchair,
            description_en: "Beyond".to_owned(),
            description_fa: "Beyond".to_owned(),
        });
        dataset.stations[0].accessibility_wheelchair_level_id = Id::new(6);
        let result = StationRepository::new(MemoryDatabase::new(dataset))
            .get_stations(true, false)
            .await;
        assert!(matches!(
            result,
            Err(RequestError::Integrity(IntegrityError::LevelOutOfRange {
                max: 5,
                ..
            }))
        ));
    }

    #[tokio::test]
    async fn single_station_lookup() {
        let repository = StationRepository::new(fixtures::database());
        let station = repository.get_station(Id::new(5), true).await.unwrap();
        assert_eq!(
            station.as_ref().and_then(|s| s.line()).map(|line| line.id),
            Some(Id::new(4))
        );
        assert!(repository
            .get_station(Id::new(99), true)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn search_trims_and_ignores_blank_queries() {
        let repository = StationRepository::new(fixtures::database());
        assert!(repository.search_stations("   ", true).await.unwrap().is_empty());

        let found = repository.search_stations("  tajrish ", true).await.unwrap();
        assert_eq!(ids(&found), vec![1]);
        assert!(found[0].is_complete());
    }

    #[tokio::test]
    async fn blank_search_does_not_touch_the_store() {
        let repository = StationRepository::new(fixtures::BrokenDatabase);
        assert!(repository.search_stations("", false).await.unwrap().is_empty());
        assert!(matches!(
            repository.search_stations("a", false).await,
            Err(RequestError::Database(_))
        ));
    }

    #[tokio::test]
    async fn empty_dataset_has_no_stations() {
        let repository = StationRepository::new(MemoryDatabase::new(Dataset::default()));
        assert!(repository.get_stations(true, true).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn example_station_resolves_against_example_records() {
        let dataset = Dataset {
            lines: vec![Line::example_data()],
            stations: vec![Station::example_data()],
            accessibility_levels: fixtures::levels(),
            ..Dataset::default()
        };
        let stations = StationRepository::new(MemoryDatabase::new(dataset))
            .get_stations(true, true)
            .await
            .unwrap();
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].line(), Some(&Line::example_data()));
    }
}
