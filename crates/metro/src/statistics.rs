use futures::try_join;
use itertools::Itertools;
use model::{
    accessibility::{AccessibilityKind, AccessibilityLevel},
    stat::{Stat, StatComplex, StatKey},
    station::ResolvedStation,
};

use crate::{
    database::Database,
    repository::{
        accessibility::AccessibilityRepository, intersection::IntersectionRepository,
        line::LineRepository,
    },
    station::StationRepository,
    RequestResult,
};

/// Formats `count` as a share of `total`, e.g. `33.33%`. Ties round half up,
/// so `1 / 32` is `3.13%`.
///
/// An empty total has no meaningful share; it is reported as `0.00%` so that
/// an empty dataset still yields a complete table.
pub fn percentage(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.00%".to_owned();
    }
    let hundredths = (count * 20_000 + total) / (total * 2);
    format!("{}.{:02}%", hundredths / 100, hundredths % 100)
}

#[derive(Debug, Clone)]
pub struct StatRepository<D: Database> {
    database: D,
}

impl<D: Database> StatRepository<D> {
    pub fn new(database: D) -> Self {
        Self { database }
    }

    /// Station, intersection and line counts, in this order. Stations listed on
    /// several lines are counted once.
    pub async fn get_basic_statistics(&self) -> RequestResult<Vec<Stat>> {
        let stations = StationRepository::new(self.database.clone());
        let intersections = IntersectionRepository::new(self.database.clone());
        let lines = LineRepository::new(self.database.clone());

        let (stations, intersections, lines) = try_join!(
            stations.get_stations(true, true),
            intersections.get_intersections(),
            lines.get_lines(),
        )?;

        Ok(vec![
            Stat::new(StatKey::Stations, stations.len()),
            Stat::new(StatKey::Intersections, intersections.len()),
            Stat::new(StatKey::Lines, lines.len()),
        ])
    }

    /// Share of stations offering emergency medical services, followed by the
    /// share of stations per visual impairment, wheelchair and restroom level.
    pub async fn get_complex_statistics(&self) -> RequestResult<Vec<StatComplex>> {
        let stations = StationRepository::new(self.database.clone());
        let accessibility = AccessibilityRepository::new(self.database.clone());

        let (stations, blindness, wheelchair, wc) = try_join!(
            stations.get_stations(false, true),
            accessibility.get_levels(AccessibilityKind::Blindness),
            accessibility.get_levels(AccessibilityKind::Wheelchair),
            accessibility.get_levels(AccessibilityKind::Wc),
        )?;

        let total = stations.len();
        let with_ems = stations
            .iter()
            .filter(|station| station.station.has_emergency_medical_services)
            .count();

        let mut rows = vec![
            StatComplex::header("Emergency medical services", "خدمات فوریت‌های پزشکی"),
            StatComplex::row(
                "Emergency medical services not available",
                "خدمات فوریت‌های پزشکی موجود نیست",
                percentage(total - with_ems, total),
            ),
            StatComplex::row(
                "Emergency medical services available",
                "خدمات فوریت‌های پزشکی موجود است",
                percentage(with_ems, total),
            ),
            StatComplex::header("Visually impaired", "نابینایان"),
        ];
        rows.extend(level_rows(&stations, AccessibilityKind::Blindness, blindness));
        rows.push(StatComplex::header("Wheelchair", "ویلچر"));
        rows.extend(level_rows(&stations, AccessibilityKind::Wheelchair, wheelchair));
        rows.push(StatComplex::header("Restroom", "سرویس بهداشتی"));
        rows.extend(level_rows(&stations, AccessibilityKind::Wc, wc));

        log::debug!(
            "computed {} statistic rows over {} stations",
            rows.len(),
            total
        );
        Ok(rows)
    }
}

/// One row per level, ascending by id, valued by the share of stations at
/// exactly that level.
fn level_rows(
    stations: &[ResolvedStation],
    kind: AccessibilityKind,
    levels: Vec<AccessibilityLevel>,
) -> Vec<StatComplex> {
    let total = stations.len();
    let counts = stations
        .iter()
        .counts_by(|station| *station.station.accessibility_level_id(kind));
    levels
        .into_iter()
        .sorted_by_key(|level| level.id)
        .map(|level| {
            let count = counts.get(&level.id).copied().unwrap_or(0);
            StatComplex::row(level.description_en, level.description_fa, percentage(count, total))
        })
        .collect()
}
