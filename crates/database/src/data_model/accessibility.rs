use async_trait::async_trait;
use metro::database::{AccessibilityRepo, Result};
use model::accessibility::{AccessibilityKind, AccessibilityLevel};
use sqlx::prelude::FromRow;
use utility::id::Id;

use crate::{
    queries::accessibility::{get, get_all},
    SqliteReader,
};

/// Level tables carry no kind column, the kind is implied by the table a row
/// was read from.
#[derive(Debug, Clone, FromRow)]
pub struct AccessibilityLevelRow {
    pub id: i64,
    pub description_en: String,
    pub description_fa: String,
}

impl AccessibilityLevelRow {
    pub fn to_model(self, kind: AccessibilityKind) -> AccessibilityLevel {
        AccessibilityLevel {
            id: Id::new(self.id),
            kind,
            description_en: self.description_en,
            description_fa: self.description_fa,
        }
    }
}

pub fn table(kind: AccessibilityKind) -> &'static str {
    match kind {
        AccessibilityKind::Wheelchair => "stations_accessibility_wheelchair_levels",
        AccessibilityKind::Blindness => "stations_accessibility_blindness_levels",
        AccessibilityKind::Wc => "stations_wc_availability_levels",
    }
}

// Repo

#[async_trait]
impl AccessibilityRepo for SqliteReader {
    async fn get_levels(&mut self, kind: AccessibilityKind) -> Result<Vec<AccessibilityLevel>> {
        get_all(&self.pool, kind).await
    }

    async fn get_level(
        &mut self,
        kind: AccessibilityKind,
        id: Id<AccessibilityLevel>,
    ) -> Result<AccessibilityLevel> {
        get(&self.pool, kind, id).await
    }
}
