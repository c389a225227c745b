use model::accessibility::{AccessibilityKind, AccessibilityLevel};
use utility::id::Id;

use crate::{
    database::{not_found_to_none, AccessibilityRepo, Database},
    RequestResult,
};

/// Levels of all three accessibility kinds. Every lookup names the kind, as
/// level ids are only unique within their kind.
#[derive(Debug, Clone)]
pub struct AccessibilityRepository<D: Database> {
    database: D,
}

impl<D: Database> AccessibilityRepository<D> {
    pub fn new(database: D) -> Self {
        Self { database }
    }

    pub async fn get_levels(
        &self,
        kind: AccessibilityKind,
    ) -> RequestResult<Vec<AccessibilityLevel>> {
        Ok(self.database.reader().get_levels(kind).await?)
    }

    pub async fn get_level(
        &self,
        kind: AccessibilityKind,
        id: Id<AccessibilityLevel>,
    ) -> RequestResult<Option<AccessibilityLevel>> {
        Ok(not_found_to_none(
            self.database.reader().get_level(kind, id).await,
        )?)
    }
}
