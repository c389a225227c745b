use crate::database::DatabaseError;
use model::{
    accessibility::{AccessibilityKind, AccessibilityLevel},
    line::Line,
    station::Station,
};
use thiserror::Error;
use utility::id::Id;

pub mod client;
pub mod database;
pub mod repository;
pub mod station;
pub mod statistics;

#[cfg(test)]
pub(crate) mod fixtures;

/// The dataset contradicts itself. Unlike a missing record this is never a
/// legitimate outcome of a lookup.
#[derive(Debug, Error)]
pub enum IntegrityError {
    #[error("station {station} references line {line}, which does not exist")]
    MissingLine { station: Id<Station>, line: Id<Line> },

    #[error("station {station} references {kind} level {level}, which does not exist")]
    MissingAccessibilityLevel {
        station: Id<Station>,
        kind: AccessibilityKind,
        level: Id<AccessibilityLevel>,
    },

    #[error("{kind} level {level} is outside of 1..={max}")]
    LevelOutOfRange {
        kind: AccessibilityKind,
        level: Id<AccessibilityLevel>,
        max: i64,
    },
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("data integrity violation: {0}")]
    Integrity(#[from] IntegrityError),

    #[error("database error: {0}")]
    Database(#[from] DatabaseError),
}

pub type RequestResult<O> = Result<O, RequestError>;
