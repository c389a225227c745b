use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::ExampleData;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "camelCase")]
pub enum AccessibilityKind {
    Wheelchair,
    Blindness,
    Wc,
}

impl AccessibilityKind {
    pub const ALL: [AccessibilityKind; 3] = [Self::Wheelchair, Self::Blindness, Self::Wc];

    /// Highest level id of this kind. Level ids run from 1 to this value.
    pub const fn max_value(self) -> i64 {
        match self {
            Self::Wheelchair => 5,
            Self::Blindness => 3,
            Self::Wc => 3,
        }
    }
}

impl fmt::Display for AccessibilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wheelchair => write!(f, "wheelchair"),
            Self::Blindness => write!(f, "blindness"),
            Self::Wc => write!(f, "wc"),
        }
    }
}

/// Marks a level as one of the two ends of its scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum LevelBound {
    /// no support at all.
    Min,
    /// full support.
    Max,
}

/// A graded accessibility descriptor. Wheelchair access, support for the
/// visually impaired and restroom availability share this record; the `kind`
/// decides which scale the id belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityLevel {
    pub id: Id<AccessibilityLevel>,
    pub kind: AccessibilityKind,
    pub description_en: String,
    pub description_fa: String,
}

impl AccessibilityLevel {
    pub fn max_value(&self) -> i64 {
        self.kind.max_value()
    }

    pub fn is_in_range(&self) -> bool {
        (1..=self.max_value()).contains(&self.id.raw())
    }

    pub fn bound(&self) -> Option<LevelBound> {
        match self.id.raw() {
            1 => Some(LevelBound::Min),
            id if id == self.max_value() => Some(LevelBound::Max),
            _ => None,
        }
    }
}

impl HasId for AccessibilityLevel {
    type IdType = i64;
}

impl ExampleData for AccessibilityLevel {
    fn example_data() -> Self {
        Self {
            id: Id::new(3),
            kind: AccessibilityKind::Wc,
            description_en: "Restroom available".to_owned(),
            description_fa: "سرویس بهداشتی موجود است".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(kind: AccessibilityKind, id: i64) -> AccessibilityLevel {
        AccessibilityLevel {
            id: Id::new(id),
            kind,
            description_en: String::new(),
            description_fa: String::new(),
        }
    }

    #[test]
    fn bounds_follow_kind_scale() {
        let wheelchair = AccessibilityKind::Wheelchair;
        assert_eq!(level(wheelchair, 1).bound(), Some(LevelBound::Min));
        assert_eq!(level(wheelchair, 3).bound(), None);
        assert_eq!(level(wheelchair, 5).bound(), Some(LevelBound::Max));

        let wc = AccessibilityKind::Wc;
        assert_eq!(level(wc, 2).bound(), None);
        assert_eq!(level(wc, 3).bound(), Some(LevelBound::Max));
    }

    #[test]
    fn range_check() {
        assert!(level(AccessibilityKind::Wheelchair, 5).is_in_range());
        assert!(!level(AccessibilityKind::Wheelchair, 6).is_in_range());
        assert!(!level(AccessibilityKind::Blindness, 0).is_in_range());
        assert!(AccessibilityLevel::example_data().is_in_range());
    }
}
