use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::{
    accessibility::{AccessibilityKind, AccessibilityLevel},
    intersection::Intersection,
    line::Line,
    ExampleData,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Position on the schematic network map.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MapPosition {
    pub x: i64,
    pub y: i64,
}

/// A station as stored in the dataset. References to other records are kept
/// as ids; see [`ResolvedStation`] for the joined form.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: Id<Station>,
    pub name_fa: String,
    pub name_en: String,
    pub line_id: Id<Line>,
    pub position_in_line: i64,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub map_position: Option<MapPosition>,
    pub has_emergency_medical_services: bool,
    pub accessibility_wheelchair_level_id: Id<AccessibilityLevel>,
    pub accessibility_blindness_level_id: Id<AccessibilityLevel>,
    pub wc_level_id: Id<AccessibilityLevel>,
}

impl Station {
    pub fn has_location(&self) -> bool {
        self.location.is_some()
    }

    /// Whether both records describe the same physical stop, listed under
    /// different lines.
    pub fn is_virtually_the_same(&self, other: &Station) -> bool {
        self.name_en == other.name_en
    }

    pub fn accessibility_level_id(&self, kind: AccessibilityKind) -> &Id<AccessibilityLevel> {
        match kind {
            AccessibilityKind::Wheelchair => &self.accessibility_wheelchair_level_id,
            AccessibilityKind::Blindness => &self.accessibility_blindness_level_id,
            AccessibilityKind::Wc => &self.wc_level_id,
        }
    }
}

impl HasId for Station {
    type IdType = i64;
}

impl ExampleData for Station {
    fn example_data() -> Self {
        Self {
            id: Id::new(1),
            name_fa: "تجریش".to_owned(),
            name_en: "Tajrish".to_owned(),
            line_id: Id::new(1),
            position_in_line: 1,
            location: Some(Location {
                latitude: 35.8043,
                longitude: 51.4336,
            }),
            map_position: Some(MapPosition { x: 512, y: 48 }),
            has_emergency_medical_services: true,
            accessibility_wheelchair_level_id: Id::new(5),
            accessibility_blindness_level_id: Id::new(1),
            wc_level_id: Id::new(3),
        }
    }
}

/// The records a station references, looked up by id. Records are shared
/// between all stations resolved in the same pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationAttachments {
    pub line: Arc<Line>,
    pub intersection: Option<Arc<Intersection>>,
    pub accessibility_wheelchair: Arc<AccessibilityLevel>,
    pub accessibility_blindness: Arc<AccessibilityLevel>,
    pub wc: Arc<AccessibilityLevel>,
}

impl StationAttachments {
    pub fn accessibility(&self, kind: AccessibilityKind) -> &AccessibilityLevel {
        match kind {
            AccessibilityKind::Wheelchair => &self.accessibility_wheelchair,
            AccessibilityKind::Blindness => &self.accessibility_blindness,
            AccessibilityKind::Wc => &self.wc,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolvedStation {
    #[serde(flatten)]
    pub station: Station,
    #[serde(flatten)]
    pub attachments: Option<StationAttachments>,
}

impl ResolvedStation {
    pub fn unresolved(station: Station) -> Self {
        Self {
            station,
            attachments: None,
        }
    }

    pub fn resolved(station: Station, attachments: StationAttachments) -> Self {
        Self {
            station,
            attachments: Some(attachments),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.attachments.is_some()
    }

    pub fn line(&self) -> Option<&Line> {
        self.attachments.as_ref().map(|attachments| attachments.line.as_ref())
    }

    pub fn intersection(&self) -> Option<&Intersection> {
        self.attachments
            .as_ref()
            .and_then(|attachments| attachments.intersection.as_deref())
    }

    pub fn is_intersection(&self) -> bool {
        self.intersection().is_some()
    }
}
