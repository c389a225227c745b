use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::ExampleData;

/// Kind of a line as stored in the dataset, where it is encoded as an integer.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash,
)]
#[serde(from = "i64", into = "i64")]
#[schemars(with = "i64")]
pub enum LineType {
    Invalid,
    MetroLine,
    MetroBranch,
}

impl LineType {
    /// Unknown values map to `Invalid` instead of failing, so a dataset using a
    /// newer encoding can still be browsed.
    pub fn from_int(value: i64) -> Self {
        match value {
            1 => Self::MetroLine,
            2 => Self::MetroBranch,
            _ => Self::Invalid,
        }
    }

    pub fn to_int(self) -> i64 {
        match self {
            Self::Invalid => 0,
            Self::MetroLine => 1,
            Self::MetroBranch => 2,
        }
    }
}

impl From<i64> for LineType {
    fn from(value: i64) -> Self {
        Self::from_int(value)
    }
}

impl From<LineType> for i64 {
    fn from(value: LineType) -> Self {
        value.to_int()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub id: Id<Line>,
    pub name_fa: String,
    pub name_en: String,
    #[serde(rename = "type")]
    pub kind: LineType,
    /// hex encoded, e.g. `#E0001F`.
    pub color: String,
}

impl HasId for Line {
    type IdType = i64;
}

impl ExampleData for Line {
    fn example_data() -> Self {
        Self {
            id: Id::new(1),
            name_fa: "خط ۱".to_owned(),
            name_en: "Line 1".to_owned(),
            kind: LineType::MetroLine,
            color: "#E0001F".to_owned(),
        }
    }
}
