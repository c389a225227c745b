use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::{station::Station, ExampleData};

/// A station where two or more lines meet.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Intersection {
    pub id: Id<Intersection>,
    pub station_id: Id<Station>,
}

impl HasId for Intersection {
    type IdType = i64;
}

impl ExampleData for Intersection {
    fn example_data() -> Self {
        Self {
            id: Id::new(1),
            station_id: Id::new(1),
        }
    }
}
