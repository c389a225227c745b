use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ExampleData;

/// Describes the shipped dataset itself.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseInformation {
    pub version_code: i64,
    pub version_name: String,
    pub release_date: NaiveDate,
}

impl ExampleData for DatabaseInformation {
    fn example_data() -> Self {
        Self {
            version_code: 3,
            version_name: "1.2.0".to_owned(),
            release_date: NaiveDate::from_ymd_opt(2022, 3, 21).unwrap_or_default(),
        }
    }
}
