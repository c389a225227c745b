use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What a [`Stat`] counts. Mapping a key to display text is left to the
/// presentation layer.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "camelCase")]
pub enum StatKey {
    Stations,
    Intersections,
    Lines,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    pub key: StatKey,
    pub value: usize,
}

impl Stat {
    pub fn new(key: StatKey, value: usize) -> Self {
        Self { key, value }
    }
}

/// One row of a percentage breakdown. A row without a value is a section
/// header, never a data row.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatComplex {
    pub title_en: String,
    pub title_fa: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl StatComplex {
    pub fn header<E: Into<String>, F: Into<String>>(title_en: E, title_fa: F) -> Self {
        Self {
            title_en: title_en.into(),
            title_fa: title_fa.into(),
            value: None,
        }
    }

    pub fn row<E: Into<String>, F: Into<String>>(
        title_en: E,
        title_fa: F,
        value: String,
    ) -> Self {
        Self {
            title_en: title_en.into(),
            title_fa: title_fa.into(),
            value: Some(value),
        }
    }

    pub fn is_header(&self) -> bool {
        self.value.is_none()
    }
}
