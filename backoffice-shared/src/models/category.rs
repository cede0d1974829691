use serde::{Deserialize, Serialize};

use crate::helpers::null_as_default;

/// A product category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Backend identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Short business code.
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    /// Whether the category is selectable.
    #[serde(default, deserialize_with = "null_as_default")]
    pub active: bool,
}
