//! Tag models.

use serde::{Deserialize, Serialize};

use super::meta::list_response;

/// A label that can be put on calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Unique identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// API URL of this resource
    #[serde(default)]
    pub direct_link: Option<String>,
    /// Name
    #[serde(default)]
    pub name: Option<String>,
    /// Hexadecimal color, e.g. `#00B388`
    #[serde(default)]
    pub color: Option<String>,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
}

/// Body for creating or updating a tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateUpdateTag {
    /// Name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CreateUpdateTag {
    /// A tag with both name and color.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            color: Some(color.into()),
        }
    }
}

list_response! {
    /// A page of tags.
    TagList { tags: Tag }
}
