//! Team models.

use serde::{Deserialize, Serialize};

use super::meta::{list_response, null_as_default};
use super::User;

/// A group of users calls can be dispatched to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// API URL of this resource
    #[serde(default)]
    pub direct_link: Option<String>,
    /// Name
    #[serde(default)]
    pub name: Option<String>,
    /// Creation date
    #[serde(default)]
    pub created_at: Option<serde_json::Value>,
    /// Users
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<User>,
}

/// Body for creating a team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateTeam {
    /// Team name, unique within the company
    pub name: String,
}

impl CreateTeam {
    /// A team named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

list_response! {
    /// A page of teams.
    TeamList { teams: Team }
}
