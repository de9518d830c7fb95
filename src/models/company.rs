//! Company model.

use serde::{Deserialize, Serialize};

/// The company the credentials belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Name
    #[serde(default)]
    pub name: Option<String>,
    /// Users count
    #[serde(default)]
    pub users_count: Option<i64>,
    /// Numbers count
    #[serde(default)]
    pub numbers_count: Option<i64>,
}
