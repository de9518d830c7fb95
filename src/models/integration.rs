//! Integration model.

use serde::{Deserialize, Serialize};

use super::meta::null_as_default;
use super::User;

/// The OAuth integration the access token was issued to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Integration {
    /// Name
    #[serde(default)]
    pub name: Option<String>,
    /// Custom name
    #[serde(default)]
    pub custom_name: Option<String>,
    /// Logo URL
    #[serde(default)]
    pub logo: Option<String>,
    /// Company ID
    #[serde(default)]
    pub company_id: Option<i64>,
    /// Status
    #[serde(default)]
    pub status: Option<String>,
    /// Active
    #[serde(default)]
    pub active: Option<bool>,
    /// Numbers count
    #[serde(default)]
    pub numbers_count: Option<i64>,
    /// Number IDs
    #[serde(default, deserialize_with = "null_as_default")]
    pub number_ids: Vec<i64>,
    /// User who installed the integration
    #[serde(default)]
    pub user: Option<User>,
    /// Sent with webhook events only
    #[serde(default)]
    pub integration_id: Option<i64>,
}
