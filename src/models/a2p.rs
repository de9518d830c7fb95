//! A2P 10DLC campaign association models.

use serde::{Deserialize, Serialize};

use super::meta::{list_response, null_as_default};

/// Link between an A2P messaging campaign and Aircall numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct A2pCampaignAssociation {
    /// Unique identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// Company ID
    #[serde(default)]
    pub company_id: Option<i64>,
    /// Campaign identifier at the registry
    #[serde(default)]
    pub external_id: Option<String>,
    /// Update status
    #[serde(default)]
    pub update_status: Option<String>,
    /// Update message
    #[serde(default)]
    pub update_message: Option<String>,
    /// Creation date
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update date
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Associated number ids
    #[serde(default, deserialize_with = "null_as_default")]
    pub numbers: Vec<i64>,
}

/// Body for creating or updating an association.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateUpdateA2pCampaignAssociation {
    /// External campaign ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_campaign_id: Option<String>,
    /// Numbers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numbers: Option<Vec<i64>>,
}

list_response! {
    /// A page of A2P campaign associations.
    A2pCampaignAssociationList { a2p_campaign_associations: A2pCampaignAssociation }
}
