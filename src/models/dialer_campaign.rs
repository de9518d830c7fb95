//! Power dialer campaign models.

use serde::{Deserialize, Serialize};

use super::meta::null_as_default;

/// The dialer campaign of a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialerCampaign {
    /// Unique identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// Number the campaign calls from
    #[serde(default)]
    pub number_id: Option<serde_json::Value>,
    /// Creation date
    #[serde(default)]
    pub created_at: Option<serde_json::Value>,
}

/// Body carrying the phone numbers of a campaign.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DialerCampaignNumbers {
    /// Numbers in E.164 format
    pub phone_numbers: Vec<String>,
}

impl DialerCampaignNumbers {
    /// Build from any list of numbers.
    pub fn new<I, S>(phone_numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phone_numbers: phone_numbers.into_iter().map(Into::into).collect(),
        }
    }
}

/// A number queued in a dialer campaign.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialerCampaignPhoneNumber {
    /// Unique identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// Number
    #[serde(default)]
    pub number: Option<String>,
    /// Whether the number has been called already
    #[serde(default)]
    pub called: Option<bool>,
    /// Creation date
    #[serde(default)]
    pub created_at: Option<serde_json::Value>,
}

/// Numbers queued in a dialer campaign.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialerCampaignPhoneNumbers {
    /// Numbers
    #[serde(default, deserialize_with = "null_as_default")]
    pub numbers: Vec<DialerCampaignPhoneNumber>,
}
