//! Phone number models.

use serde::{Deserialize, Serialize};

use super::meta::list_response;
use super::User;

/// An Aircall phone number (line).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Number {
    /// Unique identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// API URL of this resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_link: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// International format, e.g. `+33 1 76 36 06 95`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digits: Option<String>,
    /// Creation date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// ISO 3166-1 alpha-2 country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Time zone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    /// Whether the number is in its opening hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<bool>,
    /// Availability status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_status: Option<String>,
    /// Is ivr
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_ivr: Option<bool>,
    /// Live recording activated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_recording_activated: Option<bool>,
    /// Priority
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    /// Music and messages configured on this number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Messages>,
    /// Users assigned to this number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<User>>,
}

/// Music and message URLs of a number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    /// Welcome
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub welcome: Option<String>,
    /// Waiting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waiting: Option<String>,
    /// Ringing tone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ringing_tone: Option<String>,
    /// Unanswered call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unanswered_call: Option<String>,
    /// After hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_hours: Option<String>,
    /// IVR message URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ivr: Option<String>,
    /// Voicemail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voicemail: Option<String>,
    /// Closed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<String>,
    /// Callback later
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_later: Option<String>,
}

list_response! {
    /// A page of numbers.
    NumberList { numbers: Number }
}
