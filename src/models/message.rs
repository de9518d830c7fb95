//! SMS/MMS message models.

use serde::{Deserialize, Serialize};

use super::{Contact, Number};

/// Messaging configuration of a number, used for the native messaging API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberConfiguration {
    /// Token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// URL inbound messages are posted to
    #[serde(default, rename = "callbackUrl", skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// Type
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// A text message sent or received on a number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// API URL of this resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_link: Option<String>,
    /// `inbound` or `outbound`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    /// External number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_number: Option<serde_json::Value>,
    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Recipient number in E.164 format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Raw digits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_digits: Option<String>,
    /// Creation date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Sent at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<String>,
    /// Media URL
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media_url: Vec<String>,
    /// Number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<Number>,
    /// Contact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    /// Media details
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media_details: Vec<MediaDetail>,
}

impl Message {
    /// An outbound text to `to`.
    pub fn text(to: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: Some(to.into()),
            body: Some(body.into()),
            ..Default::default()
        }
    }
}

/// An attachment of an MMS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDetail {
    /// File name
    #[serde(default)]
    pub file_name: Option<String>,
    /// File type
    #[serde(default)]
    pub file_type: Option<String>,
    /// Temporary download URL
    #[serde(default)]
    pub presigned_url: Option<String>,
}
