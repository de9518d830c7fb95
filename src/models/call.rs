//! Call models.

use serde::{Deserialize, Serialize};

use super::meta::{list_response, null_as_default};
use super::{Contact, Number, Team, User};

/// A call, inbound or outbound.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Call {
    /// Unique identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// Telephony provider identifier
    #[serde(default)]
    pub sid: Option<String>,
    /// API URL of this resource
    #[serde(default)]
    pub direct_link: Option<String>,
    /// `inbound` or `outbound`
    #[serde(default)]
    pub direction: Option<String>,
    /// `initial`, `answered` or `done`
    #[serde(default)]
    pub status: Option<String>,
    /// Missed call reason
    #[serde(default)]
    pub missed_call_reason: Option<String>,
    /// Unix timestamp
    #[serde(default)]
    pub started_at: Option<i64>,
    /// Unix timestamp
    #[serde(default)]
    pub answered_at: Option<i64>,
    /// Unix timestamp
    #[serde(default)]
    pub ended_at: Option<i64>,
    /// Duration in seconds
    #[serde(default)]
    pub duration: Option<i64>,
    /// Voicemail recording URL
    #[serde(default)]
    pub voicemail: Option<String>,
    /// Call recording URL
    #[serde(default)]
    pub recording: Option<String>,
    /// Asset
    #[serde(default)]
    pub asset: Option<String>,
    /// Number of the other party as dialed or received
    #[serde(default)]
    pub raw_digits: Option<String>,
    /// Archived
    #[serde(default)]
    pub archived: Option<bool>,
    /// Cost in U.S. cents
    #[serde(default)]
    pub cost: Option<String>,
    /// Contact
    #[serde(default)]
    pub contact: Option<Contact>,
    /// Number
    #[serde(default)]
    pub number: Option<Number>,
    /// User who took or made the call
    #[serde(default)]
    pub user: Option<User>,
    /// Transferred by
    #[serde(default)]
    pub transferred_by: Option<User>,
    /// Transferred to
    #[serde(default)]
    pub transferred_to: Option<User>,
    /// Assigned to
    #[serde(default)]
    pub assigned_to: Option<User>,
    /// Ivr options selected
    #[serde(default)]
    pub ivr_options_selected: Option<CallIvrOption>,
    /// Comments
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: Vec<CallComment>,
    /// Tags
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<CallTag>,
    /// Participants
    #[serde(default, deserialize_with = "null_as_default")]
    pub participants: Vec<CallParticipant>,
    /// Teams
    #[serde(default, deserialize_with = "null_as_default")]
    pub teams: Vec<Team>,
}

/// A note left on a call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallComment {
    /// Unique identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// Content
    #[serde(default)]
    pub content: Option<String>,
    /// Unix timestamp
    #[serde(default)]
    pub posted_at: Option<i64>,
    /// Posted by
    #[serde(default)]
    pub posted_by: Option<CallActionBy>,
}

/// The user behind an action on a call (comment, tag).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallActionBy {
    /// Unique identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// API URL of this resource
    #[serde(default)]
    pub direct_link: Option<String>,
    /// Name
    #[serde(default)]
    pub name: Option<String>,
    /// Email
    #[serde(default)]
    pub email: Option<String>,
    /// Available
    #[serde(default)]
    pub available: Option<bool>,
    /// Availability status
    #[serde(default)]
    pub availability_status: Option<String>,
    /// Creation date
    #[serde(default)]
    pub created_at: Option<serde_json::Value>,
    /// Time zone
    #[serde(default)]
    pub time_zone: Option<String>,
    /// Language
    #[serde(default)]
    pub language: Option<String>,
    /// State
    #[serde(default)]
    pub state: Option<String>,
    /// Sent with webhook events only
    #[serde(default)]
    pub substatus: Option<String>,
}

/// A tag as attached to a call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallTag {
    /// Unique identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// Name
    #[serde(default)]
    pub name: Option<String>,
    /// Creation date
    #[serde(default)]
    pub created_at: Option<serde_json::Value>,
    /// Tagged by
    #[serde(default)]
    pub tagged_by: Option<CallActionBy>,
    /// Unix timestamp, sent with webhook events only
    #[serde(default)]
    pub tagged_at: Option<i64>,
}

/// A participant of a conference call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallParticipant {
    /// Unique identifier
    #[serde(default)]
    pub id: Option<String>,
    /// `user`, `contact` or `external`
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Name
    #[serde(default)]
    pub name: Option<String>,
    /// Phone number
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// The IVR branch a caller went through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallIvrOption {
    /// Unique identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Title
    #[serde(default)]
    pub title: Option<String>,
    /// Key
    #[serde(default)]
    pub key: Option<String>,
    /// Branch
    #[serde(default)]
    pub branch: Option<String>,
    /// Creation date
    #[serde(default)]
    pub created_at: Option<serde_json::Value>,
    /// Transition started at
    #[serde(default)]
    pub transition_started_at: Option<String>,
    /// Transition ended at
    #[serde(default)]
    pub transition_ended_at: Option<String>,
}

/// Body for transferring an ongoing call to a user, a team or a number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CallTransfer {
    /// User ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Team ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    /// External number in E.164 format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Team dispatching strategy, `simultaneous` or `random`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispatching_strategy: Option<String>,
}

impl CallTransfer {
    /// Transfer to a user.
    pub fn to_user(user_id: impl ToString) -> Self {
        Self {
            user_id: Some(user_id.to_string()),
            ..Default::default()
        }
    }

    /// Transfer to a team.
    pub fn to_team(team_id: impl ToString) -> Self {
        Self {
            team_id: Some(team_id.to_string()),
            ..Default::default()
        }
    }

    /// Transfer to an external number.
    pub fn to_number(number: impl Into<String>) -> Self {
        Self {
            number: Some(number.into()),
            ..Default::default()
        }
    }
}

/// Body for pushing an insight card to the agent's phone during a call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CallInsightCard {
    /// Contents
    pub contents: Vec<CallInsightCardContent>,
}

/// One line of an insight card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CallInsightCardContent {
    /// `title`, `shortText` or `user`
    #[serde(rename = "type")]
    pub kind: String,
    /// Text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// User ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

list_response! {
    /// A page of calls.
    CallList { calls: Call }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_deserialization() {
        let json = r#"{
            "id": 812,
            "direction": "inbound",
            "status": "done",
            "started_at": 1584998199,
            "duration": 25,
            "raw_digits": "+33 6 12 34 56 78",
            "user": {"id": 456, "name": "Madeleine Dupont"},
            "tags": [{"id": 1, "name": "VIP", "created_at": 1584998200}],
            "participants": [{"type": "user", "name": "Madeleine"}]
        }"#;

        let call: Call = serde_json::from_str(json).unwrap();
        assert_eq!(call.id, Some(812));
        assert_eq!(call.direction.as_deref(), Some("inbound"));
        assert_eq!(call.user.and_then(|u| u.id), Some(456));
        assert_eq!(call.tags.len(), 1);
        assert_eq!(call.participants[0].kind.as_deref(), Some("user"));
        assert!(call.comments.is_empty());
    }

    #[test]
    fn test_null_lists_decode_as_empty() {
        let json = r#"{"id":1,"teams":null,"tags":null,"comments":null,"participants":null}"#;

        let call: Call = serde_json::from_str(json).unwrap();
        assert_eq!(call.id, Some(1));
        assert!(call.teams.is_empty());
        assert!(call.tags.is_empty());
        assert!(call.comments.is_empty());
        assert!(call.participants.is_empty());
    }

    #[test]
    fn test_transfer_body() {
        let json = serde_json::to_value(CallTransfer::to_user(12)).unwrap();
        assert_eq!(json, serde_json::json!({"user_id": "12"}));
    }

    #[test]
    fn test_insight_card_body() {
        let card = CallInsightCard {
            contents: vec![CallInsightCardContent {
                kind: "title".into(),
                text: Some("Premium customer".into()),
                ..Default::default()
            }],
        };

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"contents": [{"type": "title", "text": "Premium customer"}]})
        );
    }
}
