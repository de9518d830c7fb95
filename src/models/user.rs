//! User and availability models.

use serde::{Deserialize, Serialize};

use super::meta::list_response;
use super::Number;

/// An Aircall user (agent or admin).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// API URL of this user
    #[serde(default)]
    pub direct_link: Option<String>,
    /// Full name
    #[serde(default)]
    pub name: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Creation date; a timestamp or an ISO string depending on the endpoint
    #[serde(default)]
    pub created_at: Option<serde_json::Value>,
    /// Whether the user can currently take calls
    #[serde(default)]
    pub available: Option<bool>,
    /// `available`, `custom` or `unavailable`
    #[serde(default)]
    pub availability_status: Option<String>,
    /// Detailed status, sent with webhook events
    #[serde(default)]
    pub substatus: Option<String>,
    /// IANA time zone
    #[serde(default)]
    pub time_zone: Option<String>,
    /// Language code
    #[serde(default)]
    pub language: Option<String>,
    /// Wrap-up time after calls, in seconds
    #[serde(default)]
    pub wrap_up_time: Option<i64>,
    /// Numbers the user is assigned to
    #[serde(default)]
    pub numbers: Option<Vec<Number>>,
}

/// Body for creating or updating a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateUpdateUser {
    /// Email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// First name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Availability status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_status: Option<String>,
    /// Role IDs
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub role_ids: Vec<String>,
    /// Wrap up time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap_up_time: Option<i64>,
}

/// Availability of one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAvailability {
    /// Unique identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// `available`, `offline`, `do_not_disturb`, `in_call`, `after_call_work`...
    #[serde(default)]
    pub availability: Option<String>,
}

/// Body for starting an outbound call or dialing a number from a user's phone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewUserCall {
    /// Number the call is made from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_id: Option<i64>,
    /// E.164 number to call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl NewUserCall {
    /// Call `to` from the Aircall number `number_id`.
    pub fn new(number_id: i64, to: impl Into<String>) -> Self {
        Self {
            number_id: Some(number_id),
            to: Some(to.into()),
        }
    }
}

list_response! {
    /// A page of users.
    UserList { users: User }
}

list_response! {
    /// A page of user availabilities.
    UserAvailabilityList { users: UserAvailability }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_skips_empty_fields() {
        let body = CreateUpdateUser {
            email: Some("jane@example.com".into()),
            first_name: Some("Jane".into()),
            ..Default::default()
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "jane@example.com", "first_name": "Jane"})
        );
    }

    #[test]
    fn test_user_created_at_accepts_string_or_number() {
        let a: User = serde_json::from_str(r#"{"id":1,"created_at":"2024-01-01T00:00:00.000Z"}"#).unwrap();
        let b: User = serde_json::from_str(r#"{"id":2,"created_at":1704067200}"#).unwrap();

        assert!(a.created_at.unwrap().is_string());
        assert!(b.created_at.unwrap().is_number());
    }
}
