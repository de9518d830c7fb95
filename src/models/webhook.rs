//! Webhook subscription models.

use serde::{Deserialize, Serialize};

use super::meta::{list_response, null_as_default};

/// A webhook subscription registered on the company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    /// Identifier, a UUID
    #[serde(default)]
    pub webhook_id: Option<String>,
    /// API URL of this resource
    #[serde(default)]
    pub direct_link: Option<String>,
    /// Creation date
    #[serde(default)]
    pub created_at: Option<serde_json::Value>,
    /// Destination of the events
    #[serde(default)]
    pub url: Option<String>,
    /// Active
    #[serde(default)]
    pub active: Option<bool>,
    /// Sent with every event, to authenticate Aircall as the sender
    #[serde(default)]
    pub token: Option<String>,
    /// Subscribed events, e.g. `call.created`
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Vec<String>,
}

/// Body for creating or updating a webhook subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateUpdateWebhook {
    /// Custom name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
    /// URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Events
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<String>,
}

impl CreateUpdateWebhook {
    /// Subscribe `url` to `events`.
    pub fn new<I, S>(url: impl Into<String>, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            custom_name: None,
            url: Some(url.into()),
            events: events.into_iter().map(Into::into).collect(),
        }
    }
}

list_response! {
    /// A page of webhook subscriptions.
    WebhookList { webhooks: Webhook }
}
