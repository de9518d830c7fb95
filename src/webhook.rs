//! Decoding of inbound webhook events.
//!
//! Aircall posts every event as an envelope tagged with the resource it is
//! about. The `data` payload is kept as raw JSON until a typed accessor is
//! called, and only parsed once the tag has been checked.
//!
//! # Example
//!
//! ```
//! use aircall_rs::webhook::InboundWebhook;
//!
//! let body = r#"{
//!     "resource": "call",
//!     "event": "call.created",
//!     "timestamp": 1585001000,
//!     "token": "45XXYYZZa08",
//!     "data": {"id": 812, "direction": "inbound"}
//! }"#;
//!
//! let event: InboundWebhook = body.parse()?;
//! let call = event.call()?;
//! assert_eq!(call.id, Some(812));
//!
//! // Asking for the wrong resource fails without touching `data`.
//! assert!(event.user().is_err());
//! # Ok::<(), aircall_rs::Error>(())
//! ```

use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::value::RawValue;

use crate::models::{Call, Contact, Integration, Message, Number, Sentiment, Transcription, User};
use crate::{Error, Result};

const CONVERSATION_INTELLIGENCE: &str = "conversation_intelligence";

/// A webhook event as posted by Aircall.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundWebhook {
    /// Resource tag: `call`, `user`, `number`, `contact`, `message`...
    #[serde(default)]
    pub resource: String,
    /// Event name, e.g. `call.ended`
    #[serde(default)]
    pub event: String,
    /// Some resources send the event name under this key instead
    #[serde(default)]
    pub event_name: Option<String>,
    /// Unix timestamp of the event
    #[serde(default)]
    pub timestamp: Option<i64>,
    /// Token of the webhook subscription, to authenticate the sender
    #[serde(default)]
    pub token: Option<String>,
    /// Undecoded payload
    #[serde(default)]
    pub data: Option<Box<RawValue>>,
}

/// A payload type a webhook envelope can carry.
pub trait WebhookResource: DeserializeOwned {
    /// Resource tag the envelope must carry.
    const RESOURCE: &'static str;

    /// First dot-separated segment the event must start with, for resources
    /// that multiplex several payload shapes.
    const EVENT_CATEGORY: Option<&'static str> = None;
}

impl WebhookResource for Call {
    const RESOURCE: &'static str = "call";
}

impl WebhookResource for User {
    const RESOURCE: &'static str = "user";
}

impl WebhookResource for Number {
    const RESOURCE: &'static str = "number";
}

impl WebhookResource for Contact {
    const RESOURCE: &'static str = "contact";
}

impl WebhookResource for Message {
    const RESOURCE: &'static str = "message";
}

impl WebhookResource for Integration {
    const RESOURCE: &'static str = "integration";
}

impl WebhookResource for Sentiment {
    const RESOURCE: &'static str = CONVERSATION_INTELLIGENCE;
    const EVENT_CATEGORY: Option<&'static str> = Some("sentiment");
}

impl WebhookResource for Transcription {
    const RESOURCE: &'static str = CONVERSATION_INTELLIGENCE;
    const EVENT_CATEGORY: Option<&'static str> = Some("transcription");
}

impl InboundWebhook {
    /// Parse an envelope from a request body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// The event's first dot-separated segment (`call` in `call.ended`).
    pub fn event_category(&self) -> &str {
        self.event.split('.').next().unwrap_or_default()
    }

    /// Check the tag and decode `data` as `T`.
    ///
    /// A missing payload decodes as JSON `null`, which fails for every
    /// struct type.
    pub fn decode<T: WebhookResource>(&self) -> Result<T> {
        if self.resource != T::RESOURCE {
            return Err(Error::ResourceMismatch {
                expected: T::RESOURCE,
                actual: self.resource.clone(),
            });
        }

        if let Some(category) = T::EVENT_CATEGORY {
            if self.event_category() != category {
                return Err(Error::EventMismatch {
                    resource: self.resource.clone(),
                    expected: category,
                    actual: self.event.clone(),
                });
            }
        }

        let raw = self.data.as_deref().map_or("null", RawValue::get);
        Ok(serde_json::from_str(raw)?)
    }

    /// Decode a `call` event.
    pub fn call(&self) -> Result<Call> {
        self.decode()
    }

    /// Decode a `user` event.
    pub fn user(&self) -> Result<User> {
        self.decode()
    }

    /// Decode a `number` event.
    pub fn number(&self) -> Result<Number> {
        self.decode()
    }

    /// Decode a `contact` event.
    pub fn contact(&self) -> Result<Contact> {
        self.decode()
    }

    /// Decode a `message` event.
    pub fn message(&self) -> Result<Message> {
        self.decode()
    }

    /// Decode an `integration` event.
    pub fn integration(&self) -> Result<Integration> {
        self.decode()
    }

    /// Decode a `sentiment.*` conversation intelligence event.
    pub fn sentiment(&self) -> Result<Sentiment> {
        self.decode()
    }

    /// Decode a `transcription.*` conversation intelligence event.
    pub fn transcription(&self) -> Result<Transcription> {
        self.decode()
    }
}

impl FromStr for InboundWebhook {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(resource: &str, event: &str, data: &str) -> InboundWebhook {
        format!(r#"{{"resource":"{resource}","event":"{event}","timestamp":1,"token":"t","data":{data}}}"#)
            .parse()
            .unwrap()
    }

    #[test]
    fn test_call_event_decodes() {
        let event = envelope("call", "call.created", r#"{"id":1,"status":"initial"}"#);
        let call = event.call().unwrap();

        assert_eq!(call.id, Some(1));
        assert_eq!(call.status.as_deref(), Some("initial"));
        assert_eq!(event.event_category(), "call");
    }

    #[test]
    fn test_resource_mismatch_does_not_parse_data() {
        // `data` is not a valid user; the tag check must fail first.
        let event = envelope("call", "call.created", r#"[1, 2, 3]"#);

        match event.user() {
            Err(Error::ResourceMismatch { expected, actual }) => {
                assert_eq!(expected, "user");
                assert_eq!(actual, "call");
            }
            other => panic!("expected resource mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_conversation_intelligence_event_category() {
        let event = envelope(
            "conversation_intelligence",
            "sentiment.created",
            r#"{"id":3,"call_id":812,"participants":[{"value":"POSITIVE"}]}"#,
        );

        let sentiment = event.sentiment().unwrap();
        assert_eq!(sentiment.call_id, Some(812));
        assert_eq!(sentiment.participants[0].value.as_deref(), Some("POSITIVE"));

        match event.transcription() {
            Err(Error::EventMismatch { expected, actual, .. }) => {
                assert_eq!(expected, "transcription");
                assert_eq!(actual, "sentiment.created");
            }
            other => panic!("expected event mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_null_list_in_payload() {
        let event = envelope("call", "call.created", r#"{"id":1,"teams":null}"#);
        let call = event.call().unwrap();

        assert_eq!(call.id, Some(1));
        assert!(call.teams.is_empty());
    }

    #[test]
    fn test_missing_data_fails_to_decode() {
        let event: InboundWebhook = r#"{"resource":"user","event":"user.created"}"#.parse().unwrap();
        assert!(matches!(event.user(), Err(Error::Json(_))));
    }

    #[test]
    fn test_invalid_envelope() {
        assert!(matches!(InboundWebhook::from_slice(b"not json"), Err(Error::Json(_))));
    }
}
