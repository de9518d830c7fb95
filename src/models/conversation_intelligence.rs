//! Conversation intelligence models: transcriptions, sentiments, topics and
//! summaries computed on recorded calls.

use serde::{Deserialize, Serialize};

use super::meta::null_as_default;

/// Full transcription of a call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcription {
    /// Unique identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// Call ID
    #[serde(default)]
    pub call_id: Option<i64>,
    /// Call created at
    #[serde(default)]
    pub call_created_at: Option<String>,
    /// `call` or `voicemail`
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Content
    #[serde(default)]
    pub content: Option<TranscriptionContent>,
}

/// Body of a transcription.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionContent {
    /// Language
    #[serde(default)]
    pub language: Option<String>,
    /// Utterances
    #[serde(default, deserialize_with = "null_as_default")]
    pub utterances: Vec<Utterance>,
}

/// One sentence said by one participant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    /// Offset from the start of the call, in seconds
    #[serde(default)]
    pub start_time: Option<f64>,
    /// Offset from the start of the call, in seconds
    #[serde(default)]
    pub end_time: Option<f64>,
    /// Text
    #[serde(default)]
    pub text: Option<String>,
    /// `external` or `internal`
    #[serde(default)]
    pub participant_type: Option<String>,
    /// Phone number
    #[serde(default)]
    pub phone_number: Option<String>,
    /// User ID
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// Sentiment detected for each participant of a call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentiment {
    /// Unique identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// Call ID
    #[serde(default)]
    pub call_id: Option<i64>,
    /// Participants
    #[serde(default, deserialize_with = "null_as_default")]
    pub participants: Vec<SentimentParticipant>,
}

/// Sentiment of one participant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentParticipant {
    /// Phone number
    #[serde(default)]
    pub phone_number: Option<String>,
    /// `POSITIVE`, `NEUTRAL` or `NEGATIVE`
    #[serde(default)]
    pub value: Option<String>,
    /// Type
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// User ID
    #[serde(default)]
    pub user_id: Option<String>,
    /// Participant type
    #[serde(default)]
    pub participant_type: Option<String>,
}

/// Topics discussed during a call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Unique identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// Call ID
    #[serde(default)]
    pub call_id: Option<i64>,
    /// Creation date
    #[serde(default)]
    pub created_at: Option<String>,
    /// Content
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<String>,
}

/// Generated summary of a call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Unique identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// Call ID
    #[serde(default)]
    pub call_id: Option<i64>,
    /// Creation date
    #[serde(default)]
    pub created_at: Option<String>,
    /// Content
    #[serde(default)]
    pub content: Option<String>,
}
