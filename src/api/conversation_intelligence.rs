//! Conversation intelligence service.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::client::{ApiResponse, ClientInner};
use crate::models::{Sentiment, Summary, Topic, Transcription};
use crate::Result;

/// Service for AI insights computed on recorded calls.
///
/// Each resource is only available once Aircall has processed the call;
/// before that the API answers 404.
pub struct ConversationIntelligenceService {
    inner: Arc<ClientInner>,
}

#[derive(Default, Deserialize)]
struct TranscriptionEnvelope {
    #[serde(default)]
    transcription: Transcription,
}

#[derive(Default, Deserialize)]
struct SentimentEnvelope {
    #[serde(default)]
    sentiment: Sentiment,
}

#[derive(Default, Deserialize)]
struct TopicEnvelope {
    #[serde(default)]
    topic: Topic,
}

#[derive(Default, Deserialize)]
struct SummaryEnvelope {
    #[serde(default)]
    summary: Summary,
}

impl ConversationIntelligenceService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    async fn fetch<E: DeserializeOwned + Default>(
        &self,
        call_id: i64,
        resource: &str,
    ) -> Result<ApiResponse<E>> {
        self.inner
            .get_json(&format!("calls/{call_id}/{resource}"), None)
            .await
    }

    /// Get the transcription of a call.
    pub async fn transcription(&self, call_id: i64) -> Result<ApiResponse<Transcription>> {
        let response: ApiResponse<TranscriptionEnvelope> =
            self.fetch(call_id, "transcription").await?;
        Ok(response.map(|e| e.transcription))
    }

    /// Get the sentiments of a call.
    pub async fn sentiments(&self, call_id: i64) -> Result<ApiResponse<Sentiment>> {
        let response: ApiResponse<SentimentEnvelope> = self.fetch(call_id, "sentiments").await?;
        Ok(response.map(|e| e.sentiment))
    }

    /// Get the topics of a call.
    pub async fn topics(&self, call_id: i64) -> Result<ApiResponse<Topic>> {
        let response: ApiResponse<TopicEnvelope> = self.fetch(call_id, "topics").await?;
        Ok(response.map(|e| e.topic))
    }

    /// Get the summary of a call.
    pub async fn summary(&self, call_id: i64) -> Result<ApiResponse<Summary>> {
        let response: ApiResponse<SummaryEnvelope> = self.fetch(call_id, "summary").await?;
        Ok(response.map(|e| e.summary))
    }
}
