//! Calls service.

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::paginated::PaginatedStream;
use crate::client::query::query_params;
use crate::client::resource::Resource;
use crate::client::{ApiResponse, ClientInner, Response, NO_BODY};
use crate::models::{Call, CallInsightCard, CallList, CallTransfer};
use crate::Result;

query_params! {
    /// Options for [`CallsService::list`].
    ListCallsQuery { date_range, order, paginate }
    extra {
        /// Embed the contact of each call.
        fetch_contact(bool) => "fetch_contact",
        /// Return short URLs for recordings and voicemails.
        fetch_short_urls(bool) => "fetch_short_urls",
        /// Embed the call timeline.
        fetch_call_timeline(bool) => "fetch_call_timeline",
    }
}

query_params! {
    /// Options for [`CallsService::search`].
    SearchCallsQuery { date_range, order, paginate }
    extra {
        /// `inbound` or `outbound`.
        direction(&str) => "direction",
        /// Other party's number, in E.164 format without spaces.
        phone_number(&str) => "phone_number",
        /// Only calls of this user.
        user_id(i64) => "user_id",
        /// Embed the contact of each call.
        fetch_contact(bool) => "fetch_contact",
        /// Return short URLs for recordings and voicemails.
        fetch_short_urls(bool) => "fetch_short_urls",
        /// Embed the call timeline.
        fetch_call_timeline(bool) => "fetch_call_timeline",
    }
}

#[derive(Debug, Default, Deserialize)]
struct CallEnvelope {
    #[serde(default)]
    call: Call,
}

/// Service for call operations.
///
/// # Example
///
/// ```no_run
/// use aircall_rs::SearchCallsQuery;
///
/// # async fn example(client: aircall_rs::AircallClient) -> aircall_rs::Result<()> {
/// let query = SearchCallsQuery::new().direction("inbound").phone_number("+33612345678");
/// let calls = client.calls().search(Some(&query)).await?;
///
/// if let Some(call) = calls.calls.first() {
///     client.calls().comment(call.id.unwrap_or_default(), "Called back").await?;
/// }
/// # Ok(())
/// # }
/// ```
pub struct CallsService {
    inner: Arc<ClientInner>,
}

impl CallsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    fn resource(&self) -> Resource<'_> {
        Resource::new(&self.inner, "calls")
    }

    /// List calls, most recent page first unless ordered otherwise.
    pub async fn list(&self, query: Option<&ListCallsQuery>) -> Result<ApiResponse<CallList>> {
        self.resource().list(query.map(AsRef::as_ref)).await
    }

    /// Stream every call, fetching pages lazily.
    pub fn list_stream(&self, query: Option<&ListCallsQuery>) -> PaginatedStream<Call> {
        self.resource().stream::<CallList>(query.map(AsRef::as_ref))
    }

    /// Search calls by direction, number or user.
    pub async fn search(&self, query: Option<&SearchCallsQuery>) -> Result<ApiResponse<CallList>> {
        self.inner
            .get_json("calls/search", query.map(AsRef::as_ref))
            .await
    }

    /// Get a call by id.
    pub async fn get(&self, call_id: i64) -> Result<ApiResponse<Call>> {
        let response: ApiResponse<CallEnvelope> = self.resource().get(call_id).await?;
        Ok(response.map(|envelope| envelope.call))
    }

    /// Transfer an ongoing call.
    pub async fn transfer(&self, call_id: i64, transfer: &CallTransfer) -> Result<Response> {
        self.inner
            .send(Method::POST, &format!("calls/{call_id}/transfers"), Some(transfer))
            .await
    }

    /// Add a comment to a call.
    pub async fn comment(&self, call_id: i64, content: &str) -> Result<Response> {
        #[derive(Serialize)]
        struct Request<'a> {
            content: &'a str,
        }

        self.inner
            .send(
                Method::POST,
                &format!("calls/{call_id}/comments"),
                Some(&Request { content }),
            )
            .await
    }

    /// Tag a call with existing tag ids.
    pub async fn tag(&self, call_id: i64, tags: &[i64]) -> Result<Response> {
        #[derive(Serialize)]
        struct Request<'a> {
            tags: &'a [i64],
        }

        self.inner
            .send(Method::POST, &format!("calls/{call_id}/tags"), Some(&Request { tags }))
            .await
    }

    /// Archive a call.
    pub async fn archive(&self, call_id: i64) -> Result<ApiResponse<Call>> {
        let response: ApiResponse<CallEnvelope> = self
            .inner
            .put_json(&format!("calls/{call_id}/archive"), NO_BODY)
            .await?;
        Ok(response.map(|envelope| envelope.call))
    }

    /// Unarchive a call.
    pub async fn unarchive(&self, call_id: i64) -> Result<ApiResponse<Call>> {
        let response: ApiResponse<CallEnvelope> = self
            .inner
            .put_json(&format!("calls/{call_id}/unarchive"), NO_BODY)
            .await?;
        Ok(response.map(|envelope| envelope.call))
    }

    /// Pause the recording of an ongoing call.
    pub async fn pause_recording(&self, call_id: i64) -> Result<Response> {
        self.inner
            .send(Method::POST, &format!("calls/{call_id}/pause_recording"), NO_BODY)
            .await
    }

    /// Resume the recording of an ongoing call.
    pub async fn resume_recording(&self, call_id: i64) -> Result<Response> {
        self.inner
            .send(Method::POST, &format!("calls/{call_id}/resume_recording"), NO_BODY)
            .await
    }

    /// Delete the recording of a call.
    pub async fn delete_recording(&self, call_id: i64) -> Result<Response> {
        self.inner
            .send(Method::DELETE, &format!("calls/{call_id}/recording"), NO_BODY)
            .await
    }

    /// Delete the voicemail of a call.
    pub async fn delete_voicemail(&self, call_id: i64) -> Result<Response> {
        self.inner
            .send(Method::DELETE, &format!("calls/{call_id}/voicemail"), NO_BODY)
            .await
    }

    /// Display an insight card on the agent's phone during a call.
    pub async fn add_insight_card(&self, call_id: i64, card: &CallInsightCard) -> Result<Response> {
        self.inner
            .send(Method::POST, &format!("calls/{call_id}/insight_cards"), Some(card))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::QueryValues;

    #[test]
    fn test_search_query_options() {
        let query = SearchCallsQuery::new()
            .direction("outbound")
            .user_id(42)
            .fetch_contact(false)
            .paginate(1, 10);

        let values: &QueryValues = query.as_ref();
        assert_eq!(values.get("direction"), Some("outbound"));
        assert_eq!(values.get("user_id"), Some("42"));
        assert_eq!(values.get("fetch_contact"), Some("false"));
        assert_eq!(values.get("per_page"), Some("10"));
    }

    #[test]
    fn test_call_envelope_without_call_is_default() {
        let envelope: CallEnvelope = serde_json::from_str("{}").unwrap();
        assert_eq!(envelope.call, Call::default());
    }
}
