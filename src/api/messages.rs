//! Messages service: native SMS/MMS and number music and messages.

use std::sync::Arc;

use reqwest::Method;

use super::numbers::NumberEnvelope;
use crate::client::{ApiResponse, ClientInner, Response, NO_BODY};
use crate::models::{Message, Messages, Number, NumberConfiguration};
use crate::Result;

/// Service for messaging operations on a number.
///
/// # Example
///
/// ```no_run
/// use aircall_rs::models::Message;
///
/// # async fn example(client: aircall_rs::AircallClient) -> aircall_rs::Result<()> {
/// let sent = client
///     .messages()
///     .send(123, &Message::text("+15551234567", "Your appointment is confirmed"))
///     .await?;
/// println!("{:?}", sent.status);
/// # Ok(())
/// # }
/// ```
pub struct MessagesService {
    inner: Arc<ClientInner>,
}

fn configuration_path(number_id: i64) -> String {
    format!("numbers/{number_id}/messages/configuration")
}

impl MessagesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Register the messaging configuration of a number.
    pub async fn create_number_configuration(
        &self,
        number_id: i64,
        configuration: &NumberConfiguration,
    ) -> Result<ApiResponse<NumberConfiguration>> {
        self.inner
            .post_json(&configuration_path(number_id), Some(configuration))
            .await
    }

    /// Get the messaging configuration of a number.
    pub async fn get_number_configuration(
        &self,
        number_id: i64,
    ) -> Result<ApiResponse<NumberConfiguration>> {
        self.inner.get_json(&configuration_path(number_id), None).await
    }

    /// Remove the messaging configuration of a number.
    pub async fn delete_number_configuration(&self, number_id: i64) -> Result<Response> {
        self.inner
            .send(Method::DELETE, &configuration_path(number_id), NO_BODY)
            .await
    }

    /// Send a message from a number.
    pub async fn send(&self, number_id: i64, message: &Message) -> Result<ApiResponse<Message>> {
        self.inner
            .post_json(&format!("numbers/{number_id}/messages"), Some(message))
            .await
    }

    /// Replace the music and messages of a number.
    pub async fn update_music_and_messages(
        &self,
        number_id: i64,
        messages: &Messages,
    ) -> Result<ApiResponse<Number>> {
        #[derive(serde::Serialize)]
        struct Request<'a> {
            messages: &'a Messages,
        }

        let response: ApiResponse<NumberEnvelope> = self
            .inner
            .put_json(&format!("numbers/{number_id}"), Some(&Request { messages }))
            .await?;
        Ok(response.map(|envelope| envelope.number))
    }
}
