//! Webhook subscriptions service.

use std::sync::Arc;

use crate::client::query::query_params;
use crate::client::resource::Resource;
use crate::client::{ApiResponse, ClientInner, Response};
use crate::models::{CreateUpdateWebhook, Webhook, WebhookList};
use crate::Result;

query_params! {
    /// Options for [`WebhooksService::list`].
    ListWebhooksQuery { order, paginate }
}

#[derive(Debug, Default, serde::Deserialize)]
struct WebhookEnvelope {
    #[serde(default)]
    webhook: Webhook,
}

/// Service for managing webhook subscriptions.
///
/// Decoding the events Aircall then posts is done by
/// [`InboundWebhook`](crate::webhook::InboundWebhook).
///
/// # Example
///
/// ```no_run
/// use aircall_rs::models::CreateUpdateWebhook;
///
/// # async fn example(client: aircall_rs::AircallClient) -> aircall_rs::Result<()> {
/// let webhook = client
///     .webhooks()
///     .create(&CreateUpdateWebhook::new(
///         "https://example.com/aircall",
///         ["call.created", "call.ended"],
///     ))
///     .await?;
/// println!("token: {:?}", webhook.token);
/// # Ok(())
/// # }
/// ```
pub struct WebhooksService {
    inner: Arc<ClientInner>,
}

impl WebhooksService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    fn resource(&self) -> Resource<'_> {
        Resource::new(&self.inner, "webhooks")
    }

    /// List webhook subscriptions.
    pub async fn list(&self, query: Option<&ListWebhooksQuery>) -> Result<ApiResponse<WebhookList>> {
        self.resource().list(query.map(AsRef::as_ref)).await
    }

    /// Get a subscription by its UUID.
    pub async fn get(&self, webhook_id: &str) -> Result<ApiResponse<Webhook>> {
        let response: ApiResponse<WebhookEnvelope> = self.resource().get(webhook_id).await?;
        Ok(response.map(|envelope| envelope.webhook))
    }

    /// Create a subscription.
    pub async fn create(&self, webhook: &CreateUpdateWebhook) -> Result<ApiResponse<Webhook>> {
        let response: ApiResponse<WebhookEnvelope> = self.resource().create(webhook).await?;
        Ok(response.map(|envelope| envelope.webhook))
    }

    /// Update a subscription.
    pub async fn update(
        &self,
        webhook_id: &str,
        webhook: &CreateUpdateWebhook,
    ) -> Result<ApiResponse<Webhook>> {
        let response: ApiResponse<WebhookEnvelope> =
            self.resource().update(webhook_id, webhook).await?;
        Ok(response.map(|envelope| envelope.webhook))
    }

    /// Delete a subscription.
    pub async fn delete(&self, webhook_id: &str) -> Result<Response> {
        self.resource().delete(webhook_id).await
    }
}
