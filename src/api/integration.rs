//! Integration service, for OAuth-installed applications.

use std::sync::Arc;

use reqwest::Method;
use serde::de::IgnoredAny;

use crate::client::{ApiResponse, ClientInner, QueryValues, Response, NO_BODY};
use crate::models::Integration;
use crate::Result;

/// Service for the integration the access token belongs to.
pub struct IntegrationService {
    inner: Arc<ClientInner>,
}

impl IntegrationService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the integration.
    pub async fn get(&self) -> Result<ApiResponse<Integration>> {
        #[derive(Default, serde::Deserialize)]
        struct Envelope {
            #[serde(default)]
            integration: Integration,
        }

        let response: ApiResponse<Envelope> = self.inner.get_json("integrations/me", None).await?;
        Ok(response.map(|r| r.integration))
    }

    /// Enable the integration; `install` also marks it installed.
    pub async fn enable(&self, install: bool) -> Result<Response> {
        let mut query = QueryValues::new();
        if install {
            query.set("install", "true");
        }

        self.inner
            .get::<IgnoredAny>("integrations/enable", Some(&query), None)
            .await
    }

    /// Disable the integration.
    pub async fn disable(&self) -> Result<Response> {
        self.inner
            .send(Method::DELETE, "integrations/disable", NO_BODY)
            .await
    }
}
