//! Company service.

use std::sync::Arc;

use crate::client::{ApiResponse, ClientInner};
use crate::models::Company;
use crate::Result;

/// Service for company information.
pub struct CompanyService {
    inner: Arc<ClientInner>,
}

impl CompanyService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the company the credentials belong to.
    pub async fn get(&self) -> Result<ApiResponse<Company>> {
        #[derive(Default, serde::Deserialize)]
        struct Response {
            #[serde(default)]
            company: Company,
        }

        let response: ApiResponse<Response> = self.inner.get_json("company", None).await?;
        Ok(response.map(|r| r.company))
    }
}
