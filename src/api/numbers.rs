//! Numbers service.

use std::sync::Arc;

use crate::client::paginated::PaginatedStream;
use crate::client::query::query_params;
use crate::client::resource::Resource;
use crate::client::{ApiResponse, ClientInner};
use crate::models::{Number, NumberList};
use crate::Result;

query_params! {
    /// Options for [`NumbersService::list`].
    ListNumbersQuery { date_range, order, paginate }
}

#[derive(Debug, Default, serde::Deserialize)]
pub(crate) struct NumberEnvelope {
    #[serde(default)]
    pub(crate) number: Number,
}

/// Service for phone number operations.
pub struct NumbersService {
    inner: Arc<ClientInner>,
}

impl NumbersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    fn resource(&self) -> Resource<'_> {
        Resource::new(&self.inner, "numbers")
    }

    /// List the company's numbers.
    pub async fn list(&self, query: Option<&ListNumbersQuery>) -> Result<ApiResponse<NumberList>> {
        self.resource().list(query.map(AsRef::as_ref)).await
    }

    /// Stream every number, fetching pages lazily.
    pub fn list_stream(&self, query: Option<&ListNumbersQuery>) -> PaginatedStream<Number> {
        self.resource().stream::<NumberList>(query.map(AsRef::as_ref))
    }

    /// Get a number by id.
    pub async fn get(&self, number_id: i64) -> Result<ApiResponse<Number>> {
        let response: ApiResponse<NumberEnvelope> = self.resource().get(number_id).await?;
        Ok(response.map(|envelope| envelope.number))
    }

    /// Update a number. Only the fields set on `number` are sent.
    pub async fn update(&self, number_id: i64, number: &Number) -> Result<ApiResponse<Number>> {
        let response: ApiResponse<NumberEnvelope> =
            self.resource().update(number_id, number).await?;
        Ok(response.map(|envelope| envelope.number))
    }
}
