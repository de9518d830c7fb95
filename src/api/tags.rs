//! Tags service.

use std::sync::Arc;

use crate::client::query::query_params;
use crate::client::resource::Resource;
use crate::client::{ApiResponse, ClientInner, Response};
use crate::models::{CreateUpdateTag, Tag, TagList};
use crate::Result;

query_params! {
    /// Options for [`TagsService::list`].
    ListTagsQuery { paginate }
}

#[derive(Debug, Default, serde::Deserialize)]
struct TagEnvelope {
    #[serde(default)]
    tag: Tag,
}

/// Service for tag operations.
pub struct TagsService {
    inner: Arc<ClientInner>,
}

impl TagsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    fn resource(&self) -> Resource<'_> {
        Resource::new(&self.inner, "tags")
    }

    /// List tags.
    pub async fn list(&self, query: Option<&ListTagsQuery>) -> Result<ApiResponse<TagList>> {
        self.resource().list(query.map(AsRef::as_ref)).await
    }

    /// Get a tag by id.
    pub async fn get(&self, tag_id: i64) -> Result<ApiResponse<Tag>> {
        let response: ApiResponse<TagEnvelope> = self.resource().get(tag_id).await?;
        Ok(response.map(|envelope| envelope.tag))
    }

    /// Create a tag.
    pub async fn create(&self, tag: &CreateUpdateTag) -> Result<ApiResponse<Tag>> {
        let response: ApiResponse<TagEnvelope> = self.resource().create(tag).await?;
        Ok(response.map(|envelope| envelope.tag))
    }

    /// Update a tag.
    pub async fn update(&self, tag_id: i64, tag: &CreateUpdateTag) -> Result<ApiResponse<Tag>> {
        let response: ApiResponse<TagEnvelope> = self.resource().update(tag_id, tag).await?;
        Ok(response.map(|envelope| envelope.tag))
    }

    /// Delete a tag.
    pub async fn delete(&self, tag_id: i64) -> Result<Response> {
        self.resource().delete(tag_id).await
    }
}
