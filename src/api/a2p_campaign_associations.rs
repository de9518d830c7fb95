//! A2P campaign associations service.

use std::sync::Arc;

use crate::client::query::query_params;
use crate::client::resource::Resource;
use crate::client::{ApiResponse, ClientInner, Response};
use crate::models::{
    A2pCampaignAssociation, A2pCampaignAssociationList, CreateUpdateA2pCampaignAssociation,
};
use crate::Result;

query_params! {
    /// Options for [`A2pCampaignAssociationsService::list`].
    ListA2pCampaignAssociationsQuery { paginate }
}

// Single associations come back under the plural key.
#[derive(Debug, Default, serde::Deserialize)]
struct AssociationEnvelope {
    #[serde(default)]
    a2p_campaign_associations: A2pCampaignAssociation,
}

/// Service for associating US numbers with A2P 10DLC campaigns.
pub struct A2pCampaignAssociationsService {
    inner: Arc<ClientInner>,
}

impl A2pCampaignAssociationsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    fn resource(&self) -> Resource<'_> {
        Resource::new(&self.inner, "a2p_campaign_associations")
    }

    /// List associations.
    pub async fn list(
        &self,
        query: Option<&ListA2pCampaignAssociationsQuery>,
    ) -> Result<ApiResponse<A2pCampaignAssociationList>> {
        self.resource().list(query.map(AsRef::as_ref)).await
    }

    /// Associate numbers with a campaign.
    pub async fn create(
        &self,
        association: &CreateUpdateA2pCampaignAssociation,
    ) -> Result<ApiResponse<A2pCampaignAssociation>> {
        let response: ApiResponse<AssociationEnvelope> = self.resource().create(association).await?;
        Ok(response.map(|e| e.a2p_campaign_associations))
    }

    /// Update the numbers of a campaign, identified by `external_campaign_id`.
    pub async fn update(
        &self,
        association: &CreateUpdateA2pCampaignAssociation,
    ) -> Result<ApiResponse<A2pCampaignAssociation>> {
        let response: ApiResponse<AssociationEnvelope> = self
            .inner
            .put_json("a2p_campaign_associations", Some(association))
            .await?;
        Ok(response.map(|e| e.a2p_campaign_associations))
    }

    /// Delete an association.
    pub async fn delete(&self, association_id: i64) -> Result<Response> {
        self.resource().delete(association_id).await
    }
}
