//! Power dialer campaigns service.

use std::sync::Arc;

use reqwest::Method;

use crate::client::{ApiResponse, ClientInner, Response, NO_BODY};
use crate::models::{DialerCampaign, DialerCampaignNumbers, DialerCampaignPhoneNumbers};
use crate::Result;

/// Service for the power dialer campaign of a user.
///
/// # Example
///
/// ```no_run
/// use aircall_rs::models::DialerCampaignNumbers;
///
/// # async fn example(client: aircall_rs::AircallClient) -> aircall_rs::Result<()> {
/// let numbers = DialerCampaignNumbers::new(["+33612345678", "+33687654321"]);
/// client.dialer_campaigns().create(456, &numbers).await?;
/// # Ok(())
/// # }
/// ```
pub struct DialerCampaignsService {
    inner: Arc<ClientInner>,
}

fn campaign_path(user_id: i64) -> String {
    format!("users/{user_id}/dialer_campaign")
}

impl DialerCampaignsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the campaign of a user.
    pub async fn get(&self, user_id: i64) -> Result<ApiResponse<DialerCampaign>> {
        self.inner.get_json(&campaign_path(user_id), None).await
    }

    /// Create a campaign for a user.
    pub async fn create(&self, user_id: i64, numbers: &DialerCampaignNumbers) -> Result<Response> {
        self.inner
            .send(Method::POST, &campaign_path(user_id), Some(numbers))
            .await
    }

    /// Delete the campaign of a user.
    pub async fn delete(&self, user_id: i64) -> Result<Response> {
        self.inner
            .send(Method::DELETE, &campaign_path(user_id), NO_BODY)
            .await
    }

    /// List the numbers queued in a user's campaign.
    pub async fn list_numbers(&self, user_id: i64) -> Result<ApiResponse<DialerCampaignPhoneNumbers>> {
        self.inner
            .get_json(&format!("{}/phone_numbers", campaign_path(user_id)), None)
            .await
    }

    /// Queue more numbers in a user's campaign.
    pub async fn add_numbers(&self, user_id: i64, numbers: &DialerCampaignNumbers) -> Result<Response> {
        self.inner
            .send(
                Method::POST,
                &format!("{}/phone_numbers", campaign_path(user_id)),
                Some(numbers),
            )
            .await
    }

    /// Remove one number from a user's campaign.
    pub async fn delete_number(&self, user_id: i64, phone_number_id: i64) -> Result<Response> {
        self.inner
            .send(
                Method::DELETE,
                &format!("{}/phone_numbers/{phone_number_id}", campaign_path(user_id)),
                NO_BODY,
            )
            .await
    }
}
