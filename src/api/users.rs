//! Users service.

use std::sync::Arc;

use reqwest::Method;

use crate::client::paginated::PaginatedStream;
use crate::client::query::query_params;
use crate::client::resource::Resource;
use crate::client::{ApiResponse, ClientInner, Response};
use crate::models::{
    CreateUpdateUser, NewUserCall, User, UserAvailability, UserAvailabilityList, UserList,
};
use crate::Result;

query_params! {
    /// Options for [`UsersService::list`].
    ListUsersQuery { date_range, order, paginate }
}

query_params! {
    /// Options for [`UsersService::list_availabilities`].
    ListUserAvailabilitiesQuery { date_range, order, paginate }
}

#[derive(Debug, Default, serde::Deserialize)]
struct UserEnvelope {
    #[serde(default)]
    user: User,
}

/// Service for user operations.
///
/// # Example
///
/// ```no_run
/// use aircall_rs::models::NewUserCall;
///
/// # async fn example(client: aircall_rs::AircallClient) -> aircall_rs::Result<()> {
/// let availability = client.users().get_availability(456).await?;
/// if availability.availability.as_deref() == Some("available") {
///     client
///         .users()
///         .start_outbound_call(456, &NewUserCall::new(123, "+33612345678"))
///         .await?;
/// }
/// # Ok(())
/// # }
/// ```
pub struct UsersService {
    inner: Arc<ClientInner>,
}

impl UsersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    fn resource(&self) -> Resource<'_> {
        Resource::new(&self.inner, "users")
    }

    /// List users.
    pub async fn list(&self, query: Option<&ListUsersQuery>) -> Result<ApiResponse<UserList>> {
        self.resource().list(query.map(AsRef::as_ref)).await
    }

    /// Stream every user, fetching pages lazily.
    pub fn list_stream(&self, query: Option<&ListUsersQuery>) -> PaginatedStream<User> {
        self.resource().stream::<UserList>(query.map(AsRef::as_ref))
    }

    /// Get a user by id.
    pub async fn get(&self, user_id: i64) -> Result<ApiResponse<User>> {
        let response: ApiResponse<UserEnvelope> = self.resource().get(user_id).await?;
        Ok(response.map(|envelope| envelope.user))
    }

    /// Create a user.
    pub async fn create(&self, user: &CreateUpdateUser) -> Result<ApiResponse<User>> {
        let response: ApiResponse<UserEnvelope> = self.resource().create(user).await?;
        Ok(response.map(|envelope| envelope.user))
    }

    /// Update a user.
    pub async fn update(&self, user_id: i64, user: &CreateUpdateUser) -> Result<ApiResponse<User>> {
        let response: ApiResponse<UserEnvelope> = self.resource().update(user_id, user).await?;
        Ok(response.map(|envelope| envelope.user))
    }

    /// Delete a user.
    pub async fn delete(&self, user_id: i64) -> Result<Response> {
        self.resource().delete(user_id).await
    }

    /// List the availability of every user.
    pub async fn list_availabilities(
        &self,
        query: Option<&ListUserAvailabilitiesQuery>,
    ) -> Result<ApiResponse<UserAvailabilityList>> {
        self.inner
            .get_json("users/availabilities", query.map(AsRef::as_ref))
            .await
    }

    /// Get the availability of one user.
    pub async fn get_availability(&self, user_id: i64) -> Result<ApiResponse<UserAvailability>> {
        self.inner
            .get_json(&format!("users/{user_id}/availability"), None)
            .await
    }

    /// Start an outbound call from the user's phone.
    pub async fn start_outbound_call(&self, user_id: i64, call: &NewUserCall) -> Result<Response> {
        self.inner
            .send(Method::POST, &format!("users/{user_id}/calls"), Some(call))
            .await
    }

    /// Prefill a number in the user's phone without calling it.
    pub async fn dial_number(&self, user_id: i64, call: &NewUserCall) -> Result<Response> {
        self.inner
            .send(Method::POST, &format!("users/{user_id}/dial"), Some(call))
            .await
    }
}
