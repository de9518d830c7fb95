//! Teams service.

use std::sync::Arc;

use crate::client::query::query_params;
use crate::client::resource::Resource;
use crate::client::{ApiResponse, ClientInner, Response, NO_BODY};
use crate::models::{CreateTeam, Team, TeamList};
use crate::Result;

query_params! {
    /// Options for [`TeamsService::list`].
    ListTeamsQuery { order, paginate }
}

#[derive(Debug, Default, serde::Deserialize)]
struct TeamEnvelope {
    #[serde(default)]
    team: Team,
}

/// Service for team operations.
pub struct TeamsService {
    inner: Arc<ClientInner>,
}

impl TeamsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    fn resource(&self) -> Resource<'_> {
        Resource::new(&self.inner, "teams")
    }

    /// List teams.
    pub async fn list(&self, query: Option<&ListTeamsQuery>) -> Result<ApiResponse<TeamList>> {
        self.resource().list(query.map(AsRef::as_ref)).await
    }

    /// Get a team by id.
    pub async fn get(&self, team_id: i64) -> Result<ApiResponse<Team>> {
        let response: ApiResponse<TeamEnvelope> = self.resource().get(team_id).await?;
        Ok(response.map(|envelope| envelope.team))
    }

    /// Create a team.
    pub async fn create(&self, team: &CreateTeam) -> Result<ApiResponse<Team>> {
        let response: ApiResponse<TeamEnvelope> = self.resource().create(team).await?;
        Ok(response.map(|envelope| envelope.team))
    }

    /// Delete a team.
    pub async fn delete(&self, team_id: i64) -> Result<Response> {
        self.resource().delete(team_id).await
    }

    /// Add a user to a team.
    pub async fn add_user(&self, team_id: i64, user_id: i64) -> Result<ApiResponse<Team>> {
        let response: ApiResponse<TeamEnvelope> = self
            .inner
            .post_json(&format!("teams/{team_id}/users/{user_id}"), NO_BODY)
            .await?;
        Ok(response.map(|envelope| envelope.team))
    }

    /// Remove a user from a team.
    pub async fn remove_user(&self, team_id: i64, user_id: i64) -> Result<ApiResponse<Team>> {
        let response: ApiResponse<TeamEnvelope> = self
            .inner
            .delete_json(&format!("teams/{team_id}/users/{user_id}"))
            .await?;
        Ok(response.map(|envelope| envelope.team))
    }
}
