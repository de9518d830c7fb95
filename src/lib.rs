//! # aircall-rs
//!
//! An async Rust client for the Aircall telephony REST API.
//!
//! The crate wraps every public resource of the API (calls, contacts, users,
//! numbers, messages, teams, tags, webhooks, dialer campaigns, integration,
//! conversation intelligence and A2P campaign associations) behind typed
//! services, and decodes the webhook events Aircall posts back.
//!
//! ## Features
//!
//! - **Authentication**: OAuth bearer tokens or API ID / API token pairs
//! - **Retry**: transport failures and 5xx answers are retried with a fixed pause
//! - **Errors**: API error bodies are decoded into a structured [`ErrorResponse`]
//! - **Pagination**: lazy [`Stream`](futures_util::Stream)s over list endpoints
//! - **Webhooks**: tag-checked decoding of inbound events
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aircall_rs::{AircallClient, ListCallsQuery};
//!
//! #[tokio::main]
//! async fn main() -> aircall_rs::Result<()> {
//!     let client = AircallClient::new()?;
//!     client.authenticate_basic("api-id", "api-token");
//!
//!     let company = client.company().get().await?;
//!     println!("{:?} has {:?} users", company.name, company.users_count);
//!
//!     let query = ListCallsQuery::new().order("desc").paginate(1, 10);
//!     let calls = client.calls().list(Some(&query)).await?;
//!     for call in &calls.calls {
//!         println!("{:?} {:?} {:?}s", call.id, call.direction, call.duration);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use aircall_rs::{AircallClient, Error};
//!
//! # async fn example(client: AircallClient) {
//! match client.users().get(1).await {
//!     Ok(user) => println!("{:?}", user.name),
//!     Err(Error::Api(err)) if err.status.as_u16() == 404 => println!("no such user"),
//!     Err(err) => eprintln!("{err}"),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod webhook;

// Re-export primary types at crate root for convenience
pub use api::{
    ListA2pCampaignAssociationsQuery, ListCallsQuery, ListContactsQuery, ListNumbersQuery,
    ListTagsQuery, ListTeamsQuery, ListUserAvailabilitiesQuery, ListUsersQuery,
    ListWebhooksQuery, SearchCallsQuery,
};
pub use auth::Credentials;
pub use client::{
    AircallClient, ApiResponse, ClientConfig, DecodeTarget, QueryValues, Response, RetryConfig,
};
pub use error::{Error, ErrorResponse, Result};
pub use reqwest::Method;
pub use webhook::InboundWebhook;

/// Prelude module for convenient imports.
///
/// ```rust
/// use aircall_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ListCallsQuery, ListContactsQuery, ListNumbersQuery, ListTagsQuery, ListTeamsQuery,
        ListUsersQuery, ListWebhooksQuery, SearchCallsQuery,
    };
    pub use crate::client::{AircallClient, ApiResponse, ClientConfig, RetryConfig};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        Call, CallTransfer, Company, Contact, CreateTeam, CreateUpdateTag, CreateUpdateUser,
        CreateUpdateWebhook, Message, Number, ResponseMeta, Tag, Team, User, Webhook,
    };
    pub use crate::webhook::{InboundWebhook, WebhookResource};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let client = AircallClient::new().unwrap();
        assert_eq!(client.base_url().as_str(), client::DEFAULT_BASE_URL);
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_authentication_is_shared_by_clones() {
        let client = AircallClient::new().unwrap();
        let clone = client.clone();

        client.authenticate_basic("id", "secret");
        assert!(clone.is_authenticated());
    }
}
