//! HTTP client and transport core for the Aircall API.
//!
//! This module provides the main entry point [`AircallClient`], the query
//! encoder shared by list endpoints, and the retry configuration.
//!
//! # Example
//!
//! ```no_run
//! use aircall_rs::{AircallClient, ClientConfig, RetryConfig};
//! use std::time::Duration;
//!
//! # async fn example() -> aircall_rs::Result<()> {
//! let config = ClientConfig::default()
//!     .with_retry(RetryConfig::default().with_delay(Duration::from_millis(250)));
//! let client = AircallClient::with_config(config)?;
//! client.authenticate("oauth-access-token");
//!
//! let company = client.company().get().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod paginated;
pub(crate) mod query;
pub(crate) mod resource;
mod response;

pub use config::{ClientConfig, RetryConfig, DEFAULT_BASE_URL};
pub use http::AircallClient;
pub use paginated::{ListPage, PaginatedStream, DEFAULT_PAGE_SIZE};
pub use query::QueryValues;
pub use response::{ApiResponse, DecodeTarget, Response};
pub(crate) use http::{ClientInner, NO_BODY};
