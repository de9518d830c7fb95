//! Authentication for the Aircall API.
//!
//! Aircall accepts two credential forms, both sent in the `Authorization`
//! header:
//!
//! 1. **Bearer token** - an OAuth access token issued to a Technology Partner app
//! 2. **Basic** - an API ID / API token pair, base64-encoded as `id:token`
//!
//! # Bearer Authentication
//!
//! ```no_run
//! use aircall_rs::AircallClient;
//!
//! # fn example() -> aircall_rs::Result<()> {
//! let client = AircallClient::new()?;
//! client.authenticate("oauth-access-token");
//! # Ok(())
//! # }
//! ```
//!
//! # Basic Authentication
//!
//! ```no_run
//! use aircall_rs::AircallClient;
//!
//! # fn example() -> aircall_rs::Result<()> {
//! let client = AircallClient::new()?;
//! client.authenticate_basic("api-id", "api-token");
//! # Ok(())
//! # }
//! ```

mod credentials;

pub use credentials::Credentials;
pub(crate) use credentials::AuthState;
