//! Credential storage and the `Authorization` header.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// Scheme prefix for OAuth access tokens.
pub const BEARER_PREFIX: &str = "Bearer";

/// Scheme prefix for API ID / API token pairs.
pub const BASIC_PREFIX: &str = "Basic";

/// Credentials attached to every outgoing request.
///
/// The secret value never appears in `Debug` output.
#[derive(Clone)]
pub enum Credentials {
    /// OAuth access token, sent as `Bearer <token>`
    Bearer(SecretString),
    /// Base64 of `api_id:api_token`, sent as `Basic <encoded>`
    Basic(SecretString),
}

impl Credentials {
    /// Credentials for an OAuth access token.
    pub fn bearer(token: impl Into<String>) -> Self {
        Credentials::Bearer(SecretString::from(token.into()))
    }

    /// Credentials for an API ID / API token pair.
    ///
    /// # Example
    ///
    /// ```
    /// use aircall_rs::auth::Credentials;
    ///
    /// let credentials = Credentials::basic("id", "secret");
    /// assert_eq!(credentials.prefix(), "Basic");
    /// ```
    pub fn basic(api_id: impl AsRef<str>, api_token: impl AsRef<str>) -> Self {
        let pair = format!("{}:{}", api_id.as_ref(), api_token.as_ref());
        Credentials::Basic(SecretString::from(STANDARD.encode(pair)))
    }

    /// Scheme prefix written before the credential value.
    pub fn prefix(&self) -> &'static str {
        match self {
            Credentials::Bearer(_) => BEARER_PREFIX,
            Credentials::Basic(_) => BASIC_PREFIX,
        }
    }

    fn value(&self) -> &SecretString {
        match self {
            Credentials::Bearer(value) | Credentials::Basic(value) => value,
        }
    }

    /// Full `Authorization` header value, marked sensitive.
    pub(crate) fn header_value(&self) -> Result<HeaderValue> {
        let raw = format!("{} {}", self.prefix(), self.value().expose_secret());
        let mut value = HeaderValue::from_str(&raw)
            .map_err(|_| Error::InvalidInput("Invalid credential format".to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple(self.prefix()).field(&"[REDACTED]").finish()
    }
}

/// Authentication state owned by one client.
///
/// Disabled until one of the authenticate calls stores credentials; the
/// last call wins.
#[derive(Debug, Default, Clone)]
pub(crate) struct AuthState {
    credentials: Option<Credentials>,
}

impl AuthState {
    pub(crate) fn set(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.credentials.is_some()
    }

    /// Insert the `Authorization` header when credentials are present.
    pub(crate) fn attach(&self, headers: &mut HeaderMap) -> Result<()> {
        if let Some(credentials) = &self.credentials {
            headers.insert(AUTHORIZATION, credentials.header_value()?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header() {
        let mut state = AuthState::default();
        state.set(Credentials::bearer("tok123"));

        let mut headers = HeaderMap::new();
        state.attach(&mut headers).unwrap();

        assert_eq!(headers[AUTHORIZATION], "Bearer tok123");
        assert!(headers[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn test_basic_header_decodes_to_pair() {
        let mut state = AuthState::default();
        state.set(Credentials::basic("id", "secret"));

        let mut headers = HeaderMap::new();
        state.attach(&mut headers).unwrap();

        let value = headers[AUTHORIZATION].to_str().unwrap();
        let encoded = value.strip_prefix("Basic ").unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(decoded, b"id:secret");
    }

    #[test]
    fn test_disabled_state_is_noop() {
        let state = AuthState::default();
        let mut headers = HeaderMap::new();
        state.attach(&mut headers).unwrap();

        assert!(!state.is_enabled());
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_last_call_wins() {
        let mut state = AuthState::default();
        state.set(Credentials::basic("id", "secret"));
        state.set(Credentials::bearer("second"));

        let mut headers = HeaderMap::new();
        state.attach(&mut headers).unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer second");
    }

    #[test]
    fn test_invalid_token_rejected() {
        let credentials = Credentials::bearer("bad\ntoken");
        assert!(matches!(credentials.header_value(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let debug_str = format!("{:?}", Credentials::bearer("super-secret-token"));

        assert!(!debug_str.contains("super-secret-token"));
        assert!(debug_str.contains("REDACTED"));
    }
}
