//! Error types for the Aircall API client.
//!
//! Every fallible operation in this crate returns [`Error`]. Failed HTTP
//! exchanges carry the decoded Aircall error body in an [`ErrorResponse`].

use std::fmt;

use reqwest::{Method, StatusCode};
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// A specialized `Result` type for Aircall operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Aircall API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The underlying HTTP transport failed (connection, timeout, TLS...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization of a request body or decoding of a success body failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API answered with a non-2xx status
    #[error("{0}")]
    Api(Box<ErrorResponse>),

    /// Writing a raw response body into the caller's sink failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input provided to a function (e.g. a credential that is not a valid header value)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The request could not be produced for a dispatch attempt
    #[error("request could not be constructed")]
    RequestConstruction,

    /// Every attempt failed without recording an error
    #[error("all request attempts were exhausted")]
    AttemptsExhausted,

    /// A webhook envelope was decoded as the wrong resource
    #[error("resource is {actual}, not {expected}")]
    ResourceMismatch {
        /// Resource tag the caller asked for
        expected: &'static str,
        /// Resource tag found in the envelope
        actual: String,
    },

    /// A compound webhook resource carried an event of another category
    #[error("resource is {resource}, but event {actual} is not a {expected} event")]
    EventMismatch {
        /// Resource tag found in the envelope
        resource: String,
        /// Event category the caller asked for
        expected: &'static str,
        /// Event name found in the envelope
        actual: String,
    },
}

impl Error {
    /// Returns `true` if the dispatcher would retry after this error.
    ///
    /// Transport failures and server errors (5xx) are retried; everything
    /// else, including 4xx responses, is final.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) => true,
            Error::Api(response) => response.status.is_server_error(),
            _ => false,
        }
    }

    /// Returns `true` if this error is a 4xx answer from the API.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Api(response) if response.status.is_client_error())
    }

    /// Returns `true` if this error is a 5xx answer from the API.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api(response) if response.status.is_server_error())
    }

    /// HTTP status associated with this error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api(response) => Some(response.status),
            Error::Http(err) => err.status(),
            _ => None,
        }
    }

    /// The decoded error body, if the API answered.
    pub fn api_response(&self) -> Option<&ErrorResponse> {
        match self {
            Error::Api(response) => Some(&**response),
            _ => None,
        }
    }
}

impl From<ErrorResponse> for Error {
    fn from(response: ErrorResponse) -> Self {
        Error::Api(Box::new(response))
    }
}

/// A non-2xx answer from the Aircall API.
///
/// The body fields are filled on a best-effort basis: a body that is not
/// JSON, or that lacks some of the fields, still yields an `ErrorResponse`
/// with the request method, URL and status.
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    /// Method of the failed request
    pub method: Method,
    /// Full URL of the failed request
    pub url: Url,
    /// Status code returned by the API
    pub status: StatusCode,
    /// `message` field of the error body
    pub message: Option<String>,
    /// `error` field of the error body
    pub error_message: Option<String>,
    /// `troubleshoot` field of the error body
    pub troubleshoot: Option<String>,
    /// `success` field of the error body
    pub success: Option<bool>,
}

impl ErrorResponse {
    /// Build an error response from the raw body of a failed exchange.
    pub(crate) fn from_body(method: Method, url: Url, status: StatusCode, body: &[u8]) -> Self {
        let body: Value = serde_json::from_slice(body).unwrap_or_default();
        let text = |key: &str| body.get(key).and_then(Value::as_str).map(String::from);

        Self {
            method,
            url,
            status,
            message: text("message"),
            error_message: text("error"),
            troubleshoot: text("troubleshoot"),
            success: body.get("success").and_then(Value::as_bool),
        }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} {}",
            self.method,
            self.url,
            self.status.as_u16(),
            self.error_message.as_deref().unwrap_or_default()
        )?;

        if let Some(troubleshoot) = self.troubleshoot.as_deref().filter(|t| !t.is_empty()) {
            write!(f, " [{troubleshoot}]")?;
        }

        if let Some(message) = self.message.as_deref().filter(|m| !m.is_empty()) {
            write!(f, " [{message}]")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> Url {
        Url::parse("https://api.aircall.io/v1/calls/42").unwrap()
    }

    #[test]
    fn test_error_response_display() {
        let body = br#"{"error":"Not found","troubleshoot":"Check the call id","message":"Call not found"}"#;
        let response = ErrorResponse::from_body(Method::GET, url(), StatusCode::NOT_FOUND, body);

        assert_eq!(
            response.to_string(),
            "GET https://api.aircall.io/v1/calls/42: 404 Not found [Check the call id] [Call not found]"
        );
    }

    #[test]
    fn test_error_response_partial_body() {
        let body = br#"{"error":"bad request","success":false}"#;
        let response = ErrorResponse::from_body(Method::POST, url(), StatusCode::BAD_REQUEST, body);

        assert_eq!(response.success, Some(false));
        assert!(response.troubleshoot.is_none());
        assert_eq!(
            response.to_string(),
            "POST https://api.aircall.io/v1/calls/42: 400 bad request"
        );
    }

    #[test]
    fn test_error_response_swallows_invalid_body() {
        let response = ErrorResponse::from_body(
            Method::GET,
            url(),
            StatusCode::BAD_GATEWAY,
            b"<html>bad gateway</html>",
        );

        assert!(response.error_message.is_none());
        assert!(response.message.is_none());
        assert_eq!(response.to_string(), "GET https://api.aircall.io/v1/calls/42: 502 ");
    }

    #[test]
    fn test_error_classification() {
        let server: Error =
            ErrorResponse::from_body(Method::GET, url(), StatusCode::SERVICE_UNAVAILABLE, b"").into();
        let client: Error =
            ErrorResponse::from_body(Method::GET, url(), StatusCode::BAD_REQUEST, b"").into();

        assert!(server.is_retryable());
        assert!(server.is_server_error());
        assert!(!client.is_retryable());
        assert!(client.is_client_error());
        assert_eq!(client.status(), Some(StatusCode::BAD_REQUEST));
        assert!(!Error::RequestConstruction.is_retryable());
        assert!(!Error::InvalidInput("bad".into()).is_retryable());
    }
}
