//! Response descriptors and decode targets.

use std::io::Write;
use std::ops::{Deref, DerefMut};

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use url::Url;

/// Raw information about a completed HTTP exchange.
///
/// The body has already been consumed by the time this is returned.
#[derive(Debug, Clone)]
pub struct Response {
    /// Status code of the final attempt
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Final URL, after redirects
    pub url: Url,
}

/// A decoded payload together with the response it came from.
///
/// Dereferences to the payload, so fields can be read directly:
///
/// ```no_run
/// # async fn example(client: aircall_rs::AircallClient) -> aircall_rs::Result<()> {
/// let call = client.calls().get(42).await?;
/// println!("{} -> {:?}", call.response.status, call.direction);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// Decoded body
    pub data: T,
    /// Raw response information
    pub response: Response,
}

impl<T> ApiResponse<T> {
    /// Take the payload, dropping the response information.
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Transform the payload, keeping the response information.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            data: f(self.data),
            response: self.response,
        }
    }
}

impl<T> Deref for ApiResponse<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

impl<T> DerefMut for ApiResponse<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.data
    }
}

/// Where the body of a successful response goes.
///
/// `Json` decodes into a typed value; an empty body leaves the value as it
/// was. `Raw` copies the bytes verbatim into a writer without parsing.
///
/// # Example
///
/// ```no_run
/// use aircall_rs::{DecodeTarget, Method};
///
/// # async fn example(client: aircall_rs::AircallClient) -> aircall_rs::Result<()> {
/// let mut raw = Vec::new();
/// let request = client.new_request(Method::GET, "company", None, None::<&()>)?;
/// client.execute(request, Some(DecodeTarget::raw(&mut raw))).await?;
/// # Ok(())
/// # }
/// ```
pub enum DecodeTarget<'a, T> {
    /// Decode the JSON body into this value
    Json(&'a mut T),
    /// Copy the body into this writer
    Raw(&'a mut (dyn Write + Send)),
}

impl<'a> DecodeTarget<'a, serde::de::IgnoredAny> {
    /// A raw byte sink, usable where no typed value is involved.
    pub fn raw(sink: &'a mut (dyn Write + Send)) -> Self {
        DecodeTarget::Raw(sink)
    }
}

impl<T> std::fmt::Debug for DecodeTarget<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeTarget::Json(_) => f.write_str("DecodeTarget::Json"),
            DecodeTarget::Raw(_) => f.write_str("DecodeTarget::Raw"),
        }
    }
}
