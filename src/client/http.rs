//! HTTP client implementation for the Aircall API.
//!
//! Request construction and dispatch live on [`ClientInner`], which every
//! service shares through an `Arc`. [`AircallClient`] exposes the same
//! primitives publicly for endpoints this crate does not wrap.

use std::sync::{Arc, PoisonError, RwLock};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use url::Url;

use crate::api::{
    A2pCampaignAssociationsService, CallsService, CompanyService, ContactsService,
    ConversationIntelligenceService, DialerCampaignsService, IntegrationService,
    MessagesService, NumbersService, TagsService, TeamsService, UsersService, WebhooksService,
};
use crate::auth::{AuthState, Credentials};
use crate::{Error, ErrorResponse, Result};

use super::config::ClientConfig;
use super::query::QueryValues;
use super::response::{ApiResponse, DecodeTarget, Response};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Body argument for requests that send none.
pub(crate) const NO_BODY: Option<&()> = None;

/// The main client for interacting with the Aircall API.
///
/// Cloning is cheap: clones share the transport, configuration and
/// credentials.
///
/// # Example
///
/// ```no_run
/// use aircall_rs::{AircallClient, ListCallsQuery};
///
/// # async fn example() -> aircall_rs::Result<()> {
/// let client = AircallClient::new()?;
/// client.authenticate_basic("api-id", "api-token");
///
/// let calls = client
///     .calls()
///     .list(Some(&ListCallsQuery::new().order("desc").paginate(1, 20)))
///     .await?;
///
/// for call in &calls.calls {
///     println!("{:?} {:?}", call.id, call.status);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AircallClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: Url,
    pub(crate) auth: RwLock<AuthState>,
    pub(crate) config: ClientConfig,
}

enum AttemptOutcome {
    /// Final result of the logical call
    Done(Result<Response>),
    /// The attempt failed in a way worth sending again
    Retry(Error),
}

impl AircallClient {
    /// Create a client for the public Aircall endpoint with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with a custom configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = match &config.http_client {
            Some(client) => client.clone(),
            None => reqwest::Client::builder().timeout(config.timeout).build()?,
        };
        let base_url = Url::parse(config.base_url())?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                auth: RwLock::new(AuthState::default()),
                config,
            }),
        })
    }

    /// Authenticate every following request with an OAuth access token.
    pub fn authenticate(&self, access_token: impl Into<String>) {
        self.set_credentials(Credentials::bearer(access_token));
    }

    /// Authenticate every following request with an API ID / API token pair.
    pub fn authenticate_basic(&self, api_id: impl AsRef<str>, api_token: impl AsRef<str>) {
        self.set_credentials(Credentials::basic(api_id, api_token));
    }

    /// Replace the credentials used by this client and its clones.
    ///
    /// Meant to be called once before requests are issued concurrently.
    pub fn set_credentials(&self, credentials: Credentials) {
        self.inner
            .auth
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set(credentials);
    }

    /// Whether credentials have been set.
    pub fn is_authenticated(&self) -> bool {
        self.inner.auth_state().is_enabled()
    }

    /// The endpoint relative paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Get the calls service.
    pub fn calls(&self) -> CallsService {
        CallsService::new(self.inner.clone())
    }

    /// Get the contacts service.
    pub fn contacts(&self) -> ContactsService {
        ContactsService::new(self.inner.clone())
    }

    /// Get the company service.
    pub fn company(&self) -> CompanyService {
        CompanyService::new(self.inner.clone())
    }

    /// Get the dialer campaigns service.
    pub fn dialer_campaigns(&self) -> DialerCampaignsService {
        DialerCampaignsService::new(self.inner.clone())
    }

    /// Get the numbers service.
    pub fn numbers(&self) -> NumbersService {
        NumbersService::new(self.inner.clone())
    }

    /// Get the messages service.
    pub fn messages(&self) -> MessagesService {
        MessagesService::new(self.inner.clone())
    }

    /// Get the users service.
    pub fn users(&self) -> UsersService {
        UsersService::new(self.inner.clone())
    }

    /// Get the teams service.
    pub fn teams(&self) -> TeamsService {
        TeamsService::new(self.inner.clone())
    }

    /// Get the tags service.
    pub fn tags(&self) -> TagsService {
        TagsService::new(self.inner.clone())
    }

    /// Get the webhooks service.
    pub fn webhooks(&self) -> WebhooksService {
        WebhooksService::new(self.inner.clone())
    }

    /// Get the integration service.
    pub fn integration(&self) -> IntegrationService {
        IntegrationService::new(self.inner.clone())
    }

    /// Get the conversation intelligence service.
    pub fn conversation_intelligence(&self) -> ConversationIntelligenceService {
        ConversationIntelligenceService::new(self.inner.clone())
    }

    /// Get the A2P campaign associations service.
    pub fn a2p_campaign_associations(&self) -> A2pCampaignAssociationsService {
        A2pCampaignAssociationsService::new(self.inner.clone())
    }

    /// Build a request without sending it.
    ///
    /// `path` is resolved against the base URL, `query` is appended as-is and
    /// `body` is serialized to JSON.
    pub fn new_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: Option<&QueryValues>,
        body: Option<&B>,
    ) -> Result<reqwest::Request> {
        self.inner.new_request(method, path, query, body)
    }

    /// Send a request built by [`new_request`](Self::new_request), retrying
    /// transport failures and server errors.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::Request,
        target: Option<DecodeTarget<'_, T>>,
    ) -> Result<Response> {
        self.inner.execute(request, target).await
    }

    /// Make a GET request.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&QueryValues>,
        target: Option<DecodeTarget<'_, T>>,
    ) -> Result<Response> {
        self.inner.get(path, query, target).await
    }

    /// Make a POST request.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        target: Option<DecodeTarget<'_, T>>,
    ) -> Result<Response> {
        self.inner.post(path, body, target).await
    }

    /// Make a PUT request.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        target: Option<DecodeTarget<'_, T>>,
    ) -> Result<Response> {
        self.inner.put(path, body, target).await
    }

    /// Make a DELETE request.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        target: Option<DecodeTarget<'_, T>>,
    ) -> Result<Response> {
        self.inner.delete(path, target).await
    }
}

impl ClientInner {
    pub(crate) fn auth_state(&self) -> std::sync::RwLockReadGuard<'_, AuthState> {
        self.auth.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Build request headers with authentication.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.config.user_agent)
                .map_err(|_| Error::InvalidInput("Invalid user agent".to_string()))?,
        );

        self.auth_state().attach(&mut headers)?;

        Ok(headers)
    }

    pub(crate) fn new_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: Option<&QueryValues>,
        body: Option<&B>,
    ) -> Result<reqwest::Request> {
        let mut target = path.to_string();
        if let Some(query) = query {
            target.push_str(&query.encode());
        }
        let url = self.base_url.join(&target)?;

        let mut builder = self
            .http
            .request(method, url)
            .headers(self.build_headers()?);

        if let Some(body) = body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        Ok(builder.build()?)
    }

    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::Request,
        mut target: Option<DecodeTarget<'_, T>>,
    ) -> Result<Response> {
        let retry = &self.config.retry;
        let mut last_error = None;
        let mut attempts = 0;

        while attempts < retry.max_attempts {
            if attempts > 0 {
                tokio::time::sleep(retry.delay).await;
            }
            attempts += 1;

            let Some(attempt_request) = request.try_clone() else {
                return Err(Error::RequestConstruction);
            };

            match self.attempt(attempt_request, target.as_mut()).await {
                AttemptOutcome::Done(result) => return result,
                AttemptOutcome::Retry(err) => {
                    tracing::warn!(
                        method = %request.method(),
                        url = %request.url(),
                        attempt = attempts,
                        error = %err,
                        "request attempt failed"
                    );
                    last_error = Some(err);
                }
            }
        }

        Err(last_error.unwrap_or(Error::AttemptsExhausted))
    }

    async fn attempt<T: DeserializeOwned>(
        &self,
        request: reqwest::Request,
        target: Option<&mut DecodeTarget<'_, T>>,
    ) -> AttemptOutcome {
        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!(%method, %url, "sending request");

        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(err) => return AttemptOutcome::Retry(Error::Http(err)),
        };

        let status = response.status();
        let info = Response {
            status,
            headers: response.headers().clone(),
            url: response.url().clone(),
        };
        tracing::debug!(%method, %url, status = status.as_u16(), "received response");

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let err = Error::from(ErrorResponse::from_body(method, url, status, &body));

            if self.config.retry.should_retry_status(status.as_u16()) {
                return AttemptOutcome::Retry(err);
            }
            return AttemptOutcome::Done(Err(err));
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(err) => return AttemptOutcome::Done(Err(Error::Http(err))),
        };

        AttemptOutcome::Done(decode_body(&body, target).map(|()| info))
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&QueryValues>,
        target: Option<DecodeTarget<'_, T>>,
    ) -> Result<Response> {
        let request = self.new_request(Method::GET, path, query, NO_BODY)?;
        self.execute(request, target).await
    }

    /// Make a POST request.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        target: Option<DecodeTarget<'_, T>>,
    ) -> Result<Response> {
        let request = self.new_request(Method::POST, path, None, body)?;
        self.execute(request, target).await
    }

    /// Make a PUT request.
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        target: Option<DecodeTarget<'_, T>>,
    ) -> Result<Response> {
        let request = self.new_request(Method::PUT, path, None, body)?;
        self.execute(request, target).await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        target: Option<DecodeTarget<'_, T>>,
    ) -> Result<Response> {
        let request = self.new_request(Method::DELETE, path, None, NO_BODY)?;
        self.execute(request, target).await
    }

    /// GET and decode the body into `T`.
    pub(crate) async fn get_json<T: DeserializeOwned + Default>(
        &self,
        path: &str,
        query: Option<&QueryValues>,
    ) -> Result<ApiResponse<T>> {
        let mut data = T::default();
        let response = self.get(path, query, Some(DecodeTarget::Json(&mut data))).await?;
        Ok(ApiResponse { data, response })
    }

    /// POST a body and decode the answer into `T`.
    pub(crate) async fn post_json<T: DeserializeOwned + Default, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>> {
        let mut data = T::default();
        let response = self.post(path, body, Some(DecodeTarget::Json(&mut data))).await?;
        Ok(ApiResponse { data, response })
    }

    /// PUT a body and decode the answer into `T`.
    pub(crate) async fn put_json<T: DeserializeOwned + Default, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>> {
        let mut data = T::default();
        let response = self.put(path, body, Some(DecodeTarget::Json(&mut data))).await?;
        Ok(ApiResponse { data, response })
    }

    /// DELETE and decode the answer into `T`.
    pub(crate) async fn delete_json<T: DeserializeOwned + Default>(
        &self,
        path: &str,
    ) -> Result<ApiResponse<T>> {
        let mut data = T::default();
        let response = self.delete(path, Some(DecodeTarget::Json(&mut data))).await?;
        Ok(ApiResponse { data, response })
    }

    /// Send a request whose answer body is ignored.
    pub(crate) async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response> {
        let request = self.new_request(method, path, None, body)?;
        self.execute::<IgnoredAny>(request, None).await
    }
}

/// Write a success body into the caller's target.
fn decode_body<T: DeserializeOwned>(
    body: &[u8],
    target: Option<&mut DecodeTarget<'_, T>>,
) -> Result<()> {
    match target {
        None => {}
        Some(DecodeTarget::Raw(sink)) => sink.write_all(body)?,
        Some(DecodeTarget::Json(value)) => {
            if !body.iter().all(u8::is_ascii_whitespace) {
                **value = serde_json::from_slice(body)?;
            }
        }
    }
    Ok(())
}

impl std::fmt::Debug for AircallClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AircallClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("config", &self.inner.config)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn client() -> AircallClient {
        AircallClient::with_config(ClientConfig::default().with_base_url("https://api.example.test/v1/"))
            .unwrap()
    }

    #[test]
    fn test_request_resolves_path_and_query() {
        let client = client();
        let query: QueryValues = [("page", "2")].into_iter().collect();

        let request = client
            .new_request(Method::GET, "calls/search", Some(&query), NO_BODY)
            .unwrap();

        assert_eq!(request.url().as_str(), "https://api.example.test/v1/calls/search?page=2");
        assert!(request.body().is_none());
    }

    #[test]
    fn test_request_standard_headers() {
        let client = client();
        let request = client.new_request(Method::GET, "company", None, NO_BODY).unwrap();
        let headers = request.headers();

        assert_eq!(headers[ACCEPT], JSON_CONTENT_TYPE);
        assert_eq!(headers[CONTENT_TYPE], JSON_CONTENT_TYPE);
        assert!(headers[USER_AGENT].to_str().unwrap().starts_with("aircall-rs/"));
        assert!(headers.get(reqwest::header::AUTHORIZATION).is_none());
    }

    #[test]
    fn test_request_carries_bearer_token() {
        let client = client();
        client.authenticate("tok123");

        let request = client.new_request(Method::GET, "company", None, NO_BODY).unwrap();
        assert_eq!(request.headers()[reqwest::header::AUTHORIZATION], "Bearer tok123");
    }

    #[test]
    fn test_request_serializes_body() {
        #[derive(Serialize)]
        struct Body {
            name: &'static str,
        }

        let request = client()
            .new_request(Method::POST, "tags", None, Some(&Body { name: "VIP" }))
            .unwrap();

        let bytes = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(bytes, br#"{"name":"VIP"}"#);
    }

    #[test]
    fn test_request_rejects_unserializable_body() {
        let mut body = std::collections::HashMap::new();
        body.insert(vec![1u8], "not a string key");

        let result = client().new_request(Method::POST, "tags", None, Some(&body));
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Sample {
        id: i64,
    }

    #[test]
    fn test_decode_empty_body_keeps_default() {
        let mut sample = Sample::default();
        decode_body(b"", Some(&mut DecodeTarget::Json(&mut sample))).unwrap();
        assert_eq!(sample, Sample::default());

        decode_body(b"  \n", Some(&mut DecodeTarget::Json(&mut sample))).unwrap();
        assert_eq!(sample, Sample::default());
    }

    #[test]
    fn test_decode_json_body() {
        let mut sample = Sample::default();
        decode_body(br#"{"id":1}"#, Some(&mut DecodeTarget::Json(&mut sample))).unwrap();
        assert_eq!(sample, Sample { id: 1 });
    }

    #[test]
    fn test_decode_raw_body_is_verbatim() {
        let mut sink = Vec::new();
        decode_body(b"not json", Some(&mut DecodeTarget::raw(&mut sink))).unwrap();
        assert_eq!(sink, b"not json");
    }

    #[tokio::test]
    async fn test_unclonable_request_is_rejected() {
        let client = client();
        let chunks = futures_util::stream::once(async { Ok::<_, std::io::Error>("chunk") });

        let mut request = client.new_request(Method::POST, "tags", None, NO_BODY).unwrap();
        *request.body_mut() = Some(reqwest::Body::wrap_stream(chunks));

        let result = client.execute::<serde::de::IgnoredAny>(request, None).await;
        assert!(matches!(result, Err(Error::RequestConstruction)));
    }

    #[test]
    fn test_decode_invalid_json_fails() {
        let mut sample = Sample::default();
        let result = decode_body(b"{", Some(&mut DecodeTarget::Json(&mut sample)));
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
