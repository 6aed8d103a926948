//! HTTP client wrapper for the user REST API.
//!
//! Every call goes through [`ApiClient::send`], which:
//!
//! 1. joins the path onto the configured base URL,
//! 2. attaches `Authorization: Bearer <token>` when storage holds a token,
//! 3. makes exactly one attempt through the [`HttpTransport`],
//! 4. on 401/403 runs the auth-failure handler (logout) before returning
//!    the error.
//!
//! Client-side (hydrate): real requests via `gloo-net`.
//! Server-side (SSR): an offline transport that always fails, since these
//! endpoints are only meaningful in the browser.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::util::token_storage::TokenStorage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// A fully prepared request, ready for the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One network round trip. Implementations must not retry.
#[async_trait::async_trait(?Send)]
pub trait HttpTransport: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when no response was received. Any
    /// response, whatever its status, is `Ok`.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Browser transport backed by `gloo-net` (`fetch`).
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        use gloo_net::http::{Method as FetchMethod, RequestBuilder};

        let method = match request.method {
            Method::Get => FetchMethod::GET,
            Method::Post => FetchMethod::POST,
            Method::Put => FetchMethod::PUT,
        };
        let mut builder = RequestBuilder::new(&request.url).method(method);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let resp = prepared
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

/// Transport used during server rendering.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineTransport;

#[async_trait::async_trait(?Send)]
impl HttpTransport for OfflineTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let _ = request;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// The transport matching the current build target.
pub fn default_transport() -> Arc<dyn HttpTransport> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(GlooTransport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(OfflineTransport)
    }
}

/// Called with the status code whenever the server answers 401 or 403.
pub type AuthFailureHandler = Arc<dyn Fn(u16) + Send + Sync>;

/// Shared REST client. Cheap to clone; provided through Leptos context.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    transport: Arc<dyn HttpTransport>,
    storage: Arc<dyn TokenStorage>,
    on_auth_failure: Option<AuthFailureHandler>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, transport: Arc<dyn HttpTransport>, storage: Arc<dyn TokenStorage>) -> Self {
        Self { config, transport, storage, on_auth_failure: None }
    }

    /// Install the side effect run on 401/403 responses.
    #[must_use]
    pub fn on_auth_failure(mut self, handler: impl Fn(u16) + Send + Sync + 'static) -> Self {
        self.on_auth_failure = Some(Arc::new(handler));
        self
    }

    /// Prepare a request for `path`, reading the current token from storage.
    pub fn build_request(&self, method: Method, path: &str, body: Option<String>) -> HttpRequest {
        let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
        if let Some(token) = self.storage.token() {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        HttpRequest { method, url: self.config.endpoint(path), headers, body }
    }

    /// Send one request and decode a 2xx JSON body into `T`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Transport`] when the transport fails (passed through).
    /// - [`ApiError::Status`] for any non-2xx response; 401/403 run the
    ///   auth-failure handler first.
    /// - [`ApiError::Decode`] when a 2xx body does not parse as `T`.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        let request = self.build_request(method, path, body);
        let resp = self.transport.send(request).await?;

        if !resp.ok() {
            if matches!(resp.status, 401 | 403) {
                leptos::logging::warn!("{path} rejected with {}; clearing session", resp.status);
                if let Some(handler) = &self.on_auth_failure {
                    handler(resp.status);
                }
            }
            return Err(ApiError::Status { status: resp.status, body: resp.body });
        }

        serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Serialize a request body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if `value` cannot be represented as JSON.
pub fn json_body<B: Serialize + ?Sized>(value: &B) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Decode(e.to_string()))
}
