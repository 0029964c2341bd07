//! Reqwest-backed [`RequestAdapter`] implementation for the Graph API.
//!
//! `GraphClient` wraps a `reqwest::Client` and a `TokenProvider` behind a
//! `Mutex`, executing the request descriptions the builders construct.
//!
//! Token lifecycle:
//! - Lazy acquisition: the first request that finds no cached token
//!   triggers `refresh_token()` automatically via `bearer_token()`.
//! - Expiry-aware: `TokenProvider::token()` returns `None` when the cached
//!   token has expired, which triggers a fresh refresh on the next request.
//! - One-shot 401 retry: if the service returns `401 Unauthorized` (e.g.
//!   the token was revoked server-side before our local expiry check
//!   caught it), the client invalidates the cached token, refreshes once,
//!   and retries the request exactly once. A second 401 is mapped through
//!   the caller's error mappings like any other failure — no retry loop.
//!
//! No other retries, no caching, no request de-duplication: a non-401
//! error status is converted to a typed error immediately, and transport
//! failures propagate unchanged.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::adapter::RequestAdapter;
use crate::auth::TokenProvider;
use crate::error::{GraphError, Result};
use crate::request::{ErrorMappings, RequestInformation};

/// Production Graph endpoint (v1.0 surface).
const BASE_URL: &str = "https://graph.microsoft.com/v1.0";

/// Connect timeout covering TCP + TLS handshake only.
const CONNECT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Overall request timeout, covering the full round-trip. Graph responses
/// on this surface are JSON documents, not bulk downloads, so one minute
/// is comfortably above observed worst cases.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);

/// Builds the HTTP client with explicit timeouts. Separate from the
/// `TokenProvider`'s client so token requests and API requests can carry
/// different policies.
fn build_http_client() -> Client {
    Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("failed to build HTTP client for the Graph API")
}

/// Authenticated request adapter for the Graph REST API.
///
/// Design notes:
/// - `auth` is behind a `Mutex` because `refresh_token()` requires
///   `&mut self` while adapter methods only need `&self`. The lock is held
///   only for the brief token check/refresh, never across an HTTP
///   round-trip.
/// - `base_url` is a `String` rather than a `&'static str` so tests can
///   point the adapter at a wiremock server.
pub struct GraphClient {
    client: Client,
    base_url: String,
    auth: Mutex<TokenProvider>,
}

impl GraphClient {
    /// Creates an adapter targeting the production Graph v1.0 endpoint.
    pub fn new(auth: TokenProvider) -> Self {
        Self::with_base_url(auth, BASE_URL)
    }

    /// Creates an adapter with a custom base URL, used by tests to point
    /// at a local mock server instead of the real service.
    pub fn with_base_url(auth: TokenProvider, base_url: &str) -> Self {
        GraphClient {
            client: build_http_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
            auth: Mutex::new(auth),
        }
    }

    /// Returns a valid bearer token, refreshing if none is cached or the
    /// current token has expired. The mutex is held only for the check
    /// and optional refresh.
    async fn bearer_token(&self) -> Result<String> {
        let mut auth = self.auth.lock().await;
        if auth.token().is_none() {
            auth.refresh_token().await?;
        }

        auth.token()
            .map(str::to_owned)
            .ok_or_else(|| GraphError::Auth {
                message: "token missing after refresh".to_string(),
                source: None,
            })
    }

    /// Invalidates the current token and acquires a fresh one. Called on
    /// 401, when the token was rejected server-side (revocation, clock
    /// skew) before local expiry tracking detected it.
    async fn force_refresh(&self) -> Result<String> {
        let mut auth = self.auth.lock().await;
        auth.invalidate();
        auth.refresh_token().await?;

        auth.token()
            .map(str::to_owned)
            .ok_or_else(|| GraphError::Auth {
                message: "token missing after forced refresh".to_string(),
                source: None,
            })
    }

    fn build_request(
        &self,
        request: &RequestInformation,
        url: &str,
        token: &str,
    ) -> reqwest::RequestBuilder {
        let mut req = self
            .client
            .request(request.method.clone(), url)
            .bearer_auth(token);
        for (name, value) in &request.headers {
            req = req.header(name, value);
        }
        if let Some(content) = &request.content {
            if let Some(content_type) = &request.content_type {
                req = req.header("Content-Type", content_type);
            }
            req = req.body(content.clone());
        }
        req
    }

    /// Executes one request description and returns (status, body text),
    /// applying the one-shot 401 refresh-and-retry policy. Status
    /// interpretation is left to the adapter trait methods.
    async fn execute(&self, request: &RequestInformation) -> Result<(StatusCode, String)> {
        let url = request.uri(&self.base_url)?;
        debug!(method = %request.method, %url, "sending Graph request");

        let token = self.bearer_token().await?;
        let resp = self.build_request(request, &url, &token).send().await?;

        let resp = if resp.status() == StatusCode::UNAUTHORIZED {
            // The service rejected the token; refresh once and retry. A
            // second 401 falls through to normal error mapping.
            warn!(%url, "401 from Graph API, refreshing token and retrying once");
            let fresh_token = self.force_refresh().await?;
            self.build_request(request, &url, &fresh_token)
                .send()
                .await?
        } else {
            resp
        };

        let status = resp.status();
        let body = resp.text().await?;
        debug!(method = %request.method, %url, status = status.as_u16(), "Graph response");
        Ok((status, body))
    }
}

#[async_trait]
impl RequestAdapter for GraphClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(
        &self,
        request: RequestInformation,
        error_mappings: &ErrorMappings,
    ) -> Result<Option<serde_json::Value>> {
        let (status, body) = self.execute(&request).await?;
        if !status.is_success() {
            return Err(error_mappings.error_for(status, &body));
        }
        if status == StatusCode::NO_CONTENT || body.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&body)?))
    }

    async fn send_no_content(
        &self,
        request: RequestInformation,
        error_mappings: &ErrorMappings,
    ) -> Result<()> {
        let (status, body) = self.execute(&request).await?;
        if !status.is_success() {
            return Err(error_mappings.error_for(status, &body));
        }
        Ok(())
    }

    async fn send_primitive(
        &self,
        request: RequestInformation,
        error_mappings: &ErrorMappings,
    ) -> Result<Option<String>> {
        let (status, body) = self.execute(&request).await?;
        if !status.is_success() {
            return Err(error_mappings.error_for(status, &body));
        }
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        Ok(Some(trimmed.to_string()))
    }
}
