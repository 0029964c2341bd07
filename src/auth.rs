//! OAuth2 client-credentials authentication for Microsoft identity platform.
//!
//! Acquires bearer tokens from Azure AD's `/oauth2/v2.0/token` endpoint
//! using the client_credentials grant. The token is cached in
//! `TokenProvider` and refreshed on demand. Consumers (the
//! [`crate::client::GraphClient`] adapter) read the cached token via
//! `token()` and call `refresh_token()` when it is absent or stale.
//!
//! The token endpoint is stored per provider so tests can point it at a
//! local mock server; production code uses [`TokenProvider::new`], which
//! derives the endpoint from the tenant id.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::{GraphError, Result};

/// Azure AD v2.0 token endpoint. `{tenant_id}` is replaced at construction.
const TOKEN_URL: &str = "https://login.microsoftonline.com/{tenant_id}/oauth2/v2.0/token";

/// Default scope requesting all application permissions granted to the
/// client on the Graph resource.
pub const GRAPH_DEFAULT_SCOPE: &str = "https://graph.microsoft.com/.default";

/// Safety buffer subtracted from `expires_in` to trigger refresh before
/// the token actually expires. Prevents requests from racing the expiry
/// boundary.
const EXPIRY_BUFFER_SECS: u64 = 60;

/// Form body sent to the token endpoint, serialized as
/// `application/x-www-form-urlencoded` by reqwest's `.form()`.
#[derive(Serialize)]
pub struct TokenRequest<'a> {
    client_id: &'a str,
    scope: &'a str,
    client_secret: &'a str,
    grant_type: &'a str,
}

/// Subset of the Azure AD token response that we need. Additional fields
/// (e.g. `ext_expires_in`) are ignored by serde since the struct is not
/// marked `deny_unknown_fields`.
#[derive(Deserialize)]
pub struct TokenResponse {
    /// The bearer token to attach to requests.
    pub access_token: String,
    /// Always `"Bearer"` for this grant.
    pub token_type: String,
    /// Token lifetime in seconds.
    pub expires_in: u64,
}

/// Manages OAuth2 token acquisition and caching.
///
/// Invariants:
/// - `response` is `None` until the first successful `refresh_token()`.
/// - After a successful refresh, `token()` returns `Some` until the token
///   expires (with the safety buffer), is invalidated, or is replaced.
/// - `acquired_at` is always `Some` when `response` is `Some`.
pub struct TokenProvider {
    client: reqwest::Client,
    token_url: String,
    scope: String,
    client_id: String,
    client_secret: String,
    response: Option<TokenResponse>,
    acquired_at: Option<Instant>,
}

impl TokenProvider {
    /// Creates a provider for the given tenant and client credentials.
    pub fn new(tenant_id: &str, client_id: &str, client_secret: &str, scope: &str) -> Self {
        Self::with_token_url(
            &TOKEN_URL.replace("{tenant_id}", tenant_id),
            client_id,
            client_secret,
            scope,
        )
    }

    /// Creates a provider with an explicit token endpoint. Used by tests
    /// to point token acquisition at a local mock server.
    pub fn with_token_url(
        token_url: &str,
        client_id: &str,
        client_secret: &str,
        scope: &str,
    ) -> Self {
        TokenProvider {
            client: reqwest::Client::new(),
            token_url: token_url.to_string(),
            scope: scope.to_string(),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            response: None,
            acquired_at: None,
        }
    }

    /// Creates a provider with a pre-set token, bypassing Azure AD.
    /// Used by tests to avoid real HTTP calls during token acquisition.
    /// The token is treated as freshly acquired (expires_in = 3600s).
    pub fn with_token(token: &str) -> Self {
        let mut provider = Self::with_token_url("", "", "", "");
        provider.response = Some(TokenResponse {
            access_token: token.to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 3600,
        });
        provider.acquired_at = Some(Instant::now());
        provider
    }

    /// Fetches a new token from the token endpoint and caches it.
    ///
    /// The response body is read as text first so that on failure the raw
    /// AADSTS error message is preserved in the error instead of being
    /// discarded with the status check.
    pub async fn refresh_token(&mut self) -> Result<()> {
        let body = TokenRequest {
            client_id: &self.client_id,
            scope: &self.scope,
            client_secret: &self.client_secret,
            grant_type: "client_credentials",
        };

        let response = self
            .client
            .post(&self.token_url)
            .form(&body)
            .send()
            .await
            .map_err(|e| GraphError::Auth {
                message: format!("token endpoint unreachable: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| GraphError::Auth {
            message: format!("failed to read token response: {e}"),
            source: Some(Box::new(e)),
        })?;

        if !status.is_success() {
            return Err(GraphError::Auth {
                message: format!("token request failed ({status}): {body}"),
                source: None,
            });
        }

        let resp: TokenResponse = serde_json::from_str(&body).map_err(|e| GraphError::Auth {
            message: format!("failed to parse token response: {e}"),
            source: Some(Box::new(e)),
        })?;
        self.acquired_at = Some(Instant::now());
        self.response = Some(resp);

        Ok(())
    }

    /// Drops the cached token so the next `token()` call reports absence.
    /// Called when the API rejects the token server-side (401) before our
    /// local expiry tracking caught it.
    pub fn invalidate(&mut self) {
        self.response = None;
        self.acquired_at = None;
    }

    /// Returns `true` if a token exists but has exceeded its lifetime
    /// (minus the safety buffer). Returns `false` if no token is cached.
    fn is_expired(&self) -> bool {
        match (&self.response, self.acquired_at) {
            (Some(resp), Some(acquired)) => {
                let lifetime = resp.expires_in.saturating_sub(EXPIRY_BUFFER_SECS);
                acquired.elapsed().as_secs() >= lifetime
            }
            _ => false,
        }
    }

    /// Returns the cached access token, or `None` if no token exists or
    /// the token has expired (with the safety buffer).
    pub fn token(&self) -> Option<&str> {
        if self.is_expired() {
            return None;
        }
        self.response.as_ref().map(|r| r.access_token.as_str())
    }
}
