//! Typed error hierarchy for the graph-idgov crate.
//!
//! `GraphError` is the single error type returned by every operation in the
//! library. Each variant corresponds to a distinct failure boundary:
//!
//! - `Auth` — the Azure AD token endpoint (acquisition or refresh).
//! - `OData` — the Graph service answered with a non-2xx status; the
//!   response body is parsed into the structured [`ODataError`] shape that
//!   Graph returns for every failing endpoint.
//! - `Template` — a URL template could not be expanded because a path
//!   placeholder had no value. This is caught before any network call.
//! - `Parse` — a response body (or request body during serialization) was
//!   not valid JSON for the expected shape.
//! - `Network` — transport-level failure (DNS, TCP, TLS, timeout) with no
//!   HTTP status code; wraps `reqwest::Error` unchanged.
//!
//! The `OData` variant exists because Graph uses one uniform error contract
//! across its whole surface: any failing endpoint returns
//! `{"error": {"code": ..., "message": ...}}`. Callers therefore handle one
//! error shape regardless of which resource failed, and the diagnostic code
//! (`Request_ResourceNotFound`, `Authorization_RequestDenied`, ...) is never
//! discarded.

use reqwest::StatusCode;

use crate::models::ODataError;

/// Unified error type for all graph-idgov operations.
///
/// The `#[source]` attribute on inner errors enables `Error::source()`
/// chaining so callers and logging frameworks can traverse the full cause
/// chain.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Authentication failure at the Azure AD token endpoint.
    ///
    /// Covers non-2xx token responses (the `message` preserves Azure AD's
    /// AADSTS diagnostic body), network failures reaching the endpoint, and
    /// a missing token after a refresh attempt.
    #[error("authentication failed: {message}")]
    Auth {
        /// Human-readable description, including HTTP status and the Azure
        /// AD error body when available.
        message: String,
        /// The underlying transport or parse error, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The Graph API returned a non-success HTTP status code.
    ///
    /// The body is parsed into the uniform [`ODataError`] shape via the
    /// discriminator mapping supplied by the calling request builder, so
    /// the service's diagnostic code and message survive into the error.
    #[error("Graph API error {status}: {error}")]
    OData {
        /// The HTTP status code returned by the service.
        status: StatusCode,
        /// The structured OData error payload.
        error: ODataError,
    },

    /// A URL template referenced a path parameter that was never supplied.
    ///
    /// Raised by [`crate::url_template::expand`] before any request is
    /// sent; nothing has gone over the wire when this is returned.
    #[error("unresolved URL template parameter '{parameter}' in '{template}'")]
    Template {
        /// The template that failed to expand.
        template: String,
        /// The placeholder with no value in the path-parameter map.
        parameter: String,
    },

    /// JSON (de)serialization failed for a request or response body.
    #[error("failed to parse payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// A network-level failure occurred (DNS, TCP, TLS, timeout). No HTTP
    /// status code is available because the request did not complete.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, GraphError>;
