//! The transport seam between request builders and the network.
//!
//! Builders never perform I/O themselves: every verb method constructs a
//! [`RequestInformation`] and hands it to a [`RequestAdapter`]. Exactly one
//! adapter instance (behind an `Arc`) is threaded through an entire builder
//! tree, established once at the root — so base URL, authentication, and
//! timeout policy are configured in one place.
//!
//! The three send shapes mirror the three response shapes the Graph
//! surface produces:
//!
//! - [`send`](RequestAdapter::send) — a JSON entity (or no content);
//! - [`send_no_content`](RequestAdapter::send_no_content) — verbs whose
//!   success response is empty (DELETE, some actions);
//! - [`send_primitive`](RequestAdapter::send_primitive) — bare-text
//!   responses (`$count` returns a plain integer).
//!
//! Each method takes the caller's [`ErrorMappings`] so any non-2xx response
//! is converted into the structured error type the calling builder
//! registered; transport failures propagate unchanged.

use async_trait::async_trait;

use crate::error::Result;
use crate::request::{ErrorMappings, RequestInformation};

/// Executes request descriptions over the network.
///
/// Implementations own the concurrency contract (connection reuse,
/// thread-safety); [`crate::client::GraphClient`] is the crate's
/// reqwest-backed implementation. The adapter performs no retries beyond
/// its own authentication policy and no caching.
#[async_trait]
pub trait RequestAdapter: Send + Sync {
    /// The base URL substituted for `{+baseurl}` in every template.
    fn base_url(&self) -> &str;

    /// Executes the request and returns the response body as JSON, or
    /// `None` when the service legitimately returned no content.
    async fn send(
        &self,
        request: RequestInformation,
        error_mappings: &ErrorMappings,
    ) -> Result<Option<serde_json::Value>>;

    /// Executes a request whose success response carries no body.
    async fn send_no_content(
        &self,
        request: RequestInformation,
        error_mappings: &ErrorMappings,
    ) -> Result<()>;

    /// Executes the request and returns the raw response text, or `None`
    /// when the body is empty.
    async fn send_primitive(
        &self,
        request: RequestInformation,
        error_mappings: &ErrorMappings,
    ) -> Result<Option<String>>;
}
