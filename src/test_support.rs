//! Shared adapter stub for builder unit tests.
//!
//! Lets builder modules exercise request construction and typed
//! deserialization without a network or a mock server; end-to-end HTTP
//! behavior is covered by the wiremock tests under `tests/`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::adapter::RequestAdapter;
use crate::error::Result;
use crate::request::{ErrorMappings, RequestInformation};

/// Adapter answering every call with canned values.
#[derive(Default)]
pub(crate) struct StubAdapter {
    /// Value returned by `send`; `None` simulates an empty success body.
    pub send_value: Option<serde_json::Value>,
    /// Text returned by `send_primitive`.
    pub primitive: Option<String>,
}

#[async_trait]
impl RequestAdapter for StubAdapter {
    fn base_url(&self) -> &str {
        "https://graph.microsoft.com/v1.0"
    }

    async fn send(
        &self,
        _request: RequestInformation,
        _error_mappings: &ErrorMappings,
    ) -> Result<Option<serde_json::Value>> {
        Ok(self.send_value.clone())
    }

    async fn send_no_content(
        &self,
        _request: RequestInformation,
        _error_mappings: &ErrorMappings,
    ) -> Result<()> {
        Ok(())
    }

    async fn send_primitive(
        &self,
        _request: RequestInformation,
        _error_mappings: &ErrorMappings,
    ) -> Result<Option<String>> {
        Ok(self.primitive.clone())
    }
}

/// An empty-response stub behind the trait object the builders expect.
pub(crate) fn adapter() -> Arc<dyn RequestAdapter> {
    Arc::new(StubAdapter::default())
}
