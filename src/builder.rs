//! The shared request-builder core.
//!
//! Every typed builder in this crate is a thin named wrapper around
//! [`BaseRequestBuilder`]: a URL template, a resolved path-parameter map,
//! and the shared adapter reference. The wrapper contributes only its
//! template constant, its path-parameter key, and the verb set its
//! resource supports — everything else (request construction, sending,
//! error mapping, raw-URL override) lives here, once.
//!
//! Invariants:
//! - construction is cheap value construction: no I/O, no validation, no
//!   failure path;
//! - a builder is immutable after construction — verb and navigation
//!   calls only read it;
//! - one adapter reference is threaded through an entire builder tree via
//!   `Arc`, established once at the root.

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::adapter::RequestAdapter;
use crate::error::Result;
use crate::odata::{CountQueryParameters, QueryParameters};
use crate::request::{ErrorMappings, RequestConfiguration, RequestInformation};
use crate::url_template::RAW_URL_KEY;

/// The state shared by every typed request builder.
#[derive(Clone)]
pub struct BaseRequestBuilder {
    url_template: String,
    path_parameters: HashMap<String, String>,
    adapter: Arc<dyn RequestAdapter>,
}

impl BaseRequestBuilder {
    /// Builds from an already-resolved path-parameter map. Never performs
    /// I/O and never fails.
    pub fn new(
        url_template: &str,
        path_parameters: HashMap<String, String>,
        adapter: Arc<dyn RequestAdapter>,
    ) -> Self {
        BaseRequestBuilder {
            url_template: url_template.to_string(),
            path_parameters,
            adapter,
        }
    }

    /// Builds from a single literal URL, bypassing template expansion.
    ///
    /// The URL is stored under the reserved [`RAW_URL_KEY`] path
    /// parameter, which is how a caller follows an absolute URL returned
    /// by the API (e.g. an `@odata.nextLink`) without re-deriving path
    /// parameters.
    pub fn with_raw_url(
        url_template: &str,
        raw_url: impl Into<String>,
        adapter: Arc<dyn RequestAdapter>,
    ) -> Self {
        let mut path_parameters = HashMap::new();
        path_parameters.insert(RAW_URL_KEY.to_string(), raw_url.into());
        Self::new(url_template, path_parameters, adapter)
    }

    /// The shared adapter, for handing down to child builders.
    pub fn adapter(&self) -> Arc<dyn RequestAdapter> {
        Arc::clone(&self.adapter)
    }

    /// The builder's resolved path parameters.
    pub fn path_parameters(&self) -> &HashMap<String, String> {
        &self.path_parameters
    }

    /// Clones this builder's path parameters and extends them with a
    /// child's own placeholders. Navigation accessors use this to derive
    /// the child's map; the parent map is never mutated.
    pub fn child_parameters(&self, extra: &[(&str, &str)]) -> HashMap<String, String> {
        let mut parameters = self.path_parameters.clone();
        for (key, value) in extra {
            parameters.insert(key.to_string(), value.to_string());
        }
        parameters
    }

    /// Constructs a request description for this builder's resource.
    ///
    /// Pure and idempotent: repeated calls with the same configuration
    /// yield identical descriptions. Caller headers are applied first so
    /// the default `Accept: application/json` never overrides them.
    pub fn to_request_information<Q: QueryParameters>(
        &self,
        method: Method,
        request_configuration: Option<&RequestConfiguration<Q>>,
    ) -> RequestInformation {
        let mut request = RequestInformation::new(
            method,
            self.url_template.clone(),
            self.path_parameters.clone(),
        );
        if let Some(config) = request_configuration {
            request.add_headers(&config.headers);
            if let Some(query) = &config.query_parameters {
                request.add_query_parameters(query);
            }
        }
        request.try_add_header("Accept", "application/json");
        request
    }

    /// Like [`Self::to_request_information`] with a JSON body attached.
    pub fn to_request_information_with_body<Q: QueryParameters, B: Serialize + ?Sized>(
        &self,
        method: Method,
        request_configuration: Option<&RequestConfiguration<Q>>,
        body: &B,
    ) -> Result<RequestInformation> {
        let mut request = self.to_request_information(method, request_configuration);
        request.set_content_from_parsable(body)?;
        Ok(request)
    }

    /// Sends a request and deserializes the response entity. `None` means
    /// the service returned a legitimately empty body.
    pub async fn send_object<T: DeserializeOwned>(
        &self,
        request: RequestInformation,
        error_mappings: &ErrorMappings,
    ) -> Result<Option<T>> {
        match self.adapter.send(request, error_mappings).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Sends a request whose success response carries no body.
    pub async fn send_no_content(
        &self,
        request: RequestInformation,
        error_mappings: &ErrorMappings,
    ) -> Result<()> {
        self.adapter.send_no_content(request, error_mappings).await
    }
}

/// Generic `$count` builder: targets a collection's `.../$count` segment,
/// which returns a bare integer with `Content-Type: text/plain`.
pub struct CountRequestBuilder {
    base: BaseRequestBuilder,
}

impl CountRequestBuilder {
    pub(crate) fn new(
        url_template: &str,
        path_parameters: HashMap<String, String>,
        adapter: Arc<dyn RequestAdapter>,
    ) -> Self {
        CountRequestBuilder {
            base: BaseRequestBuilder::new(url_template, path_parameters, adapter),
        }
    }

    /// Constructs the GET description. Count endpoints return plain text,
    /// so the default Accept differs from entity endpoints.
    pub fn to_get_request_information(
        &self,
        request_configuration: Option<&RequestConfiguration<CountQueryParameters>>,
    ) -> RequestInformation {
        let mut request = RequestInformation::new(
            Method::GET,
            self.base.url_template.clone(),
            self.base.path_parameters.clone(),
        );
        if let Some(config) = request_configuration {
            request.add_headers(&config.headers);
            if let Some(query) = &config.query_parameters {
                request.add_query_parameters(query);
            }
        }
        request.try_add_header("Accept", "text/plain;q=0.9");
        request
    }

    /// Retrieves the number of items in the collection.
    pub async fn get(
        &self,
        request_configuration: Option<&RequestConfiguration<CountQueryParameters>>,
    ) -> Result<Option<i64>> {
        let request = self.to_get_request_information(request_configuration);
        let error_mappings = ErrorMappings::odata();
        match self
            .base
            .adapter()
            .send_primitive(request, &error_mappings)
            .await?
        {
            // serde_json parses a bare integer literal, and a malformed
            // body surfaces as the same Parse error as any other payload.
            Some(text) => Ok(Some(serde_json::from_str::<i64>(&text)?)),
            None => Ok(None),
        }
    }
}
