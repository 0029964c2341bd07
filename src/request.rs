//! Request descriptions: the pure values a builder hands to the adapter.
//!
//! [`RequestInformation`] is a complete description of one HTTP request —
//! method, URL template, path parameters, headers, query parameters, and
//! an optional serialized body — with no connection or session state.
//! Builders construct it via their public `to_*_request_information`
//! methods, which makes request construction independently callable:
//! callers can assemble several descriptions without executing any of
//! them.
//!
//! [`ErrorMappings`] is the discriminator table a verb method supplies
//! alongside the request: it maps response status patterns to the factory
//! that converts a failing body into a typed error. Graph uses one error
//! shape everywhere, so builders register a single wildcard (`"XXX"`)
//! entry pointing at the OData error factory; the table still resolves
//! exact codes (`"404"`) before classes (`"4XX"`, `"5XX"`) before the
//! wildcard so a caller-customized mapping behaves predictably.

use std::collections::HashMap;

use reqwest::{Method, StatusCode};
use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::models::ODataError;
use crate::odata::QueryParameters;
use crate::url_template;

/// A pure description of one HTTP request.
#[derive(Debug, Clone)]
pub struct RequestInformation {
    /// The HTTP method to execute.
    pub method: Method,
    /// The RFC6570-style URL template (see [`crate::url_template`]).
    pub url_template: String,
    /// Resolved path-parameter values, keyed by placeholder name.
    pub path_parameters: HashMap<String, String>,
    /// Query parameters as (wire name, rendered value) pairs.
    pub query_parameters: Vec<(String, String)>,
    /// Request headers as (name, value) pairs.
    pub headers: Vec<(String, String)>,
    /// Serialized request body, when the verb carries one.
    pub content: Option<Vec<u8>>,
    /// MIME type of `content`.
    pub content_type: Option<String>,
}

impl RequestInformation {
    /// Creates a request description with no headers, query, or body.
    pub fn new(
        method: Method,
        url_template: impl Into<String>,
        path_parameters: HashMap<String, String>,
    ) -> Self {
        RequestInformation {
            method,
            url_template: url_template.into(),
            path_parameters,
            query_parameters: Vec::new(),
            headers: Vec::new(),
            content: None,
            content_type: None,
        }
    }

    /// Adds a header unless one with the same name (case-insensitive) is
    /// already present. Used for defaults like `Accept`, so a caller's
    /// explicit header always wins.
    pub fn try_add_header(&mut self, name: &str, value: &str) {
        if !self
            .headers
            .iter()
            .any(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            self.headers.push((name.to_string(), value.to_string()));
        }
    }

    /// Appends caller-supplied headers ahead of any defaults.
    pub fn add_headers(&mut self, headers: &[(String, String)]) {
        self.headers.extend_from_slice(headers);
    }

    /// Renders a typed query structure into the request's query set.
    pub fn add_query_parameters<Q: QueryParameters>(&mut self, query: &Q) {
        self.query_parameters.extend(query.to_query_pairs());
    }

    /// Serializes `body` as the JSON request content.
    ///
    /// A serialization failure is returned before anything is sent; no
    /// partial state is left behind.
    pub fn set_content_from_parsable<B: Serialize + ?Sized>(&mut self, body: &B) -> Result<()> {
        self.content = Some(serde_json::to_vec(body)?);
        self.content_type = Some("application/json".to_string());
        Ok(())
    }

    /// Resolves the final request URL against the adapter's base URL.
    ///
    /// Pure and idempotent: expansion never mutates the description. A
    /// raw-URL description (see [`url_template::RAW_URL_KEY`]) returns its
    /// stored URL verbatim.
    pub fn uri(&self, base_url: &str) -> Result<String> {
        let mut parameters = self.path_parameters.clone();
        parameters.insert(
            "baseurl".to_string(),
            base_url.trim_end_matches('/').to_string(),
        );
        url_template::expand(&self.url_template, &parameters, &self.query_parameters)
    }
}

/// Optional per-call configuration: extra headers and typed query
/// parameters. Its absence means "use defaults".
#[derive(Debug, Clone)]
pub struct RequestConfiguration<Q> {
    /// Additional request headers. Take precedence over builder defaults.
    pub headers: Vec<(String, String)>,
    /// Typed query parameters for the call, when the verb supports them.
    pub query_parameters: Option<Q>,
}

impl<Q> Default for RequestConfiguration<Q> {
    fn default() -> Self {
        RequestConfiguration {
            headers: Vec::new(),
            query_parameters: None,
        }
    }
}

/// Converts a failing response (status + raw body) into a typed error.
pub type ErrorFactory = fn(StatusCode, &str) -> GraphError;

/// Discriminator table from status patterns to error factories.
///
/// Patterns are matched in specificity order: the exact status code
/// (`"404"`), then the status class (`"4XX"` / `"5XX"`), then the
/// wildcard (`"XXX"`).
#[derive(Debug, Clone)]
pub struct ErrorMappings {
    entries: Vec<(String, ErrorFactory)>,
}

/// The default factory: parse the body as the uniform OData error shape.
fn odata_error_factory(status: StatusCode, body: &str) -> GraphError {
    GraphError::OData {
        status,
        error: ODataError::from_response_body(body),
    }
}

impl ErrorMappings {
    /// An empty table. [`ErrorMappings::error_for`] still falls back to
    /// the OData factory when nothing matches, so a missing registration
    /// can never turn into a panic.
    pub fn new() -> Self {
        ErrorMappings {
            entries: Vec::new(),
        }
    }

    /// The table every generated verb method registers: a single wildcard
    /// entry mapping any non-2xx status to the OData error shape.
    pub fn odata() -> Self {
        let mut mappings = ErrorMappings::new();
        mappings.register("XXX", odata_error_factory);
        mappings
    }

    /// Registers a factory for a status pattern (`"404"`, `"4XX"`,
    /// `"5XX"`, or the wildcard `"XXX"`). Later registrations for the
    /// same pattern win.
    pub fn register(&mut self, pattern: impl Into<String>, factory: ErrorFactory) {
        let pattern = pattern.into();
        self.entries.retain(|(p, _)| *p != pattern);
        self.entries.push((pattern, factory));
    }

    fn resolve(&self, status: StatusCode) -> Option<ErrorFactory> {
        let exact = status.as_u16().to_string();
        let class = if status.is_client_error() {
            "4XX"
        } else if status.is_server_error() {
            "5XX"
        } else {
            ""
        };
        for pattern in [exact.as_str(), class, "XXX"] {
            if let Some((_, factory)) = self.entries.iter().find(|(p, _)| p == pattern) {
                return Some(*factory);
            }
        }
        None
    }

    /// Builds the typed error for a failing response.
    pub fn error_for(&self, status: StatusCode, body: &str) -> GraphError {
        match self.resolve(status) {
            Some(factory) => factory(status, body),
            None => odata_error_factory(status, body),
        }
    }
}

impl Default for ErrorMappings {
    fn default() -> Self {
        ErrorMappings::odata()
    }
}
