//! Typed OData query options for Graph requests.
//!
//! Graph resources accept a standard vocabulary of query options
//! (`$select`, `$filter`, `$expand`, ...) controlling response shape and
//! filtering. Each request builder exposes the subset its resource
//! actually supports:
//!
//! - [`CollectionQueryParameters`] — list endpoints (full vocabulary);
//! - [`ItemQueryParameters`] — single-entity GETs (`$select`, `$expand`);
//! - [`CountQueryParameters`] — `$count` endpoints (`$filter`, `$search`).
//!
//! All fields are optional; absent options are omitted from the request
//! URL entirely. Multi-valued options (`$select`, `$expand`, `$orderby`)
//! are comma-joined, matching the OData list syntax
//! (`$select=id,displayName`).

/// Conversion from a typed query structure to wire-name/value pairs.
///
/// The returned keys are the literal OData names (`$select`, not
/// `%24select`); percent-encoding of values happens during URL template
/// expansion. Only options listed in a builder's URL template are emitted.
pub trait QueryParameters {
    /// Renders the present options as `(wire name, value)` pairs.
    fn to_query_pairs(&self) -> Vec<(String, String)>;
}

/// The empty query set, used by verbs that accept no query options.
impl QueryParameters for () {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

fn push_opt(pairs: &mut Vec<(String, String)>, name: &str, value: &Option<String>) {
    if let Some(v) = value {
        pairs.push((name.to_string(), v.clone()));
    }
}

fn push_list(pairs: &mut Vec<(String, String)>, name: &str, value: &Option<Vec<String>>) {
    if let Some(items) = value {
        pairs.push((name.to_string(), items.join(",")));
    }
}

/// Query options accepted by collection (list) endpoints.
#[derive(Debug, Clone, Default)]
pub struct CollectionQueryParameters {
    /// `$count` — include a count of the total number of items.
    pub count: Option<bool>,
    /// `$expand` — related entities to inline in the response.
    pub expand: Option<Vec<String>>,
    /// `$filter` — OData V4 filter expression evaluated server-side.
    pub filter: Option<String>,
    /// `$orderby` — properties to sort by.
    pub orderby: Option<Vec<String>>,
    /// `$search` — full-text search expression.
    pub search: Option<String>,
    /// `$select` — properties to return.
    pub select: Option<Vec<String>>,
    /// `$skip` — number of items to skip.
    pub skip: Option<i32>,
    /// `$top` — maximum number of items to return.
    pub top: Option<i32>,
}

impl QueryParameters for CollectionQueryParameters {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(count) = self.count {
            pairs.push(("$count".to_string(), count.to_string()));
        }
        push_list(&mut pairs, "$expand", &self.expand);
        push_opt(&mut pairs, "$filter", &self.filter);
        push_list(&mut pairs, "$orderby", &self.orderby);
        push_opt(&mut pairs, "$search", &self.search);
        push_list(&mut pairs, "$select", &self.select);
        if let Some(skip) = self.skip {
            pairs.push(("$skip".to_string(), skip.to_string()));
        }
        if let Some(top) = self.top {
            pairs.push(("$top".to_string(), top.to_string()));
        }
        pairs
    }
}

/// Query options accepted by single-entity GET endpoints.
#[derive(Debug, Clone, Default)]
pub struct ItemQueryParameters {
    /// `$expand` — related entities to inline in the response.
    pub expand: Option<Vec<String>>,
    /// `$select` — properties to return.
    pub select: Option<Vec<String>>,
}

impl QueryParameters for ItemQueryParameters {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_list(&mut pairs, "$expand", &self.expand);
        push_list(&mut pairs, "$select", &self.select);
        pairs
    }
}

/// Query options accepted by `$count` endpoints.
#[derive(Debug, Clone, Default)]
pub struct CountQueryParameters {
    /// `$filter` — restrict the counted set.
    pub filter: Option<String>,
    /// `$search` — full-text search restriction.
    pub search: Option<String>,
}

impl QueryParameters for CountQueryParameters {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "$filter", &self.filter);
        push_opt(&mut pairs, "$search", &self.search);
        pairs
    }
}
