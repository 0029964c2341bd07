//! RFC6570-style URL template expansion for Graph request builders.
//!
//! Every request builder owns one template of the shape
//! `{+baseurl}/identityGovernance/.../{workflow%2Did}{?%24expand,%24select}`:
//!
//! - literal segments are copied through unchanged;
//! - `{+name}` is a reserved expansion — the value is substituted without
//!   percent-encoding (used for `{+baseurl}`, which is already a URL);
//! - `{name}` is a simple expansion — the value is percent-encoded. The
//!   placeholder name itself may be percent-encoded (`workflow%2Did` for
//!   the composite key segment `workflow-id`) and is matched literally
//!   against the path-parameter map;
//! - `{?a,b,c}` is a form-style query block listing the query options the
//!   resource supports. Each listed name is percent-decoded to its wire
//!   name (`%24select` → `$select`), looked up in the supplied query set,
//!   and emitted as `name=value` when present. Absent options are omitted;
//!   if none are present, no `?` is emitted at all.
//!
//! A builder constructed from a literal URL (for example a
//! `@odata.nextLink` returned by the service) stores that URL under the
//! reserved [`RAW_URL_KEY`] path parameter; expansion then returns the
//! stored URL verbatim and ignores the template and query set entirely.

use std::collections::HashMap;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{GraphError, Result};

/// Reserved path-parameter key holding a literal request URL.
///
/// When present, [`expand`] bypasses template expansion and returns the
/// stored value unchanged. This lets callers follow absolute URLs returned
/// by the API without re-deriving path parameters.
pub const RAW_URL_KEY: &str = "request-raw-url";

/// Percent-encoding set for path segment values: everything outside the
/// RFC3986 unreserved set is encoded.
const PATH_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encoding set for query values. Besides the unreserved set,
/// characters that are legal in a query component and common in OData
/// expressions ($filter quotes, $select comma lists, ISO 8601 colons) are
/// left readable.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b',')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'$')
    .remove(b':');

/// Expands `template` against a path-parameter map and a set of query
/// parameter pairs (wire name, rendered value).
///
/// Pure function: same inputs always yield the same URL and nothing is
/// mutated. Returns [`GraphError::Template`] when a path placeholder has no
/// value in `path_parameters`.
pub fn expand(
    template: &str,
    path_parameters: &HashMap<String, String>,
    query_parameters: &[(String, String)],
) -> Result<String> {
    // Raw-URL override: the builder was constructed from a literal URL.
    if let Some(raw) = path_parameters.get(RAW_URL_KEY) {
        return Ok(raw.clone());
    }

    let mut url = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        url.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| GraphError::Template {
            template: template.to_string(),
            parameter: after.to_string(),
        })?;
        let token = &after[..close];
        rest = &after[close + 1..];

        if let Some(name) = token.strip_prefix('+') {
            // Reserved expansion: substitute without encoding.
            let value = path_parameters.get(name).ok_or_else(|| missing(template, name))?;
            url.push_str(value);
        } else if let Some(names) = token.strip_prefix('?') {
            url.push_str(&expand_query_block(names, query_parameters));
        } else {
            let value = path_parameters
                .get(token)
                .ok_or_else(|| missing(template, token))?;
            url.push_str(&utf8_percent_encode(value, PATH_VALUE).to_string());
        }
    }
    url.push_str(rest);

    Ok(url)
}

fn missing(template: &str, parameter: &str) -> GraphError {
    GraphError::Template {
        template: template.to_string(),
        parameter: parameter.to_string(),
    }
}

/// Expands a `{?a,b,c}` block: emits the listed options that are present in
/// `query_parameters`, in template order, as `?a=v&b=v`.
fn expand_query_block(names: &str, query_parameters: &[(String, String)]) -> String {
    let mut out = String::new();
    for name in names.split(',') {
        // Template names are stored percent-encoded (`%24select`); decode to
        // the wire name the query set is keyed by (`$select`).
        let wire_name = percent_decode_str(name).decode_utf8_lossy();
        if let Some((_, value)) = query_parameters.iter().find(|(k, _)| *k == wire_name) {
            out.push(if out.is_empty() { '?' } else { '&' });
            out.push_str(&wire_name);
            out.push('=');
            out.push_str(&utf8_percent_encode(value, QUERY_VALUE).to_string());
        }
    }
    out
}
