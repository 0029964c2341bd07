//! Async Rust client library for the Microsoft Graph identity-governance
//! surface (lifecycle workflows and entitlement management).
//!
//! Provides OAuth2 authentication, an authenticated request adapter with
//! 401 retry, and a tree of typed request builders mirroring the
//! `/identityGovernance` URL hierarchy. Builders are cheap immutable
//! values; only verb methods perform I/O.
//!
//! # Modules
//!
//! - [`adapter`] — The transport seam every builder sends through.
//! - [`auth`] — OAuth2 client credentials token provider with expiry tracking.
//! - [`builder`] — Shared request-builder core and the generic `$count` builder.
//! - [`client`] — Reqwest-backed adapter for the Graph REST API.
//! - [`error`] — Typed error hierarchy (`GraphError`) for all library operations.
//! - [`identity_governance`] — Root of the builder tree.
//! - [`models`] — Wire models for workflows, runs, insights, and access packages.
//! - [`odata`] — OData query-option sets (`$select`, `$filter`, ...).
//! - [`request`] — Transport-neutral request descriptions and error mappings.
//! - [`url_template`] — RFC6570-style URL template expansion.
//!
//! Resource builders live in [`workflows`], [`deleted_items`],
//! [`task_definitions`], [`workflow_templates`], [`insights`], and
//! [`access_packages`].
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use graph_idgov::auth::{TokenProvider, GRAPH_DEFAULT_SCOPE};
//! use graph_idgov::client::GraphClient;
//! use graph_idgov::identity_governance::IdentityGovernanceRequestBuilder;
//!
//! let auth = TokenProvider::new("tenant", "client_id", "secret", GRAPH_DEFAULT_SCOPE);
//! let adapter = Arc::new(GraphClient::new(auth));
//! let governance = IdentityGovernanceRequestBuilder::new(adapter);
//! let workflows = governance.lifecycle_workflows().workflows().get(None).await?;
//! ```

#![warn(missing_docs)]

pub mod access_packages;
pub mod adapter;
pub mod auth;
pub mod builder;
pub mod client;
pub mod deleted_items;
pub mod error;
pub mod identity_governance;
pub mod insights;
pub mod models;
pub mod odata;
pub mod request;
pub mod task_definitions;
pub mod url_template;
pub mod workflow_templates;
pub mod workflows;

#[cfg(test)]
mod test_support;
