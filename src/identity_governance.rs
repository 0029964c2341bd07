//! Entry points of the identity-governance builder tree.
//!
//! [`IdentityGovernanceRequestBuilder`] is the root: it is constructed
//! once with the shared adapter and every other builder in the crate is
//! reached from it through navigation accessors. Navigation is pure and
//! allocate-only — a child builder clones the parent's path parameters,
//! adds its own placeholder, and reuses the same adapter reference; it
//! never validates that the referenced resource exists.
//!
//! ```ignore
//! use std::sync::Arc;
//! use graph_idgov::auth::TokenProvider;
//! use graph_idgov::client::GraphClient;
//! use graph_idgov::identity_governance::IdentityGovernanceRequestBuilder;
//!
//! let auth = TokenProvider::new("tenant", "client-id", "secret",
//!     graph_idgov::auth::GRAPH_DEFAULT_SCOPE);
//! let adapter = Arc::new(GraphClient::new(auth));
//! let governance = IdentityGovernanceRequestBuilder::new(adapter);
//! let workflow = governance
//!     .lifecycle_workflows()
//!     .workflows()
//!     .by_workflow_id("156ce798-1eb6-4e0a-8515-e79f54d04390")
//!     .get(None)
//!     .await?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::access_packages::AccessPackagesRequestBuilder;
use crate::adapter::RequestAdapter;
use crate::builder::BaseRequestBuilder;
use crate::deleted_items::DeletedItemsRequestBuilder;
use crate::insights::InsightsRequestBuilder;
use crate::task_definitions::TaskDefinitionsRequestBuilder;
use crate::workflow_templates::WorkflowTemplatesRequestBuilder;
use crate::workflows::WorkflowsRequestBuilder;

const IDENTITY_GOVERNANCE_TEMPLATE: &str = "{+baseurl}/identityGovernance";
const LIFECYCLE_WORKFLOWS_TEMPLATE: &str = "{+baseurl}/identityGovernance/lifecycleWorkflows";
const ENTITLEMENT_MANAGEMENT_TEMPLATE: &str = "{+baseurl}/identityGovernance/entitlementManagement";

/// Root builder for the `/identityGovernance` segment.
pub struct IdentityGovernanceRequestBuilder {
    base: BaseRequestBuilder,
}

impl IdentityGovernanceRequestBuilder {
    /// Creates the root of a builder tree over the given adapter. This is
    /// the single place an adapter reference enters the tree.
    pub fn new(adapter: Arc<dyn RequestAdapter>) -> Self {
        IdentityGovernanceRequestBuilder {
            base: BaseRequestBuilder::new(IDENTITY_GOVERNANCE_TEMPLATE, HashMap::new(), adapter),
        }
    }

    /// Builders for the lifecycle-workflows surface.
    pub fn lifecycle_workflows(&self) -> LifecycleWorkflowsRequestBuilder {
        LifecycleWorkflowsRequestBuilder {
            base: BaseRequestBuilder::new(
                LIFECYCLE_WORKFLOWS_TEMPLATE,
                self.base.child_parameters(&[]),
                self.base.adapter(),
            ),
        }
    }

    /// Builders for the entitlement-management surface.
    pub fn entitlement_management(&self) -> EntitlementManagementRequestBuilder {
        EntitlementManagementRequestBuilder {
            base: BaseRequestBuilder::new(
                ENTITLEMENT_MANAGEMENT_TEMPLATE,
                self.base.child_parameters(&[]),
                self.base.adapter(),
            ),
        }
    }
}

/// Builder for `/identityGovernance/lifecycleWorkflows` — navigation only;
/// the container itself exposes no verbs on this surface.
pub struct LifecycleWorkflowsRequestBuilder {
    base: BaseRequestBuilder,
}

impl LifecycleWorkflowsRequestBuilder {
    /// The workflows collection.
    pub fn workflows(&self) -> WorkflowsRequestBuilder {
        WorkflowsRequestBuilder::new(self.base.child_parameters(&[]), self.base.adapter())
    }

    /// Soft-deleted workflows awaiting permanent deletion or restore.
    pub fn deleted_items(&self) -> DeletedItemsRequestBuilder {
        DeletedItemsRequestBuilder::new(self.base.child_parameters(&[]), self.base.adapter())
    }

    /// The built-in task definitions workflows can instantiate.
    pub fn task_definitions(&self) -> TaskDefinitionsRequestBuilder {
        TaskDefinitionsRequestBuilder::new(self.base.child_parameters(&[]), self.base.adapter())
    }

    /// The built-in workflow templates.
    pub fn workflow_templates(&self) -> WorkflowTemplatesRequestBuilder {
        WorkflowTemplatesRequestBuilder::new(self.base.child_parameters(&[]), self.base.adapter())
    }

    /// Date-ranged processing summaries.
    pub fn insights(&self) -> InsightsRequestBuilder {
        InsightsRequestBuilder::new(self.base.child_parameters(&[]), self.base.adapter())
    }
}

/// Builder for `/identityGovernance/entitlementManagement` — navigation
/// only.
pub struct EntitlementManagementRequestBuilder {
    base: BaseRequestBuilder,
}

impl EntitlementManagementRequestBuilder {
    /// The access-packages collection.
    pub fn access_packages(&self) -> AccessPackagesRequestBuilder {
        AccessPackagesRequestBuilder::new(self.base.child_parameters(&[]), self.base.adapter())
    }
}
