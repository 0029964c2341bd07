//! Builders for soft-deleted workflows.
//!
//! Deleting a workflow moves it to `deletedItems/workflows`, where it
//! lingers for 30 days before permanent removal. From here it can be
//! listed, read, permanently deleted, or restored via the bound
//! `restore` action.

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Method;

use crate::adapter::RequestAdapter;
use crate::builder::{BaseRequestBuilder, CountRequestBuilder};
use crate::error::Result;
use crate::models::{ODataCollection, Workflow};
use crate::odata::{CollectionQueryParameters, ItemQueryParameters};
use crate::request::{ErrorMappings, RequestConfiguration, RequestInformation};

const DELETED_WORKFLOWS_TEMPLATE: &str = "{+baseurl}/identityGovernance/lifecycleWorkflows/deletedItems/workflows{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
const DELETED_WORKFLOWS_COUNT_TEMPLATE: &str = "{+baseurl}/identityGovernance/lifecycleWorkflows/deletedItems/workflows/$count{?%24filter,%24search}";
const DELETED_WORKFLOW_ITEM_TEMPLATE: &str = "{+baseurl}/identityGovernance/lifecycleWorkflows/deletedItems/workflows/{workflow%2Did}{?%24expand,%24select}";
const RESTORE_TEMPLATE: &str = "{+baseurl}/identityGovernance/lifecycleWorkflows/deletedItems/workflows/{workflow%2Did}/microsoft.graph.identityGovernance.restore";

/// Builder for the `deletedItems` container. Navigation only; the
/// deleted-workflow collection hangs off `workflows()`.
pub struct DeletedItemsRequestBuilder {
    base: BaseRequestBuilder,
}

impl DeletedItemsRequestBuilder {
    pub(crate) fn new(
        path_parameters: HashMap<String, String>,
        adapter: Arc<dyn RequestAdapter>,
    ) -> Self {
        DeletedItemsRequestBuilder {
            base: BaseRequestBuilder::new(
                "{+baseurl}/identityGovernance/lifecycleWorkflows/deletedItems",
                path_parameters,
                adapter,
            ),
        }
    }

    /// The soft-deleted workflows collection.
    pub fn workflows(&self) -> DeletedWorkflowsRequestBuilder {
        DeletedWorkflowsRequestBuilder {
            base: BaseRequestBuilder::new(
                DELETED_WORKFLOWS_TEMPLATE,
                self.base.child_parameters(&[]),
                self.base.adapter(),
            ),
        }
    }
}

/// Builder for the soft-deleted workflows collection.
pub struct DeletedWorkflowsRequestBuilder {
    base: BaseRequestBuilder,
}

impl DeletedWorkflowsRequestBuilder {
    /// Descends into a single deleted workflow by id.
    pub fn by_workflow_id(&self, workflow_id: &str) -> DeletedWorkflowItemRequestBuilder {
        DeletedWorkflowItemRequestBuilder {
            base: BaseRequestBuilder::new(
                DELETED_WORKFLOW_ITEM_TEMPLATE,
                self.base.child_parameters(&[("workflow%2Did", workflow_id)]),
                self.base.adapter(),
            ),
        }
    }

    /// The `$count` sibling of this collection.
    pub fn count(&self) -> CountRequestBuilder {
        CountRequestBuilder::new(
            DELETED_WORKFLOWS_COUNT_TEMPLATE,
            self.base.path_parameters().clone(),
            self.base.adapter(),
        )
    }

    /// Request description for listing deleted workflows.
    pub fn to_get_request_information(
        &self,
        request_configuration: Option<&RequestConfiguration<CollectionQueryParameters>>,
    ) -> RequestInformation {
        self.base
            .to_request_information(Method::GET, request_configuration)
    }

    /// Lists the soft-deleted workflows.
    pub async fn get(
        &self,
        request_configuration: Option<&RequestConfiguration<CollectionQueryParameters>>,
    ) -> Result<Option<ODataCollection<Workflow>>> {
        let request = self.to_get_request_information(request_configuration);
        self.base
            .send_object(request, &ErrorMappings::odata())
            .await
    }
}

/// Builder for a single soft-deleted workflow.
pub struct DeletedWorkflowItemRequestBuilder {
    base: BaseRequestBuilder,
}

impl DeletedWorkflowItemRequestBuilder {
    /// The `restore` action, which moves the workflow back to the live
    /// collection.
    pub fn restore(&self) -> RestoreRequestBuilder {
        RestoreRequestBuilder {
            base: BaseRequestBuilder::new(
                RESTORE_TEMPLATE,
                self.base.child_parameters(&[]),
                self.base.adapter(),
            ),
        }
    }

    /// Request description for reading this deleted workflow.
    pub fn to_get_request_information(
        &self,
        request_configuration: Option<&RequestConfiguration<ItemQueryParameters>>,
    ) -> RequestInformation {
        self.base
            .to_request_information(Method::GET, request_configuration)
    }

    /// Reads the deleted workflow.
    pub async fn get(
        &self,
        request_configuration: Option<&RequestConfiguration<ItemQueryParameters>>,
    ) -> Result<Option<Workflow>> {
        let request = self.to_get_request_information(request_configuration);
        self.base
            .send_object(request, &ErrorMappings::odata())
            .await
    }

    /// Request description for permanent deletion.
    pub fn to_delete_request_information(
        &self,
        request_configuration: Option<&RequestConfiguration<()>>,
    ) -> RequestInformation {
        self.base
            .to_request_information(Method::DELETE, request_configuration)
    }

    /// Permanently deletes the workflow, ending its restore window.
    pub async fn delete(
        &self,
        request_configuration: Option<&RequestConfiguration<()>>,
    ) -> Result<()> {
        let request = self.to_delete_request_information(request_configuration);
        self.base
            .send_no_content(request, &ErrorMappings::odata())
            .await
    }
}

/// Builder for the `restore` bound action. Takes no body and returns the
/// restored workflow.
pub struct RestoreRequestBuilder {
    base: BaseRequestBuilder,
}

impl RestoreRequestBuilder {
    /// Request description for the action invocation.
    pub fn to_post_request_information(
        &self,
        request_configuration: Option<&RequestConfiguration<()>>,
    ) -> RequestInformation {
        self.base
            .to_request_information(Method::POST, request_configuration)
    }

    /// Restores the workflow to the live collection.
    pub async fn post(
        &self,
        request_configuration: Option<&RequestConfiguration<()>>,
    ) -> Result<Option<Workflow>> {
        let request = self.to_post_request_information(request_configuration);
        self.base
            .send_object(request, &ErrorMappings::odata())
            .await
    }
}
