//! Builders for the lifecycle workflows collection and everything under a
//! single workflow: versions, runs, per-user processing results, and the
//! bound actions `activate` and `createNewVersion`.
//!
//! URL layout (relative to `{+baseurl}/identityGovernance/lifecycleWorkflows`):
//!
//! ```text
//! workflows                                  GET, POST
//! workflows/$count                           GET (text/plain)
//! workflows/{workflow-id}                    GET, PATCH, DELETE
//! workflows/{workflow-id}/.../activate       POST (no content)
//! workflows/{workflow-id}/.../createNewVersion  POST
//! workflows/{workflow-id}/versions           GET (+ $count, {versionNumber})
//! workflows/{workflow-id}/runs               GET (+ {run-id})
//! workflows/{workflow-id}/runs/{run-id}/userProcessingResults  GET
//! ```
//!
//! Bound actions live at a `microsoft.graph.identityGovernance.`-qualified
//! sub-segment and are modeled as dedicated single-verb builders.

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Method;

use crate::adapter::RequestAdapter;
use crate::builder::{BaseRequestBuilder, CountRequestBuilder};
use crate::error::Result;
use crate::models::{
    ActivateRequest, CreateNewVersionRequest, ODataCollection, Run, UserProcessingResult,
    Workflow, WorkflowVersion,
};
use crate::odata::{CollectionQueryParameters, ItemQueryParameters};
use crate::request::{ErrorMappings, RequestConfiguration, RequestInformation};

const WORKFLOWS_TEMPLATE: &str = "{+baseurl}/identityGovernance/lifecycleWorkflows/workflows{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
const WORKFLOWS_COUNT_TEMPLATE: &str =
    "{+baseurl}/identityGovernance/lifecycleWorkflows/workflows/$count{?%24filter,%24search}";
const WORKFLOW_ITEM_TEMPLATE: &str = "{+baseurl}/identityGovernance/lifecycleWorkflows/workflows/{workflow%2Did}{?%24expand,%24select}";
const ACTIVATE_TEMPLATE: &str = "{+baseurl}/identityGovernance/lifecycleWorkflows/workflows/{workflow%2Did}/microsoft.graph.identityGovernance.activate";
const CREATE_NEW_VERSION_TEMPLATE: &str = "{+baseurl}/identityGovernance/lifecycleWorkflows/workflows/{workflow%2Did}/microsoft.graph.identityGovernance.createNewVersion";
const VERSIONS_TEMPLATE: &str = "{+baseurl}/identityGovernance/lifecycleWorkflows/workflows/{workflow%2Did}/versions{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
const VERSIONS_COUNT_TEMPLATE: &str = "{+baseurl}/identityGovernance/lifecycleWorkflows/workflows/{workflow%2Did}/versions/$count{?%24filter,%24search}";
const VERSION_ITEM_TEMPLATE: &str = "{+baseurl}/identityGovernance/lifecycleWorkflows/workflows/{workflow%2Did}/versions/{workflowVersion%2DversionNumber}{?%24expand,%24select}";
const RUNS_TEMPLATE: &str = "{+baseurl}/identityGovernance/lifecycleWorkflows/workflows/{workflow%2Did}/runs{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
const RUN_ITEM_TEMPLATE: &str = "{+baseurl}/identityGovernance/lifecycleWorkflows/workflows/{workflow%2Did}/runs/{run%2Did}{?%24expand,%24select}";
const USER_PROCESSING_RESULTS_TEMPLATE: &str = "{+baseurl}/identityGovernance/lifecycleWorkflows/workflows/{workflow%2Did}/runs/{run%2Did}/userProcessingResults{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";

/// Builder for the workflows collection.
pub struct WorkflowsRequestBuilder {
    base: BaseRequestBuilder,
}

impl WorkflowsRequestBuilder {
    pub(crate) fn new(
        path_parameters: HashMap<String, String>,
        adapter: Arc<dyn RequestAdapter>,
    ) -> Self {
        WorkflowsRequestBuilder {
            base: BaseRequestBuilder::new(WORKFLOWS_TEMPLATE, path_parameters, adapter),
        }
    }

    /// Builds from a literal URL, e.g. an `@odata.nextLink` of a previous
    /// page.
    pub fn with_url(raw_url: impl Into<String>, adapter: Arc<dyn RequestAdapter>) -> Self {
        WorkflowsRequestBuilder {
            base: BaseRequestBuilder::with_raw_url(WORKFLOWS_TEMPLATE, raw_url, adapter),
        }
    }

    /// Descends into a single workflow by id.
    pub fn by_workflow_id(&self, workflow_id: &str) -> WorkflowItemRequestBuilder {
        WorkflowItemRequestBuilder::new(
            self.base.child_parameters(&[("workflow%2Did", workflow_id)]),
            self.base.adapter(),
        )
    }

    /// The `$count` sibling of this collection.
    pub fn count(&self) -> CountRequestBuilder {
        CountRequestBuilder::new(
            WORKFLOWS_COUNT_TEMPLATE,
            self.base.path_parameters().clone(),
            self.base.adapter(),
        )
    }

    /// Request description for listing workflows.
    pub fn to_get_request_information(
        &self,
        request_configuration: Option<&RequestConfiguration<CollectionQueryParameters>>,
    ) -> RequestInformation {
        self.base
            .to_request_information(Method::GET, request_configuration)
    }

    /// Lists workflows, honoring the OData query options.
    pub async fn get(
        &self,
        request_configuration: Option<&RequestConfiguration<CollectionQueryParameters>>,
    ) -> Result<Option<ODataCollection<Workflow>>> {
        let request = self.to_get_request_information(request_configuration);
        self.base
            .send_object(request, &ErrorMappings::odata())
            .await
    }

    /// Request description for creating a workflow.
    pub fn to_post_request_information(
        &self,
        body: &Workflow,
        request_configuration: Option<&RequestConfiguration<()>>,
    ) -> Result<RequestInformation> {
        self.base
            .to_request_information_with_body(Method::POST, request_configuration, body)
    }

    /// Creates a workflow and returns the created entity.
    pub async fn post(
        &self,
        body: &Workflow,
        request_configuration: Option<&RequestConfiguration<()>>,
    ) -> Result<Option<Workflow>> {
        let request = self.to_post_request_information(body, request_configuration)?;
        self.base
            .send_object(request, &ErrorMappings::odata())
            .await
    }
}

/// Builder for a single workflow.
pub struct WorkflowItemRequestBuilder {
    base: BaseRequestBuilder,
}

impl WorkflowItemRequestBuilder {
    pub(crate) fn new(
        path_parameters: HashMap<String, String>,
        adapter: Arc<dyn RequestAdapter>,
    ) -> Self {
        WorkflowItemRequestBuilder {
            base: BaseRequestBuilder::new(WORKFLOW_ITEM_TEMPLATE, path_parameters, adapter),
        }
    }

    /// Builds from a literal URL.
    pub fn with_url(raw_url: impl Into<String>, adapter: Arc<dyn RequestAdapter>) -> Self {
        WorkflowItemRequestBuilder {
            base: BaseRequestBuilder::with_raw_url(WORKFLOW_ITEM_TEMPLATE, raw_url, adapter),
        }
    }

    /// The on-demand `activate` action for this workflow.
    pub fn activate(&self) -> ActivateRequestBuilder {
        ActivateRequestBuilder {
            base: BaseRequestBuilder::new(
                ACTIVATE_TEMPLATE,
                self.base.child_parameters(&[]),
                self.base.adapter(),
            ),
        }
    }

    /// The `createNewVersion` action for this workflow.
    pub fn create_new_version(&self) -> CreateNewVersionRequestBuilder {
        CreateNewVersionRequestBuilder {
            base: BaseRequestBuilder::new(
                CREATE_NEW_VERSION_TEMPLATE,
                self.base.child_parameters(&[]),
                self.base.adapter(),
            ),
        }
    }

    /// Historical versions of this workflow.
    pub fn versions(&self) -> VersionsRequestBuilder {
        VersionsRequestBuilder {
            base: BaseRequestBuilder::new(
                VERSIONS_TEMPLATE,
                self.base.child_parameters(&[]),
                self.base.adapter(),
            ),
        }
    }

    /// Execution history of this workflow.
    pub fn runs(&self) -> RunsRequestBuilder {
        RunsRequestBuilder {
            base: BaseRequestBuilder::new(
                RUNS_TEMPLATE,
                self.base.child_parameters(&[]),
                self.base.adapter(),
            ),
        }
    }

    /// Request description for reading this workflow.
    pub fn to_get_request_information(
        &self,
        request_configuration: Option<&RequestConfiguration<ItemQueryParameters>>,
    ) -> RequestInformation {
        self.base
            .to_request_information(Method::GET, request_configuration)
    }

    /// Reads the workflow.
    pub async fn get(
        &self,
        request_configuration: Option<&RequestConfiguration<ItemQueryParameters>>,
    ) -> Result<Option<Workflow>> {
        let request = self.to_get_request_information(request_configuration);
        self.base
            .send_object(request, &ErrorMappings::odata())
            .await
    }

    /// Request description for a partial update.
    pub fn to_patch_request_information(
        &self,
        body: &Workflow,
        request_configuration: Option<&RequestConfiguration<()>>,
    ) -> Result<RequestInformation> {
        self.base
            .to_request_information_with_body(Method::PATCH, request_configuration, body)
    }

    /// Partially updates the workflow's mutable properties.
    pub async fn patch(
        &self,
        body: &Workflow,
        request_configuration: Option<&RequestConfiguration<()>>,
    ) -> Result<Option<Workflow>> {
        let request = self.to_patch_request_information(body, request_configuration)?;
        self.base
            .send_object(request, &ErrorMappings::odata())
            .await
    }

    /// Request description for deleting the workflow.
    pub fn to_delete_request_information(
        &self,
        request_configuration: Option<&RequestConfiguration<()>>,
    ) -> RequestInformation {
        self.base
            .to_request_information(Method::DELETE, request_configuration)
    }

    /// Deletes the workflow (it moves to `deletedItems` for 30 days).
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

/// Builder for the `activate` bound action: runs the workflow on demand
/// for the supplied users. Success carries no response body.
pub struct ActivateRequestBuilder {
    base: BaseRequestBuilder,
}

impl ActivateRequestBuilder {
    /// Request description for the action invocation.
    pub fn to_post_request_information(
        &self,
        body: &ActivateRequest,
        request_configuration: Option<&RequestConfiguration<()>>,
    ) -> Result<RequestInformation> {
        self.base
            .to_request_information_with_body(Method::POST, request_configuration, body)
    }

    /// Invokes the action.
    pub async fn post(
        &self,
        body: &ActivateRequest,
        request_configuration: Option<&RequestConfiguration<()>>,
    ) -> Result<()> {
        let request = self.to_post_request_information(body, request_configuration)?;
        self.base
            .send_no_content(request, &ErrorMappings::odata())
            .await
    }
}

/// Builder for the `createNewVersion` bound action: snapshots the current
/// workflow and applies the supplied definition as a new version.
pub struct CreateNewVersionRequestBuilder {
    base: BaseRequestBuilder,
}

impl CreateNewVersionRequestBuilder {
    /// Request description for the action invocation.
    pub fn to_post_request_information(
        &self,
        body: &CreateNewVersionRequest,
        request_configuration: Option<&RequestConfiguration<()>>,
    ) -> Result<RequestInformation> {
        self.base
            .to_request_information_with_body(Method::POST, request_configuration, body)
    }

    /// Invokes the action and returns the new workflow version.
    pub async fn post(
        &self,
        body: &CreateNewVersionRequest,
        request_configuration: Option<&RequestConfiguration<()>>,
    ) -> Result<Option<Workflow>> {
        let request = self.to_post_request_information(body, request_configuration)?;
        self.base
            .send_object(request, &ErrorMappings::odata())
            .await
    }
}

/// Builder for a workflow's versions collection.
pub struct VersionsRequestBuilder {
    base: BaseRequestBuilder,
}

impl VersionsRequestBuilder {
    /// Descends into a single version by its number.
    pub fn by_version_number(&self, version_number: i32) -> VersionItemRequestBuilder {
        VersionItemRequestBuilder {
            base: BaseRequestBuilder::new(
                VERSION_ITEM_TEMPLATE,
                self.base.child_parameters(&[(
                    "workflowVersion%2DversionNumber",
                    &version_number.to_string(),
                )]),
                self.base.adapter(),
            ),
        }
    }

    /// The `$count` sibling of this collection.
    pub fn count(&self) -> CountRequestBuilder {
        CountRequestBuilder::new(
            VERSIONS_COUNT_TEMPLATE,
            self.base.path_parameters().clone(),
            self.base.adapter(),
        )
    }

    /// Request description for listing versions.
    pub fn to_get_request_information(
        &self,
        request_configuration: Option<&RequestConfiguration<CollectionQueryParameters>>,
    ) -> RequestInformation {
        self.base
            .to_request_information(Method::GET, request_configuration)
    }

    /// Lists the workflow's versions.
    pub async fn get(
        &self,
        request_configuration: Option<&RequestConfiguration<CollectionQueryParameters>>,
    ) -> Result<Option<ODataCollection<WorkflowVersion>>> {
        let request = self.to_get_request_information(request_configuration);
        self.base
            .send_object(request, &ErrorMappings::odata())
            .await
    }
}

/// Builder for a single workflow version.
pub struct VersionItemRequestBuilder {
    base: BaseRequestBuilder,
}

impl VersionItemRequestBuilder {
    /// Request description for reading this version.
    pub fn to_get_request_information(
        &self,
        request_configuration: Option<&RequestConfiguration<ItemQueryParameters>>,
    ) -> RequestInformation {
        self.base
            .to_request_information(Method::GET, request_configuration)
    }

    /// Reads the version.
    pub async fn get(
        &self,
        request_configuration: Option<&RequestConfiguration<ItemQueryParameters>>,
    ) -> Result<Option<WorkflowVersion>> {
        let request = self.to_get_request_information(request_configuration);
        self.base
            .send_object(request, &ErrorMappings::odata())
            .await
    }
}

/// Builder for a workflow's runs collection.
pub struct RunsRequestBuilder {
    base: BaseRequestBuilder,
}

impl RunsRequestBuilder {
    /// Descends into a single run by id.
    pub fn by_run_id(&self, run_id: &str) -> RunItemRequestBuilder {
        RunItemRequestBuilder {
            base: BaseRequestBuilder::new(
                RUN_ITEM_TEMPLATE,
                self.base.child_parameters(&[("run%2Did", run_id)]),
                self.base.adapter(),
            ),
        }
    }

    /// Request description for listing runs.
    pub fn to_get_request_information(
        &self,
        request_configuration: Option<&RequestConfiguration<CollectionQueryParameters>>,
    ) -> RequestInformation {
        self.base
            .to_request_information(Method::GET, request_configuration)
    }

    /// Lists the workflow's runs.
    pub async fn get(
        &self,
        request_configuration: Option<&RequestConfiguration<CollectionQueryParameters>>,
    ) -> Result<Option<ODataCollection<Run>>> {
        let request = self.to_get_request_information(request_configuration);
        self.base
            .send_object(request, &ErrorMappings::odata())
            .await
    }
}

/// Builder for a single run.
pub struct RunItemRequestBuilder {
    base: BaseRequestBuilder,
}

impl RunItemRequestBuilder {
    /// Per-user outcomes of this run.
    pub fn user_processing_results(&self) -> UserProcessingResultsRequestBuilder {
        UserProcessingResultsRequestBuilder {
            base: BaseRequestBuilder::new(
                USER_PROCESSING_RESULTS_TEMPLATE,
                self.base.child_parameters(&[]),
                self.base.adapter(),
            ),
        }
    }

    /// Request description for reading this run.
    pub fn to_get_request_information(
        &self,
        request_configuration: Option<&RequestConfiguration<ItemQueryParameters>>,
    ) -> RequestInformation {
        self.base
            .to_request_information(Method::GET, request_configuration)
    }

    /// Reads the run.
    pub async fn get(
        &self,
        request_configuration: Option<&RequestConfiguration<ItemQueryParameters>>,
    ) -> Result<Option<Run>> {
        let request = self.to_get_request_information(request_configuration);
        self.base
            .send_object(request, &ErrorMappings::odata())
            .await
    }
}

/// Builder for a run's per-user processing results.
pub struct UserProcessingResultsRequestBuilder {
    base: BaseRequestBuilder,
}

impl UserProcessingResultsRequestBuilder {
    /// Request description for listing results.
    pub fn to_get_request_information(
        &self,
        request_configuration: Option<&RequestConfiguration<CollectionQueryParameters>>,
    ) -> RequestInformation {
        self.base
            .to_request_information(Method::GET, request_configuration)
    }

    /// Lists the run's per-user results.
    pub async fn get(
        &self,
        request_configuration: Option<&RequestConfiguration<CollectionQueryParameters>>,
    ) -> Result<Option<ODataCollection<UserProcessingResult>>> {
        let request = self.to_get_request_information(request_configuration);
        self.base
            .send_object(request, &ErrorMappings::odata())
            .await
    }
}
