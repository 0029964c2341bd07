//! Builders for the read-only catalog of built-in workflow templates.

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Method;

use crate::adapter::RequestAdapter;
use crate::builder::{BaseRequestBuilder, CountRequestBuilder};
use crate::error::Result;
use crate::models::{ODataCollection, WorkflowTemplate};
use crate::odata::{CollectionQueryParameters, ItemQueryParameters};
use crate::request::{ErrorMappings, RequestConfiguration, RequestInformation};

const WORKFLOW_TEMPLATES_TEMPLATE: &str = "{+baseurl}/identityGovernance/lifecycleWorkflows/workflowTemplates{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
const WORKFLOW_TEMPLATES_COUNT_TEMPLATE: &str = "{+baseurl}/identityGovernance/lifecycleWorkflows/workflowTemplates/$count{?%24filter,%24search}";
const WORKFLOW_TEMPLATE_ITEM_TEMPLATE: &str = "{+baseurl}/identityGovernance/lifecycleWorkflows/workflowTemplates/{workflowTemplate%2Did}{?%24expand,%24select}";

/// Builder for the workflow-templates collection. Read-only surface.
pub struct WorkflowTemplatesRequestBuilder {
    base: BaseRequestBuilder,
}

impl WorkflowTemplatesRequestBuilder {
    pub(crate) fn new(
        path_parameters: HashMap<String, String>,
        adapter: Arc<dyn RequestAdapter>,
    ) -> Self {
        WorkflowTemplatesRequestBuilder {
            base: BaseRequestBuilder::new(WORKFLOW_TEMPLATES_TEMPLATE, path_parameters, adapter),
        }
    }

    /// Descends into a single template by id.
    pub fn by_workflow_template_id(
        &self,
        workflow_template_id: &str,
    ) -> WorkflowTemplateItemRequestBuilder {
        WorkflowTemplateItemRequestBuilder {
            base: BaseRequestBuilder::new(
                WORKFLOW_TEMPLATE_ITEM_TEMPLATE,
                self.base
                    .child_parameters(&[("workflowTemplate%2Did", workflow_template_id)]),
                self.base.adapter(),
            ),
        }
    }

    /// The `$count` sibling of this collection.
    pub fn count(&self) -> CountRequestBuilder {
        CountRequestBuilder::new(
            WORKFLOW_TEMPLATES_COUNT_TEMPLATE,
            self.base.path_parameters().clone(),
            self.base.adapter(),
        )
    }

    /// Request description for listing templates.
    pub fn to_get_request_information(
        &self,
        request_configuration: Option<&RequestConfiguration<CollectionQueryParameters>>,
    ) -> RequestInformation {
        self.base
            .to_request_information(Method::GET, request_configuration)
    }

    /// Lists the built-in workflow templates.
    pub async fn get(
        &self,
        request_configuration: Option<&RequestConfiguration<CollectionQueryParameters>>,
    ) -> Result<Option<ODataCollection<WorkflowTemplate>>> {
        let request = self.to_get_request_information(request_configuration);
        self.base
            .send_object(request, &ErrorMappings::odata())
            .await
    }
}

/// Builder for a single workflow template.
pub struct WorkflowTemplateItemRequestBuilder {
    base: BaseRequestBuilder,
}

impl WorkflowTemplateItemRequestBuilder {
    /// Request description for reading this template.
    pub fn to_get_request_information(
        &self,
        request_configuration: Option<&RequestConfiguration<ItemQueryParameters>>,
    ) -> RequestInformation {
        self.base
            .to_request_information(Method::GET, request_configuration)
    }

    /// Reads the template.
    pub async fn get(
        &self,
        request_configuration: Option<&RequestConfiguration<ItemQueryParameters>>,
    ) -> Result<Option<WorkflowTemplate>> {
        let request = self.to_get_request_information(request_configuration);
        self.base
            .send_object(request, &ErrorMappings::odata())
            .await
    }
}
