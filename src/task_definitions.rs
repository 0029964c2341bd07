//! Builders for the read-only catalog of built-in task definitions.

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Method;

use crate::adapter::RequestAdapter;
use crate::builder::{BaseRequestBuilder, CountRequestBuilder};
use crate::error::Result;
use crate::models::{ODataCollection, TaskDefinition};
use crate::odata::{CollectionQueryParameters, ItemQueryParameters};
use crate::request::{ErrorMappings, RequestConfiguration, RequestInformation};

const TASK_DEFINITIONS_TEMPLATE: &str = "{+baseurl}/identityGovernance/lifecycleWorkflows/taskDefinitions{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
const TASK_DEFINITIONS_COUNT_TEMPLATE: &str = "{+baseurl}/identityGovernance/lifecycleWorkflows/taskDefinitions/$count{?%24filter,%24search}";
const TASK_DEFINITION_ITEM_TEMPLATE: &str = "{+baseurl}/identityGovernance/lifecycleWorkflows/taskDefinitions/{taskDefinition%2Did}{?%24expand,%24select}";

/// Builder for the task-definitions collection. Read-only surface.
pub struct TaskDefinitionsRequestBuilder {
    base: BaseRequestBuilder,
}

impl TaskDefinitionsRequestBuilder {
    pub(crate) fn new(
        path_parameters: HashMap<String, String>,
        adapter: Arc<dyn RequestAdapter>,
    ) -> Self {
        TaskDefinitionsRequestBuilder {
            base: BaseRequestBuilder::new(TASK_DEFINITIONS_TEMPLATE, path_parameters, adapter),
        }
    }

    /// Descends into a single definition by id.
    pub fn by_task_definition_id(
        &self,
        task_definition_id: &str,
    ) -> TaskDefinitionItemRequestBuilder {
        TaskDefinitionItemRequestBuilder {
            base: BaseRequestBuilder::new(
                TASK_DEFINITION_ITEM_TEMPLATE,
                self.base
                    .child_parameters(&[("taskDefinition%2Did", task_definition_id)]),
                self.base.adapter(),
            ),
        }
    }

    /// The `$count` sibling of this collection.
    pub fn count(&self) -> CountRequestBuilder {
        CountRequestBuilder::new(
            TASK_DEFINITIONS_COUNT_TEMPLATE,
            self.base.path_parameters().clone(),
            self.base.adapter(),
        )
    }

    /// Request description for listing definitions.
    pub fn to_get_request_information(
        &self,
        request_configuration: Option<&RequestConfiguration<CollectionQueryParameters>>,
    ) -> RequestInformation {
        self.base
            .to_request_information(Method::GET, request_configuration)
    }

    /// Lists the built-in task definitions.
    pub async fn get(
        &self,
        request_configuration: Option<&RequestConfiguration<CollectionQueryParameters>>,
    ) -> Result<Option<ODataCollection<TaskDefinition>>> {
        let request = self.to_get_request_information(request_configuration);
        self.base
            .send_object(request, &ErrorMappings::odata())
            .await
    }
}

/// Builder for a single task definition.
pub struct TaskDefinitionItemRequestBuilder {
    base: BaseRequestBuilder,
}

impl TaskDefinitionItemRequestBuilder {
    /// Request description for reading this definition.
    pub fn to_get_request_information(
        &self,
        request_configuration: Option<&RequestConfiguration<ItemQueryParameters>>,
    ) -> RequestInformation {
        self.base
            .to_request_information(Method::GET, request_configuration)
    }

    /// Reads the definition.
    pub async fn get(
        &self,
        request_configuration: Option<&RequestConfiguration<ItemQueryParameters>>,
    ) -> Result<Option<TaskDefinition>> {
        let request = self.to_get_request_information(request_configuration);
        self.base
            .send_object(request, &ErrorMappings::odata())
            .await
    }
}
