//! Builders for the date-ranged insights functions.
//!
//! Insights are OData functions rather than entity collections: the date
//! range travels inside a parenthesized function segment, not as query
//! options, so each accessor here takes the range up front and bakes it
//! into the child builder's path parameters.

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Method;

use crate::adapter::RequestAdapter;
use crate::builder::BaseRequestBuilder;
use crate::error::Result;
use crate::models::{ODataCollection, TopWorkflowsProcessedSummary, WorkflowsProcessedSummary};
use crate::odata::CollectionQueryParameters;
use crate::request::{ErrorMappings, RequestConfiguration, RequestInformation};

const WORKFLOWS_PROCESSED_SUMMARY_TEMPLATE: &str = "{+baseurl}/identityGovernance/lifecycleWorkflows/insights/microsoft.graph.identityGovernance.workflowsProcessedSummary(startDateTime={startDateTime},endDateTime={endDateTime})";
const TOP_WORKFLOWS_PROCESSED_SUMMARY_TEMPLATE: &str = "{+baseurl}/identityGovernance/lifecycleWorkflows/insights/microsoft.graph.identityGovernance.topWorkflowsProcessedSummary(startDateTime={startDateTime},endDateTime={endDateTime}){?%24count,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";

/// Builder for `/lifecycleWorkflows/insights`. Navigation only; the two
/// function accessors carry the date range.
pub struct InsightsRequestBuilder {
    base: BaseRequestBuilder,
}

impl InsightsRequestBuilder {
    pub(crate) fn new(
        path_parameters: HashMap<String, String>,
        adapter: Arc<dyn RequestAdapter>,
    ) -> Self {
        InsightsRequestBuilder {
            base: BaseRequestBuilder::new(
                "{+baseurl}/identityGovernance/lifecycleWorkflows/insights",
                path_parameters,
                adapter,
            ),
        }
    }

    /// The aggregate `workflowsProcessedSummary` function over the given
    /// ISO 8601 range.
    pub fn workflows_processed_summary(
        &self,
        start_date_time: &str,
        end_date_time: &str,
    ) -> WorkflowsProcessedSummaryRequestBuilder {
        WorkflowsProcessedSummaryRequestBuilder {
            base: BaseRequestBuilder::new(
                WORKFLOWS_PROCESSED_SUMMARY_TEMPLATE,
                self.base.child_parameters(&[
                    ("startDateTime", start_date_time),
                    ("endDateTime", end_date_time),
                ]),
                self.base.adapter(),
            ),
        }
    }

    /// The per-workflow `topWorkflowsProcessedSummary` function over the
    /// given ISO 8601 range.
    pub fn top_workflows_processed_summary(
        &self,
        start_date_time: &str,
        end_date_time: &str,
    ) -> TopWorkflowsProcessedSummaryRequestBuilder {
        TopWorkflowsProcessedSummaryRequestBuilder {
            base: BaseRequestBuilder::new(
                TOP_WORKFLOWS_PROCESSED_SUMMARY_TEMPLATE,
                self.base.child_parameters(&[
                    ("startDateTime", start_date_time),
                    ("endDateTime", end_date_time),
                ]),
                self.base.adapter(),
            ),
        }
    }
}

/// Builder for the aggregate summary function. Returns a single object.
pub struct WorkflowsProcessedSummaryRequestBuilder {
    base: BaseRequestBuilder,
}

impl WorkflowsProcessedSummaryRequestBuilder {
    /// Request description for invoking the function.
    pub fn to_get_request_information(
        &self,
        request_configuration: Option<&RequestConfiguration<()>>,
    ) -> RequestInformation {
        self.base
            .to_request_information(Method::GET, request_configuration)
    }

    /// Retrieves the aggregate processing totals for the range.
    pub async fn get(
        &self,
        request_configuration: Option<&RequestConfiguration<()>>,
    ) -> Result<Option<WorkflowsProcessedSummary>> {
        let request = self.to_get_request_information(request_configuration);
        self.base
            .send_object(request, &ErrorMappings::odata())
            .await
    }
}

/// Builder for the per-workflow summary function. Returns a collection.
pub struct TopWorkflowsProcessedSummaryRequestBuilder {
    base: BaseRequestBuilder,
}

impl TopWorkflowsProcessedSummaryRequestBuilder {
    /// Request description for invoking the function.
    pub fn to_get_request_information(
        &self,
        request_configuration: Option<&RequestConfiguration<CollectionQueryParameters>>,
    ) -> RequestInformation {
        self.base
            .to_request_information(Method::GET, request_configuration)
    }

    /// Retrieves per-workflow processing totals for the range.
    pub async fn get(
        &self,
        request_configuration: Option<&RequestConfiguration<CollectionQueryParameters>>,
    ) -> Result<Option<ODataCollection<TopWorkflowsProcessedSummary>>> {
        let request = self.to_get_request_information(request_configuration);
        self.base
            .send_object(request, &ErrorMappings::odata())
            .await
    }
}
