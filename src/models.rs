//! Domain models for the Graph identity-governance surface.
//!
//! Field names use camelCase renames to match the Graph wire contract
//! exactly. Optional fields are those the service may omit depending on
//! entity state or tenant configuration; all models tolerate unknown
//! fields so a service-side schema addition never breaks deserialization.
//!
//! Polymorphic OData sub-objects (task execution conditions, task
//! definition parameters, catalog references) are kept as raw
//! `serde_json::Value` — resolving an embedded `@odata.type` discriminator
//! to a concrete shape is the serializer's concern, not this layer's.
//!
//! Timestamps are ISO 8601 strings as returned by the service.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Error contract ─────────────────────────────────────────────────────

/// The uniform error payload Graph returns for every failing endpoint:
/// `{"error": {"code": ..., "message": ..., "details": [...]}}`.
///
/// Every request builder registers a wildcard discriminator mapping to
/// this shape, so callers receive one error type regardless of which
/// resource failed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ODataError {
    /// Service-defined error code (e.g. `Request_ResourceNotFound`).
    #[serde(default)]
    pub code: String,
    /// Human-readable description of the failure.
    #[serde(default)]
    pub message: String,
    /// Additional error detail objects, when the service provides them.
    #[serde(default)]
    pub details: Vec<serde_json::Value>,
}

/// Wire wrapper around [`ODataError`]: the payload nests the error object
/// under an `error` key.
#[derive(Debug, Deserialize)]
struct ODataErrorEnvelope {
    error: ODataError,
}

impl ODataError {
    /// Constructs an error with the given code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        ODataError {
            code: code.into(),
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Parses a response body into the OData error shape.
    ///
    /// Bodies that are not the expected envelope (HTML error pages, empty
    /// bodies, proxies speaking for the service) degrade to an
    /// `UnknownError` carrying the raw body, so diagnostic text is never
    /// discarded.
    pub fn from_response_body(body: &str) -> Self {
        match serde_json::from_str::<ODataErrorEnvelope>(body) {
            Ok(envelope) => envelope.error,
            Err(_) => ODataError::new("UnknownError", body.trim()),
        }
    }
}

impl fmt::Display for ODataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

// ── Collection wrapper ─────────────────────────────────────────────────

/// OData collection wrapper returned by list endpoints:
/// `{ "value": [...], "@odata.nextLink": ... }`.
///
/// When `odata_next_link` is present the collection is paginated; follow
/// it with a builder's `with_url` constructor to fetch the next page.
#[derive(Debug, Deserialize)]
pub struct ODataCollection<T> {
    /// The array of result items.
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
    /// Absolute URL of the next page, when more results exist.
    #[serde(rename = "@odata.nextLink", default)]
    pub odata_next_link: Option<String>,
    /// Total count of the matching set, present when `$count=true` was
    /// requested.
    #[serde(rename = "@odata.count", default)]
    pub odata_count: Option<i64>,
}

impl<T> Default for ODataCollection<T> {
    fn default() -> Self {
        ODataCollection {
            value: Vec::new(),
            odata_next_link: None,
            odata_count: None,
        }
    }
}

// ── Lifecycle workflows ────────────────────────────────────────────────

/// A lifecycle workflow (joiner/mover/leaver automation).
///
/// Reference: <https://learn.microsoft.com/en-us/graph/api/resources/identitygovernance-workflow>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    /// Unique identifier assigned by the service. Empty on create bodies.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Workflow category: `joiner`, `mover`, or `leaver`.
    #[serde(default)]
    pub category: Option<String>,

    /// Display name shown in the admin portal.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,

    /// Whether the workflow is enabled for execution.
    #[serde(default)]
    pub is_enabled: Option<bool>,

    /// Whether scheduled (periodic) execution is enabled.
    #[serde(default)]
    pub is_scheduling_enabled: Option<bool>,

    /// Current version number; incremented by `createNewVersion`.
    #[serde(default)]
    pub version: Option<i32>,

    /// ISO 8601 timestamp of workflow creation.
    #[serde(default)]
    pub created_date_time: Option<String>,

    /// ISO 8601 timestamp of the last modification.
    #[serde(default)]
    pub last_modified_date_time: Option<String>,

    /// Trigger and scope conditions. Polymorphic OData object, kept raw.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_conditions: Option<serde_json::Value>,

    /// The ordered tasks the workflow executes.
    #[serde(default)]
    pub tasks: Vec<WorkflowTask>,
}

/// A single task inside a workflow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTask {
    /// Unique task identifier within the workflow.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Task category (`joiner`, `leaver`, ...).
    #[serde(default)]
    pub category: Option<String>,

    /// Whether workflow execution continues if this task fails.
    #[serde(default)]
    pub continue_on_error: Option<bool>,

    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,

    /// Display name shown in the admin portal.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Position of the task in the workflow's execution order.
    #[serde(default)]
    pub execution_sequence: Option<i32>,

    /// Whether the task is enabled.
    #[serde(default)]
    pub is_enabled: Option<bool>,

    /// Identifier of the [`TaskDefinition`] this task instantiates.
    #[serde(default)]
    pub task_definition_id: Option<String>,

    /// Task arguments as name/value pairs.
    #[serde(default)]
    pub arguments: Vec<KeyValuePair>,
}

/// A name/value argument pair used by workflow tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValuePair {
    /// Argument name.
    pub name: String,
    /// Argument value.
    pub value: String,
}

/// A historical version of a workflow, keyed by version number rather
/// than id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowVersion {
    /// The version number (1-based, monotonically increasing).
    pub version_number: i32,

    /// Display name at the time this version was created.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Description at the time this version was created.
    #[serde(default)]
    pub description: Option<String>,

    /// Category at the time this version was created.
    #[serde(default)]
    pub category: Option<String>,

    /// ISO 8601 timestamp of when this version was created.
    #[serde(default)]
    pub created_date_time: Option<String>,

    /// ISO 8601 timestamp of the last modification to this version.
    #[serde(default)]
    pub last_modified_date_time: Option<String>,

    /// The tasks this version executed.
    #[serde(default)]
    pub tasks: Vec<WorkflowTask>,
}

/// Processing status shared by runs and per-user processing results.
///
/// `Unknown` is a catch-all for status strings the service adds in the
/// future, preventing deserialization failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProcessingStatus {
    /// Queued for execution, not yet started.
    Queued,
    /// Currently executing.
    InProgress,
    /// All tasks completed successfully.
    Completed,
    /// Finished, but one or more tasks failed.
    CompletedWithErrors,
    /// Canceled before completion.
    Canceled,
    /// The run failed outright.
    Failed,
    /// Catch-all for unrecognized status strings.
    #[serde(other)]
    Unknown,
}

/// A single execution (run) of a workflow.
///
/// Reference: <https://learn.microsoft.com/en-us/graph/api/resources/identitygovernance-run>
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    /// Unique run identifier.
    pub id: String,

    /// Aggregate processing status of the run.
    #[serde(default = "unknown_status")]
    pub processing_status: ProcessingStatus,

    /// ISO 8601 timestamp of when the run was scheduled.
    #[serde(default)]
    pub scheduled_date_time: Option<String>,

    /// ISO 8601 timestamp of when processing started.
    #[serde(default)]
    pub started_date_time: Option<String>,

    /// ISO 8601 timestamp of when processing completed.
    #[serde(default)]
    pub completed_date_time: Option<String>,

    /// Number of tasks that failed during this run.
    #[serde(default)]
    pub failed_tasks_count: Option<i32>,

    /// Number of users whose processing failed.
    #[serde(default)]
    pub failed_users_count: Option<i32>,

    /// Number of users processed successfully.
    #[serde(default)]
    pub successful_users_count: Option<i32>,

    /// Total number of users in scope for this run.
    #[serde(default)]
    pub total_users_count: Option<i32>,

    /// Version of the workflow this run executed.
    #[serde(default)]
    pub workflow_version: Option<i32>,
}

fn unknown_status() -> ProcessingStatus {
    ProcessingStatus::Unknown
}

/// Per-user outcome of a workflow run.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProcessingResult {
    /// Unique result identifier.
    pub id: String,

    /// Processing status for this user.
    #[serde(default = "unknown_status")]
    pub processing_status: ProcessingStatus,

    /// ISO 8601 timestamp of when processing started for this user.
    #[serde(default)]
    pub started_date_time: Option<String>,

    /// ISO 8601 timestamp of when processing completed for this user.
    #[serde(default)]
    pub completed_date_time: Option<String>,

    /// Number of tasks that failed for this user.
    #[serde(default)]
    pub failed_tasks_count: Option<i32>,

    /// Total number of tasks executed for this user.
    #[serde(default)]
    pub total_tasks_count: Option<i32>,

    /// Number of tasks not yet processed for this user.
    #[serde(default)]
    pub total_unprocessed_tasks_count: Option<i32>,

    /// The user this result belongs to.
    #[serde(default)]
    pub subject: Option<UserSubject>,
}

/// A user reference, used both in processing results and as the target of
/// an on-demand activation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSubject {
    /// Entra object id of the user.
    pub id: String,

    /// Display name, when the service inlines it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// User principal name, when the service inlines it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_principal_name: Option<String>,
}

/// Request body for the on-demand `activate` action: the users to run the
/// workflow against immediately.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivateRequest {
    /// The users to process. The service caps this list server-side.
    pub subjects: Vec<UserSubject>,
}

/// Request body for the `createNewVersion` action: the full workflow
/// definition the new version should carry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNewVersionRequest {
    /// The workflow definition to apply as the new version.
    pub workflow: Workflow,
}

/// A built-in task definition that workflow tasks instantiate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDefinition {
    /// Unique definition identifier.
    pub id: String,

    /// Categories this definition applies to (comma-joined string on the
    /// wire, e.g. `"joiner,leaver"`).
    #[serde(default)]
    pub category: Option<String>,

    /// Whether tasks built on this definition may continue on error.
    #[serde(default)]
    pub continue_on_error: Option<bool>,

    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,

    /// Display name shown in the admin portal.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Definition schema version.
    #[serde(default)]
    pub version: Option<i32>,

    /// Parameter schema for the definition. Polymorphic, kept raw.
    #[serde(default)]
    pub parameters: Option<serde_json::Value>,
}

/// A built-in workflow template that new workflows can be created from.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTemplate {
    /// Unique template identifier.
    pub id: String,

    /// Template category (`joiner`, `leaver`, ...).
    #[serde(default)]
    pub category: Option<String>,

    /// Display name shown in the admin portal.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,

    /// Suggested trigger and scope conditions. Polymorphic, kept raw.
    #[serde(default)]
    pub execution_conditions: Option<serde_json::Value>,

    /// The tasks the template prescribes.
    #[serde(default)]
    pub tasks: Vec<WorkflowTask>,
}

// ── Insights ───────────────────────────────────────────────────────────

/// Aggregate workflow processing totals for a date range, returned by the
/// `workflowsProcessedSummary` function.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowsProcessedSummary {
    /// Runs that completed successfully.
    #[serde(default)]
    pub successful_runs: Option<i64>,
    /// Runs that failed.
    #[serde(default)]
    pub failed_runs: Option<i64>,
    /// Total runs in the range.
    #[serde(default)]
    pub total_runs: Option<i64>,
    /// Users processed successfully.
    #[serde(default)]
    pub successful_users: Option<i64>,
    /// Users whose processing failed.
    #[serde(default)]
    pub failed_users: Option<i64>,
    /// Total users processed in the range.
    #[serde(default)]
    pub total_users: Option<i64>,
}

/// Per-workflow processing totals for a date range, returned by the
/// `topWorkflowsProcessedSummary` function.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopWorkflowsProcessedSummary {
    /// Identifier of the workflow the totals belong to.
    #[serde(default)]
    pub workflow_id: Option<String>,
    /// Display name of the workflow.
    #[serde(default)]
    pub workflow_display_name: Option<String>,
    /// Category of the workflow.
    #[serde(default)]
    pub workflow_category: Option<String>,
    /// Version that was executing during the range.
    #[serde(default)]
    pub workflow_version: Option<i32>,
    /// Runs that completed successfully.
    #[serde(default)]
    pub successful_runs: Option<i64>,
    /// Runs that failed.
    #[serde(default)]
    pub failed_runs: Option<i64>,
    /// Total runs in the range.
    #[serde(default)]
    pub total_runs: Option<i64>,
    /// Total users processed in the range.
    #[serde(default)]
    pub total_users: Option<i64>,
}

// ── Entitlement management ─────────────────────────────────────────────

/// An access package (bundle of resource roles users can request).
///
/// Reference: <https://learn.microsoft.com/en-us/graph/api/resources/accesspackage>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPackage {
    /// Unique identifier assigned by the service. Empty on create bodies.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Display name shown to requestors.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,

    /// Whether the package is hidden from the requestor portal.
    #[serde(default)]
    pub is_hidden: Option<bool>,

    /// ISO 8601 timestamp of creation.
    #[serde(default)]
    pub created_date_time: Option<String>,

    /// ISO 8601 timestamp of the last modification.
    #[serde(default)]
    pub modified_date_time: Option<String>,

    /// The catalog the package belongs to. Kept raw; only its `id` is
    /// needed on create bodies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<serde_json::Value>,
}
