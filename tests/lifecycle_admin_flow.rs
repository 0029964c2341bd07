//! Integration tests for the administrative lifecycle surfaces using
//! wiremock: soft-deleted workflows, the task-definition and
//! workflow-template catalogs, and the insights functions.

use std::sync::Arc;

use graph_idgov::auth::TokenProvider;
use graph_idgov::client::GraphClient;
use graph_idgov::error::GraphError;
use graph_idgov::identity_governance::IdentityGovernanceRequestBuilder;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn governance(server: &MockServer) -> IdentityGovernanceRequestBuilder {
    let auth = TokenProvider::with_token("mock-token");
    let adapter = Arc::new(GraphClient::with_base_url(auth, &server.uri()));
    IdentityGovernanceRequestBuilder::new(adapter)
}

// ── deleted items ──────────────────────────────────────────────────────

#[tokio::test]
async fn deleted_workflows_list_and_restore() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/identityGovernance/lifecycleWorkflows/deletedItems/workflows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": [{"id": "w-gone", "displayName": "Old offboarding"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/identityGovernance/lifecycleWorkflows/deletedItems/workflows/w-gone/microsoft.graph.identityGovernance.restore"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "w-gone",
            "displayName": "Old offboarding",
            "isEnabled": false
        })))
        .mount(&server)
        .await;

    let deleted = governance(&server).lifecycle_workflows().deleted_items();
    let list = deleted.workflows().get(None).await.unwrap().unwrap();
    assert_eq!(list.value[0].id, "w-gone");

    let restored = deleted
        .workflows()
        .by_workflow_id("w-gone")
        .restore()
        .post(None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(restored.id, "w-gone");
    assert_eq!(restored.is_enabled, Some(false));
}

#[tokio::test]
async fn permanent_delete_accepts_204() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/identityGovernance/lifecycleWorkflows/deletedItems/workflows/w-gone"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    governance(&server)
        .lifecycle_workflows()
        .deleted_items()
        .workflows()
        .by_workflow_id("w-gone")
        .delete(None)
        .await
        .unwrap();
}

#[tokio::test]
async fn restore_outside_the_window_surfaces_the_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(r"deletedItems/workflows/.*restore$"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {
                "code": "BadRequest",
                "message": "The workflow can no longer be restored."
            }
        })))
        .mount(&server)
        .await;

    let err = governance(&server)
        .lifecycle_workflows()
        .deleted_items()
        .workflows()
        .by_workflow_id("w-ancient")
        .restore()
        .post(None)
        .await
        .unwrap_err();

    match err {
        GraphError::OData { status, error } => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(error.code, "BadRequest");
        }
        other => panic!("expected OData error, got {other:?}"),
    }
}

// ── catalogs ───────────────────────────────────────────────────────────

#[tokio::test]
async fn task_definitions_list_and_item() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/identityGovernance/lifecycleWorkflows/taskDefinitions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": [{
                "id": "8fa97d28-3e52-4985-b3a9-a1126f9b8b4e",
                "category": "joiner,leaver",
                "displayName": "Remove all licenses for user",
                "version": 1
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/identityGovernance/lifecycleWorkflows/taskDefinitions/8fa97d28-3e52-4985-b3a9-a1126f9b8b4e"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "8fa97d28-3e52-4985-b3a9-a1126f9b8b4e",
            "displayName": "Remove all licenses for user",
            "parameters": [{"name": "licenses", "values": []}]
        })))
        .mount(&server)
        .await;

    let catalog = governance(&server).lifecycle_workflows().task_definitions();
    let list = catalog.get(None).await.unwrap().unwrap();
    assert_eq!(list.value[0].category.as_deref(), Some("joiner,leaver"));

    let item = catalog
        .by_task_definition_id("8fa97d28-3e52-4985-b3a9-a1126f9b8b4e")
        .get(None)
        .await
        .unwrap()
        .unwrap();
    assert!(item.parameters.is_some(), "parameter schema survives as raw JSON");
}

#[tokio::test]
async fn workflow_templates_list_carries_tasks() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/identityGovernance/lifecycleWorkflows/workflowTemplates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": [{
                "id": "tmpl-1",
                "category": "leaver",
                "displayName": "Real-time employee termination",
                "tasks": [{"id": "t-1", "displayName": "Remove user from all groups"}]
            }]
        })))
        .mount(&server)
        .await;

    let templates = governance(&server)
        .lifecycle_workflows()
        .workflow_templates()
        .get(None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(templates.value[0].tasks.len(), 1);
}

// ── insights ───────────────────────────────────────────────────────────

#[tokio::test]
async fn workflows_processed_summary_invokes_the_function() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"workflowsProcessedSummary\(startDateTime=.*,endDateTime=.*\)$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalRuns": 7,
            "successfulRuns": 5,
            "failedRuns": 2,
            "totalUsers": 960,
            "successfulUsers": 950,
            "failedUsers": 10
        })))
        .mount(&server)
        .await;

    let summary = governance(&server)
        .lifecycle_workflows()
        .insights()
        .workflows_processed_summary("2026-01-01T00:00:00Z", "2026-02-01T00:00:00Z")
        .get(None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(summary.total_runs, Some(7));
    assert_eq!(summary.successful_users, Some(950));
}

#[tokio::test]
async fn top_workflows_processed_summary_returns_per_workflow_rows() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"topWorkflowsProcessedSummary\("))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": [{
                "workflowId": "w-1",
                "workflowDisplayName": "Offboarding",
                "workflowCategory": "leaver",
                "totalRuns": 4,
                "totalUsers": 300
            }]
        })))
        .mount(&server)
        .await;

    let rows = governance(&server)
        .lifecycle_workflows()
        .insights()
        .top_workflows_processed_summary("2026-01-01T00:00:00Z", "2026-02-01T00:00:00Z")
        .get(None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(rows.value[0].workflow_id.as_deref(), Some("w-1"));
    assert_eq!(rows.value[0].total_users, Some(300));
}
