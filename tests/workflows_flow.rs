//! Integration tests for the workflows surface using wiremock.
//!
//! These tests mock the Graph API to verify that the workflow builders
//! construct the documented requests and handle responses and errors:
//!
//! - GET/POST  /identityGovernance/lifecycleWorkflows/workflows
//! - GET       .../workflows/$count
//! - GET/PATCH/DELETE .../workflows/{id}
//! - POST      .../workflows/{id}/microsoft.graph.identityGovernance.activate
//! - POST      .../workflows/{id}/microsoft.graph.identityGovernance.createNewVersion
//! - GET       .../workflows/{id}/versions, runs, userProcessingResults

use std::sync::Arc;

use graph_idgov::auth::TokenProvider;
use graph_idgov::client::GraphClient;
use graph_idgov::error::GraphError;
use graph_idgov::identity_governance::IdentityGovernanceRequestBuilder;
use graph_idgov::models::{ActivateRequest, ProcessingStatus, UserSubject, Workflow};
use graph_idgov::odata::CollectionQueryParameters;
use graph_idgov::request::RequestConfiguration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper: builder tree over a mock adapter pointed at the given server.
fn governance(server: &MockServer) -> IdentityGovernanceRequestBuilder {
    let auth = TokenProvider::with_token("mock-token");
    let adapter = Arc::new(GraphClient::with_base_url(auth, &server.uri()));
    IdentityGovernanceRequestBuilder::new(adapter)
}

// ── list / create ──────────────────────────────────────────────────────

#[tokio::test]
async fn list_workflows_returns_the_collection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/identityGovernance/lifecycleWorkflows/workflows"))
        .and(header("Authorization", "Bearer mock-token"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#workflows",
            "value": [
                {"id": "w-1", "category": "leaver", "displayName": "Offboarding", "isEnabled": true},
                {"id": "w-2", "category": "joiner", "displayName": "Onboarding", "isEnabled": false}
            ]
        })))
        .mount(&server)
        .await;

    let list = governance(&server)
        .lifecycle_workflows()
        .workflows()
        .get(None)
        .await
        .unwrap()
        .expect("list response has a body");

    assert_eq!(list.value.len(), 2);
    assert_eq!(list.value[0].id, "w-1");
    assert_eq!(list.value[1].category.as_deref(), Some("joiner"));
    assert!(list.odata_next_link.is_none());
}

#[tokio::test]
async fn list_workflows_sends_decoded_query_option_names() {
    let server = MockServer::start().await;

    // The wire must carry `$filter=...`, not `%24filter=...`.
    Mock::given(method("GET"))
        .and(path("/identityGovernance/lifecycleWorkflows/workflows"))
        .and(query_param("$filter", "category eq 'leaver'"))
        .and(query_param("$top", "5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"value": []})),
        )
        .mount(&server)
        .await;

    let config = RequestConfiguration {
        headers: Vec::new(),
        query_parameters: Some(CollectionQueryParameters {
            filter: Some("category eq 'leaver'".to_string()),
            top: Some(5),
            ..Default::default()
        }),
    };
    let list = governance(&server)
        .lifecycle_workflows()
        .workflows()
        .get(Some(&config))
        .await
        .unwrap()
        .unwrap();
    assert!(list.value.is_empty());
}

#[tokio::test]
async fn create_workflow_posts_the_body_and_returns_the_entity() {
    let server = MockServer::start().await;

    let body = Workflow {
        category: Some("leaver".to_string()),
        display_name: Some("Offboarding".to_string()),
        is_enabled: Some(true),
        ..Default::default()
    };

    Mock::given(method("POST"))
        .and(path("/identityGovernance/lifecycleWorkflows/workflows"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({
            "category": "leaver",
            "displayName": "Offboarding",
            "description": null,
            "isEnabled": true,
            "isSchedulingEnabled": null,
            "version": null,
            "createdDateTime": null,
            "lastModifiedDateTime": null,
            "tasks": []
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "w-new",
            "category": "leaver",
            "displayName": "Offboarding",
            "version": 1
        })))
        .mount(&server)
        .await;

    let created = governance(&server)
        .lifecycle_workflows()
        .workflows()
        .post(&body, None)
        .await
        .unwrap()
        .expect("create returns the entity");

    assert_eq!(created.id, "w-new");
    assert_eq!(created.version, Some(1));
}

#[tokio::test]
async fn count_parses_the_text_plain_integer() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/identityGovernance/lifecycleWorkflows/workflows/$count"))
        .and(header("Accept", "text/plain;q=0.9"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/plain")
                .set_body_string("12"),
        )
        .mount(&server)
        .await;

    let count = governance(&server)
        .lifecycle_workflows()
        .workflows()
        .count()
        .get(None)
        .await
        .unwrap();
    assert_eq!(count, Some(12));
}

// ── single workflow ────────────────────────────────────────────────────

#[tokio::test]
async fn get_workflow_deserializes_the_entity() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/identityGovernance/lifecycleWorkflows/workflows/w-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "w-1",
            "category": "leaver",
            "displayName": "Offboarding",
            "isEnabled": true,
            "version": 4,
            "tasks": [
                {"id": "t-1", "displayName": "Remove licenses", "executionSequence": 1}
            ]
        })))
        .mount(&server)
        .await;

    let workflow = governance(&server)
        .lifecycle_workflows()
        .workflows()
        .by_workflow_id("w-1")
        .get(None)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(workflow.id, "w-1");
    assert_eq!(workflow.tasks.len(), 1);
    assert_eq!(workflow.tasks[0].display_name.as_deref(), Some("Remove licenses"));
}

#[tokio::test]
async fn get_missing_workflow_maps_the_odata_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/identityGovernance/lifecycleWorkflows/workflows/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": {
                "code": "Request_ResourceNotFound",
                "message": "Resource 'nope' does not exist."
            }
        })))
        .mount(&server)
        .await;

    let err = governance(&server)
        .lifecycle_workflows()
        .workflows()
        .by_workflow_id("nope")
        .get(None)
        .await
        .unwrap_err();

    match err {
        GraphError::OData { status, error } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(error.code, "Request_ResourceNotFound");
            assert!(error.message.contains("nope"));
        }
        other => panic!("expected OData error, got {other:?}"),
    }
}

#[tokio::test]
async fn delete_workflow_accepts_204_without_a_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/identityGovernance/lifecycleWorkflows/workflows/w-1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    governance(&server)
        .lifecycle_workflows()
        .workflows()
        .by_workflow_id("w-1")
        .delete(None)
        .await
        .unwrap();
}

// ── bound actions ──────────────────────────────────────────────────────

#[tokio::test]
async fn activate_posts_subjects_and_expects_no_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/identityGovernance/lifecycleWorkflows/workflows/w-1/microsoft.graph.identityGovernance.activate"))
        .and(body_json(serde_json::json!({"subjects": [{"id": "u-42"}]})))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let body = ActivateRequest {
        subjects: vec![UserSubject {
            id: "u-42".to_string(),
            ..Default::default()
        }],
    };
    governance(&server)
        .lifecycle_workflows()
        .workflows()
        .by_workflow_id("w-1")
        .activate()
        .post(&body, None)
        .await
        .unwrap();
}

#[tokio::test]
async fn create_new_version_returns_the_bumped_workflow() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/identityGovernance/lifecycleWorkflows/workflows/w-1/microsoft.graph.identityGovernance.createNewVersion"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "w-1",
            "displayName": "Offboarding v2",
            "version": 5
        })))
        .mount(&server)
        .await;

    let body = graph_idgov::models::CreateNewVersionRequest {
        workflow: Workflow {
            display_name: Some("Offboarding v2".to_string()),
            ..Default::default()
        },
    };
    let updated = governance(&server)
        .lifecycle_workflows()
        .workflows()
        .by_workflow_id("w-1")
        .create_new_version()
        .post(&body, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.version, Some(5));
}

// ── versions / runs / results ──────────────────────────────────────────

#[tokio::test]
async fn get_version_uses_the_version_number_segment() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/identityGovernance/lifecycleWorkflows/workflows/w-1/versions/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "versionNumber": 3,
            "displayName": "Offboarding",
            "category": "leaver"
        })))
        .mount(&server)
        .await;

    let version = governance(&server)
        .lifecycle_workflows()
        .workflows()
        .by_workflow_id("w-1")
        .versions()
        .by_version_number(3)
        .get(None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(version.version_number, 3);
}

#[tokio::test]
async fn runs_and_user_processing_results_deserialize_statuses() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/identityGovernance/lifecycleWorkflows/workflows/w-1/runs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": [{
                "id": "r-1",
                "processingStatus": "completedWithErrors",
                "failedUsersCount": 1,
                "totalUsersCount": 5
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/identityGovernance/lifecycleWorkflows/workflows/w-1/runs/r-1/userProcessingResults"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": [{
                "id": "upr-1",
                "processingStatus": "failed",
                "subject": {"id": "u-9", "userPrincipalName": "kai@contoso.com"}
            }]
        })))
        .mount(&server)
        .await;

    let workflows = governance(&server).lifecycle_workflows().workflows();
    let runs = workflows
        .by_workflow_id("w-1")
        .runs()
        .get(None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(runs.value[0].processing_status, ProcessingStatus::CompletedWithErrors);

    let results = workflows
        .by_workflow_id("w-1")
        .runs()
        .by_run_id("r-1")
        .user_processing_results()
        .get(None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(results.value[0].processing_status, ProcessingStatus::Failed);
    assert_eq!(
        results.value[0].subject.as_ref().unwrap().id,
        "u-9"
    );
}

// ── pagination ─────────────────────────────────────────────────────────

#[tokio::test]
async fn next_link_page_is_fetched_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/identityGovernance/lifecycleWorkflows/workflows"))
        .and(query_param("$skiptoken", "page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": [{"id": "w-51"}]
        })))
        .mount(&server)
        .await;

    let auth = TokenProvider::with_token("mock-token");
    let adapter = Arc::new(GraphClient::with_base_url(auth, &server.uri()));
    let next_link = format!(
        "{}/identityGovernance/lifecycleWorkflows/workflows?$skiptoken=page2",
        server.uri()
    );
    let page = graph_idgov::workflows::WorkflowsRequestBuilder::with_url(&next_link, adapter)
        .get(None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(page.value[0].id, "w-51");
}
