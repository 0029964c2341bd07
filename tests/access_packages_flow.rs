//! Integration tests for the entitlement-management access-packages
//! surface using wiremock.

use std::sync::Arc;

use graph_idgov::auth::TokenProvider;
use graph_idgov::client::GraphClient;
use graph_idgov::error::GraphError;
use graph_idgov::identity_governance::IdentityGovernanceRequestBuilder;
use graph_idgov::models::AccessPackage;
use graph_idgov::odata::ItemQueryParameters;
use graph_idgov::request::RequestConfiguration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn governance(server: &MockServer) -> IdentityGovernanceRequestBuilder {
    let auth = TokenProvider::with_token("mock-token");
    let adapter = Arc::new(GraphClient::with_base_url(auth, &server.uri()));
    IdentityGovernanceRequestBuilder::new(adapter)
}

#[tokio::test]
async fn list_access_packages_returns_the_collection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/identityGovernance/entitlementManagement/accessPackages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": [
                {"id": "ap-1", "displayName": "Sales resources", "isHidden": false},
                {"id": "ap-2", "displayName": "Engineering tools", "isHidden": true}
            ]
        })))
        .mount(&server)
        .await;

    let list = governance(&server)
        .entitlement_management()
        .access_packages()
        .get(None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(list.value.len(), 2);
    assert_eq!(list.value[1].is_hidden, Some(true));
}

#[tokio::test]
async fn get_access_package_with_select_sends_the_option() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/identityGovernance/entitlementManagement/accessPackages/ap-1"))
        .and(query_param("$select", "id,displayName"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "ap-1",
            "displayName": "Sales resources"
        })))
        .mount(&server)
        .await;

    let config = RequestConfiguration {
        headers: Vec::new(),
        query_parameters: Some(ItemQueryParameters {
            select: Some(vec!["id".to_string(), "displayName".to_string()]),
            ..Default::default()
        }),
    };
    let package = governance(&server)
        .entitlement_management()
        .access_packages()
        .by_access_package_id("ap-1")
        .get(Some(&config))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(package.display_name.as_deref(), Some("Sales resources"));
}

#[tokio::test]
async fn create_then_delete_access_package() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/identityGovernance/entitlementManagement/accessPackages"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "ap-new",
            "displayName": "Contractor starter pack"
        })))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/identityGovernance/entitlementManagement/accessPackages/ap-new"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let packages = governance(&server).entitlement_management().access_packages();
    let body = AccessPackage {
        display_name: Some("Contractor starter pack".to_string()),
        ..Default::default()
    };
    let created = packages.post(&body, None).await.unwrap().unwrap();
    assert_eq!(created.id, "ap-new");

    packages
        .by_access_package_id("ap-new")
        .delete(None)
        .await
        .unwrap();
}

#[tokio::test]
async fn patch_access_package_returns_the_updated_entity() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/identityGovernance/entitlementManagement/accessPackages/ap-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "ap-1",
            "displayName": "Sales resources (renamed)"
        })))
        .mount(&server)
        .await;

    let body = AccessPackage {
        display_name: Some("Sales resources (renamed)".to_string()),
        ..Default::default()
    };
    let updated = governance(&server)
        .entitlement_management()
        .access_packages()
        .by_access_package_id("ap-1")
        .patch(&body, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        updated.display_name.as_deref(),
        Some("Sales resources (renamed)")
    );
}

#[tokio::test]
async fn insufficient_privileges_surface_as_an_odata_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/identityGovernance/entitlementManagement/accessPackages"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": {
                "code": "Authorization_RequestDenied",
                "message": "Insufficient privileges to complete the operation."
            }
        })))
        .mount(&server)
        .await;

    let err = governance(&server)
        .entitlement_management()
        .access_packages()
        .get(None)
        .await
        .unwrap_err();

    match err {
        GraphError::OData { status, error } => {
            assert_eq!(status.as_u16(), 403);
            assert_eq!(error.code, "Authorization_RequestDenied");
        }
        other => panic!("expected OData error, got {other:?}"),
    }
}
