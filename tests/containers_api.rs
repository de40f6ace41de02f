//! Integration tests for the container endpoints using wiremock
//!
//! These tests drive the full client against mocked Atlas endpoints,
//! verifying path construction, body serialization, and the error
//! reconciliation rule.

use atlas_peering::{AtlasClient, Container, Credentials, Error};
use serde_json::json;
use wiremock::matchers::{basic_auth, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GID: &str = "5f3e2a1b9cfe4a2b8d1e7c3f";

fn client_for(server: &MockServer) -> AtlasClient {
    AtlasClient::builder()
        .base_url(server.uri())
        .build()
        .expect("client should build")
}

/// List results length matches the totalCount reported by the API
#[tokio::test]
async fn test_list_length_matches_total_count() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/groups/{GID}/containers")))
        .and(query_param("providerName", "AWS"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"id": "6aa1", "providerName": "AWS", "atlasCidrBlock": "10.8.0.0/21", "regionName": "US_EAST_1", "provisioned": true},
                {"id": "6aa2", "providerName": "AWS", "atlasCidrBlock": "10.8.8.0/21", "regionName": "US_WEST_2", "provisioned": false}
            ],
            "totalCount": 2
        })))
        .mount(&server)
        .await;

    let list = client_for(&server)
        .containers()
        .list(GID, "AWS")
        .await
        .expect("list should succeed")
        .into_body();

    assert_eq!(list.results.len() as u64, list.total_count);
    assert_eq!(list.results[0].id.as_deref(), Some("6aa1"));
    assert_eq!(list.results[1].provisioned, Some(false));
}

/// Listing a project with no containers yields an empty results vector
#[tokio::test]
async fn test_list_empty_project() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/groups/{GID}/containers")))
        .and(query_param("providerName", "GCP"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"results": [], "totalCount": 0})),
        )
        .mount(&server)
        .await;

    let list = client_for(&server)
        .containers()
        .list(GID, "GCP")
        .await
        .expect("list should succeed")
        .into_body();

    assert!(list.results.is_empty());
    assert_eq!(list.total_count, 0);
}

/// API key credentials are sent as basic auth on every request
#[tokio::test]
async fn test_api_key_credentials_are_applied() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/groups/{GID}/containers")))
        .and(basic_auth("public-key", "private-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"results": [], "totalCount": 0})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = AtlasClient::builder()
        .base_url(server.uri())
        .credentials(Credentials::ApiKey {
            public: "public-key".to_string(),
            private: "private-key".to_string(),
        })
        .build()
        .expect("client should build");

    client
        .containers()
        .list(GID, "AWS")
        .await
        .expect("authenticated list should succeed");
}

/// Create posts the params without an id and returns the server-assigned id;
/// a subsequent get echoes the created container
#[tokio::test]
async fn test_create_then_get_round_trip() {
    let server = MockServer::start().await;

    let params = Container {
        provider_name: Some("AWS".to_string()),
        atlas_cidr_block: Some("10.8.0.0/21".to_string()),
        region_name: Some("US_EAST_1".to_string()),
        ..Container::default()
    };

    let created_body = json!({
        "id": "6aa12bb34cc56dd78ee90ff1",
        "providerName": "AWS",
        "atlasCidrBlock": "10.8.0.0/21",
        "regionName": "US_EAST_1",
        "provisioned": false
    });

    Mock::given(method("POST"))
        .and(path(format!("/groups/{GID}/containers")))
        .and(body_json(json!({
            "providerName": "AWS",
            "atlasCidrBlock": "10.8.0.0/21",
            "regionName": "US_EAST_1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(&created_body))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/groups/{GID}/containers/6aa12bb34cc56dd78ee90ff1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(&created_body))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let created = client
        .containers()
        .create(GID, &params)
        .await
        .expect("create should succeed")
        .into_body();
    let id = created.id.clone().expect("server assigns an id");

    let fetched = client
        .containers()
        .get(GID, &id)
        .await
        .expect("get should succeed")
        .into_body();

    assert_eq!(created, fetched);
}

/// Update sends only the set fields, so the server can leave the rest alone
#[tokio::test]
async fn test_update_sends_only_changed_fields() {
    let server = MockServer::start().await;

    let params = Container {
        atlas_cidr_block: Some("10.8.2.0/24".to_string()),
        ..Container::default()
    };

    Mock::given(method("PATCH"))
        .and(path(format!("/groups/{GID}/containers/6aa1")))
        .and(body_json(json!({"atlasCidrBlock": "10.8.2.0/24"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "6aa1",
            "providerName": "AWS",
            "atlasCidrBlock": "10.8.2.0/24",
            "regionName": "US_EAST_1",
            "provisioned": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client_for(&server)
        .containers()
        .update(GID, "6aa1", &params)
        .await
        .expect("update should succeed")
        .into_body();

    assert_eq!(updated.atlas_cidr_block.as_deref(), Some("10.8.2.0/24"));
    // Fields the request omitted come back unchanged.
    assert_eq!(updated.region_name.as_deref(), Some("US_EAST_1"));
    assert_eq!(updated.provisioned, Some(true));
}

/// Delete reports only the status; a following get surfaces an API-level
/// not-found error, not a transport failure
#[tokio::test]
async fn test_delete_then_get_is_api_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("/groups/{GID}/containers/6aa1")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/groups/{GID}/containers/6aa1")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "detail": "No container with id 6aa1 exists in group.",
            "error": 404,
            "errorCode": "RESOURCE_NOT_FOUND",
            "reason": "Not Found"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let deleted = client
        .containers()
        .delete(GID, "6aa1")
        .await
        .expect("delete should succeed");
    assert_eq!(deleted.status.as_u16(), 204);

    let err = client
        .containers()
        .get(GID, "6aa1")
        .await
        .expect_err("get after delete should fail");

    assert!(err.is_api());
    match err {
        Error::Api { status, payload } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(payload.error_code.as_deref(), Some("RESOURCE_NOT_FOUND"));
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

/// A success response with a zero-valued body must not be reported as an
/// error (regression for the error reconciliation rule)
#[tokio::test]
async fn test_success_with_empty_body_is_ok() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/groups/{GID}/containers/6aa1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let container = client_for(&server)
        .containers()
        .get(GID, "6aa1")
        .await
        .expect("zero-valued success body must not surface as an error")
        .into_body();

    assert_eq!(container, Container::default());
}

/// A failure response with no body still yields a populated API error
#[tokio::test]
async fn test_failure_with_empty_body_yields_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/groups/{GID}/containers")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .containers()
        .create(GID, &Container::default())
        .await
        .expect_err("500 should fail");

    match err {
        Error::Api { status, payload } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(payload.error, Some(500));
            assert!(!payload.is_zero());
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

/// Group and container ids are percent-encoded into the path
#[tokio::test]
async fn test_path_segments_are_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/groups/g%2Fid/containers/c%3Fid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .containers()
        .get("g/id", "c?id")
        .await
        .expect("encoded get should succeed");
}
