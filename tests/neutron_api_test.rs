//! HTTP-level tests of the Neutron client.

use eayun_neutron::neutron_api::{ApiError, ListQuery, NeutronApiClient, NeutronClient};
use eayun_neutron::resources::{
    lbaas::L7POLICY_COLLECTION, pptp::PPTP_CREDENTIAL, qos::QOS_FILTER_COLLECTION,
};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> NeutronApiClient {
    let url = Url::parse(&server.uri()).unwrap();
    NeutronApiClient::new(&url, Some("tok".to_string()), 5).unwrap()
}

#[tokio::test]
async fn test_show_unwraps_envelope_and_sends_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2.0/eayun_qos/qos_filters/f-1"))
        .and(header("X-Auth-Token", "tok"))
        .and(query_param("fields", "prio"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "qos_filter": {"prio": 10}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let shown = client
        .show(&QOS_FILTER_COLLECTION, "f-1", &["prio".to_string()])
        .await
        .unwrap();

    assert_eq!(shown, json!({"qos_filter": {"prio": 10}}));
}

#[tokio::test]
async fn test_error_body_supplies_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "NeutronError": {"type": "Conflict", "message": "Username alice already exists", "detail": ""}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .create(
            &PPTP_CREDENTIAL.collection,
            &json!({"pptp_credential": {"username": "alice", "password": "x"}}),
        )
        .await
        .unwrap_err();

    match err {
        ApiError::Remote { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "Username alice already exists");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_is_classified() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .delete(&PPTP_CREDENTIAL.collection, "missing")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_accepts_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v2.0/lb/l7policies/p-1/l7rules/r-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client.disassociate_rule("p-1", "r-1").await.unwrap();
}

#[tokio::test]
async fn test_associate_rule_posts_to_policy() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2.0/lb/l7policies/p-1/l7rules"))
        .and(body_json(json!({"l7rule": {"id": "r-1"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"l7rule": {"id": "r-1"}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .associate_rule("p-1", &json!({"l7rule": {"id": "r-1"}}))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_reads_plural_key_and_next_marker() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2.0/lb/l7policies"))
        .and(query_param("limit", "2"))
        .and(query_param("sort_key", "priority"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "l7policies": [{"id": "p-1"}, {"id": "p-2"}],
            "l7policies_links": [{"rel": "next", "href": "http://neutron/v2.0/lb/l7policies?limit=2&marker=p-2"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let query = ListQuery {
        sort_keys: vec!["priority".to_string()],
        page_size: Some(2),
        ..Default::default()
    };
    let page = client.list(&L7POLICY_COLLECTION, &query, None).await.unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.next_marker.as_deref(), Some("p-2"));
}

#[tokio::test]
async fn test_list_without_plural_key_is_unexpected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"something": []})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .list(&L7POLICY_COLLECTION, &ListQuery::default(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::UnexpectedResponse(_)));
}
