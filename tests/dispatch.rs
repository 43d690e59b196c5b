//! Wire-level tests for the request dispatcher.
//!
//! Uses wiremock to mock the ManyChat API and assert on what actually goes
//! over the wire: auth headers, query strings, bodies and error mapping.

use manychat::{ManyChat, ManyChatError, Method, Params};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn success_body() -> serde_json::Value {
    json!({ "status": "success" })
}

fn client_for(server: &MockServer) -> ManyChat {
    ManyChat::with_base_url("test-token", &server.uri()).unwrap()
}

#[tokio::test]
async fn get_sends_bearer_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fb/page/getInfo"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.fb.page.get_info().await.unwrap();
}

#[tokio::test]
async fn get_with_no_args_has_no_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.fb.page.get_tags().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn get_query_string_keeps_insertion_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut args = Params::new();
    args.insert("a".to_string(), json!(1));
    args.insert("b".to_string(), json!("x"));
    client
        .api()
        .call_method("/fb/subscriber/findByName", &args, Method::Get)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("a=1&b=x"));
}

#[tokio::test]
async fn post_serializes_args_as_json_body_not_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/fb/page/createTag"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "name": "vip" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.fb.page.create_tag("vip").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn success_envelope_payload_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "success", "id": 5 })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.fb.page.get_info().await.unwrap();
    assert_eq!(response.get("id"), Some(&json!(5)));
}

#[tokio::test]
async fn error_envelope_maps_to_call_failed_with_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "error", "message": "bad token" })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.fb.page.get_info().await.unwrap_err();
    assert_eq!(err.vendor_message(), Some("bad token"));
    match err {
        ManyChatError::CallFailed { path, message } => {
            assert_eq!(path, "/fb/page/getInfo");
            assert_eq!(message.as_deref(), Some("bad token"));
        }
        other => panic!("expected CallFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_json_body_maps_to_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.fb.page.get_info().await.unwrap_err();
    assert!(matches!(err, ManyChatError::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn http_404_maps_to_not_found_without_parsing_body() {
    let server = MockServer::start().await;
    // The body is deliberately not JSON; a Decode error here would mean the
    // dispatcher tried to parse it.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("gone"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.fb.page.get_info().await.unwrap_err();
    match err {
        ManyChatError::NotFound { path } => assert_eq!(path, "/fb/page/getInfo"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn other_non_2xx_maps_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.fb.page.get_info().await.unwrap_err();
    assert!(
        matches!(err, ManyChatError::Status { status: 500, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn set_token_takes_effect_on_next_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.fb.page.get_info().await.unwrap();

    client.set_token("rotated-token");
    client.fb.page.get_info().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let bearer = |i: usize| {
        requests[i]
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .to_string()
    };
    assert_eq!(bearer(0), "Bearer test-token");
    assert_eq!(bearer(1), "Bearer rotated-token");
}

#[tokio::test]
async fn per_call_headers_override_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::AUTHORIZATION,
        "Bearer per-call-token".parse().unwrap(),
    );
    client
        .api()
        .call_method_with_headers("/fb/page/getInfo", &Params::new(), Method::Get, headers)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let auth = requests[0]
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert_eq!(auth, "Bearer per-call-token");
}

#[tokio::test]
async fn empty_args_post_sends_empty_object_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .api()
        .call_method("/fb/page/ping", &Params::new(), Method::Post)
        .await
        .unwrap();
}
