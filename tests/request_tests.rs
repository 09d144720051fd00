use http::Method;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::setup_test_client;
use discounts_client::DiscountsError;

#[tokio::test]
async fn test_successful_body_is_returned_unchanged() {
    let mock_server = MockServer::start().await;

    let payload = json!({
        "id": "disc_1",
        "nested": { "values": [1, 2, 3], "flag": true },
        "text": "canjeable"
    });

    Mock::given(method("GET"))
        .and(path("/discounts/disc_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());

    // The dispatcher is shape-agnostic: whatever JSON the service sends comes
    // back structurally unchanged when decoded as a Value.
    let result: Value = client
        .raw_request(Method::GET, "/discounts/disc_1", None::<()>)
        .await
        .unwrap();

    assert_eq!(result, payload);
}

#[tokio::test]
async fn test_no_content_yields_the_unit_value() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/discounts/disc_1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());

    client.discounts().delete("disc_1").await.unwrap();
}

#[tokio::test]
async fn test_string_detail_becomes_the_error_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/folders/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "detail": "Carpeta no encontrada" })),
        )
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());

    match client.folders().get("missing").await {
        Err(DiscountsError::ApiError(msg)) => assert_eq!(msg, "Carpeta no encontrada"),
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_structured_detail_is_json_serialized() {
    let mock_server = MockServer::start().await;

    // FastAPI-style validation errors carry a structured detail.
    Mock::given(method("POST"))
        .and(path("/folders"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [{ "loc": ["body", "name"], "msg": "field required" }]
        })))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());

    let folder = discounts_client::FolderCreate::default();
    match client.folders().create(&folder).await {
        Err(DiscountsError::ApiError(msg)) => {
            assert_eq!(msg, r#"[{"loc":["body","name"],"msg":"field required"}]"#);
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_error_body_falls_back_to_the_reason_phrase() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sites"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>upstream down</html>"))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());

    match client.sites().list().await {
        Err(DiscountsError::ApiError(msg)) => assert_eq!(msg, "Bad Gateway"),
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_absent_error_body_falls_back_to_the_reason_phrase() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sites/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());

    match client.sites().get(99).await {
        Err(DiscountsError::ApiError(msg)) => assert_eq!(msg, "Not Found"),
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_success_body_is_a_decoding_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());

    match client.sites().list().await {
        Err(DiscountsError::DecodingError(_)) => {}
        other => panic!("expected DecodingError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_every_request_carries_the_json_content_type() {
    let mock_server = MockServer::start().await;

    // Matched only if the header is present, GET with no body included.
    Mock::given(method("GET"))
        .and(path("/folders"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());

    let folders = client.folders().list().await.unwrap();
    assert!(folders.is_empty());
}

#[tokio::test]
async fn test_caller_supplied_headers_win_on_collision() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/folders"))
        .and(header("content-type", "application/json; charset=utf-8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());

    let mut headers = http::HeaderMap::new();
    headers.insert(
        http::header::CONTENT_TYPE,
        http::HeaderValue::from_static("application/json; charset=utf-8"),
    );

    let _: Value = client
        .request_with_headers(Method::GET, "/folders", headers, None::<()>)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_absolute_endpoints_bypass_the_base_origin() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    // The configured base origin points nowhere; the call only succeeds if
    // the fully-qualified endpoint is used verbatim.
    let client = setup_test_client("http://base-origin.invalid");

    let endpoint = format!("{}/sites", mock_server.uri());
    let result: Value = client.raw_request(Method::GET, &endpoint, None::<()>).await.unwrap();

    assert_eq!(result, json!([]));
}

#[tokio::test]
async fn test_transport_failures_surface_as_http_errors() {
    // Nothing listens on the mock server's port once it is dropped.
    let uri = {
        let mock_server = MockServer::start().await;
        mock_server.uri()
    };

    let client = setup_test_client(&uri);

    match client.sites().list().await {
        Err(DiscountsError::HttpError(_)) => {}
        other => panic!("expected HttpError, got {other:?}"),
    }
}
