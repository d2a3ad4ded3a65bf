//! Integration tests for `FetchClient` over the reqwest transport.
//!
//! Uses `wiremock` to stand up a local HTTP server per test so no real
//! network traffic is made.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use trendz_data::{FetchClient, FetchError, ReqwestTransport};

fn client_for(server: &MockServer) -> FetchClient {
    FetchClient::with_transport(ReqwestTransport::new()).with_base_url(server.uri())
}

#[tokio::test]
async fn get_sends_bearer_token_and_parses_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/16"))
        .and(header("Authorization", "Bearer test-jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 16, "title": "Gown"})))
        .expect(1)
        .mount(&server)
        .await;

    let body: serde_json::Value = client_for(&server)
        .get("/products/16")
        .bearer_auth("test-jwt")
        .send()
        .await
        .expect("request should succeed")
        .error_for_status()
        .expect("status should be 2xx")
        .json()
        .expect("body should be JSON");

    assert_eq!(body["title"], "Gown");
}

#[tokio::test]
async fn non_2xx_is_returned_as_response_not_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/999"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .get("/products/999")
        .send()
        .await
        .expect("transport should not fail on 404");

    assert_eq!(resp.status, 404);
    let err = resp.error_for_status().unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn empty_token_still_sends_authorization_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/1"))
        .and(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .get("/products/1")
        .bearer_auth("")
        .send()
        .await
        .expect("transport should not fail on 401");

    assert_eq!(resp.status, 401);
}

#[tokio::test]
async fn slow_response_times_out_when_deadline_set() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/2"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .with_default_timeout(Some(Duration::from_millis(100)))
        .get("/products/2")
        .send()
        .await
        .unwrap_err();

    assert_eq!(err, FetchError::Timeout);
}

#[tokio::test]
async fn connection_refused_is_request_error() {
    let client = FetchClient::with_transport(ReqwestTransport::new());
    let err = client
        .get("http://127.0.0.1:9/products/1")
        .send()
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::RequestError(_)), "got {err:?}");
}

#[tokio::test]
async fn malformed_url_is_invalid_url() {
    let client = FetchClient::with_transport(ReqwestTransport::new());
    let err = client.get("not a url").send().await.unwrap_err();
    assert!(matches!(err, FetchError::InvalidUrl(_)), "got {err:?}");
}
