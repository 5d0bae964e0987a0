//! Integration tests for the HTTP dispatcher.
//!
//! These tests verify that a descriptor is sent exactly once, with its
//! method, URL and headers, and that the body comes back unparsed.

use storenvy_api::clients::{HttpClient, HttpMethod, RequestDescriptor, ResponseBody};
use storenvy_api::StorenvyConfig;
use tokio_test::assert_ok;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Dispatch
// ============================================================================

#[tokio::test]
async fn test_dispatch_sends_descriptor_headers_and_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/store"))
        .and(header("x-request-id", "abc"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-ratelimit-remaining", "99")
                .set_body_string("{\"ok\":true}"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let descriptor = RequestDescriptor::new(
        HttpMethod::Put,
        format!("{}/v1/store?access_token=t&name=x", server.uri()),
    )
    .header("x-request-id", "abc");

    let response = assert_ok!(HttpClient::new(None).dispatch(&descriptor).await);
    assert_eq!(response.code, 200);
    assert_eq!(response.body, ResponseBody::Text("{\"ok\":true}".to_string()));
    assert_eq!(response.header("X-RateLimit-Remaining"), Some("99"));

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_dispatch_sends_user_agent_with_prefix() {
    let server = MockServer::start().await;
    let config = StorenvyConfig::builder()
        .user_agent_prefix("MyApp/1.0")
        .build()
        .unwrap();
    let user_agent = HttpClient::new(Some(&config))
        .default_headers()
        .get("User-Agent")
        .cloned()
        .unwrap();
    assert!(user_agent.starts_with("MyApp/1.0 | Storenvy API Library v"));

    Mock::given(method("GET"))
        .and(header("user-agent", user_agent.as_str()))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let descriptor = RequestDescriptor::new(HttpMethod::Get, format!("{}/v1/me.json", server.uri()));
    let response = assert_ok!(HttpClient::new(Some(&config)).dispatch(&descriptor).await);
    assert_eq!(response.code, 204);
    assert!(response.is_empty());
}
