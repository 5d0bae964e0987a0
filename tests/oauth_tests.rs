//! Integration tests for the OAuth authorization code flow.

use storenvy_api::auth::oauth::{build_authorize_url, exchange_code, generate_client, OAuthError};
use storenvy_api::{AppId, AppSecret, AuthScopes, BaseUrl, RedirectUri, StorenvyConfig};
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> StorenvyConfig {
    StorenvyConfig::builder()
        .app_id(AppId::new("my-app").unwrap())
        .app_secret(AppSecret::new("my-secret").unwrap())
        .redirect_uri(RedirectUri::new("http://localhost:3000/auth/callback").unwrap())
        .oauth_token_url(BaseUrl::new(format!("{}/oauth/token", server.uri())).unwrap())
        .api_base_url(BaseUrl::new(format!("{}/v1", server.uri())).unwrap())
        .build()
        .unwrap()
}

// ============================================================================
// Authorization URL
// ============================================================================

#[test]
fn test_authorize_url_for_read_and_write() {
    let config = StorenvyConfig::builder()
        .app_id(AppId::new("my-app").unwrap())
        .app_secret(AppSecret::new("my-secret").unwrap())
        .redirect_uri(RedirectUri::new("http://localhost:3000/auth/callback").unwrap())
        .build()
        .unwrap();

    let url = build_authorize_url(&config, AuthScopes::new().store_read().store_write()).unwrap();
    assert_eq!(
        url,
        "https://www.storenvy.com/oauth/authorize?client_id=my-app&response_type=code\
         &redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fauth%2Fcallback\
         &scope=user%20store_read%20store_write"
    );
}

// ============================================================================
// Code exchange
// ============================================================================

#[tokio::test]
async fn test_exchange_code_returns_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(query_param("client_id", "my-app"))
        .and(query_param("client_secret", "my-secret"))
        .and(query_param("code", "the-code"))
        .and(query_param("grant_type", "authorization_code"))
        .and(query_param("redirect_uri", "http://localhost:3000/auth/callback"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"access_token":"new-token","refresh_token":"refresh","expires_in":7200}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let credentials = assert_ok!(exchange_code(&config_for(&server), "the-code").await);
    assert_eq!(credentials.access_token.unwrap().as_ref(), "new-token");
    assert_eq!(credentials.refresh_token.as_deref(), Some("refresh"));
    assert_eq!(credentials.expires_in, Some(7200));
    assert_eq!(credentials.app_secret.unwrap().as_ref(), "my-secret");
    assert!(credentials.issued_at.is_some());
}

#[tokio::test]
async fn test_exchange_code_maps_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"error":"invalid_grant"}"#))
        .mount(&server)
        .await;

    let error = assert_err!(exchange_code(&config_for(&server), "stale").await);
    assert!(matches!(
        error,
        OAuthError::TokenExchangeFailed { status: 401, ref message } if message.contains("invalid_grant")
    ));
}

#[tokio::test]
async fn test_exchange_code_rejects_empty_answer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let error = assert_err!(exchange_code(&config_for(&server), "code").await);
    assert!(matches!(error, OAuthError::InvalidTokenResponse { .. }));
}

#[tokio::test]
async fn test_generate_client_uses_new_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"access_token":"fresh"}"#),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/me.json"))
        .and(query_param("access_token", "fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = assert_ok!(generate_client(&config_for(&server), "code").await);
    assert_ok!(
        client
            .get_user_info(&storenvy_api::RequestOptions::default())
            .await
    );
}
