//! Authentication gate integration tests
//!
//! Exercises the full router through `axum-test` with the database absent:
//! every outcome of the token authenticator, plus the request-shape checks
//! that happen before any collaborator is reached. Store-backed paths are
//! covered by the query layer and handler unit tests; these tests verify
//! the wire-level contract of the gate.

use axum::http::StatusCode;
use axum_test::multipart::MultipartForm;
use axum_test::TestServer;
use jsonwebtoken::{encode, EncodingKey, Header};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use pixshelf::auth::tokens::{create_token, Claims};
use pixshelf::images::ImageHostClient;
use pixshelf::routes::create_router;
use pixshelf::server::config::{AppConfig, ImageHostConfig};
use pixshelf::server::state::AppState;

const SECRET: &str = "integration-test-secret";

fn test_state() -> AppState {
    let config = AppConfig {
        server_port: 0,
        database_url: None,
        jwt_secret: SECRET.to_string(),
        image_host: ImageHostConfig {
            private_key: "private_test_key".to_string(),
            upload_endpoint: "http://127.0.0.1:0/upload".to_string(),
        },
        smtp: None,
    };

    AppState {
        db_pool: None,
        image_host: ImageHostClient::new(&config.image_host),
        config: Arc::new(config),
        mailer: None,
    }
}

fn test_server() -> TestServer {
    TestServer::new(create_router(test_state())).unwrap()
}

fn valid_token() -> String {
    create_token(SECRET, Uuid::new_v4(), "test@example.com".to_string()).unwrap()
}

fn expired_token() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        email: "test@example.com".to_string(),
        exp: now - 3600,
        iat: now - 7200,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_ref()),
    )
    .unwrap()
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let server = test_server();

    let response = server.get("/api/v1/images").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body, serde_json::json!({ "msg": "No token, authorization denied" }));
}

#[tokio::test]
async fn test_protected_route_with_empty_authorization() {
    let server = test_server();

    let response = server
        .get("/api/v1/images")
        .add_header("authorization", "")
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body, serde_json::json!({ "msg": "No token, authorization denied" }));
}

#[tokio::test]
async fn test_protected_route_with_garbage_token() {
    let server = test_server();

    let response = server
        .get("/api/v1/user/info")
        .add_header("authorization", "Bearer not.a.jwt")
        .await;

    // Malformed tokens are 401, never 403.
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body, serde_json::json!({ "msg": "Token is not valid" }));
}

#[tokio::test]
async fn test_protected_route_with_expired_token() {
    let server = test_server();

    let response = server
        .get("/api/v1/images")
        .add_header("authorization", format!("Bearer {}", expired_token()))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    assert!(response.as_bytes().is_empty());
}

#[tokio::test]
async fn test_valid_token_passes_the_gate() {
    let server = test_server();

    let response = server
        .get("/api/v1/images")
        .add_header("authorization", format!("Bearer {}", valid_token()))
        .await;

    // The gate admitted the request; with no database configured the
    // handler itself fails with the store-failure class, not an auth error.
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body, serde_json::json!({ "error": "Database not configured" }));
}

#[tokio::test]
async fn test_login_without_store_is_internal_error() {
    let server = test_server();

    let response = server
        .post("/api/v1/user/login")
        .json(&serde_json::json!({
            "email": "test@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body, serde_json::json!({ "error": "Database not configured" }));
}

#[tokio::test]
async fn test_upload_without_file_part() {
    let server = test_server();

    let form = MultipartForm::new()
        .add_text("title", "sunset")
        .add_text("description", "no file attached");

    let response = server
        .post("/api/v1/images/upload")
        .add_header("authorization", format!("Bearer {}", valid_token()))
        .multipart(form)
        .await;

    // Request-shape check fires before the host or the store are reached.
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body, serde_json::json!({ "error": "Image is required" }));
}

#[tokio::test]
async fn test_public_routes_are_not_gated() {
    let server = test_server();

    // No token at all: the failure is the absent store, never a token error.
    let response = server.get("/api/v1/user").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_list_routes_accept_trailing_slash() {
    let server = test_server();

    // Matched (and reached the handler): absent-store failure, not 404.
    let response = server.get("/api/v1/user/").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    // Matched and gated: token error, not 404.
    let response = server.get("/api/v1/images/").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body, serde_json::json!({ "msg": "No token, authorization denied" }));
}

#[tokio::test]
async fn test_unknown_route_is_plain_404() {
    let server = test_server();

    let response = server.get("/api/v1/unknown").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
