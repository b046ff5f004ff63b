#![allow(dead_code)]

//! Test infrastructure for cred-server API tests

use cred_auth::TokenIssuer;
use cred_config::AuthConfig;
use cred_server::AppState;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(SqliteConnectOptions::new().filename(":memory:"))
        .await
        .expect("Failed to create test database");

    cred_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: Some(TEST_SECRET.to_string()),
        bcrypt_cost: 4,
        ..AuthConfig::default()
    }
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    AppState::new(pool, &test_auth_config()).expect("Failed to build app state")
}

/// Independent verifier sharing only the secret with the server
pub fn test_verifier() -> TokenIssuer {
    TokenIssuer::with_hs256(TEST_SECRET.as_bytes(), None)
}

pub fn signup_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/signup")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
