use crate::ApiError;

use cred_auth::AuthError;
use cred_core::StoreError;

use std::panic::Location;

use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

async fn json_body(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_missing_field_returns_422_with_field() {
    let error = ApiError::from(AuthError::MissingField {
        field: "email",
        location: here(),
    });
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "MISSING_FIELD");
    assert_eq!(
        json["error"]["message"],
        "You must provide both email and password"
    );
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_email_in_use_returns_422() {
    let response = ApiError::from(AuthError::EmailInUse { location: here() }).into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "EMAIL_IN_USE");
    assert_eq!(json["error"]["message"], "Email is already in use");
}

#[tokio::test]
async fn test_storage_failure_returns_500_without_detail() {
    let error = ApiError::from(AuthError::Storage {
        source: StoreError::Backend {
            message: "database is locked: /srv/cred.db".into(),
            location: here(),
        },
        location: here(),
    });

    // Detail is kept for the single log line written by into_response
    assert!(error.to_string().contains("database is locked"));

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "An internal error occurred");
    assert!(json["error"].get("field").is_none());
    assert!(!json.to_string().contains("cred.db"));
}

#[tokio::test]
async fn test_token_errors_return_401() {
    for auth_error in [
        AuthError::SignatureInvalid { location: here() },
        AuthError::TokenExpired { location: here() },
        AuthError::MalformedToken {
            message: "bad base64".into(),
            location: here(),
        },
    ] {
        let code = auth_error.code();
        let response = ApiError::from(auth_error).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let json = json_body(response).await;
        assert_eq!(json["error"]["code"], code);
    }
}

#[tokio::test]
async fn test_invalid_json_returns_400() {
    let parse_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let response = ApiError::from(parse_error).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_internal_error_body_never_echoes_message() {
    let error = ApiError::Internal {
        message: "hash worker panicked at src/worker.rs:12".into(),
        location: here(),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = json_body(response).await;
    assert_eq!(json["error"]["message"], "An internal error occurred");
    assert!(!json.to_string().contains("worker"));
}
