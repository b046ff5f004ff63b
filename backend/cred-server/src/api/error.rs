//! REST API error types
//!
//! These errors produce consistent JSON responses with appropriate HTTP
//! status codes. Only user-safe text ever reaches the response body.

use cred_auth::AuthError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "EMAIL_IN_USE", "MISSING_FIELD")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if the error is about a specific input field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Well-formed request the server refuses to act on (422)
    #[error("Unprocessable: {code}: {message} {location}")]
    Unprocessable {
        code: &'static str,
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Credential presented but not acceptable (401)
    #[error("Unauthorized: {code}: {message} {location}")]
    Unauthorized {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500). `message` is operator detail for the log;
    /// the response body carries only a generic message.
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::info!("{}", self);
        }

        let body = match self {
            ApiError::Unprocessable {
                code,
                message,
                field,
                ..
            } => ApiErrorBody {
                code: code.into(),
                message,
                field,
            },
            ApiError::Unauthorized { code, message, .. } => ApiErrorBody {
                code: code.into(),
                message,
                field: None,
            },
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                code: "BAD_REQUEST".into(),
                message,
                field: None,
            },
            ApiError::Internal { .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message: INTERNAL_MESSAGE.into(),
                field: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert auth errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            AuthError::SignatureInvalid { .. }
            | AuthError::TokenExpired { .. }
            | AuthError::MalformedToken { .. } => ApiError::Unauthorized {
                code: e.code(),
                message: e.user_message(),
                location,
            },
            _ if e.is_client_error() => ApiError::Unprocessable {
                code: e.code(),
                message: e.user_message(),
                field: e.field().map(String::from),
                location,
            },
            _ => ApiError::Internal {
                message: e.to_string(),
                location,
            },
        }
    }
}

/// Convert JSON body errors to API errors
impl From<serde_json::Error> for ApiError {
    #[track_caller]
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest {
            message: format!("Invalid JSON body: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
