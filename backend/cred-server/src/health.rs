use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET / - Plain liveness banner for existing clients
pub async fn root() -> &'static str {
    "Success"
}

/// GET /health - Health check with component status
pub async fn health(State(state): State<AppState>) -> Response {
    let database_ok = sqlx::query("SELECT 1")
        .execute(&state.pool)
        .await
        .inspect_err(|e| log::warn!("Health check: database unavailable: {}", e))
        .is_ok();

    let status = if database_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let health = json!({
        "status": if database_ok { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": if database_ok { "operational" } else { "unavailable" },
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}
