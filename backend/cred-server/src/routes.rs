use crate::{AppState, api, health};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        // Sign-up
        .route("/signup", post(api::signup::signup::signup))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .with_state(state)
        .layer(middleware::from_fn(api::access_log::access_log))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
