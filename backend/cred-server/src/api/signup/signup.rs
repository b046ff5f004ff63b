//! Sign-up REST handler

use crate::{ApiResult, AppState, SignupRequest, TokenResponse};

use axum::{Json, extract::State};
use bytes::Bytes;

/// POST /signup
///
/// Register a new identity and return a bearer token for it. The body is
/// decoded as JSON whatever its `Content-Type`; an empty body counts as an
/// empty object.
pub async fn signup(State(state): State<AppState>, body: Bytes) -> ApiResult<Json<TokenResponse>> {
    let request: SignupRequest = if body.iter().all(u8::is_ascii_whitespace) {
        SignupRequest::default()
    } else {
        serde_json::from_slice(&body)?
    };

    let token = state.registration.register(request.into()).await?;

    Ok(Json(TokenResponse { token }))
}
