use serde::Serialize;

/// Successful sign-up response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
