use cred_core::Credentials;

use serde::Deserialize;

/// Sign-up body. Absent fields decode as `None` so the service can report
/// them as missing rather than the decoder rejecting the request.
///
/// No `Debug`: the password must not reach a log line by accident.
#[derive(Default, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

impl From<SignupRequest> for Credentials {
    fn from(request: SignupRequest) -> Self {
        Credentials::new(
            request.email.unwrap_or_default(),
            request.password.unwrap_or_default(),
        )
    }
}
