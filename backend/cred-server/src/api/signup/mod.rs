pub mod signup;
pub mod signup_request;
pub mod token_response;
