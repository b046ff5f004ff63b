mod error;
mod signup_request;
