pub mod access_log;
pub mod error;
pub mod signup;
