pub mod credentials;
pub mod email_address;
pub mod user_identity;
