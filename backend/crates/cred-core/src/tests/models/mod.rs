mod credentials;
mod email_address;
mod user_identity;
