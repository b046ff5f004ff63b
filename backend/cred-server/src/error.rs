use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] cred_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] cred_db::DbError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] cred_auth::AuthError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
