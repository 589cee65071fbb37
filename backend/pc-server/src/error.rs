use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] pc_config::ConfigError),

    #[error("Storage error: {0}")]
    Store(#[from] pc_store::StoreError),

    #[error("Random user client error: {0}")]
    RandomUser(#[from] pc_random_user::RandomUserError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
