use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("remote command failed: {0}")]
    Api(#[from] reprise_api::ApiError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SdkError>;
