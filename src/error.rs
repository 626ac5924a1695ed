use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Zoho API error: {0}")]
    Zoho(String),

    #[error("OAuth token error: {0}")]
    Auth(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(
        "Entry submission is disabled: the destination worksheet schema is unconfirmed. \
         Set entry.enabled in the config file to activate it."
    )]
    EntryDisabled,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
