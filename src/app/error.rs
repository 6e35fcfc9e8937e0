use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum DigestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parsing error: {0}")]
    FeedParse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Model request failed: {status} {body}")]
    ModelApi { status: u16, body: String },

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Telegram send failed: {status} {body}")]
    Delivery { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, DigestError>;
