use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Odds API returned HTTP {status}: {body}")]
    Fetch {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Record {id}: commence_time {value:?} is not an RFC 3339 timestamp: {source}")]
    CommenceTime {
        id: String,
        value: String,
        source: chrono::ParseError,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
