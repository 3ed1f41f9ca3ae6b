use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("No search query supplied")]
    MissingQuery,

    #[error("Registry request failed: {0}")]
    Transport(String),

    #[error("Registry returned HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Failed to decode registry response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Registry reported an error: {0}")]
    Registry(String),

    #[error("Failed to serialize script filter output: {0}")]
    Serialize(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
