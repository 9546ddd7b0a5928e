use thiserror::Error;

#[derive(Error, Debug)]
pub enum SrsError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Quality must be between 0 and 5, got {0}")]
    InvalidQuality(u8),

    #[error("Unknown rating: {0}")]
    UnknownRating(String),

    #[error("Unknown item type: {0}")]
    UnknownItemType(String),

    #[error("Invalid review item {0}: {1}")]
    InvalidItem(String, &'static str),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SrsError>;
