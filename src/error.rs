//! Error types for huffman-codes

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffmanError {
    /// A heap operation ran against an empty queue.
    #[error("priority queue is empty")]
    EmptyQueue,

    /// The encoder met a symbol that has no code.
    #[error("no code entry for symbol {0:?}")]
    MissingCodeEntry(char),

    #[error("input too large: {size} symbols exceeds limit of {limit}")]
    InputTooLarge { size: usize, limit: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for HuffmanError {
    fn from(e: serde_json::Error) -> Self {
        HuffmanError::SerializationError(e.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HuffmanError>;
