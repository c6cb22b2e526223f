//! Centralized error types for the Solarex indexer

use thiserror::Error;

/// Main indexer error type
#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Authoritative key resolution failed for {creator}: {reason}")]
    Resolution { creator: String, reason: String },

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid account data for {account_type}: {reason}")]
    InvalidAccountData {
        account_type: &'static str,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Errors raised while decoding account bytes into typed state
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Account data is empty")]
    Empty,

    #[error("Unknown account key byte {0}")]
    UnknownKey(u8),

    #[error("Expected {expected} account, found key byte {found}")]
    UnexpectedKey { expected: &'static str, found: u8 },

    #[error("Account data truncated: needed {needed} bytes at offset {offset}, have {available}")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Invalid tuple numeric width {0}")]
    InvalidTupleWidth(u8),

    #[error("Borsh decode failed: {0}")]
    Borsh(#[from] std::io::Error),
}

/// Result type alias for indexer operations
pub type IndexerResult<T> = Result<T, IndexerError>;

/// Result type alias for account decoding
pub type DecodeResult<T> = Result<T, DecodeError>;

impl From<serde_json::Error> for IndexerError {
    fn from(err: serde_json::Error) -> Self {
        IndexerError::Configuration(err.to_string())
    }
}

impl From<toml::de::Error> for IndexerError {
    fn from(err: toml::de::Error) -> Self {
        IndexerError::Configuration(err.to_string())
    }
}

impl From<validator::ValidationErrors> for IndexerError {
    fn from(err: validator::ValidationErrors) -> Self {
        IndexerError::Configuration(err.to_string())
    }
}
