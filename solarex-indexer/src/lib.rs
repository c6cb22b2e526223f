//! Solarex Account Indexer Library
//!
//! Classifies raw Solarex program accounts by owner and key byte, decodes
//! them into typed state and routes the result into keyed indices.

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;

// Re-export commonly used types
pub use crate::config::IndexerConfig;
pub use crate::core::{
    AccountRecord, BatchSummary, Collection, FilterReason, IndexSetter, IndexerError,
    IndexerResult, KeyedAccount, ParsedEntity, RouteOutcome,
};
pub use crate::domain::processors::{AccountRouter, RouterSettings};
