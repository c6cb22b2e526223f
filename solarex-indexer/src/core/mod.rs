//! Core domain abstractions and types
//!
//! Foundational types, port traits and error definitions shared by the
//! classifier, the router and the adapters. Independent of any concrete
//! storage or network backend.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items
pub use error::{DecodeError, DecodeResult, IndexerError, IndexerResult};
pub use traits::{AccountParser, EntityCache, IndexSetter, WhitelistKeyResolver};
pub use types::{
    composite_key, AccountRecord, BatchSummary, Collection, FilterReason, KeyedAccount,
    ParsedEntity, RouteOutcome,
};
