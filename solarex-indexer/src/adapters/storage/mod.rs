//! Storage adapters
//!
//! In-memory implementations of the index and cache ports. Long-term
//! persistence belongs to whoever consumes the indices.

pub mod cache;
pub mod memory;

pub use cache::InMemoryEntityCache;
pub use memory::{InMemoryIndices, IndexSnapshot};
