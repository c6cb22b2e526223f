//! Adapters layer - Infrastructure implementations
//!
//! Implementations of the port traits defined in the core layer: the
//! in-memory index store and entity cache, and Solana address
//! resolution.

pub mod solana;
pub mod storage;

// Re-export commonly used adapters
pub use solana::PdaWhitelistResolver;
pub use storage::{InMemoryEntityCache, InMemoryIndices};
