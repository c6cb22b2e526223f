//! Domain layer - business logic and domain models
//!
//! This layer contains account decoding and routing, independent of the
//! concrete index store, cache or network source.

pub mod models;
pub mod name_overrides;
pub mod processors;

// Re-export commonly used items
pub use models::*;
pub use name_overrides::NameOverrides;
