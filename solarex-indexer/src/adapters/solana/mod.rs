//! Solana adapters
//!
//! Address derivation for Solarex accounts and loading of raw account
//! batches.

pub mod accounts_file;
pub mod pda;

pub use accounts_file::{load_accounts, parse_accounts};
pub use pda::{
    derive_store_address, derive_whitelisted_creator_address, PdaWhitelistResolver,
    SOLAREX_PREFIX,
};
