//! Core trait abstractions (Ports in Hexagonal Architecture)

use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use std::sync::Arc;

use super::error::IndexerResult;
use super::types::{Collection, KeyedAccount, ParsedEntity};

/// Parser handed to the entity cache so it can build the entity itself
pub type AccountParser = fn(&KeyedAccount) -> IndexerResult<ParsedEntity>;

/// Index port - upsert into a named collection.
///
/// Writing an existing key replaces the previous value.
pub trait IndexSetter: Send + Sync {
    fn set(&self, collection: Collection, key: String, value: Arc<ParsedEntity>);
}

impl<F> IndexSetter for F
where
    F: Fn(Collection, String, Arc<ParsedEntity>) + Send + Sync,
{
    fn set(&self, collection: Collection, key: String, value: Arc<ParsedEntity>) {
        self(collection, key, value)
    }
}

/// Cache port - registers a parsed entity so it is retrievable by address
#[async_trait]
pub trait EntityCache: Send + Sync {
    /// Parse `account` with `parser`, store the result and return it.
    ///
    /// `active` marks whether the cached entry should be reported to
    /// change subscribers.
    async fn register(
        &self,
        account: &KeyedAccount,
        parser: AccountParser,
        active: bool,
    ) -> IndexerResult<Arc<ParsedEntity>>;

    /// Swap the entity held for an already registered address, keeping
    /// its active flag. Fails if `entity.pubkey` was never registered.
    fn replace(&self, entity: Arc<ParsedEntity>) -> IndexerResult<()>;

    /// Look up a previously registered entity
    fn get(&self, pubkey: &Pubkey) -> Option<Arc<ParsedEntity>>;
}

/// Resolves the address a whitelisted creator account must live at
/// for the configured store.
#[async_trait]
pub trait WhitelistKeyResolver: Send + Sync {
    async fn resolve(&self, creator: &Pubkey) -> IndexerResult<Pubkey>;
}
