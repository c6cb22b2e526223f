//! In-memory entity cache

use async_trait::async_trait;
use dashmap::DashMap;
use solana_sdk::pubkey::Pubkey;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

use crate::core::{
    AccountParser, EntityCache, IndexerError, IndexerResult, KeyedAccount, ParsedEntity,
};

#[derive(Debug, Clone)]
struct CacheEntry {
    entity: Arc<ParsedEntity>,
    active: bool,
}

/// Entity cache keyed by account address
#[derive(Debug, Default)]
pub struct InMemoryEntityCache {
    entries: DashMap<Pubkey, CacheEntry>,
    registrations: AtomicU64,
}

impl InMemoryEntityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the entry at `pubkey` was registered as active
    pub fn is_active(&self, pubkey: &Pubkey) -> Option<bool> {
        self.entries.get(pubkey).map(|entry| entry.active)
    }

    /// Number of `register` calls that stored an entity
    pub fn registrations(&self) -> u64 {
        self.registrations.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl EntityCache for InMemoryEntityCache {
    async fn register(
        &self,
        account: &KeyedAccount,
        parser: AccountParser,
        active: bool,
    ) -> IndexerResult<Arc<ParsedEntity>> {
        let entity = Arc::new(parser(account)?);
        self.entries.insert(
            account.pubkey,
            CacheEntry {
                entity: entity.clone(),
                active,
            },
        );
        self.registrations.fetch_add(1, Ordering::Relaxed);
        debug!(pubkey = %account.pubkey, active, "cached entity");
        Ok(entity)
    }

    fn replace(&self, entity: Arc<ParsedEntity>) -> IndexerResult<()> {
        let mut entry = self.entries.get_mut(&entity.pubkey).ok_or_else(|| {
            IndexerError::Cache(format!("{} was never registered", entity.pubkey))
        })?;
        entry.entity = entity;
        Ok(())
    }

    fn get(&self, pubkey: &Pubkey) -> Option<Arc<ParsedEntity>> {
        self.entries.get(pubkey).map(|entry| entry.entity.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AccountRecord;
    use crate::domain::models::{CreatorDisplay, DecodedEntity, SolarexKey};
    use crate::domain::processors::parse_whitelisted_creator;

    fn creator_account() -> KeyedAccount {
        let mut data = vec![SolarexKey::WhitelistedCreatorV1 as u8];
        data.extend_from_slice(&[4; 32]);
        data.push(1);
        KeyedAccount::new(
            Pubkey::new_from_array([5; 32]),
            AccountRecord::new(Pubkey::new_from_array([6; 32]), data),
        )
    }

    #[tokio::test]
    async fn test_register_then_get() {
        let cache = InMemoryEntityCache::new();
        let account = creator_account();

        let entity = cache
            .register(&account, parse_whitelisted_creator, false)
            .await
            .unwrap();
        assert_eq!(entity.pubkey, account.pubkey);
        assert_eq!(cache.get(&account.pubkey), Some(entity));
        assert_eq!(cache.is_active(&account.pubkey), Some(false));
        assert_eq!(cache.registrations(), 1);
    }

    #[tokio::test]
    async fn test_replace_keeps_flag_and_shares_entity() {
        let cache = InMemoryEntityCache::new();
        let account = creator_account();
        let registered = cache
            .register(&account, parse_whitelisted_creator, true)
            .await
            .unwrap();

        let mut enriched = (*registered).clone();
        if let DecodedEntity::WhitelistedCreator(info) = &mut enriched.info {
            info.merge_display(&CreatorDisplay {
                name: Some("Five".to_string()),
                ..Default::default()
            });
        }
        let enriched = Arc::new(enriched);
        cache.replace(enriched.clone()).unwrap();

        let cached = cache.get(&account.pubkey).unwrap();
        assert!(Arc::ptr_eq(&cached, &enriched));
        assert_eq!(
            cached.info.as_whitelisted_creator().unwrap().name.as_deref(),
            Some("Five")
        );
        assert_eq!(cache.is_active(&account.pubkey), Some(true));
        assert_eq!(cache.registrations(), 1);
    }

    #[test]
    fn test_replace_unregistered_fails() {
        let cache = InMemoryEntityCache::new();
        let entity = parse_whitelisted_creator(&creator_account()).unwrap();

        let result = cache.replace(Arc::new(entity));
        assert!(matches!(result, Err(IndexerError::Cache(_))));
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_parser_failure_stores_nothing() {
        let cache = InMemoryEntityCache::new();
        let mut account = creator_account();
        account.account = Arc::new(AccountRecord::new(
            Pubkey::new_from_array([6; 32]),
            vec![SolarexKey::WhitelistedCreatorV1 as u8, 1, 2],
        ));

        let result = cache
            .register(&account, parse_whitelisted_creator, true)
            .await;
        assert!(matches!(result, Err(IndexerError::Decode(_))));
        assert!(cache.is_empty());
    }
}
