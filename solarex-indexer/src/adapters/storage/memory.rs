//! In-memory index store

use dashmap::DashMap;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::{Collection, IndexSetter, ParsedEntity};

/// Concurrent in-memory implementation of the index port.
///
/// One map per collection; each write replaces any entry under the
/// same key.
#[derive(Debug, Default)]
pub struct InMemoryIndices {
    collections: DashMap<Collection, DashMap<String, Arc<ParsedEntity>>>,
}

/// Ordered copy of every collection, used for reporting and comparison
pub type IndexSnapshot = BTreeMap<Collection, BTreeMap<String, Arc<ParsedEntity>>>;

impl InMemoryIndices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, collection: Collection, key: &str) -> Option<Arc<ParsedEntity>> {
        self.collections
            .get(&collection)
            .and_then(|entries| entries.get(key).map(|entry| entry.value().clone()))
    }

    pub fn contains(&self, collection: Collection, key: &str) -> bool {
        self.get(collection, key).is_some()
    }

    pub fn len(&self, collection: Collection) -> usize {
        self.collections
            .get(&collection)
            .map_or(0, |entries| entries.len())
    }

    /// Total entries across every collection
    pub fn total(&self) -> usize {
        self.collections.iter().map(|entries| entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn keys(&self, collection: Collection) -> Vec<String> {
        let mut keys: Vec<String> = self
            .collections
            .get(&collection)
            .map(|entries| entries.iter().map(|entry| entry.key().clone()).collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }

    pub fn snapshot(&self) -> IndexSnapshot {
        self.collections
            .iter()
            .map(|entries| {
                let ordered = entries
                    .iter()
                    .map(|entry| (entry.key().clone(), entry.value().clone()))
                    .collect();
                (*entries.key(), ordered)
            })
            .collect()
    }

    /// Entry counts per collection, including empty ones
    pub fn sizes(&self) -> BTreeMap<&'static str, usize> {
        Collection::ALL
            .iter()
            .map(|collection| (collection.as_str(), self.len(*collection)))
            .collect()
    }
}

impl IndexSetter for InMemoryIndices {
    fn set(&self, collection: Collection, key: String, value: Arc<ParsedEntity>) {
        self.collections
            .entry(collection)
            .or_default()
            .insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AccountRecord, KeyedAccount};
    use crate::domain::models::{DecodedEntity, PayoutTicket, SolarexKey};
    use solana_sdk::pubkey::Pubkey;

    fn payout(amount_paid: u64) -> Arc<ParsedEntity> {
        let keyed = KeyedAccount::new(
            Pubkey::new_from_array([1; 32]),
            AccountRecord::new(Pubkey::new_from_array([2; 32]), vec![]),
        );
        Arc::new(ParsedEntity::new(
            &keyed,
            DecodedEntity::PayoutTicket(PayoutTicket {
                key: SolarexKey::PayoutTicketV1,
                recipient: Pubkey::new_from_array([3; 32]),
                amount_paid,
            }),
        ))
    }

    #[test]
    fn test_last_write_wins() {
        let indices = InMemoryIndices::new();
        indices.set(Collection::PayoutTickets, "a".to_string(), payout(1));
        indices.set(Collection::PayoutTickets, "a".to_string(), payout(2));

        assert_eq!(indices.len(Collection::PayoutTickets), 1);
        let stored = indices.get(Collection::PayoutTickets, "a").unwrap();
        assert!(matches!(
            stored.info,
            DecodedEntity::PayoutTicket(PayoutTicket { amount_paid: 2, .. })
        ));
    }

    #[test]
    fn test_collections_are_independent() {
        let indices = InMemoryIndices::new();
        let entity = payout(1);
        indices.set(Collection::Stores, "k".to_string(), entity.clone());
        indices.set(Collection::Store, "k".to_string(), entity);

        assert_eq!(indices.total(), 2);
        assert!(indices.contains(Collection::Store, "k"));
        assert!(!indices.contains(Collection::PayoutTickets, "k"));
        assert_eq!(indices.sizes()["stores"], 1);
        assert_eq!(indices.sizes()["bidRedemptions"], 0);
        assert_eq!(indices.snapshot().len(), 2);
    }
}
