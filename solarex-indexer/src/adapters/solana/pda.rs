//! Program derived addresses of Solarex accounts

use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;

use crate::core::{IndexerError, IndexerResult, WhitelistKeyResolver};

/// Seed prefix shared by every Solarex PDA
pub const SOLAREX_PREFIX: &[u8] = b"solarex";

/// Store owned by `owner`
pub fn derive_store_address(program_id: &Pubkey, owner: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[SOLAREX_PREFIX, program_id.as_ref(), owner.as_ref()],
        program_id,
    )
    .0
}

/// Whitelisted creator entry of `creator` in `store`
pub fn derive_whitelisted_creator_address(
    program_id: &Pubkey,
    store: &Pubkey,
    creator: &Pubkey,
) -> Pubkey {
    Pubkey::find_program_address(
        &[
            SOLAREX_PREFIX,
            program_id.as_ref(),
            store.as_ref(),
            creator.as_ref(),
        ],
        program_id,
    )
    .0
}

/// Resolves whitelisted creator addresses by deriving them locally
#[derive(Debug, Clone)]
pub struct PdaWhitelistResolver {
    program_id: Pubkey,
    store: Option<Pubkey>,
}

impl PdaWhitelistResolver {
    pub fn new(program_id: Pubkey, store: Option<Pubkey>) -> Self {
        Self { program_id, store }
    }
}

#[async_trait]
impl WhitelistKeyResolver for PdaWhitelistResolver {
    async fn resolve(&self, creator: &Pubkey) -> IndexerResult<Pubkey> {
        let store = self.store.ok_or_else(|| IndexerError::Resolution {
            creator: creator.to_string(),
            reason: "no store configured".to_string(),
        })?;
        Ok(derive_whitelisted_creator_address(
            &self.program_id,
            &store,
            creator,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_is_deterministic() {
        let program = Pubkey::new_unique();
        let store = Pubkey::new_unique();
        let creator = Pubkey::new_unique();

        let first = derive_whitelisted_creator_address(&program, &store, &creator);
        let second = derive_whitelisted_creator_address(&program, &store, &creator);
        assert_eq!(first, second);
        assert!(!first.is_on_curve());

        let other_store = Pubkey::new_unique();
        assert_ne!(
            first,
            derive_whitelisted_creator_address(&program, &other_store, &creator)
        );
    }

    #[test]
    fn test_store_derivation_depends_on_owner() {
        let program = Pubkey::new_unique();
        assert_ne!(
            derive_store_address(&program, &Pubkey::new_unique()),
            derive_store_address(&program, &Pubkey::new_unique())
        );
    }

    #[tokio::test]
    async fn test_resolver_matches_derivation() {
        let program = Pubkey::new_unique();
        let store = Pubkey::new_unique();
        let creator = Pubkey::new_unique();
        let resolver = PdaWhitelistResolver::new(program, Some(store));

        assert_eq!(
            resolver.resolve(&creator).await.unwrap(),
            derive_whitelisted_creator_address(&program, &store, &creator)
        );
    }

    #[tokio::test]
    async fn test_resolver_without_store_fails() {
        let resolver = PdaWhitelistResolver::new(Pubkey::new_unique(), None);
        assert!(matches!(
            resolver.resolve(&Pubkey::new_unique()).await,
            Err(IndexerError::Resolution { .. })
        ));
    }
}
