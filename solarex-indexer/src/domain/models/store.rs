//! Store and whitelisted creator accounts

use borsh::BorshDeserialize;
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use super::key::{decode_unchecked, SolarexKey};
use crate::core::DecodeResult;

/// Per-deployment configuration account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, BorshDeserialize)]
pub struct Store {
    pub key: SolarexKey,
    pub public: bool,
    pub auction_program: Pubkey,
    pub token_vault_program: Pubkey,
    pub token_metadata_program: Pubkey,
    pub token_program: Pubkey,
}

impl Store {
    pub fn decode(data: &[u8]) -> DecodeResult<Self> {
        SolarexKey::expect_one_of(data, &[SolarexKey::StoreV1], "Store")?;
        decode_unchecked(data)
    }
}

/// Creator allowed to list on a store.
///
/// The display fields are not part of the on-chain layout; they are
/// filled from the name override table after indexing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, BorshDeserialize)]
pub struct WhitelistedCreator {
    pub key: SolarexKey,
    pub address: Pubkey,
    pub activated: bool,
    #[borsh(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[borsh(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[borsh(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[borsh(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

impl WhitelistedCreator {
    pub fn decode(data: &[u8]) -> DecodeResult<Self> {
        SolarexKey::expect_one_of(data, &[SolarexKey::WhitelistedCreatorV1], "WhitelistedCreator")?;
        decode_unchecked(data)
    }

    /// Overlay display fields; fields absent from `display` are kept
    pub fn merge_display(&mut self, display: &CreatorDisplay) {
        if let Some(name) = &display.name {
            self.name = Some(name.clone());
        }
        if let Some(image) = &display.image {
            self.image = Some(image.clone());
        }
        if let Some(description) = &display.description {
            self.description = Some(description.clone());
        }
        if let Some(twitter) = &display.twitter {
            self.twitter = Some(twitter.clone());
        }
    }
}

/// Partial display record from the name override table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorDisplay {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DecodeError;

    fn store_bytes(public: bool) -> Vec<u8> {
        let mut data = vec![SolarexKey::StoreV1 as u8, public as u8];
        for seed in 1u8..=4 {
            data.extend_from_slice(&[seed; 32]);
        }
        // unused account capacity
        data.extend_from_slice(&[0u8; 64]);
        data
    }

    #[test]
    fn test_store_decode() {
        let store = Store::decode(&store_bytes(true)).unwrap();
        assert!(store.public);
        assert_eq!(store.auction_program, Pubkey::new_from_array([1; 32]));
        assert_eq!(store.token_vault_program, Pubkey::new_from_array([2; 32]));
        assert_eq!(store.token_metadata_program, Pubkey::new_from_array([3; 32]));
        assert_eq!(store.token_program, Pubkey::new_from_array([4; 32]));
    }

    #[test]
    fn test_store_decode_truncated() {
        let data = store_bytes(false);
        assert!(matches!(
            Store::decode(&data[..40]),
            Err(DecodeError::Borsh(_))
        ));
    }

    #[test]
    fn test_whitelisted_creator_decode_and_merge() {
        let mut data = vec![SolarexKey::WhitelistedCreatorV1 as u8];
        data.extend_from_slice(&[9; 32]);
        data.push(1);

        let mut creator = WhitelistedCreator::decode(&data).unwrap();
        assert_eq!(creator.address, Pubkey::new_from_array([9; 32]));
        assert!(creator.activated);
        assert_eq!(creator.name, None);

        creator.twitter = Some("@before".to_string());
        creator.merge_display(&CreatorDisplay {
            name: Some("Nine".to_string()),
            ..Default::default()
        });
        assert_eq!(creator.name.as_deref(), Some("Nine"));
        assert_eq!(creator.twitter.as_deref(), Some("@before"));
    }
}
