//! Auction manager accounts (V1 and V2)

use borsh::BorshDeserialize;
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;

use super::key::{decode_unchecked, SolarexKey};
use crate::core::{DecodeError, DecodeResult};

/// Byte range of the owning store inside every auction manager layout
pub const STORE_OFFSET: std::ops::Range<usize> = 1..33;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, BorshDeserialize)]
pub enum AuctionManagerStatus {
    Initialized,
    Validated,
    Running,
    Disbursing,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, BorshDeserialize)]
pub enum WinningConfigType {
    TokenOnlyTransfer,
    FullRightsTransfer,
    PrintingV1,
    PrintingV2,
    Participation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, BorshDeserialize)]
pub enum WinningConstraint {
    NoParticipationPrize,
    ParticipationPrizeGiven,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, BorshDeserialize)]
pub enum NonWinningConstraint {
    NoParticipationPrize,
    GivenForFixedPrice,
    GivenForBidPrice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, BorshDeserialize)]
pub struct WinningConfigItem {
    pub safety_deposit_box_index: u8,
    pub amount: u8,
    pub winning_config_type: WinningConfigType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, BorshDeserialize)]
pub struct WinningConfig {
    pub items: Vec<WinningConfigItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, BorshDeserialize)]
pub struct WinningConfigStateItem {
    pub primary_sale_happened: bool,
    pub claimed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, BorshDeserialize)]
pub struct WinningConfigState {
    pub items: Vec<WinningConfigStateItem>,
    pub money_pushed_to_accept_payment: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, BorshDeserialize)]
pub struct ParticipationConfigV1 {
    pub winner_constraint: WinningConstraint,
    pub non_winning_constraint: NonWinningConstraint,
    pub safety_deposit_box_index: u8,
    pub fixed_price: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, BorshDeserialize)]
pub struct ParticipationStateV1 {
    pub collected_to_accept_payment: u64,
    pub primary_sale_happened: bool,
    pub validated: bool,
    pub printing_authorization_token_account: Option<Pubkey>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, BorshDeserialize)]
pub struct AuctionManagerStateV1 {
    pub status: AuctionManagerStatus,
    pub winning_config_items_validated: u8,
    pub winning_config_states: Vec<WinningConfigState>,
    pub participation_state: Option<ParticipationStateV1>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, BorshDeserialize)]
pub struct AuctionManagerSettingsV1 {
    pub winning_configs: Vec<WinningConfig>,
    pub participation_config: Option<ParticipationConfigV1>,
}

/// Deprecated layout carrying its full settings inline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, BorshDeserialize)]
pub struct AuctionManagerV1 {
    pub key: SolarexKey,
    pub store: Pubkey,
    pub authority: Pubkey,
    pub auction: Pubkey,
    pub vault: Pubkey,
    pub accept_payment: Pubkey,
    pub state: AuctionManagerStateV1,
    pub settings: AuctionManagerSettingsV1,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, BorshDeserialize)]
pub struct AuctionManagerStateV2 {
    pub status: AuctionManagerStatus,
    pub safety_config_items_validated: u64,
    pub bids_pushed_to_accept_payment: u64,
    pub has_participation: bool,
}

/// Current layout; per-item settings live in safety deposit configs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, BorshDeserialize)]
pub struct AuctionManagerV2 {
    pub key: SolarexKey,
    pub store: Pubkey,
    pub authority: Pubkey,
    pub auction: Pubkey,
    pub vault: Pubkey,
    pub accept_payment: Pubkey,
    pub state: AuctionManagerStateV2,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "version")]
pub enum AuctionManager {
    V1(AuctionManagerV1),
    V2(AuctionManagerV2),
}

impl AuctionManager {
    pub fn decode(data: &[u8]) -> DecodeResult<Self> {
        let key = SolarexKey::expect_one_of(
            data,
            &[SolarexKey::AuctionManagerV1, SolarexKey::AuctionManagerV2],
            "AuctionManager",
        )?;
        match key {
            SolarexKey::AuctionManagerV1 => decode_unchecked(data).map(AuctionManager::V1),
            _ => decode_unchecked(data).map(AuctionManager::V2),
        }
    }

    /// Read the owning store straight from its fixed offset, without
    /// decoding the rest of the account
    pub fn store_from_raw(data: &[u8]) -> DecodeResult<Pubkey> {
        let bytes: [u8; 32] = data
            .get(STORE_OFFSET)
            .and_then(|slice| slice.try_into().ok())
            .ok_or(DecodeError::Truncated {
                offset: STORE_OFFSET.start,
                needed: STORE_OFFSET.len(),
                available: data.len().saturating_sub(STORE_OFFSET.start),
            })?;
        Ok(Pubkey::new_from_array(bytes))
    }

    pub fn store(&self) -> &Pubkey {
        match self {
            AuctionManager::V1(manager) => &manager.store,
            AuctionManager::V2(manager) => &manager.store,
        }
    }

    pub fn auction(&self) -> &Pubkey {
        match self {
            AuctionManager::V1(manager) => &manager.auction,
            AuctionManager::V2(manager) => &manager.auction,
        }
    }

    pub fn authority(&self) -> &Pubkey {
        match self {
            AuctionManager::V1(manager) => &manager.authority,
            AuctionManager::V2(manager) => &manager.authority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(key: SolarexKey) -> Vec<u8> {
        let mut data = vec![key as u8];
        for seed in 1u8..=5 {
            data.extend_from_slice(&[seed; 32]);
        }
        data
    }

    #[test]
    fn test_decode_v2() {
        let mut data = header(SolarexKey::AuctionManagerV2);
        data.push(2); // Running
        data.extend_from_slice(&3u64.to_le_bytes());
        data.extend_from_slice(&1u64.to_le_bytes());
        data.push(1);

        let manager = AuctionManager::decode(&data).unwrap();
        let AuctionManager::V2(v2) = &manager else {
            panic!("expected V2, got {:?}", manager);
        };
        assert_eq!(v2.state.status, AuctionManagerStatus::Running);
        assert_eq!(v2.state.safety_config_items_validated, 3);
        assert_eq!(v2.state.bids_pushed_to_accept_payment, 1);
        assert!(v2.state.has_participation);
        assert_eq!(manager.store(), &Pubkey::new_from_array([1; 32]));
        assert_eq!(manager.authority(), &Pubkey::new_from_array([2; 32]));
        assert_eq!(manager.auction(), &Pubkey::new_from_array([3; 32]));
    }

    #[test]
    fn test_decode_v1_with_settings() {
        let mut data = header(SolarexKey::AuctionManagerV1);
        // state
        data.push(1); // Validated
        data.push(1); // winning_config_items_validated
        data.extend_from_slice(&1u32.to_le_bytes()); // one winning config state
        data.extend_from_slice(&1u32.to_le_bytes()); // one item
        data.extend_from_slice(&[0, 1]); // primary_sale_happened, claimed
        data.push(0); // money_pushed_to_accept_payment
        data.push(0); // no participation state
        // settings
        data.extend_from_slice(&1u32.to_le_bytes()); // one winning config
        data.extend_from_slice(&1u32.to_le_bytes()); // one item
        data.extend_from_slice(&[0, 1, 3]); // box 0, amount 1, PrintingV2
        data.push(1); // participation config present
        data.extend_from_slice(&[1, 2, 4]);
        data.push(1);
        data.extend_from_slice(&250u64.to_le_bytes());
        data.extend_from_slice(&[0u8; 16]);

        let AuctionManager::V1(v1) = AuctionManager::decode(&data).unwrap() else {
            panic!("expected V1");
        };
        assert_eq!(v1.state.status, AuctionManagerStatus::Validated);
        assert!(v1.state.winning_config_states[0].items[0].claimed);
        assert_eq!(
            v1.settings.winning_configs[0].items[0].winning_config_type,
            WinningConfigType::PrintingV2
        );
        let participation = v1.settings.participation_config.unwrap();
        assert_eq!(participation.winner_constraint, WinningConstraint::ParticipationPrizeGiven);
        assert_eq!(participation.non_winning_constraint, NonWinningConstraint::GivenForBidPrice);
        assert_eq!(participation.safety_deposit_box_index, 4);
        assert_eq!(participation.fixed_price, Some(250));
    }

    #[test]
    fn test_store_from_raw() {
        let data = header(SolarexKey::AuctionManagerV2);
        assert_eq!(
            AuctionManager::store_from_raw(&data).unwrap(),
            Pubkey::new_from_array([1; 32])
        );
        assert!(matches!(
            AuctionManager::store_from_raw(&data[..20]),
            Err(DecodeError::Truncated { offset: 1, needed: 32, available: 19 })
        ));
    }
}
