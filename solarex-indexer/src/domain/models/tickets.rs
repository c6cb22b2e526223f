//! Payout and prize tracking tickets

use borsh::BorshDeserialize;
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;

use super::key::{decode_unchecked, SolarexKey};
use crate::core::DecodeResult;

/// Records a payout made to a recipient out of an auction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, BorshDeserialize)]
pub struct PayoutTicket {
    pub key: SolarexKey,
    pub recipient: Pubkey,
    pub amount_paid: u64,
}

impl PayoutTicket {
    pub fn decode(data: &[u8]) -> DecodeResult<Self> {
        SolarexKey::expect_one_of(data, &[SolarexKey::PayoutTicketV1], "PayoutTicket")?;
        decode_unchecked(data)
    }
}

/// Tracks redemptions of printed prizes for one metadata account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, BorshDeserialize)]
pub struct PrizeTrackingTicket {
    pub key: SolarexKey,
    pub metadata: Pubkey,
    pub supply_snapshot: u64,
    pub expected_redemptions: u64,
    pub redemptions: u64,
}

impl PrizeTrackingTicket {
    pub fn decode(data: &[u8]) -> DecodeResult<Self> {
        SolarexKey::expect_one_of(data, &[SolarexKey::PrizeTrackingTicketV1], "PrizeTrackingTicket")?;
        decode_unchecked(data)
    }
}
