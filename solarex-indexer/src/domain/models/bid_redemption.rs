//! Bid redemption tickets (V1 and V2)

use borsh::BorshDeserialize;
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;
use std::io::Read;

use super::key::{decode_unchecked, SolarexKey};
use crate::core::DecodeResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, BorshDeserialize)]
pub struct BidRedemptionTicketV1 {
    pub key: SolarexKey,
    pub participation_redeemed: bool,
    pub items_redeemed: u8,
}

/// V2 ticket. Everything after the auction manager is a redemption
/// bitmask over the manager's safety deposit configs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BidRedemptionTicketV2 {
    pub key: SolarexKey,
    pub winner_index: Option<u64>,
    pub auction_manager: Pubkey,
    pub redeemed: Vec<u8>,
}

impl BorshDeserialize for BidRedemptionTicketV2 {
    fn deserialize_reader<R: Read>(reader: &mut R) -> std::io::Result<Self> {
        let key = SolarexKey::deserialize_reader(reader)?;
        let winner_index = Option::<u64>::deserialize_reader(reader)?;
        let auction_manager = Pubkey::deserialize_reader(reader)?;
        let mut redeemed = Vec::new();
        reader.read_to_end(&mut redeemed)?;
        Ok(Self {
            key,
            winner_index,
            auction_manager,
            redeemed,
        })
    }
}

impl BidRedemptionTicketV2 {
    /// Whether the safety deposit config at `order` has been redeemed
    pub fn is_redeemed(&self, order: u64) -> bool {
        let byte = usize::try_from(order / 8).ok().and_then(|i| self.redeemed.get(i));
        match byte {
            Some(byte) => byte & (1 << (order % 8)) != 0,
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "version")]
pub enum BidRedemptionTicket {
    V1(BidRedemptionTicketV1),
    V2(BidRedemptionTicketV2),
}

impl BidRedemptionTicket {
    /// Picks the layout from the key byte
    pub fn decode(data: &[u8]) -> DecodeResult<Self> {
        let key = SolarexKey::expect_one_of(
            data,
            &[SolarexKey::BidRedemptionTicketV1, SolarexKey::BidRedemptionTicketV2],
            "BidRedemptionTicket",
        )?;
        match key {
            SolarexKey::BidRedemptionTicketV1 => decode_unchecked(data).map(BidRedemptionTicket::V1),
            _ => decode_unchecked(data).map(BidRedemptionTicket::V2),
        }
    }

    pub fn as_v2(&self) -> Option<&BidRedemptionTicketV2> {
        match self {
            BidRedemptionTicket::V2(ticket) => Some(ticket),
            BidRedemptionTicket::V1(_) => None,
        }
    }
}
