//! Safety deposit config accounts
//!
//! Amount ranges are stored with a per-account integer width, so the
//! layout is read by hand instead of derived.

use borsh::BorshDeserialize;
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;
use std::io::{Error, ErrorKind, Read};

use super::auction_manager::{NonWinningConstraint, WinningConfigType, WinningConstraint};
use super::key::{decode_unchecked, SolarexKey};
use crate::core::{DecodeError, DecodeResult};

/// Byte width of a tuple component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum TupleNumericType {
    U8 = 1,
    U16 = 2,
    U32 = 4,
    U64 = 8,
}

impl TryFrom<u8> for TupleNumericType {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(TupleNumericType::U8),
            2 => Ok(TupleNumericType::U16),
            4 => Ok(TupleNumericType::U32),
            8 => Ok(TupleNumericType::U64),
            other => Err(DecodeError::InvalidTupleWidth(other)),
        }
    }
}

impl TupleNumericType {
    fn read<R: Read>(self, reader: &mut R) -> std::io::Result<u64> {
        let value = match self {
            TupleNumericType::U8 => u8::deserialize_reader(reader)? as u64,
            TupleNumericType::U16 => u16::deserialize_reader(reader)? as u64,
            TupleNumericType::U32 => u32::deserialize_reader(reader)? as u64,
            TupleNumericType::U64 => u64::deserialize_reader(reader)?,
        };
        Ok(value)
    }
}

impl BorshDeserialize for TupleNumericType {
    fn deserialize_reader<R: Read>(reader: &mut R) -> std::io::Result<Self> {
        let width = u8::deserialize_reader(reader)?;
        TupleNumericType::try_from(width)
            .map_err(|e| Error::new(ErrorKind::InvalidData, e.to_string()))
    }
}

/// `length` winners starting at this range receive `amount` items each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AmountRange {
    pub amount: u64,
    pub length: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, BorshDeserialize)]
pub struct ParticipationConfigV2 {
    pub winner_constraint: WinningConstraint,
    pub non_winning_constraint: NonWinningConstraint,
    pub fixed_price: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, BorshDeserialize)]
pub struct ParticipationStateV2 {
    pub collected_to_accept_payment: u64,
}

/// Per-item prize configuration of a V2 auction manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafetyDepositConfig {
    pub key: SolarexKey,
    pub auction_manager: Pubkey,
    pub order: u64,
    pub winning_config_type: WinningConfigType,
    pub amount_type: TupleNumericType,
    pub length_type: TupleNumericType,
    pub amount_ranges: Vec<AmountRange>,
    pub participation_config: Option<ParticipationConfigV2>,
    pub participation_state: Option<ParticipationStateV2>,
}

impl BorshDeserialize for SafetyDepositConfig {
    fn deserialize_reader<R: Read>(reader: &mut R) -> std::io::Result<Self> {
        let key = SolarexKey::deserialize_reader(reader)?;
        let auction_manager = Pubkey::deserialize_reader(reader)?;
        let order = u64::deserialize_reader(reader)?;
        let winning_config_type = WinningConfigType::deserialize_reader(reader)?;
        let amount_type = TupleNumericType::deserialize_reader(reader)?;
        let length_type = TupleNumericType::deserialize_reader(reader)?;

        let range_count = u32::deserialize_reader(reader)?;
        let mut amount_ranges = Vec::new();
        for _ in 0..range_count {
            let amount = amount_type.read(reader)?;
            let length = length_type.read(reader)?;
            amount_ranges.push(AmountRange { amount, length });
        }

        let participation_config = Option::<ParticipationConfigV2>::deserialize_reader(reader)?;
        let participation_state = Option::<ParticipationStateV2>::deserialize_reader(reader)?;

        Ok(Self {
            key,
            auction_manager,
            order,
            winning_config_type,
            amount_type,
            length_type,
            amount_ranges,
            participation_config,
            participation_state,
        })
    }
}

impl SafetyDepositConfig {
    pub fn decode(data: &[u8]) -> DecodeResult<Self> {
        SolarexKey::expect_one_of(data, &[SolarexKey::SafetyDepositConfigV1], "SafetyDepositConfig")?;
        decode_unchecked(data)
    }

    /// Total number of winners covered by the amount ranges
    pub fn covered_winners(&self) -> u64 {
        self.amount_ranges
            .iter()
            .fold(0u64, |acc, range| acc.saturating_add(range.length))
    }
}
