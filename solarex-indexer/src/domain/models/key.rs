//! Account key byte shared by every Solarex account layout

use borsh::BorshDeserialize;
use serde::Serialize;
use std::io::{Error, ErrorKind, Read};

use crate::core::{DecodeError, DecodeResult};

/// First byte of every Solarex account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum SolarexKey {
    Uninitialized = 0,
    OriginalAuthorityLookupV1 = 1,
    BidRedemptionTicketV1 = 2,
    StoreV1 = 3,
    WhitelistedCreatorV1 = 4,
    PayoutTicketV1 = 5,
    SafetyDepositValidationTicketV1 = 6,
    AuctionManagerV1 = 7,
    PrizeTrackingTicketV1 = 8,
    SafetyDepositConfigV1 = 9,
    AuctionManagerV2 = 10,
    BidRedemptionTicketV2 = 11,
    AuctionWinnerTokenTypeTrackerV1 = 12,
    StoreIndexerV1 = 13,
    AuctionCacheV1 = 14,
}

impl SolarexKey {
    /// Read the key byte at the head of `data`
    pub fn peek(data: &[u8]) -> DecodeResult<Self> {
        let byte = *data.first().ok_or(DecodeError::Empty)?;
        Self::try_from(byte)
    }

    /// Fail unless the head of `data` is one of `expected`
    pub(crate) fn expect_one_of(
        data: &[u8],
        expected: &[SolarexKey],
        name: &'static str,
    ) -> DecodeResult<Self> {
        let key = Self::peek(data)?;
        if expected.contains(&key) {
            Ok(key)
        } else {
            Err(DecodeError::UnexpectedKey {
                expected: name,
                found: key as u8,
            })
        }
    }
}

impl TryFrom<u8> for SolarexKey {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let key = match value {
            0 => SolarexKey::Uninitialized,
            1 => SolarexKey::OriginalAuthorityLookupV1,
            2 => SolarexKey::BidRedemptionTicketV1,
            3 => SolarexKey::StoreV1,
            4 => SolarexKey::WhitelistedCreatorV1,
            5 => SolarexKey::PayoutTicketV1,
            6 => SolarexKey::SafetyDepositValidationTicketV1,
            7 => SolarexKey::AuctionManagerV1,
            8 => SolarexKey::PrizeTrackingTicketV1,
            9 => SolarexKey::SafetyDepositConfigV1,
            10 => SolarexKey::AuctionManagerV2,
            11 => SolarexKey::BidRedemptionTicketV2,
            12 => SolarexKey::AuctionWinnerTokenTypeTrackerV1,
            13 => SolarexKey::StoreIndexerV1,
            14 => SolarexKey::AuctionCacheV1,
            other => return Err(DecodeError::UnknownKey(other)),
        };
        Ok(key)
    }
}

impl BorshDeserialize for SolarexKey {
    fn deserialize_reader<R: Read>(reader: &mut R) -> std::io::Result<Self> {
        let byte = u8::deserialize_reader(reader)?;
        SolarexKey::try_from(byte).map_err(|e| Error::new(ErrorKind::InvalidData, e.to_string()))
    }
}

/// Borsh decode that tolerates trailing bytes.
///
/// Solarex accounts are allocated at their maximum size, so a strict
/// decode would reject every account with unused capacity.
pub(crate) fn decode_unchecked<T: BorshDeserialize>(data: &[u8]) -> DecodeResult<T> {
    let mut buf = data;
    Ok(T::deserialize(&mut buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trips_through_byte() {
        for byte in 0u8..=14 {
            let key = SolarexKey::try_from(byte).unwrap();
            assert_eq!(key as u8, byte);
        }
    }

    #[test]
    fn test_unknown_key_byte() {
        assert!(matches!(
            SolarexKey::try_from(15),
            Err(DecodeError::UnknownKey(15))
        ));
    }

    #[test]
    fn test_peek_empty() {
        assert!(matches!(SolarexKey::peek(&[]), Err(DecodeError::Empty)));
    }

    #[test]
    fn test_expect_one_of_rejects_other_key() {
        let err = SolarexKey::expect_one_of(&[3], &[SolarexKey::PayoutTicketV1], "PayoutTicket")
            .unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnexpectedKey { expected: "PayoutTicket", found: 3 }
        ));
    }
}
