//! Owner and key-byte classification of raw accounts

use solana_sdk::pubkey::Pubkey;

use crate::core::AccountRecord;
use crate::domain::models::SolarexKey;

/// Account families handled by the router. Versions of the same
/// entity share a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordFamily {
    AuctionManager,
    BidRedemptionTicket,
    PayoutTicket,
    PrizeTrackingTicket,
    Store,
    SafetyDepositConfig,
    WhitelistedCreator,
}

impl RecordFamily {
    /// Family of a key, or `None` for keys this indexer does not route
    pub fn of(key: SolarexKey) -> Option<Self> {
        match key {
            SolarexKey::AuctionManagerV1 | SolarexKey::AuctionManagerV2 => {
                Some(RecordFamily::AuctionManager)
            }
            SolarexKey::BidRedemptionTicketV1 | SolarexKey::BidRedemptionTicketV2 => {
                Some(RecordFamily::BidRedemptionTicket)
            }
            SolarexKey::PayoutTicketV1 => Some(RecordFamily::PayoutTicket),
            SolarexKey::PrizeTrackingTicketV1 => Some(RecordFamily::PrizeTrackingTicket),
            SolarexKey::StoreV1 => Some(RecordFamily::Store),
            SolarexKey::SafetyDepositConfigV1 => Some(RecordFamily::SafetyDepositConfig),
            SolarexKey::WhitelistedCreatorV1 => Some(RecordFamily::WhitelistedCreator),
            SolarexKey::Uninitialized
            | SolarexKey::OriginalAuthorityLookupV1
            | SolarexKey::SafetyDepositValidationTicketV1
            | SolarexKey::AuctionWinnerTokenTypeTrackerV1
            | SolarexKey::StoreIndexerV1
            | SolarexKey::AuctionCacheV1 => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RecordFamily::AuctionManager => "AuctionManager",
            RecordFamily::BidRedemptionTicket => "BidRedemptionTicket",
            RecordFamily::PayoutTicket => "PayoutTicket",
            RecordFamily::PrizeTrackingTicket => "PrizeTrackingTicket",
            RecordFamily::Store => "Store",
            RecordFamily::SafetyDepositConfig => "SafetyDepositConfig",
            RecordFamily::WhitelistedCreator => "WhitelistedCreator",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Owned by another program; ignored entirely
    Foreign,
    /// Empty data, unknown key byte, or a key that is never indexed
    Unrecognized,
    Family(RecordFamily),
}

impl Classification {
    pub fn family(&self) -> Option<RecordFamily> {
        match self {
            Classification::Family(family) => Some(*family),
            _ => None,
        }
    }
}

/// Decide which family, if any, an account belongs to. Never decodes
/// past the first byte.
pub fn classify(account: &AccountRecord, program_id: &Pubkey) -> Classification {
    if account.owner != *program_id {
        return Classification::Foreign;
    }
    let family = account
        .key_byte()
        .and_then(|byte| SolarexKey::try_from(byte).ok())
        .and_then(RecordFamily::of);
    match family {
        Some(family) => Classification::Family(family),
        None => Classification::Unrecognized,
    }
}

fn has_key(account: &AccountRecord, keys: &[SolarexKey]) -> bool {
    account
        .key_byte()
        .is_some_and(|byte| keys.iter().any(|key| *key as u8 == byte))
}

pub fn is_auction_manager(account: &AccountRecord) -> bool {
    has_key(account, &[SolarexKey::AuctionManagerV1, SolarexKey::AuctionManagerV2])
}

pub fn is_bid_redemption_ticket(account: &AccountRecord) -> bool {
    has_key(
        account,
        &[SolarexKey::BidRedemptionTicketV1, SolarexKey::BidRedemptionTicketV2],
    )
}

pub fn is_payout_ticket(account: &AccountRecord) -> bool {
    has_key(account, &[SolarexKey::PayoutTicketV1])
}

pub fn is_prize_tracking_ticket(account: &AccountRecord) -> bool {
    has_key(account, &[SolarexKey::PrizeTrackingTicketV1])
}

pub fn is_store(account: &AccountRecord) -> bool {
    has_key(account, &[SolarexKey::StoreV1])
}

pub fn is_safety_deposit_config(account: &AccountRecord) -> bool {
    has_key(account, &[SolarexKey::SafetyDepositConfigV1])
}

pub fn is_whitelisted_creator(account: &AccountRecord) -> bool {
    has_key(account, &[SolarexKey::WhitelistedCreatorV1])
}
