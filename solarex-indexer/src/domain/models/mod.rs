//! Typed Solarex account state decoded from raw account bytes

pub mod auction_manager;
pub mod bid_redemption;
pub mod key;
pub mod safety_deposit;
pub mod store;
pub mod tickets;

pub use auction_manager::*;
pub use bid_redemption::*;
pub use key::SolarexKey;
pub use safety_deposit::*;
pub use store::*;
pub use tickets::*;

use serde::Serialize;

/// Every account variant the router knows how to index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum DecodedEntity {
    AuctionManager(AuctionManager),
    BidRedemptionTicket(BidRedemptionTicket),
    PayoutTicket(PayoutTicket),
    PrizeTrackingTicket(PrizeTrackingTicket),
    Store(Store),
    SafetyDepositConfig(SafetyDepositConfig),
    WhitelistedCreator(WhitelistedCreator),
}

impl DecodedEntity {
    pub fn as_whitelisted_creator(&self) -> Option<&WhitelistedCreator> {
        match self {
            DecodedEntity::WhitelistedCreator(creator) => Some(creator),
            _ => None,
        }
    }
}
