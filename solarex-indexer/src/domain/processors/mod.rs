//! Domain processors
//!
//! Classification of raw Solarex accounts and routing of the decoded
//! state into the named indices.

mod classifier;
mod router;

pub use classifier::{
    classify, is_auction_manager, is_bid_redemption_ticket, is_payout_ticket,
    is_prize_tracking_ticket, is_safety_deposit_config, is_store, is_whitelisted_creator,
    Classification, RecordFamily,
};
pub use router::{parse_whitelisted_creator, AccountRouter, RouterSettings};
