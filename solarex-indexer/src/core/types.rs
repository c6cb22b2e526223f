//! Core domain types

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use std::fmt;
use std::sync::Arc;

use super::error::IndexerError;
use crate::domain::models::DecodedEntity;

/// Raw account as delivered by the network layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub owner: Pubkey,
    pub data: Vec<u8>,
}

impl AccountRecord {
    pub fn new(owner: Pubkey, data: Vec<u8>) -> Self {
        Self { owner, data }
    }

    /// Leading discriminant byte, if any
    pub fn key_byte(&self) -> Option<u8> {
        self.data.first().copied()
    }
}

/// An account together with its own address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedAccount {
    pub pubkey: Pubkey,
    pub account: Arc<AccountRecord>,
}

impl KeyedAccount {
    pub fn new(pubkey: Pubkey, account: AccountRecord) -> Self {
        Self {
            pubkey,
            account: Arc::new(account),
        }
    }
}

/// Unit written into the indices. Shared by reference between collections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedEntity {
    pub pubkey: Pubkey,
    #[serde(skip)]
    pub account: Arc<AccountRecord>,
    pub info: DecodedEntity,
}

impl ParsedEntity {
    pub fn new(keyed: &KeyedAccount, info: DecodedEntity) -> Self {
        Self {
            pubkey: keyed.pubkey,
            account: keyed.account.clone(),
            info,
        }
    }
}

/// Named indices populated by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Collection {
    #[serde(rename = "auctionManagersByAuction")]
    AuctionManagersByAuction,
    #[serde(rename = "bidRedemptions")]
    BidRedemptions,
    #[serde(rename = "bidRedemptionV2sByAuctionManagerAndWinningIndex")]
    BidRedemptionV2sByAuctionManagerAndWinningIndex,
    #[serde(rename = "payoutTickets")]
    PayoutTickets,
    #[serde(rename = "prizeTrackingTickets")]
    PrizeTrackingTickets,
    #[serde(rename = "stores")]
    Stores,
    #[serde(rename = "store")]
    Store,
    #[serde(rename = "safetyDepositConfigsByAuctionManagerAndIndex")]
    SafetyDepositConfigsByAuctionManagerAndIndex,
    #[serde(rename = "whitelistedCreatorsByCreator")]
    WhitelistedCreatorsByCreator,
}

impl Collection {
    pub const ALL: [Collection; 9] = [
        Collection::AuctionManagersByAuction,
        Collection::BidRedemptions,
        Collection::BidRedemptionV2sByAuctionManagerAndWinningIndex,
        Collection::PayoutTickets,
        Collection::PrizeTrackingTickets,
        Collection::Stores,
        Collection::Store,
        Collection::SafetyDepositConfigsByAuctionManagerAndIndex,
        Collection::WhitelistedCreatorsByCreator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::AuctionManagersByAuction => "auctionManagersByAuction",
            Collection::BidRedemptions => "bidRedemptions",
            Collection::BidRedemptionV2sByAuctionManagerAndWinningIndex => {
                "bidRedemptionV2sByAuctionManagerAndWinningIndex"
            }
            Collection::PayoutTickets => "payoutTickets",
            Collection::PrizeTrackingTickets => "prizeTrackingTickets",
            Collection::Stores => "stores",
            Collection::Store => "store",
            Collection::SafetyDepositConfigsByAuctionManagerAndIndex => {
                "safetyDepositConfigsByAuctionManagerAndIndex"
            }
            Collection::WhitelistedCreatorsByCreator => "whitelistedCreatorsByCreator",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite index key of a parent account and an ordinal
pub fn composite_key(parent: &Pubkey, ordinal: u64) -> String {
    format!("{}-{}", parent, ordinal)
}

/// Why a record produced no index writes without being malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterReason {
    ForeignOwner,
    UnrecognizedKey,
    StoreMismatch,
    NotAuthoritative,
}

impl fmt::Display for FilterReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterReason::ForeignOwner => write!(f, "foreign owner"),
            FilterReason::UnrecognizedKey => write!(f, "unrecognized key"),
            FilterReason::StoreMismatch => write!(f, "store mismatch"),
            FilterReason::NotAuthoritative => write!(f, "not authoritative"),
        }
    }
}

/// Result of routing a single record
#[derive(Debug)]
pub enum RouteOutcome {
    /// Collections written, in write order
    Indexed(Vec<Collection>),
    Filtered(FilterReason),
    Failed(IndexerError),
}

impl RouteOutcome {
    pub fn is_indexed(&self) -> bool {
        matches!(self, RouteOutcome::Indexed(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RouteOutcome::Failed(_))
    }

    pub fn writes(&self) -> &[Collection] {
        match self {
            RouteOutcome::Indexed(collections) => collections,
            _ => &[],
        }
    }
}

/// Aggregate counts for a routed batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub indexed: usize,
    pub filtered: usize,
    pub failed: usize,
    pub writes: usize,
}

impl BatchSummary {
    pub fn record(&mut self, outcome: &RouteOutcome) {
        match outcome {
            RouteOutcome::Indexed(collections) => {
                self.indexed += 1;
                self.writes += collections.len();
            }
            RouteOutcome::Filtered(_) => self.filtered += 1,
            RouteOutcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.indexed + self.filtered + self.failed
    }
}
