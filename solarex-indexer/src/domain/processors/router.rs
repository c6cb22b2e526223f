//! Decodes classified accounts and routes them into the named indices

use futures::{stream, StreamExt};
use solana_sdk::pubkey::Pubkey;
use std::sync::Arc;
use tracing::{debug, trace};

use super::classifier::{classify, Classification, RecordFamily};
use crate::core::{
    composite_key, AccountRecord, BatchSummary, Collection, EntityCache, FilterReason,
    IndexSetter, IndexerResult, KeyedAccount, ParsedEntity, RouteOutcome, WhitelistKeyResolver,
};
use crate::domain::models::{
    AuctionManager, BidRedemptionTicket, DecodedEntity, PayoutTicket, PrizeTrackingTicket,
    SafetyDepositConfig, Store, WhitelistedCreator,
};
use crate::domain::name_overrides::NameOverrides;

/// Parser handed to the entity cache for whitelisted creators
pub fn parse_whitelisted_creator(account: &KeyedAccount) -> IndexerResult<ParsedEntity> {
    let creator = WhitelistedCreator::decode(&account.account.data)?;
    Ok(ParsedEntity::new(account, DecodedEntity::WhitelistedCreator(creator)))
}

/// Static routing parameters
#[derive(Debug, Clone)]
pub struct RouterSettings {
    /// Program every routed account must be owned by
    pub program_id: Pubkey,
    /// Store this deployment indexes; `None` disables store filtering
    pub store: Option<Pubkey>,
    /// Maximum accounts in flight in `route_batch`
    pub concurrency: usize,
}

impl RouterSettings {
    pub fn new(program_id: Pubkey, store: Option<Pubkey>) -> Self {
        Self {
            program_id,
            store,
            concurrency: 64,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }
}

/// Records every write issued for one account
struct WriteLog<'a> {
    setter: &'a dyn IndexSetter,
    written: Vec<Collection>,
}

impl<'a> WriteLog<'a> {
    fn new(setter: &'a dyn IndexSetter) -> Self {
        Self {
            setter,
            written: Vec::new(),
        }
    }

    fn set(&mut self, collection: Collection, key: String, value: Arc<ParsedEntity>) {
        debug!(%collection, %key, pubkey = %value.pubkey, "index write");
        self.setter.set(collection, key, value);
        self.written.push(collection);
    }

    fn finish(self) -> RouteOutcome {
        RouteOutcome::Indexed(self.written)
    }
}

/// Routes Solarex accounts into indices.
///
/// Stateless apart from its collaborators; any number of `route` calls
/// may run concurrently against the same router and setter.
pub struct AccountRouter {
    settings: RouterSettings,
    cache: Arc<dyn EntityCache>,
    resolver: Arc<dyn WhitelistKeyResolver>,
    names: Arc<NameOverrides>,
}

impl AccountRouter {
    pub fn new(
        settings: RouterSettings,
        cache: Arc<dyn EntityCache>,
        resolver: Arc<dyn WhitelistKeyResolver>,
        names: Arc<NameOverrides>,
    ) -> Self {
        Self {
            settings,
            cache,
            resolver,
            names,
        }
    }

    pub fn classify(&self, account: &AccountRecord) -> Classification {
        classify(account, &self.settings.program_id)
    }

    /// Route one account. Never fails: decode and lookup errors come back
    /// as `RouteOutcome::Failed` with no index write performed.
    pub async fn route(
        &self,
        account: &KeyedAccount,
        setter: &dyn IndexSetter,
        include_all_stores: bool,
    ) -> RouteOutcome {
        let family = match self.classify(&account.account) {
            Classification::Foreign => return RouteOutcome::Filtered(FilterReason::ForeignOwner),
            Classification::Unrecognized => {
                trace!(pubkey = %account.pubkey, "unrecognized account key");
                return RouteOutcome::Filtered(FilterReason::UnrecognizedKey);
            }
            Classification::Family(family) => family,
        };

        let mut writes = WriteLog::new(setter);
        let routed = match family {
            RecordFamily::AuctionManager => {
                self.route_auction_manager(account, &mut writes, include_all_stores)
            }
            RecordFamily::BidRedemptionTicket => self.route_bid_redemption(account, &mut writes),
            RecordFamily::PayoutTicket => self.route_payout_ticket(account, &mut writes),
            RecordFamily::PrizeTrackingTicket => self.route_prize_tracking(account, &mut writes),
            RecordFamily::Store => self.route_store(account, &mut writes),
            RecordFamily::SafetyDepositConfig => {
                self.route_safety_deposit_config(account, &mut writes)
            }
            RecordFamily::WhitelistedCreator => {
                self.route_whitelisted_creator(account, &mut writes).await
            }
        };

        match routed {
            Ok(Some(reason)) => {
                trace!(pubkey = %account.pubkey, family = family.name(), %reason, "filtered");
                RouteOutcome::Filtered(reason)
            }
            Ok(None) => writes.finish(),
            Err(e) => RouteOutcome::Failed(e),
        }
    }

    /// Route a batch with at most `concurrency` accounts in flight
    pub async fn route_batch(
        &self,
        accounts: &[KeyedAccount],
        setter: &dyn IndexSetter,
        include_all_stores: bool,
    ) -> BatchSummary {
        let concurrency = self.settings.concurrency.max(1);
        stream::iter(accounts)
            .map(move |account| self.route(account, setter, include_all_stores))
            .buffer_unordered(concurrency)
            .fold(BatchSummary::default(), |mut summary, outcome| async move {
                summary.record(&outcome);
                summary
            })
            .await
    }

    // Each family handler returns `Some(reason)` when the account is
    // filtered after classification, `None` once its writes are issued.

    fn route_auction_manager(
        &self,
        account: &KeyedAccount,
        writes: &mut WriteLog<'_>,
        include_all_stores: bool,
    ) -> IndexerResult<Option<FilterReason>> {
        let data = &account.account.data;
        let store = AuctionManager::store_from_raw(data)?;
        let store_matches = self.settings.store.map_or(true, |expected| expected == store);
        if !store_matches && !include_all_stores {
            return Ok(Some(FilterReason::StoreMismatch));
        }

        let manager = AuctionManager::decode(data)?;
        let key = manager.auction().to_string();
        let entity = ParsedEntity::new(account, DecodedEntity::AuctionManager(manager));
        writes.set(Collection::AuctionManagersByAuction, key, Arc::new(entity));
        Ok(None)
    }

    fn route_bid_redemption(
        &self,
        account: &KeyedAccount,
        writes: &mut WriteLog<'_>,
    ) -> IndexerResult<Option<FilterReason>> {
        let ticket = BidRedemptionTicket::decode(&account.account.data)?;
        // winner indices are 0-based, so Some(0) is indexed
        let winner_key = ticket.as_v2().and_then(|v2| {
            v2.winner_index
                .map(|index| composite_key(&v2.auction_manager, index))
        });

        let entity = Arc::new(ParsedEntity::new(
            account,
            DecodedEntity::BidRedemptionTicket(ticket),
        ));
        writes.set(
            Collection::BidRedemptions,
            account.pubkey.to_string(),
            entity.clone(),
        );
        if let Some(key) = winner_key {
            writes.set(
                Collection::BidRedemptionV2sByAuctionManagerAndWinningIndex,
                key,
                entity,
            );
        }
        Ok(None)
    }

    fn route_payout_ticket(
        &self,
        account: &KeyedAccount,
        writes: &mut WriteLog<'_>,
    ) -> IndexerResult<Option<FilterReason>> {
        let ticket = PayoutTicket::decode(&account.account.data)?;
        let entity = ParsedEntity::new(account, DecodedEntity::PayoutTicket(ticket));
        writes.set(
            Collection::PayoutTickets,
            account.pubkey.to_string(),
            Arc::new(entity),
        );
        Ok(None)
    }

    fn route_prize_tracking(
        &self,
        account: &KeyedAccount,
        writes: &mut WriteLog<'_>,
    ) -> IndexerResult<Option<FilterReason>> {
        let ticket = PrizeTrackingTicket::decode(&account.account.data)?;
        let entity = ParsedEntity::new(account, DecodedEntity::PrizeTrackingTicket(ticket));
        writes.set(
            Collection::PrizeTrackingTickets,
            account.pubkey.to_string(),
            Arc::new(entity),
        );
        Ok(None)
    }

    fn route_store(
        &self,
        account: &KeyedAccount,
        writes: &mut WriteLog<'_>,
    ) -> IndexerResult<Option<FilterReason>> {
        let store = Store::decode(&account.account.data)?;
        let entity = Arc::new(ParsedEntity::new(account, DecodedEntity::Store(store)));
        let key = account.pubkey.to_string();

        writes.set(Collection::Stores, key.clone(), entity.clone());
        if self.settings.store == Some(account.pubkey) {
            writes.set(Collection::Store, key, entity);
        }
        Ok(None)
    }

    fn route_safety_deposit_config(
        &self,
        account: &KeyedAccount,
        writes: &mut WriteLog<'_>,
    ) -> IndexerResult<Option<FilterReason>> {
        let config = SafetyDepositConfig::decode(&account.account.data)?;
        let key = composite_key(&config.auction_manager, config.order);
        let entity = ParsedEntity::new(account, DecodedEntity::SafetyDepositConfig(config));
        writes.set(
            Collection::SafetyDepositConfigsByAuctionManagerAndIndex,
            key,
            Arc::new(entity),
        );
        Ok(None)
    }

    async fn route_whitelisted_creator(
        &self,
        account: &KeyedAccount,
        writes: &mut WriteLog<'_>,
    ) -> IndexerResult<Option<FilterReason>> {
        let creator = WhitelistedCreator::decode(&account.account.data)?;

        let authoritative = self.resolver.resolve(&creator.address).await?;
        if authoritative != account.pubkey {
            return Ok(Some(FilterReason::NotAuthoritative));
        }

        let mut entity = self
            .cache
            .register(account, parse_whitelisted_creator, false)
            .await?;
        if let Some(display) = self.names.get(&creator.address) {
            // cache and index hold the same enriched entity
            let mut enriched = (*entity).clone();
            if let DecodedEntity::WhitelistedCreator(info) = &mut enriched.info {
                info.merge_display(display);
            }
            entity = Arc::new(enriched);
            self.cache.replace(entity.clone())?;
        }

        writes.set(
            Collection::WhitelistedCreatorsByCreator,
            creator.address.to_string(),
            entity,
        );
        Ok(None)
    }
}
