/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use soroban_sdk::{log, Address, Env};

use super::{escrow::EscrowStore, events, guard::AccessGuard, registry::ItemRegistry};
use crate::types::{Error, ItemData};

pub struct BidValidator;

impl BidValidator {
    pub fn place_bid(
        env: &Env,
        token: &Address,
        item_id: u64,
        bidder: &Address,
        amount: i128,
    ) -> Result<ItemData, Error> {
        let mut item = AccessGuard::require_item(env, item_id)?;
        AccessGuard::require_not_cancelled(&item)?;
        AccessGuard::require_running(env, &item)?;
        AccessGuard::require_unsettled(&item)?;
        AccessGuard::require_not_seller(&item, bidder)?;
        Self::require_above(&item, amount)?;

        // The outbid amount turns into a refund obligation, never dropped.
        if let Some(previous) = item.highest_bidder.address() {
            EscrowStore::queue_refund(env, item_id, &previous, item.highest_bid)?;
        }
        ItemRegistry::record_bid(env, &mut item, bidder, amount);
        EscrowStore::deposit(env, token, item_id, bidder, amount)?;

        events::bid_placed(env, item_id, bidder, amount);
        log!(env, "bid accepted", item_id, amount);
        Ok(item)
    }

    // Ties are rejected so accepted bids form a strictly increasing sequence.
    fn require_above(item: &ItemData, amount: i128) -> Result<(), Error> {
        let too_low = if item.has_bids() {
            amount <= item.highest_bid
        } else {
            amount < item.starting_price
        };
        if too_low {
            Err(Error::BidTooLow)
        } else {
            Ok(())
        }
    }
}
