/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use soroban_sdk::{log, Address, Env};

use super::{escrow::EscrowStore, events, guard::AccessGuard, registry::ItemRegistry};
use crate::types::{Error, HighestBidder, SettlementResult};

pub struct SettlementEngine;

impl SettlementEngine {
    // Permissionless: anyone may settle once the item has expired.
    pub fn settle(env: &Env, token: &Address, item_id: u64) -> Result<SettlementResult, Error> {
        let mut item = AccessGuard::require_item(env, item_id)?;
        AccessGuard::require_not_cancelled(&item)?;
        AccessGuard::require_expired(env, &item)?;
        AccessGuard::require_unsettled(&item)?;

        // Settled is committed before any fund movement.
        ItemRegistry::mark_settled(env, &mut item);

        let amount = match &item.highest_bidder {
            HighestBidder::Bidder(_) => EscrowStore::release_to_seller(
                env,
                token,
                item_id,
                &item.seller,
                item.highest_bid,
            )?,
            // Unsold, nothing was escrowed.
            HighestBidder::None => 0,
        };
        let result = SettlementResult {
            item_id,
            winner: item.highest_bidder.clone(),
            amount,
        };

        events::auction_settled(env, item_id, &result.winner, result.amount);
        log!(env, "auction settled", item_id, result.amount);
        Ok(result)
    }

    // Withdraws an unsold item. The item stays unsettled.
    pub fn cancel(env: &Env, item_id: u64, seller: &Address) -> Result<(), Error> {
        let mut item = AccessGuard::require_item(env, item_id)?;
        AccessGuard::require_seller(&item, seller)?;
        AccessGuard::require_not_cancelled(&item)?;
        AccessGuard::require_unsettled(&item)?;
        AccessGuard::require_no_bids(&item)?;

        ItemRegistry::mark_cancelled(env, &mut item);
        events::auction_cancelled(env, item_id, seller);
        log!(env, "auction cancelled", item_id);
        Ok(())
    }
}
