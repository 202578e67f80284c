/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use soroban_kit::storage;
use soroban_sdk::{log, Address, Env, String};

use super::{events, ledger_times};
use crate::types::{AdminData, DataKey, Error, HighestBidder, ItemData};

pub struct ItemRegistry;

impl ItemRegistry {
    pub fn create(
        env: &Env,
        seller: &Address,
        name: String,
        description: String,
        starting_price: i128,
        expiry_time: u64,
    ) -> Result<u64, Error> {
        if expiry_time <= env.ledger().timestamp() {
            return Err(Error::InvalidExpiry);
        }
        if name.len() == 0 {
            return Err(Error::EmptyName);
        }
        // A zero price would be indistinguishable from "no bid yet".
        if starting_price <= 0 {
            return Err(Error::InvalidPrice);
        }

        let id = Self::count(env) + 1;
        env.storage().instance().set(&DataKey::ItemCounter, &id);
        storage::extend_ttl::<DataKey, AdminData>(
            env,
            &DataKey::AdminData,
            ledger_times::BUMP_THRESHOLD,
            ledger_times::BUMP_AMOUNT,
        );

        let item = ItemData::new(
            id,
            seller.clone(),
            name,
            description,
            starting_price,
            expiry_time,
        );
        Self::save(env, &item);

        events::item_posted(env, id, seller, starting_price, expiry_time);
        log!(env, "item posted", id, starting_price, expiry_time);
        Ok(id)
    }

    pub fn get(env: &Env, item_id: u64) -> Result<ItemData, Error> {
        storage::get::<DataKey, ItemData>(env, &DataKey::ItemData(item_id))
            .ok_or(Error::ItemNotFound)
    }

    pub fn count(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get::<DataKey, u64>(&DataKey::ItemCounter)
            .unwrap_or(0)
    }

    // Only called by the bid validator once a bid has been accepted.
    pub(crate) fn record_bid(env: &Env, item: &mut ItemData, bidder: &Address, amount: i128) {
        item.highest_bid = amount;
        item.highest_bidder = HighestBidder::Bidder(bidder.clone());
        Self::save(env, item);
    }

    // Idempotency and expiry are enforced by the access guard before the call.
    pub(crate) fn mark_settled(env: &Env, item: &mut ItemData) {
        item.settled = true;
        Self::save(env, item);
    }

    pub(crate) fn mark_cancelled(env: &Env, item: &mut ItemData) {
        item.cancelled = true;
        Self::save(env, item);
    }

    pub(crate) fn set_expiry(env: &Env, item: &mut ItemData, expiry_time: u64) {
        item.expiry_time = expiry_time;
        Self::save(env, item);
    }

    fn save(env: &Env, item: &ItemData) {
        let key = DataKey::ItemData(item.id);
        storage::set::<DataKey, ItemData>(env, &key, item);
        storage::extend_ttl::<DataKey, ItemData>(
            env,
            &key,
            ledger_times::BUMP_THRESHOLD,
            ledger_times::BUMP_AMOUNT,
        );
    }
}
