/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use soroban_kit::storage;
use soroban_sdk::{Address, Env};

use super::registry::ItemRegistry;
use crate::types::{AdminData, DataKey, Error, ItemData};

// Preconditions shared by bidding, settlement and seller operations.
// Every check runs before the caller touches storage.
pub struct AccessGuard;

impl AccessGuard {
    pub fn config(env: &Env) -> Result<AdminData, Error> {
        storage::get::<DataKey, AdminData>(env, &DataKey::AdminData)
            .ok_or(Error::NotInitialized)
    }

    pub fn require_item(env: &Env, item_id: u64) -> Result<ItemData, Error> {
        ItemRegistry::get(env, item_id)
    }

    pub fn require_running(env: &Env, item: &ItemData) -> Result<(), Error> {
        if env.ledger().timestamp() >= item.expiry_time {
            Err(Error::AuctionExpired)
        } else {
            Ok(())
        }
    }

    pub fn require_expired(env: &Env, item: &ItemData) -> Result<(), Error> {
        if env.ledger().timestamp() < item.expiry_time {
            Err(Error::AuctionNotYetExpired)
        } else {
            Ok(())
        }
    }

    pub fn require_not_cancelled(item: &ItemData) -> Result<(), Error> {
        if item.cancelled {
            Err(Error::ItemCancelled)
        } else {
            Ok(())
        }
    }

    pub fn require_unsettled(item: &ItemData) -> Result<(), Error> {
        if item.settled {
            Err(Error::AlreadySettled)
        } else {
            Ok(())
        }
    }

    pub fn require_not_seller(item: &ItemData, caller: &Address) -> Result<(), Error> {
        if item.seller == *caller {
            Err(Error::SellerCannotBid)
        } else {
            Ok(())
        }
    }

    pub fn require_seller(item: &ItemData, caller: &Address) -> Result<(), Error> {
        if item.seller != *caller {
            Err(Error::NotSeller)
        } else {
            Ok(())
        }
    }

    pub fn require_no_bids(item: &ItemData) -> Result<(), Error> {
        if item.has_bids() {
            Err(Error::ItemHasBids)
        } else {
            Ok(())
        }
    }
}
