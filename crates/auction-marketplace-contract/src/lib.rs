/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

//! Auction marketplace: sellers post items with a starting price and an expiry,
//! buyers place escrowed bids, the highest bid at expiry goes to the seller and
//! outbid bidders withdraw their refunds.

#![no_std]

mod marketplace; // Item lifecycle, escrow and settlement.
mod types; // Contract types.

use soroban_kit::storage;
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, vec, Address, BytesN, Env, String, Vec,
};

use crate::marketplace::{
    bidding::BidValidator, escrow::EscrowStore, events, guard::AccessGuard, ledger_times,
    registry::ItemRegistry, settlement::SettlementEngine,
};
use types::{AdminData, DataKey, Error, EscrowData, ItemData, SettlementResult};

contractmeta!(
    key = "desc",
    val = "Auction marketplace smart contract with escrowed bids"
);

pub trait AuctionMarketplaceTrait {
    // Upgrade this contract.
    // Admin authorization required.
    fn upgrade(env: Env, wasm_hash: BytesN<32>) -> Result<(), Error>;

    // Post a new item for auction.
    // Return the new sequential `item_id`.
    // `expiry_time` is an absolute ledger timestamp and must be in the future.
    // Seller authorization required.
    fn post_item(
        env: Env,
        seller: Address,
        name: String,
        description: String,
        starting_price: i128,
        expiry_time: u64,
    ) -> Result<u64, Error>;

    // Place a bid, `amount` is transferred from the bidder into escrow.
    // The first bid must meet the starting price, later bids must be strictly higher.
    // The previous highest bidder becomes owed a refund.
    // Bidder authorization required.
    fn place_bid(env: Env, item_id: u64, bidder: Address, amount: i128) -> Result<(), Error>;

    // Settle an expired item, paying the highest bid to the seller.
    // No authorization required.
    fn settle(env: Env, item_id: u64) -> Result<SettlementResult, Error>;

    // Withdraw the refund owed on an item after being outbid.
    // Beneficiary authorization required.
    fn withdraw_refund(env: Env, item_id: u64, beneficiary: Address) -> Result<i128, Error>;

    // Withdraw an item that received no bids.
    // A cancelled item is never settled and accepts no further bids.
    // Seller authorization required.
    fn cancel_item(env: Env, item_id: u64, seller: Address) -> Result<(), Error>;

    // Extend the expiry of a running auction by `duration` seconds.
    // Require admin settings `extendable_items` set to true.
    // Seller authorization required.
    fn extend(env: Env, item_id: u64, duration: u64) -> Result<u64, Error>;

    // Retrieves an item.
    // No authorization required.
    fn get_item(env: Env, item_id: u64) -> Result<ItemData, Error>;

    // Amount currently owed to `beneficiary` on an item.
    // No authorization required.
    fn get_refund(env: Env, item_id: u64, beneficiary: Address) -> i128;

    // Funds held for an item and the refunds outstanding against them.
    // No authorization required.
    fn get_escrow(env: Env, item_id: u64) -> EscrowData;

    // Number of items posted so far.
    fn item_count(env: Env) -> u64;

    // Contract administration.
    // `token` is the asset contract used to escrow bids.
    fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        extendable_items: bool,
    ) -> Result<(), Error>;

    // Retrieve the contract version.
    fn version(env: Env) -> Vec<u32>;
}

#[contract]
struct AuctionMarketplace;

#[contractimpl]
impl AuctionMarketplaceTrait for AuctionMarketplace {
    fn upgrade(env: Env, wasm_hash: BytesN<32>) -> Result<(), Error> {
        AccessGuard::config(&env)?.admin.require_auth();
        env.deployer().update_current_contract_wasm(wasm_hash);
        Ok(())
    }

    fn post_item(
        env: Env,
        seller: Address,
        name: String,
        description: String,
        starting_price: i128,
        expiry_time: u64,
    ) -> Result<u64, Error> {
        AccessGuard::config(&env)?;
        seller.require_auth();
        ItemRegistry::create(
            &env,
            &seller,
            name,
            description,
            starting_price,
            expiry_time,
        )
    }

    fn place_bid(env: Env, item_id: u64, bidder: Address, amount: i128) -> Result<(), Error> {
        let config = AccessGuard::config(&env)?;
        bidder.require_auth();
        BidValidator::place_bid(&env, &config.token, item_id, &bidder, amount)?;
        Ok(())
    }

    fn settle(env: Env, item_id: u64) -> Result<SettlementResult, Error> {
        let config = AccessGuard::config(&env)?;
        SettlementEngine::settle(&env, &config.token, item_id)
    }

    fn withdraw_refund(env: Env, item_id: u64, beneficiary: Address) -> Result<i128, Error> {
        let config = AccessGuard::config(&env)?;
        beneficiary.require_auth();
        AccessGuard::require_item(&env, item_id)?;
        EscrowStore::payout(&env, &config.token, item_id, &beneficiary)
    }

    fn cancel_item(env: Env, item_id: u64, seller: Address) -> Result<(), Error> {
        AccessGuard::config(&env)?;
        seller.require_auth();
        SettlementEngine::cancel(&env, item_id, &seller)
    }

    fn extend(env: Env, item_id: u64, duration: u64) -> Result<u64, Error> {
        if !AccessGuard::config(&env)?.extendable_items {
            return Err(Error::ExtensionDisabled);
        }

        let mut item = AccessGuard::require_item(&env, item_id)?;
        item.seller.require_auth();
        AccessGuard::require_not_cancelled(&item)?;
        AccessGuard::require_unsettled(&item)?;
        AccessGuard::require_running(&env, &item)?;
        if duration == 0 {
            return Err(Error::InvalidExpiry);
        }

        let expiry_time = item
            .expiry_time
            .checked_add(duration)
            .ok_or(Error::InvalidExpiry)?;
        ItemRegistry::set_expiry(&env, &mut item, expiry_time);
        events::auction_extended(&env, item_id, expiry_time);
        Ok(expiry_time)
    }

    fn get_item(env: Env, item_id: u64) -> Result<ItemData, Error> {
        ItemRegistry::get(&env, item_id)
    }

    fn get_refund(env: Env, item_id: u64, beneficiary: Address) -> i128 {
        EscrowStore::owed(&env, item_id, &beneficiary)
    }

    fn get_escrow(env: Env, item_id: u64) -> EscrowData {
        EscrowStore::get(&env, item_id)
    }

    fn item_count(env: Env) -> u64 {
        ItemRegistry::count(&env)
    }

    fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        extendable_items: bool,
    ) -> Result<(), Error> {
        if storage::has::<DataKey, AdminData>(&env, &DataKey::AdminData) {
            return Err(Error::AlreadyInitialized);
        }

        storage::set::<DataKey, AdminData>(
            &env,
            &DataKey::AdminData,
            &AdminData {
                admin,
                token,
                extendable_items,
            },
        );
        storage::extend_ttl::<DataKey, AdminData>(
            &env,
            &DataKey::AdminData,
            ledger_times::BUMP_THRESHOLD,
            ledger_times::BUMP_AMOUNT,
        );
        log!(&env, "marketplace initialized");
        Ok(())
    }

    fn version(env: Env) -> Vec<u32> {
        vec![&env, 0, 1, 0] // "0.1.0"
    }
}
