/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::types::HighestBidder;

// Event topics.
pub const ITEM: Symbol = symbol_short!("ITEM");
pub const BID: Symbol = symbol_short!("BID");
pub const REFUND: Symbol = symbol_short!("REFUND");
pub const AUCTION: Symbol = symbol_short!("AUCTION");

pub fn item_posted(
    env: &Env,
    item_id: u64,
    seller: &Address,
    starting_price: i128,
    expiry_time: u64,
) {
    env.events().publish(
        (ITEM, symbol_short!("posted")),
        (item_id, seller.clone(), starting_price, expiry_time),
    );
}

pub fn bid_placed(env: &Env, item_id: u64, bidder: &Address, amount: i128) {
    env.events()
        .publish((BID, symbol_short!("placed")), (item_id, bidder.clone(), amount));
}

pub fn refund_queued(env: &Env, item_id: u64, beneficiary: &Address, amount: i128) {
    env.events().publish(
        (REFUND, symbol_short!("queued")),
        (item_id, beneficiary.clone(), amount),
    );
}

pub fn refund_paid(env: &Env, item_id: u64, beneficiary: &Address, amount: i128) {
    env.events().publish(
        (REFUND, symbol_short!("paid")),
        (item_id, beneficiary.clone(), amount),
    );
}

pub fn auction_settled(env: &Env, item_id: u64, winner: &HighestBidder, amount: i128) {
    env.events().publish(
        (AUCTION, symbol_short!("settled")),
        (item_id, winner.clone(), amount),
    );
}

pub fn auction_cancelled(env: &Env, item_id: u64, seller: &Address) {
    env.events()
        .publish((AUCTION, symbol_short!("cancelled")), (item_id, seller.clone()));
}

pub fn auction_extended(env: &Env, item_id: u64, expiry_time: u64) {
    env.events()
        .publish((AUCTION, symbol_short!("extended")), (item_id, expiry_time));
}
