/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

//! The `marketplace` module implements a timed English auction marketplace
//! with escrowed bids and pull-based refunds.
//!
//! Components:
//!
//! - Item registry (see: registry.rs) storing item metadata and auction state.
//! - Escrow store (see: escrow.rs) holding bid funds and refund obligations.
//! - Bid validator (see: bidding.rs) enforcing timing and strict bid increase.
//! - Settlement engine (see: settlement.rs) releasing the winning bid to the seller.
//! - Access guard (see: guard.rs) with the preconditions shared by all of the above.
//!
//! Storage is always updated before any token leaves the contract.

pub mod bidding;
pub mod escrow;
pub mod events;
pub mod guard;
pub mod registry;
pub mod settlement;

// Items are kept as an audit record, every entry we write is extended.
pub mod ledger_times {
    // Assuming 6 seconds average time per ledger.
    pub const LEDGERS_PER_MINUTE: u32 = 10;
    pub const LEDGERS_PER_HOUR: u32 = LEDGERS_PER_MINUTE * 60;
    pub const LEDGERS_PER_DAY: u32 = LEDGERS_PER_HOUR * 24;

    pub const BUMP_THRESHOLD: u32 = LEDGERS_PER_DAY * 7;
    pub const BUMP_AMOUNT: u32 = LEDGERS_PER_DAY * 30;
}
