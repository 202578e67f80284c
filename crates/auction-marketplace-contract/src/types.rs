/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use soroban_kit::{key_constraint, soroban_tools, storage};
use soroban_sdk::{contracterror, contracttype, Address, Env, String};

#[derive(Clone)]
#[contracttype]
#[key_constraint(DataKeyConstraint)]
pub enum DataKey {
    AdminData,
    ItemCounter,
    ItemData(u64),
    EscrowData(u64),
    RefundData(u64, Address),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Validation.
    InvalidExpiry = 1,
    EmptyName = 2,
    InvalidPrice = 3,
    BidTooLow = 4,
    SellerCannotBid = 5,
    ValueMismatch = 6,
    // State.
    ItemNotFound = 10,
    AuctionExpired = 11,
    AuctionNotYetExpired = 12,
    AlreadySettled = 13,
    NothingOwed = 14,
    ItemHasBids = 15,
    ItemCancelled = 16,
    // Access and configuration.
    NotSeller = 20,
    AlreadyInitialized = 21,
    NotInitialized = 22,
    ExtensionDisabled = 23,
}

#[contracttype]
#[storage(Instance, DataKeyConstraint)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminData {
    pub admin: Address,
    // Token contract used as the native value currency for bids.
    pub token: Address,
    pub extendable_items: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HighestBidder {
    None,
    Bidder(Address),
}

impl HighestBidder {
    pub fn address(&self) -> Option<Address> {
        match self {
            HighestBidder::None => None,
            HighestBidder::Bidder(address) => Some(address.clone()),
        }
    }
}

#[contracttype]
#[storage(Persistent, DataKeyConstraint)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemData {
    pub id: u64,
    pub seller: Address,
    pub name: String,
    pub description: String,
    pub starting_price: i128,
    pub expiry_time: u64,
    // Zero until the first accepted bid.
    pub highest_bid: i128,
    pub highest_bidder: HighestBidder,
    // Only set by settlement, never before expiry.
    pub settled: bool,
    // Withdrawn by the seller before any bid, never settles.
    pub cancelled: bool,
}

impl ItemData {
    pub fn new(
        id: u64,
        seller: Address,
        name: String,
        description: String,
        starting_price: i128,
        expiry_time: u64,
    ) -> Self {
        ItemData {
            id,
            seller,
            name,
            description,
            starting_price,
            expiry_time,
            highest_bid: 0,
            highest_bidder: HighestBidder::None,
            settled: false,
            cancelled: false,
        }
    }

    pub fn has_bids(&self) -> bool {
        self.highest_bid > 0
    }
}

/// Funds held against a single item.
///
/// `balance == outstanding + highest_bid` while the item is unsettled,
/// and `balance == outstanding` once the winning bid has been released.
#[contracttype]
#[storage(Persistent, DataKeyConstraint)]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EscrowData {
    pub balance: i128,
    pub outstanding: i128,
}

#[contracttype]
#[storage(Persistent, DataKeyConstraint)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundData {
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SettlementResult {
    pub item_id: u64,
    // `HighestBidder::None` when the item expired without bids.
    pub winner: HighestBidder,
    pub amount: i128,
}
