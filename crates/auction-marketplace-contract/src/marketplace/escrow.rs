/*
    Date: 2023
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2023 Litemint LLC

    MIT License
*/

use soroban_kit::storage;
use soroban_sdk::{log, token, Address, Env};

use super::{events, ledger_times};
use crate::types::{DataKey, Error, EscrowData, RefundData};

/// Bid funds held by the contract, per item.
///
/// Only the bid validator and the settlement engine move funds through here.
/// Outbound transfers always happen after the ledger entries are updated.
/// Amounts that would overflow or drive a balance negative fail `ValueMismatch`.
pub struct EscrowStore;

impl EscrowStore {
    pub fn get(env: &Env, item_id: u64) -> EscrowData {
        storage::get::<DataKey, EscrowData>(env, &DataKey::EscrowData(item_id))
            .unwrap_or_default()
    }

    pub fn owed(env: &Env, item_id: u64, beneficiary: &Address) -> i128 {
        storage::get::<DataKey, RefundData>(
            env,
            &DataKey::RefundData(item_id, beneficiary.clone()),
        )
        .map(|refund| refund.amount)
        .unwrap_or(0)
    }

    // Pulls `amount` from the payer and checks the contract actually received it.
    pub fn deposit(
        env: &Env,
        token: &Address,
        item_id: u64,
        payer: &Address,
        amount: i128,
    ) -> Result<(), Error> {
        let client = token::Client::new(env, token);
        let contract = env.current_contract_address();

        let before = client.balance(&contract);
        client.transfer(payer, &contract, &amount);
        let received = client
            .balance(&contract)
            .checked_sub(before)
            .ok_or(Error::ValueMismatch)?;
        if received != amount {
            return Err(Error::ValueMismatch);
        }

        let mut escrow = Self::get(env, item_id);
        escrow.balance = Self::credit(escrow.balance, amount)?;
        Self::save(env, item_id, &escrow);
        Ok(())
    }

    pub fn queue_refund(
        env: &Env,
        item_id: u64,
        beneficiary: &Address,
        amount: i128,
    ) -> Result<(), Error> {
        let key = DataKey::RefundData(item_id, beneficiary.clone());
        let owed = Self::credit(Self::owed(env, item_id, beneficiary), amount)?;
        storage::set::<DataKey, RefundData>(env, &key, &RefundData { amount: owed });
        storage::extend_ttl::<DataKey, RefundData>(
            env,
            &key,
            ledger_times::BUMP_THRESHOLD,
            ledger_times::BUMP_AMOUNT,
        );

        let mut escrow = Self::get(env, item_id);
        escrow.outstanding = Self::credit(escrow.outstanding, amount)?;
        Self::save(env, item_id, &escrow);

        events::refund_queued(env, item_id, beneficiary, amount);
        Ok(())
    }

    pub fn payout(
        env: &Env,
        token: &Address,
        item_id: u64,
        beneficiary: &Address,
    ) -> Result<i128, Error> {
        let amount = Self::owed(env, item_id, beneficiary);
        if amount <= 0 {
            return Err(Error::NothingOwed);
        }

        // Clear the obligation before paying it.
        storage::remove::<DataKey, RefundData>(
            env,
            &DataKey::RefundData(item_id, beneficiary.clone()),
        );
        let mut escrow = Self::get(env, item_id);
        escrow.balance = Self::debit(escrow.balance, amount)?;
        escrow.outstanding = Self::debit(escrow.outstanding, amount)?;
        Self::save(env, item_id, &escrow);

        token::Client::new(env, token).transfer(
            &env.current_contract_address(),
            beneficiary,
            &amount,
        );

        events::refund_paid(env, item_id, beneficiary, amount);
        log!(env, "refund paid", item_id, amount);
        Ok(amount)
    }

    // Callable once per item, the settlement engine marks the item settled first.
    pub fn release_to_seller(
        env: &Env,
        token: &Address,
        item_id: u64,
        seller: &Address,
        amount: i128,
    ) -> Result<i128, Error> {
        let mut escrow = Self::get(env, item_id);
        escrow.balance = Self::debit(escrow.balance, amount)?;
        Self::save(env, item_id, &escrow);

        token::Client::new(env, token).transfer(&env.current_contract_address(), seller, &amount);
        Ok(amount)
    }

    pub(crate) fn credit(held: i128, amount: i128) -> Result<i128, Error> {
        held.checked_add(amount).ok_or(Error::ValueMismatch)
    }

    pub(crate) fn debit(held: i128, amount: i128) -> Result<i128, Error> {
        held.checked_sub(amount)
            .filter(|remaining| *remaining >= 0)
            .ok_or(Error::ValueMismatch)
    }

    fn save(env: &Env, item_id: u64, escrow: &EscrowData) {
        let key = DataKey::EscrowData(item_id);
        storage::set::<DataKey, EscrowData>(env, &key, escrow);
        storage::extend_ttl::<DataKey, EscrowData>(
            env,
            &key,
            ledger_times::BUMP_THRESHOLD,
            ledger_times::BUMP_AMOUNT,
        );
    }
}
