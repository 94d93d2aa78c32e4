//! Locking ledger: per-depositor, per-token balances and per-token totals.
//!
//! `TotalLocked(token)` always equals the sum of every `Balance` entry for that
//! token; every mutation goes through [`credit`] or [`take`].

use crate::storage::{BalanceKey, DataKey};
use shared_utils::SafeMath;
use soroban_sdk::{Address, Env};

fn balance_key(user: &Address, token: &Address) -> DataKey {
    DataKey::Balance(BalanceKey {
        user: user.clone(),
        token: token.clone(),
    })
}

pub fn balance_of(e: &Env, user: &Address, token: &Address) -> i128 {
    e.storage()
        .persistent()
        .get::<_, i128>(&balance_key(user, token))
        .unwrap_or(0)
}

pub fn total_locked(e: &Env, token: &Address) -> i128 {
    e.storage()
        .persistent()
        .get::<_, i128>(&DataKey::TotalLocked(token.clone()))
        .unwrap_or(0)
}

fn set_total_locked(e: &Env, token: &Address, total: i128) {
    e.storage()
        .persistent()
        .set(&DataKey::TotalLocked(token.clone()), &total);
}

/// Add `amount` to the user's entry and to the token total.
pub fn credit(e: &Env, user: &Address, token: &Address, amount: i128) {
    let balance = SafeMath::add(balance_of(e, user, token), amount);
    e.storage()
        .persistent()
        .set(&balance_key(user, token), &balance);
    set_total_locked(e, token, SafeMath::add(total_locked(e, token), amount));
}

/// Zero the user's entry and return what it held.
pub fn take(e: &Env, user: &Address, token: &Address) -> i128 {
    let amount = balance_of(e, user, token);
    if amount == 0 {
        return 0;
    }
    e.storage().persistent().remove(&balance_key(user, token));
    set_total_locked(e, token, SafeMath::sub(total_locked(e, token), amount));
    amount
}
