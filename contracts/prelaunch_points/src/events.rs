//! Contract events. Topics lead with a short symbol; indexed parties follow.

use shared_utils::Events;
use soroban_sdk::{symbol_short, Address, BytesN, Env};

pub fn locked(e: &Env, user: &Address, amount: i128, token: &Address, referral: &BytesN<32>) {
    Events::emit_with_topics(
        e,
        (symbol_short!("Locked"), user.clone()),
        (amount, token.clone(), referral.clone()),
    );
}

pub fn withdrawn(e: &Env, user: &Address, token: &Address, amount: i128) {
    Events::emit_with_topics(
        e,
        (symbol_short!("Withdrawn"), user.clone()),
        (token.clone(), amount),
    );
}

pub fn claimed(e: &Env, user: &Address, token: &Address, amount: i128) {
    Events::emit_with_topics(
        e,
        (symbol_short!("Claimed"), user.clone()),
        (token.clone(), amount),
    );
}

pub fn staked(e: &Env, user: &Address, amount: i128, option: u32) {
    Events::emit_with_topics(e, (symbol_short!("Staked"), user.clone()), (amount, option));
}

pub fn token_allowed(e: &Env, token: &Address) {
    Events::emit_with_topics(e, (symbol_short!("Allowed"), token.clone()), ());
}

pub fn loop_addresses_updated(e: &Env, output_asset: &Address, staking_vault: &Address, activation: u64) {
    Events::emit(
        e,
        symbol_short!("LoopSet"),
        (output_asset.clone(), staking_vault.clone(), activation),
    );
}

pub fn converted(e: &Env, converted_supply: i128, total_output: i128) {
    Events::emit(e, symbol_short!("Converted"), (converted_supply, total_output));
}

pub fn recovered(e: &Env, token: &Address, amount: i128, to: &Address) {
    Events::emit_with_topics(
        e,
        (symbol_short!("Recovered"), token.clone()),
        (amount, to.clone()),
    );
}

pub fn owner_proposed(e: &Env, owner: &Address, candidate: &Address) {
    Events::emit(e, symbol_short!("OwnProp"), (owner.clone(), candidate.clone()));
}

pub fn owner_updated(e: &Env, previous: &Address, owner: &Address) {
    Events::emit(e, symbol_short!("OwnUpdt"), (previous.clone(), owner.clone()));
}
