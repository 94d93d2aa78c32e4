#![no_std]

//! Mock Loop Contracts for Integration Testing
//!
//! These contracts stand in for the external collaborators of the prelaunch
//! contract so tests can drive every path deterministically:
//! - `MockLpToken`: the output asset, minting against deposits of the base token
//! - `MockLpVault`: the staking vault
//! - `MockRouter` / `MockAggregator`: the two exchange adapters
//!
//! `MockRouter` can also be armed with a callback that tries to re-enter the
//! caller's `claim` mid-swap, modelling a hostile adapter.
//!
//! Rates are expressed in basis points so tests can model fees, haircuts and
//! outright bad fills. Function names are unique across the four contracts so
//! the crate still links as a single wasm module.

use soroban_sdk::{
    contract, contractimpl, contracttype, token, vec, Address, Bytes, Env, IntoVal, Symbol, Val,
};

pub const BPS_DENOMINATOR: i128 = 10_000;

fn apply_rate(amount: i128, rate_bps: u32) -> i128 {
    amount * rate_bps as i128 / BPS_DENOMINATOR
}

// ============================================================================
// Output asset
// ============================================================================

#[contracttype]
#[derive(Clone)]
pub enum LpKey {
    Underlying,
    MintRate,
    TotalSupply,
    Balance(Address),
}

/// Output asset minting `amount * rate / 10_000` for every unit of base deposited.
#[contract]
pub struct MockLpToken;

#[contractimpl]
impl MockLpToken {
    pub fn init_lp(e: Env, underlying: Address, mint_rate_bps: u32) {
        if e.storage().instance().has(&LpKey::Underlying) {
            panic!("already initialized");
        }
        e.storage().instance().set(&LpKey::Underlying, &underlying);
        e.storage().instance().set(&LpKey::MintRate, &mint_rate_bps);
        e.storage().instance().set(&LpKey::TotalSupply, &0i128);
    }

    pub fn set_mint_rate(e: Env, mint_rate_bps: u32) {
        e.storage().instance().set(&LpKey::MintRate, &mint_rate_bps);
    }

    /// Pull `amount` of the underlying from `from` and mint to `receiver`.
    pub fn deposit(e: Env, from: Address, receiver: Address, amount: i128) -> i128 {
        from.require_auth();
        if amount < 0 {
            panic!("negative amount");
        }
        let underlying: Address = e.storage().instance().get(&LpKey::Underlying).unwrap();
        token::Client::new(&e, &underlying).transfer(&from, &e.current_contract_address(), &amount);

        let rate: u32 = e.storage().instance().get(&LpKey::MintRate).unwrap();
        let minted = apply_rate(amount, rate);
        let balance = Self::balance(e.clone(), receiver.clone());
        e.storage()
            .instance()
            .set(&LpKey::Balance(receiver), &(balance + minted));
        let supply: i128 = e.storage().instance().get(&LpKey::TotalSupply).unwrap_or(0);
        e.storage()
            .instance()
            .set(&LpKey::TotalSupply, &(supply + minted));
        minted
    }

    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        if amount < 0 {
            panic!("negative amount");
        }
        let from_balance = Self::balance(e.clone(), from.clone());
        if from_balance < amount {
            panic!("insufficient balance");
        }
        e.storage()
            .instance()
            .set(&LpKey::Balance(from), &(from_balance - amount));
        let to_balance = Self::balance(e.clone(), to.clone());
        e.storage()
            .instance()
            .set(&LpKey::Balance(to), &(to_balance + amount));
    }

    pub fn balance(e: Env, id: Address) -> i128 {
        e.storage()
            .instance()
            .get(&LpKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn lp_total_supply(e: Env) -> i128 {
        e.storage().instance().get(&LpKey::TotalSupply).unwrap_or(0)
    }
}

// ============================================================================
// Staking vault
// ============================================================================

#[contracttype]
#[derive(Clone)]
pub enum VaultKey {
    Asset,
    Staked(Address),
    LastOption(Address),
}

#[contract]
pub struct MockLpVault;

#[contractimpl]
impl MockLpVault {
    pub fn init_vault(e: Env, asset: Address) {
        if e.storage().instance().has(&VaultKey::Asset) {
            panic!("already initialized");
        }
        e.storage().instance().set(&VaultKey::Asset, &asset);
    }

    /// Pull `amount` of the vault asset from `from` and credit `receiver`.
    pub fn stake(e: Env, from: Address, receiver: Address, amount: i128, option: u32) -> i128 {
        from.require_auth();
        if amount <= 0 {
            panic!("nothing to stake");
        }
        let asset: Address = e.storage().instance().get(&VaultKey::Asset).unwrap();
        token::Client::new(&e, &asset).transfer(&from, &e.current_contract_address(), &amount);

        let staked = Self::staked(e.clone(), receiver.clone());
        e.storage()
            .instance()
            .set(&VaultKey::Staked(receiver.clone()), &(staked + amount));
        e.storage()
            .instance()
            .set(&VaultKey::LastOption(receiver), &option);
        amount
    }

    pub fn staked(e: Env, id: Address) -> i128 {
        e.storage()
            .instance()
            .get(&VaultKey::Staked(id))
            .unwrap_or(0)
    }

    pub fn last_option(e: Env, id: Address) -> Option<u32> {
        e.storage().instance().get(&VaultKey::LastOption(id))
    }
}

// ============================================================================
// Exchange adapters
// ============================================================================

#[contracttype]
#[derive(Clone)]
pub enum SwapKey {
    Rate,
    Callback,
    CallbackRejected,
}

/// Re-entry attempted by an armed router: `claim(router, token, 0, Router, [1])`
/// against `target`. With `abort` set the swap panics once the attempt is refused.
#[contracttype]
#[derive(Clone)]
pub struct Callback {
    pub target: Address,
    pub token: Address,
    pub abort: bool,
}

fn settle_swap(
    e: &Env,
    sender: &Address,
    recipient: &Address,
    token_in: &Address,
    token_out: &Address,
    amount_in: i128,
) -> i128 {
    let this = e.current_contract_address();
    token::Client::new(e, token_in).transfer(sender, &this, &amount_in);

    let rate: u32 = e.storage().instance().get(&SwapKey::Rate).unwrap_or(0);
    let amount_out = apply_rate(amount_in, rate);
    if amount_out > 0 {
        token::Client::new(e, token_out).transfer(&this, recipient, &amount_out);
    }
    amount_out
}

/// Single-route adapter. Honors `amount_out_min` itself and reports its fill.
#[contract]
pub struct MockRouter;

#[contractimpl]
impl MockRouter {
    pub fn set_router_rate(e: Env, rate_bps: u32) {
        e.storage().instance().set(&SwapKey::Rate, &rate_bps);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn exact_input(
        e: Env,
        sender: Address,
        recipient: Address,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
        amount_out_min: i128,
        route: Bytes,
    ) -> i128 {
        sender.require_auth();
        if route.is_empty() {
            panic!("invalid route");
        }
        if let Some(callback) = e.storage().instance().get::<_, Callback>(&SwapKey::Callback) {
            Self::reenter(&e, &callback);
        }
        let amount_out = settle_swap(&e, &sender, &recipient, &token_in, &token_out, amount_in);
        if amount_out < amount_out_min {
            panic!("too little received");
        }
        amount_out
    }

    pub fn set_router_callback(e: Env, target: Address, token: Address, abort: bool) {
        let callback = Callback { target, token, abort };
        e.storage().instance().set(&SwapKey::Callback, &callback);
    }

    /// Outcome of the last armed callback; `None` until one has run.
    pub fn callback_rejected(e: Env) -> Option<bool> {
        e.storage().instance().get(&SwapKey::CallbackRejected)
    }
}

impl MockRouter {
    fn reenter(e: &Env, callback: &Callback) {
        let args: soroban_sdk::Vec<Val> = vec![
            e,
            e.current_contract_address().into_val(e),
            callback.token.into_val(e),
            0u32.into_val(e),
            0u32.into_val(e),
            Bytes::from_array(e, &[1]).into_val(e),
        ];
        let result = e.try_invoke_contract::<Val, soroban_sdk::Error>(
            &callback.target,
            &Symbol::new(e, "claim"),
            args,
        );
        let rejected = !matches!(result, Ok(Ok(_)));
        e.storage().instance().set(&SwapKey::CallbackRejected, &rejected);
        if rejected && callback.abort {
            panic!("callback rejected");
        }
    }
}

/// Aggregator adapter. Executes whatever the calldata describes and returns
/// nothing, so the caller has to measure its own balances.
#[contract]
pub struct MockAggregator;

#[contractimpl]
impl MockAggregator {
    pub fn set_aggregator_rate(e: Env, rate_bps: u32) {
        e.storage().instance().set(&SwapKey::Rate, &rate_bps);
    }

    pub fn transform(
        e: Env,
        sender: Address,
        recipient: Address,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
        calldata: Bytes,
    ) {
        sender.require_auth();
        if calldata.is_empty() {
            panic!("empty calldata");
        }
        settle_swap(&e, &sender, &recipient, &token_in, &token_out, amount_in);
    }
}
