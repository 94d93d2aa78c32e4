#![no_std]

//! Prelaunch points: lock eligible tokens during an open window, convert the
//! base pool into the output asset after a timelock, then claim (or claim and
//! stake) the converted position.

use shared_utils::{AccessControl, EmergencyControl, Storage, TimeUtils, Validation};
use soroban_sdk::{contract, contractimpl, token, Address, Bytes, BytesN, Env, Vec};

mod allowlist;
mod auth;
mod conversion;
mod errors;
mod events;
mod exchange;
mod ledger;
mod loop_targets;
mod phase;
mod storage;

pub use errors::PrelaunchError;
pub use exchange::Exchange;
pub use phase::{LoopConfig, LoopTargets, Phase, PhaseState, TIMELOCK};
pub use storage::Config;

use conversion::Delivery;
use errors::fail;

/// How a lock is funded.
enum Funding {
    /// Direct transfer authorized by the payer
    Attached,
    /// `transfer_from` against an allowance granted to this contract
    Allowance,
}

fn require_owner(e: &Env, caller: &Address, context: &str) -> Result<(), PrelaunchError> {
    if !AccessControl::authorize_owner(e, caller) {
        return Err(fail(e, PrelaunchError::NotAuthorized, context));
    }
    Ok(())
}

fn process_lock(
    e: &Env,
    payer: &Address,
    receiver: &Address,
    token: &Address,
    amount: i128,
    referral: &BytesN<32>,
    funding: Funding,
) -> Result<(), PrelaunchError> {
    payer.require_auth();

    let state = storage::get_phase_state(e)?;
    if let Err(err) = state.ensure_locking_open() {
        return Err(fail(e, err, "lock"));
    }
    if !Validation::is_positive(amount) {
        return Err(fail(e, PrelaunchError::InvalidAmount, "lock"));
    }
    if !allowlist::is_allowed(e, token) {
        return Err(fail(e, PrelaunchError::TokenNotAllowed, "lock"));
    }

    let this = e.current_contract_address();
    let client = token::Client::new(e, token);
    match funding {
        Funding::Attached => client.transfer(payer, &this, &amount),
        Funding::Allowance => client.transfer_from(&this, payer, &this, &amount),
    }

    ledger::credit(e, receiver, token, amount);
    events::locked(e, receiver, amount, token, referral);
    Ok(())
}

#[contract]
pub struct PrelaunchPointsContract;

#[contractimpl]
impl PrelaunchPointsContract {
    // ========================================================================
    // Initialization
    // ========================================================================

    /// Set the owner, the base token and both exchange adapters, and seed the
    /// allow-list. The base token is always allowed.
    pub fn initialize(
        e: Env,
        owner: Address,
        base_token: Address,
        router: Address,
        aggregator: Address,
        allowed_tokens: Vec<Address>,
    ) -> Result<(), PrelaunchError> {
        if Storage::is_initialized(&e) {
            return Err(fail(&e, PrelaunchError::AlreadyInitialized, "initialize"));
        }
        owner.require_auth();

        Storage::set_owner(&e, &owner);
        storage::set_config(
            &e,
            &Config {
                base_token: base_token.clone(),
                router,
                aggregator,
            },
        );
        storage::set_phase_state(&e, &PhaseState::new());

        if allowlist::allow(&e, &base_token) {
            events::token_allowed(&e, &base_token);
        }
        for token in allowed_tokens.iter() {
            if allowlist::allow(&e, &token) {
                events::token_allowed(&e, &token);
            }
        }

        Storage::set_initialized(&e);
        Ok(())
    }

    // ========================================================================
    // Allow-list
    // ========================================================================

    /// Register `token` for locking. Registering twice is a no-op.
    pub fn allow_token(e: Env, caller: Address, token: Address) -> Result<(), PrelaunchError> {
        require_owner(&e, &caller, "allow_token")?;
        if allowlist::allow(&e, &token) {
            events::token_allowed(&e, &token);
        }
        Ok(())
    }

    pub fn is_token_allowed(e: Env, token: Address) -> bool {
        allowlist::is_allowed(&e, &token)
    }

    // ========================================================================
    // Locking
    // ========================================================================

    /// Lock `amount` of `token` pulled from `depositor` through an allowance
    /// granted to this contract.
    pub fn lock(
        e: Env,
        depositor: Address,
        token: Address,
        amount: i128,
        referral: BytesN<32>,
    ) -> Result<(), PrelaunchError> {
        process_lock(&e, &depositor, &depositor, &token, amount, &referral, Funding::Allowance)
    }

    /// Same as [`Self::lock`], crediting `receiver` instead of the payer.
    pub fn lock_for(
        e: Env,
        payer: Address,
        token: Address,
        amount: i128,
        receiver: Address,
        referral: BytesN<32>,
    ) -> Result<(), PrelaunchError> {
        process_lock(&e, &payer, &receiver, &token, amount, &referral, Funding::Allowance)
    }

    /// Lock native value. The transfer is part of the depositor's own
    /// authorization, so no allowance is needed.
    pub fn lock_base(
        e: Env,
        depositor: Address,
        amount: i128,
        referral: BytesN<32>,
    ) -> Result<(), PrelaunchError> {
        let base = storage::get_config(&e)?.base_token;
        process_lock(&e, &depositor, &depositor, &base, amount, &referral, Funding::Attached)
    }

    pub fn lock_base_for(
        e: Env,
        payer: Address,
        amount: i128,
        receiver: Address,
        referral: BytesN<32>,
    ) -> Result<(), PrelaunchError> {
        let base = storage::get_config(&e)?.base_token;
        process_lock(&e, &payer, &receiver, &base, amount, &referral, Funding::Attached)
    }

    /// Return the depositor's whole locked balance of `token`.
    pub fn withdraw(e: Env, depositor: Address, token: Address) -> Result<i128, PrelaunchError> {
        depositor.require_auth();

        let config = storage::get_config(&e)?;
        let state = storage::get_phase_state(&e)?;
        let is_base = token == config.base_token;
        if let Err(err) = state.ensure_withdrawable(is_base, EmergencyControl::is_emergency_mode(&e)) {
            return Err(fail(&e, err, "withdraw"));
        }

        let amount = ledger::take(&e, &depositor, &token);
        if amount == 0 {
            return Err(fail(&e, PrelaunchError::CannotWithdrawZero, "withdraw"));
        }

        token::Client::new(&e, &token).transfer(&e.current_contract_address(), &depositor, &amount);
        events::withdrawn(&e, &depositor, &token, amount);
        Ok(amount)
    }

    pub fn balance(e: Env, user: Address, token: Address) -> i128 {
        ledger::balance_of(&e, &user, &token)
    }

    pub fn total_locked(e: Env, token: Address) -> i128 {
        ledger::total_locked(&e, &token)
    }

    /// Size of the base pool. Zero once the pool has been converted and claimed.
    pub fn total_supply(e: Env) -> Result<i128, PrelaunchError> {
        let base = storage::get_config(&e)?.base_token;
        Ok(ledger::total_locked(&e, &base))
    }

    // ========================================================================
    // Phase control
    // ========================================================================

    /// Set the output asset and staking vault and start (or restart) the timelock.
    pub fn set_loop_addresses(
        e: Env,
        caller: Address,
        output_asset: Address,
        staking_vault: Address,
    ) -> Result<(), PrelaunchError> {
        require_owner(&e, &caller, "set_loop_addresses")?;

        let mut state = storage::get_phase_state(&e)?;
        let now = TimeUtils::now(&e);
        let targets = LoopTargets {
            output_asset: output_asset.clone(),
            staking_vault: staking_vault.clone(),
        };
        if let Err(err) = state.configure(targets, now) {
            return Err(fail(&e, err, "set_loop_addresses"));
        }
        storage::set_phase_state(&e, &state);

        events::loop_addresses_updated(&e, &output_asset, &staking_vault, now);
        Ok(())
    }

    /// Deposit the whole base pool into the output asset. Irreversible.
    pub fn convert_all(e: Env, caller: Address) -> Result<(), PrelaunchError> {
        require_owner(&e, &caller, "convert_all")?;
        conversion::convert_all(&e)
    }

    pub fn phase(e: Env) -> Result<Phase, PrelaunchError> {
        Ok(storage::get_phase_state(&e)?.phase)
    }

    pub fn loop_activation(e: Env) -> Result<u64, PrelaunchError> {
        Ok(storage::get_phase_state(&e)?.loop_activation)
    }

    pub fn claim_start(e: Env) -> Result<u64, PrelaunchError> {
        Ok(storage::get_phase_state(&e)?.claim_start)
    }

    pub fn output_asset(e: Env) -> Result<Address, PrelaunchError> {
        Ok(storage::get_phase_state(&e)?.targets()?.output_asset)
    }

    pub fn staking_vault(e: Env) -> Result<Address, PrelaunchError> {
        Ok(storage::get_phase_state(&e)?.targets()?.staking_vault)
    }

    pub fn timelock(_e: Env) -> u64 {
        TIMELOCK
    }

    pub fn total_output(e: Env) -> Result<i128, PrelaunchError> {
        Ok(storage::get_phase_state(&e)?.total_output)
    }

    // ========================================================================
    // Claims
    // ========================================================================

    /// Claim the converted position for `token` into the claimer's wallet.
    ///
    /// For the base token the output is the claimer's pro-rata share of the
    /// converted pool. Any other token is swapped into the base token through
    /// `exchange` using `payload`, and the claim reverts when the swap
    /// realizes less than `min_output_pct` percent of the locked amount.
    pub fn claim(
        e: Env,
        claimer: Address,
        token: Address,
        min_output_pct: u32,
        exchange: Exchange,
        payload: Bytes,
    ) -> Result<i128, PrelaunchError> {
        claimer.require_auth();
        conversion::claim(&e, &claimer, &token, min_output_pct, exchange, &payload, Delivery::Wallet)
    }

    /// Same conversion as [`Self::claim`], staking the output into the vault
    /// for the claimer.
    pub fn claim_and_stake(
        e: Env,
        claimer: Address,
        token: Address,
        min_output_pct: u32,
        exchange: Exchange,
        stake_option: u32,
        payload: Bytes,
    ) -> Result<i128, PrelaunchError> {
        claimer.require_auth();
        conversion::claim(
            &e,
            &claimer,
            &token,
            min_output_pct,
            exchange,
            &payload,
            Delivery::Stake(stake_option),
        )
    }

    pub fn exchange_adapter(e: Env, exchange: Exchange) -> Result<Address, PrelaunchError> {
        Ok(exchange.adapter(&storage::get_config(&e)?))
    }

    // ========================================================================
    // Ownership
    // ========================================================================

    pub fn propose_owner(e: Env, caller: Address, candidate: Address) -> Result<(), PrelaunchError> {
        require_owner(&e, &caller, "propose_owner")?;
        AccessControl::propose(&e, &candidate);
        events::owner_proposed(&e, &caller, &candidate);
        Ok(())
    }

    pub fn accept_ownership(e: Env, caller: Address) -> Result<(), PrelaunchError> {
        let previous = Self::owner(e.clone())?;
        if !AccessControl::accept(&e, &caller) {
            return Err(fail(&e, PrelaunchError::NotAuthorized, "accept_ownership"));
        }
        events::owner_updated(&e, &previous, &caller);
        Ok(())
    }

    pub fn owner(e: Env) -> Result<Address, PrelaunchError> {
        Storage::get_owner(&e).ok_or(PrelaunchError::NotInitialized)
    }

    pub fn pending_owner(e: Env) -> Option<Address> {
        Storage::get_pending_owner(&e)
    }

    // ========================================================================
    // Emergency & recovery
    // ========================================================================

    /// In emergency mode non-base tokens stay withdrawable after conversion.
    pub fn set_emergency_mode(e: Env, caller: Address, enabled: bool) -> Result<(), PrelaunchError> {
        require_owner(&e, &caller, "set_emergency_mode")?;
        EmergencyControl::set_emergency_mode(&e, &caller, enabled);
        Ok(())
    }

    pub fn is_emergency_mode(e: Env) -> bool {
        EmergencyControl::is_emergency_mode(&e)
    }

    /// Send stray tokens to the owner. Lockable tokens and the output asset
    /// are never recoverable.
    pub fn recover_token(
        e: Env,
        caller: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), PrelaunchError> {
        require_owner(&e, &caller, "recover_token")?;

        let config = storage::get_config(&e)?;
        let state = storage::get_phase_state(&e)?;
        let is_output = state
            .targets()
            .map(|t| t.output_asset == token)
            .unwrap_or(false);
        if token == config.base_token || allowlist::is_allowed(&e, &token) || is_output {
            return Err(fail(&e, PrelaunchError::NotValidToken, "recover_token"));
        }
        if !Validation::is_positive(amount) {
            return Err(fail(&e, PrelaunchError::InvalidAmount, "recover_token"));
        }

        token::Client::new(&e, &token).transfer(&e.current_contract_address(), &caller, &amount);
        events::recovered(&e, &token, amount, &caller);
        Ok(())
    }
}
