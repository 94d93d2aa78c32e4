//! Storage keys and typed accessors

use crate::errors::PrelaunchError;
use crate::phase::PhaseState;
use soroban_sdk::{contracttype, Address, Env};

/// Deployment-time configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Native asset contract; also the canonical ledger key for base deposits
    pub base_token: Address,
    /// Adapter behind `Exchange::Router`
    pub router: Address,
    /// Adapter behind `Exchange::Aggregator`
    pub aggregator: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BalanceKey {
    pub user: Address,
    pub token: Address,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Phase,
    ReentrancyGuard,
    /// Allow-list entry (persistent)
    Allowed(Address),
    /// Locked balance per (user, token) (persistent)
    Balance(BalanceKey),
    /// Sum of all locked balances for a token (persistent)
    TotalLocked(Address),
}

pub fn get_config(e: &Env) -> Result<Config, PrelaunchError> {
    e.storage()
        .instance()
        .get::<_, Config>(&DataKey::Config)
        .ok_or(PrelaunchError::NotInitialized)
}

pub fn set_config(e: &Env, config: &Config) {
    e.storage().instance().set(&DataKey::Config, config);
}

pub fn get_phase_state(e: &Env) -> Result<PhaseState, PrelaunchError> {
    e.storage()
        .instance()
        .get::<_, PhaseState>(&DataKey::Phase)
        .ok_or(PrelaunchError::NotInitialized)
}

pub fn set_phase_state(e: &Env, state: &PhaseState) {
    e.storage().instance().set(&DataKey::Phase, state);
}

pub fn enter_guard(e: &Env) -> Result<(), PrelaunchError> {
    let guard: bool = e
        .storage()
        .instance()
        .get::<_, bool>(&DataKey::ReentrancyGuard)
        .unwrap_or(false);
    if guard {
        return Err(PrelaunchError::ReentrancyDetected);
    }
    e.storage().instance().set(&DataKey::ReentrancyGuard, &true);
    Ok(())
}

pub fn exit_guard(e: &Env) {
    e.storage().instance().set(&DataKey::ReentrancyGuard, &false);
}
