//! Storage helper utilities for common storage patterns

use soroban_sdk::{Address, Env};

/// Storage key constants
pub mod keys {
    use soroban_sdk::{symbol_short, Symbol};

    pub const OWNER: Symbol = symbol_short!("OWNER");
    pub const PENDING_OWNER: Symbol = symbol_short!("PEND_OWN");
    pub const INITIALIZED: Symbol = symbol_short!("INIT");
}

/// Storage helper functions
pub struct Storage;

impl Storage {
    /// Check if a contract has been initialized
    pub fn is_initialized(e: &Env) -> bool {
        e.storage().instance().has(&keys::INITIALIZED)
    }

    /// Mark contract as initialized
    pub fn set_initialized(e: &Env) {
        e.storage().instance().set(&keys::INITIALIZED, &true);
    }

    /// Get the owner address, `None` before initialization
    pub fn get_owner(e: &Env) -> Option<Address> {
        e.storage().instance().get::<_, Address>(&keys::OWNER)
    }

    /// Set owner address in storage
    pub fn set_owner(e: &Env, owner: &Address) {
        e.storage().instance().set(&keys::OWNER, owner);
    }

    /// Get the proposed owner waiting for acceptance
    pub fn get_pending_owner(e: &Env) -> Option<Address> {
        e.storage().instance().get::<_, Address>(&keys::PENDING_OWNER)
    }

    pub fn set_pending_owner(e: &Env, candidate: &Address) {
        e.storage().instance().set(&keys::PENDING_OWNER, candidate);
    }

    pub fn clear_pending_owner(e: &Env) {
        e.storage().instance().remove(&keys::PENDING_OWNER);
    }
}
