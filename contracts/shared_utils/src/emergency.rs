//! Emergency switch
//!
//! A single instance flag the owner can flip. What the flag unlocks is up to
//! each contract; this module only stores it and announces changes.

use super::events::Events;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

const EMERGENCY_MODE: Symbol = symbol_short!("EMG_MODE");

pub struct EmergencyControl;

impl EmergencyControl {
    pub fn is_emergency_mode(e: &Env) -> bool {
        e.storage()
            .instance()
            .get::<_, bool>(&EMERGENCY_MODE)
            .unwrap_or(false)
    }

    /// Store the flag and emit `EmgMode(enabled, by, timestamp)`.
    ///
    /// Returns `false` without emitting when the flag already had that value.
    pub fn set_emergency_mode(e: &Env, by: &Address, enabled: bool) -> bool {
        if Self::is_emergency_mode(e) == enabled {
            return false;
        }
        e.storage().instance().set(&EMERGENCY_MODE, &enabled);
        Events::emit(
            e,
            symbol_short!("EmgMode"),
            (enabled, by.clone(), e.ledger().timestamp()),
        );
        true
    }
}
