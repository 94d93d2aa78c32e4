//! Two-step ownership control
//!
//! The current owner proposes a candidate, and authority only moves once the
//! candidate accepts. Nothing here panics on a failed check; callers map the
//! boolean outcome onto their own contract error.

use super::storage::Storage;
use soroban_sdk::{Address, Env};

/// Ownership helper functions
pub struct AccessControl;

impl AccessControl {
    /// Check if an address is the current owner
    pub fn is_owner(e: &Env, address: &Address) -> bool {
        match Storage::get_owner(e) {
            Some(owner) => owner == *address,
            None => false,
        }
    }

    /// Authenticate `caller` and report whether it is the current owner
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `caller` - The caller address, which must authorize the invocation
    pub fn authorize_owner(e: &Env, caller: &Address) -> bool {
        caller.require_auth();
        Self::is_owner(e, caller)
    }

    /// Store `candidate` as the pending owner. Replaces any earlier proposal.
    pub fn propose(e: &Env, candidate: &Address) {
        Storage::set_pending_owner(e, candidate);
    }

    /// Complete a transfer started with [`AccessControl::propose`]
    ///
    /// # Returns
    /// `true` when `caller` was the pending owner and is now the owner;
    /// `false` leaves ownership untouched
    pub fn accept(e: &Env, caller: &Address) -> bool {
        caller.require_auth();
        match Storage::get_pending_owner(e) {
            Some(pending) if pending == *caller => {
                Storage::set_owner(e, caller);
                Storage::clear_pending_owner(e);
                true
            }
            _ => false,
        }
    }
}
