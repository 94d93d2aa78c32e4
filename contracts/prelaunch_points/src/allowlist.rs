//! Allow-list registry. Entries are only ever added.

use crate::storage::DataKey;
use soroban_sdk::{Address, Env};

pub fn is_allowed(e: &Env, token: &Address) -> bool {
    e.storage()
        .persistent()
        .get::<_, bool>(&DataKey::Allowed(token.clone()))
        .unwrap_or(false)
}

/// Register `token`. Returns `false` when it was already registered.
pub fn allow(e: &Env, token: &Address) -> bool {
    if is_allowed(e, token) {
        return false;
    }
    e.storage()
        .persistent()
        .set(&DataKey::Allowed(token.clone()), &true);
    true
}
