//! Standardized error codes and messages for the prelaunch contracts.
//!
//! Error code ranges (for documentation and off-chain indexing):
//! - Validation: 1-99 (invalid input, ineligible asset)
//! - Authorization: 100-199 (caller is not the owner or pending owner)
//! - State: 200-299 (wrong phase, timelock running, already processed)
//! - Value: 300-399 (nothing to claim, slippage, insufficient output)
//! - System: 400-499 (external contract failures)

use soroban_sdk::{symbol_short, Env, String as SorobanString};

/// Standard error code constants (numeric only; contracts use their own contracterror enums).
pub mod code {
    // Validation (1-99)
    pub const INVALID_AMOUNT: u32 = 1;
    pub const INVALID_PERCENT: u32 = 2;
    pub const TOKEN_NOT_ALLOWED: u32 = 3;
    pub const NOT_VALID_TOKEN: u32 = 4;

    // Authorization (100-199)
    pub const UNAUTHORIZED: u32 = 100;

    // State (200-299)
    pub const ALREADY_INITIALIZED: u32 = 200;
    pub const NOT_INITIALIZED: u32 = 201;
    pub const NO_LONGER_POSSIBLE: u32 = 202;
    pub const CURRENTLY_NOT_POSSIBLE: u32 = 203;
    pub const NOT_CONFIGURED: u32 = 204;
    pub const ALREADY_PROCESSED: u32 = 205;
    pub const REENTRANCY: u32 = 206;

    // Value (300-399)
    pub const NOTHING_TO_CLAIM: u32 = 300;
    pub const ZERO_BALANCE: u32 = 301;
    pub const INSUFFICIENT_OUTPUT: u32 = 302;

    // System (400-499)
    pub const CONTRACT_CALL_FAILED: u32 = 400;
}

/// Emit an error event for off-chain indexing and debugging.
/// Call this before returning an error so indexers and diagnostics can record it.
/// `message` comes from the calling contract's own error enum.
pub fn emit_error_event(e: &Env, error_code: u32, context: &str, message: &str) {
    let context_str = SorobanString::from_str(e, context);
    let msg_str = SorobanString::from_str(e, message);
    e.events().publish(
        (symbol_short!("Error"), error_code),
        (context_str, msg_str, e.ledger().timestamp()),
    );
}
