//! Contract error enum (aligned with shared_utils::error_codes)

use shared_utils::{code, emit_error_event, ErrorHelper};
use soroban_sdk::{contracterror, Env};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PrelaunchError {
    /// Contract not initialized
    NotInitialized = 1,
    /// Already initialized
    AlreadyInitialized = 2,
    /// Caller is not the owner (or not the pending owner on accept)
    NotAuthorized = 3,
    /// Token was never registered on the allow-list
    TokenNotAllowed = 4,
    /// Amount must be positive
    InvalidAmount = 5,
    /// Minimum output percentage above 100
    InvalidPercentage = 6,
    /// The phase that allowed this operation has passed
    NoLongerPossible = 7,
    /// The phase that allows this operation has not started
    CurrentlyNotPossible = 8,
    /// Output asset and staking vault not set
    LoopNotConfigured = 9,
    /// Base pool already converted
    AlreadyConverted = 10,
    /// Claimer holds no locked balance of this token
    NothingToClaim = 11,
    /// Depositor has nothing locked to withdraw
    CannotWithdrawZero = 12,
    /// Swap realized less than the caller's floor
    SlippageExceeded = 13,
    /// Exchange adapter call failed
    SwapFailed = 14,
    /// Token cannot be recovered
    NotValidToken = 15,
    /// Reentrancy detected
    ReentrancyDetected = 16,
}

impl PrelaunchError {
    pub fn message(&self) -> &'static str {
        match self {
            PrelaunchError::NotInitialized => "Contract not initialized",
            PrelaunchError::AlreadyInitialized => "Contract already initialized",
            PrelaunchError::NotAuthorized => "Unauthorized: caller not allowed",
            PrelaunchError::TokenNotAllowed => "Token is not allowed",
            PrelaunchError::InvalidAmount => "Invalid amount: must be greater than zero",
            PrelaunchError::InvalidPercentage => "Invalid percent: must be between 0 and 100",
            PrelaunchError::NoLongerPossible => "Operation no longer possible in this phase",
            PrelaunchError::CurrentlyNotPossible => "Operation not possible yet",
            PrelaunchError::LoopNotConfigured => "Output targets not configured",
            PrelaunchError::AlreadyConverted => "Base pool already converted",
            PrelaunchError::NothingToClaim => "Nothing to claim",
            PrelaunchError::CannotWithdrawZero => "Balance is zero",
            PrelaunchError::SlippageExceeded => "Realized output below minimum",
            PrelaunchError::SwapFailed => "Exchange adapter call failed",
            PrelaunchError::NotValidToken => "Token cannot be recovered",
            PrelaunchError::ReentrancyDetected => "Reentrancy detected",
        }
    }

    /// Shared taxonomy code used for error events.
    pub fn code(&self) -> u32 {
        match self {
            PrelaunchError::InvalidAmount => code::INVALID_AMOUNT,
            PrelaunchError::InvalidPercentage => code::INVALID_PERCENT,
            PrelaunchError::TokenNotAllowed => code::TOKEN_NOT_ALLOWED,
            PrelaunchError::NotValidToken => code::NOT_VALID_TOKEN,
            PrelaunchError::NotAuthorized => code::UNAUTHORIZED,
            PrelaunchError::AlreadyInitialized => code::ALREADY_INITIALIZED,
            PrelaunchError::NotInitialized => code::NOT_INITIALIZED,
            PrelaunchError::NoLongerPossible => code::NO_LONGER_POSSIBLE,
            PrelaunchError::CurrentlyNotPossible => code::CURRENTLY_NOT_POSSIBLE,
            PrelaunchError::LoopNotConfigured => code::NOT_CONFIGURED,
            PrelaunchError::AlreadyConverted => code::ALREADY_PROCESSED,
            PrelaunchError::ReentrancyDetected => code::REENTRANCY,
            PrelaunchError::NothingToClaim => code::NOTHING_TO_CLAIM,
            PrelaunchError::CannotWithdrawZero => code::ZERO_BALANCE,
            PrelaunchError::SlippageExceeded => code::INSUFFICIENT_OUTPUT,
            PrelaunchError::SwapFailed => code::CONTRACT_CALL_FAILED,
        }
    }
}

/// Log and emit an error event, then hand the error back for `Err(..)`.
///
/// The event is discarded with the rest of the invocation when the error
/// propagates; it still shows up in diagnostics and simulation.
pub fn fail(e: &Env, err: PrelaunchError, context: &str) -> PrelaunchError {
    ErrorHelper::log_error_with_context(e, context, err.message());
    emit_error_event(e, err.code(), context, err.message());
    err
}
