//! Error and Edge Case Tests
//!
//! These tests verify:
//! - Unauthorized access attempts
//! - Invalid input handling
//! - Phase violations
//! - Adapter failures and slippage
//! - Expected error assertions

use crate::harness::TestHarness;
use crate::{assert_err, assert_ok};
use prelaunch_points::{Exchange, PrelaunchError, TIMELOCK};
use soroban_sdk::Bytes;

// ============================================================================
// Unauthorized Access Tests
// ============================================================================

/// Test: Every administrative entry point rejects a non-owner
#[test]
fn test_error_unauthorized_admin_calls() {
    let harness = TestHarness::new();
    let prelaunch = harness.prelaunch();
    let attacker = &harness.accounts.attacker;

    assert_err!(
        prelaunch.try_allow_token(attacker, &harness.contracts.unlisted),
        Ok(PrelaunchError::NotAuthorized)
    );
    assert_err!(
        prelaunch.try_set_loop_addresses(attacker, &harness.contracts.lp, &harness.contracts.vault),
        Ok(PrelaunchError::NotAuthorized)
    );
    assert_err!(
        prelaunch.try_convert_all(attacker),
        Ok(PrelaunchError::NotAuthorized)
    );
    assert_err!(
        prelaunch.try_propose_owner(attacker, attacker),
        Ok(PrelaunchError::NotAuthorized)
    );
    assert_err!(
        prelaunch.try_set_emergency_mode(attacker, &true),
        Ok(PrelaunchError::NotAuthorized)
    );
    assert_err!(
        prelaunch.try_recover_token(attacker, &harness.contracts.unlisted, &1),
        Ok(PrelaunchError::NotAuthorized)
    );

    assert!(!prelaunch.is_token_allowed(&harness.contracts.unlisted));
    assert_eq!(prelaunch.owner(), harness.accounts.owner);
}

/// Test: Only the proposed candidate can accept ownership
#[test]
fn test_error_accept_by_wrong_candidate() {
    let harness = TestHarness::new();
    let prelaunch = harness.prelaunch();

    prelaunch.propose_owner(&harness.accounts.owner, &harness.accounts.user1);
    assert_err!(
        prelaunch.try_accept_ownership(&harness.accounts.attacker),
        Ok(PrelaunchError::NotAuthorized)
    );
    assert_eq!(prelaunch.pending_owner(), Some(harness.accounts.user1.clone()));
}

// ============================================================================
// Invalid Input Tests
// ============================================================================

/// Test: Locking a token that was never allowed
#[test]
fn test_error_lock_unlisted_token() {
    let harness = TestHarness::new();
    let user = &harness.accounts.user1;
    let unlisted = &harness.contracts.unlisted;

    harness.approve_tokens(unlisted, user, 100);
    assert_err!(
        harness
            .prelaunch()
            .try_lock(user, unlisted, &100, &harness.referral()),
        Ok(PrelaunchError::TokenNotAllowed)
    );
    assert_eq!(harness.locked(unlisted, user), 0);
}

/// Test: Zero and negative amounts are rejected
#[test]
fn test_error_invalid_amounts() {
    let harness = TestHarness::new();
    let user = &harness.accounts.user1;

    for amount in [0i128, -1] {
        assert_err!(
            harness
                .prelaunch()
                .try_lock_base(user, &amount, &harness.referral()),
            Ok(PrelaunchError::InvalidAmount)
        );
    }
}

/// Test: Withdrawing an empty entry
#[test]
fn test_error_withdraw_nothing() {
    let harness = TestHarness::new();
    assert_err!(
        harness
            .prelaunch()
            .try_withdraw(&harness.accounts.user1, &harness.contracts.lst),
        Ok(PrelaunchError::CannotWithdrawZero)
    );
}

// ============================================================================
// Phase Violation Tests
// ============================================================================

/// Test: Conversion one second early fails, at the boundary succeeds
#[test]
fn test_error_timelock_boundary() {
    let harness = TestHarness::new();
    let prelaunch = harness.prelaunch();
    let owner = &harness.accounts.owner;

    assert_err!(
        prelaunch.try_convert_all(owner),
        Ok(PrelaunchError::LoopNotConfigured)
    );

    harness.configure_loop();
    harness.advance_time(TIMELOCK - 1);
    assert_err!(
        prelaunch.try_convert_all(owner),
        Ok(PrelaunchError::CurrentlyNotPossible)
    );

    harness.advance_time(1);
    assert_ok!(prelaunch.try_convert_all(owner));
    assert_err!(
        prelaunch.try_convert_all(owner),
        Ok(PrelaunchError::AlreadyConverted)
    );
}

/// Test: Claiming before conversion
#[test]
fn test_error_claim_before_conversion() {
    let harness = TestHarness::new();
    let user = &harness.accounts.user1;
    harness.lock_base(user, 10);

    assert_err!(
        harness.prelaunch().try_claim(
            user,
            &harness.contracts.base,
            &0,
            &Exchange::Router,
            &Bytes::new(&harness.env),
        ),
        Ok(PrelaunchError::CurrentlyNotPossible)
    );
}

/// Test: Locking closes once the loop is configured
#[test]
fn test_error_lock_after_configuration() {
    let harness = TestHarness::new();
    harness.configure_loop();

    assert_err!(
        harness
            .prelaunch()
            .try_lock_base(&harness.accounts.user1, &10, &harness.referral()),
        Ok(PrelaunchError::NoLongerPossible)
    );
}

// ============================================================================
// Adapter and Slippage Tests
// ============================================================================

/// Test: A fill under the caller's floor reverts and leaves the ledger untouched
#[test]
fn test_error_slippage_leaves_ledger_untouched() {
    let harness = TestHarness::new();
    let user = &harness.accounts.user1;
    let lst = &harness.contracts.lst;

    harness.lock_token(lst, user, 5_000);
    harness.convert();
    harness.aggregator().set_aggregator_rate(&9_000);

    assert_err!(
        harness
            .prelaunch()
            .try_claim(user, lst, &95, &Exchange::Aggregator, &harness.route()),
        Ok(PrelaunchError::SlippageExceeded)
    );

    assert_eq!(harness.locked(lst, user), 5_000);
    assert_eq!(harness.balance(lst, &harness.contracts.prelaunch), 5_000);
    assert_eq!(harness.balance(lst, &harness.contracts.aggregator), 0);
    assert_eq!(harness.lp().balance(user), 0);
}

/// Test: Adapter reverts surface as swap failures
#[test]
fn test_error_adapter_failures() {
    let harness = TestHarness::new();
    let user = &harness.accounts.user1;
    let lst = &harness.contracts.lst;

    harness.lock_token(lst, user, 5_000);
    harness.convert();

    // Empty route
    assert_err!(
        harness
            .prelaunch()
            .try_claim(user, lst, &0, &Exchange::Router, &Bytes::new(&harness.env)),
        Ok(PrelaunchError::SwapFailed)
    );

    // Router enforces the floor on its own
    harness.router().set_router_rate(&5_000);
    assert_err!(
        harness
            .prelaunch()
            .try_claim(user, lst, &60, &Exchange::Router, &harness.route()),
        Ok(PrelaunchError::SwapFailed)
    );

    assert_eq!(harness.locked(lst, user), 5_000);
}

/// Test: Recovering custodied tokens is refused
#[test]
fn test_error_recover_custodied_token() {
    let harness = TestHarness::new();
    let prelaunch = harness.prelaunch();
    let owner = &harness.accounts.owner;

    for token in [&harness.contracts.base, &harness.contracts.lst] {
        assert_err!(
            prelaunch.try_recover_token(owner, token, &1),
            Ok(PrelaunchError::NotValidToken)
        );
    }
}
