//! End-to-End Flow Tests
//!
//! These tests verify complete depositor journeys:
//! - Locking in the open window
//! - Operator configuration and the timelock
//! - Conversion of the base pool
//! - Claims, swapped claims and staking

use crate::assert_err;
use crate::harness::{TestHarness, DEFAULT_USER_BALANCE, SECONDS_PER_DAY};
use prelaunch_points::{Exchange, Phase, PrelaunchError, TIMELOCK};
use soroban_sdk::Bytes;

/// Test: Simple lock and withdraw of one unit of native value
#[test]
fn test_e2e_lock_and_withdraw() {
    let harness = TestHarness::new();
    let user = &harness.accounts.user1;
    let base = &harness.contracts.base;

    harness.lock_base(user, 1);
    assert_eq!(harness.locked(base, user), 1);
    let custody = harness.balance(base, &harness.contracts.prelaunch);

    let returned = harness.prelaunch().withdraw(user, base);

    assert_eq!(returned, 1);
    assert_eq!(harness.locked(base, user), 0);
    assert_eq!(harness.balance(base, &harness.contracts.prelaunch), custody - 1);
    assert_eq!(harness.balance(base, user), DEFAULT_USER_BALANCE);
}

/// Test: Lock, wait out the timelock, convert; withdrawal is then closed
#[test]
fn test_e2e_post_conversion_lock_in() {
    let harness = TestHarness::new();
    let user = &harness.accounts.user1;
    let base = &harness.contracts.base;

    harness.lock_base(user, 1);
    harness.configure_loop();
    harness.advance_time(TIMELOCK);
    harness.prelaunch().convert_all(&harness.accounts.owner);

    assert_err!(
        harness.prelaunch().try_withdraw(user, base),
        Ok(PrelaunchError::NoLongerPossible)
    );
    assert_eq!(harness.locked(base, user), 1);
}

/// Test: Complete lifecycle with both base and swapped claims
#[test]
fn test_e2e_complete_lifecycle() {
    let harness = TestHarness::new();
    let prelaunch = harness.prelaunch();
    let alice = &harness.accounts.user1;
    let bob = &harness.accounts.user2;
    let base = &harness.contracts.base;
    let lst = &harness.contracts.lst;

    // ========== PHASE 1: OPEN WINDOW ==========
    harness.lock_base(alice, 4_000);
    harness.lock_token(lst, alice, 2_000);
    harness.lock_base(bob, 6_000);
    assert_eq!(prelaunch.total_supply(), 10_000);
    assert_eq!(prelaunch.phase(), Phase::Open);

    // ========== PHASE 2: CONFIGURATION & TIMELOCK ==========
    harness.advance_days(14);
    harness.configure_loop();
    assert_eq!(prelaunch.phase(), Phase::LoopConfigured);
    assert_eq!(prelaunch.loop_activation(), harness.current_timestamp());

    // Bob leaves during the timelock
    harness.advance_days(3);
    assert_eq!(prelaunch.withdraw(bob, base), 6_000);

    harness.advance_time(TIMELOCK - 3 * SECONDS_PER_DAY);

    // ========== PHASE 3: CONVERSION ==========
    prelaunch.convert_all(&harness.accounts.owner);
    assert_eq!(prelaunch.phase(), Phase::Converted);
    assert_eq!(prelaunch.total_output(), 4_000);
    assert_eq!(prelaunch.claim_start(), harness.current_timestamp());

    // ========== PHASE 4: CLAIMS ==========
    assert_eq!(harness.claim_base(alice), 4_000);
    harness.aggregator().set_aggregator_rate(&9_950);
    let swapped = prelaunch.claim(alice, lst, &99, &Exchange::Aggregator, &harness.route());
    assert_eq!(swapped, 1_990);

    assert_eq!(harness.lp().balance(alice), 5_990);
    assert_eq!(prelaunch.total_supply(), 0);
    assert_eq!(prelaunch.total_locked(lst), 0);
    assert_eq!(harness.balance(lst, &harness.contracts.prelaunch), 0);
    assert_eq!(harness.lp().balance(&harness.contracts.prelaunch), 0);
}

/// Test: A second claim yields nothing further
#[test]
fn test_e2e_double_claim() {
    let harness = TestHarness::new();
    let user = &harness.accounts.user1;

    harness.lock_base(user, 2_500);
    harness.convert();
    assert_eq!(harness.claim_base(user), 2_500);

    assert_err!(
        harness.prelaunch().try_claim(
            user,
            &harness.contracts.base,
            &0,
            &Exchange::Router,
            &Bytes::new(&harness.env),
        ),
        Ok(PrelaunchError::NothingToClaim)
    );
    assert_eq!(harness.lp().balance(user), 2_500);
}

/// Test: A dust stake next to a large one rounds down to zero without reverting
#[test]
fn test_e2e_rounding_to_zero() {
    let harness = TestHarness::new();
    let whale = &harness.accounts.user1;
    let dust = &harness.accounts.user2;
    harness.lp().set_mint_rate(&9_999);

    harness.lock_base(whale, 1_000_000_000);
    harness.lock_base(dust, 1);
    harness.convert();

    assert_eq!(harness.claim_base(dust), 0);
    assert_eq!(harness.lp().balance(dust), 0);
    assert_eq!(harness.locked(&harness.contracts.base, dust), 0);
    assert!(harness.claim_base(whale) > 0);
}

/// Test: Each claim follows its own stake, however late it was placed
#[test]
fn test_e2e_late_large_deposit() {
    let harness = TestHarness::new();
    let early = &harness.accounts.user1;
    let late = &harness.accounts.user2;
    harness.lp().set_mint_rate(&8_000);

    harness.lock_base(early, 1_000);
    harness.advance_days(30);
    harness.lock_base(late, 99_000);
    harness.convert();

    let early_out = harness.claim_base(early);
    let late_out = harness.claim_base(late);

    assert_eq!(early_out, 800);
    assert_eq!(late_out, 79_200);
    // Same output per unit locked
    assert_eq!(early_out * 99, late_out);
}

/// Test: Claim and stake through the router
#[test]
fn test_e2e_claim_and_stake_swapped() {
    let harness = TestHarness::new();
    let user = &harness.accounts.user1;
    let lst = &harness.contracts.lst;

    harness.lock_token(lst, user, 10_000);
    harness.convert();
    harness.router().set_router_rate(&9_700);

    let staked = harness.prelaunch().claim_and_stake(
        user,
        lst,
        &97,
        &Exchange::Router,
        &3,
        &harness.route(),
    );

    assert_eq!(staked, 9_700);
    assert_eq!(harness.vault().staked(user), 9_700);
    assert_eq!(harness.vault().last_option(user), Some(3));
    assert_eq!(harness.lp().balance(user), 0);
    assert_eq!(harness.balance(lst, &harness.contracts.router), 10_000);
}

/// Test: Ownership handover, then the new owner runs the conversion
#[test]
fn test_e2e_ownership_handover() {
    let harness = TestHarness::new();
    let prelaunch = harness.prelaunch();
    let old_owner = &harness.accounts.owner;
    let new_owner = &harness.accounts.user2;

    harness.lock_base(&harness.accounts.user1, 100);
    prelaunch.propose_owner(old_owner, new_owner);
    prelaunch.accept_ownership(new_owner);

    assert_err!(
        prelaunch.try_set_loop_addresses(old_owner, &harness.contracts.lp, &harness.contracts.vault),
        Ok(PrelaunchError::NotAuthorized)
    );
    prelaunch.set_loop_addresses(new_owner, &harness.contracts.lp, &harness.contracts.vault);
    harness.advance_time(TIMELOCK);
    prelaunch.convert_all(new_owner);

    assert_eq!(harness.claim_base(&harness.accounts.user1), 100);
}
