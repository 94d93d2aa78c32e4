//! Conversion & claim engine.
//!
//! The base pool is converted once, as a whole, by [`convert_all`]. Every other
//! token is converted per claim: the claimer's stake is swapped into the base
//! token through an exchange adapter, then minted into the output asset.
//! The ledger entry is removed before the first external call; if any later
//! step fails the whole invocation is rolled back, entry included.

use crate::errors::{fail, PrelaunchError};
use crate::exchange::{Exchange, SwapRequest};
use crate::phase::LoopTargets;
use crate::storage::{self, Config};
use crate::{events, ledger, loop_targets};
use shared_utils::{SafeMath, TimeUtils, Validation};
use soroban_sdk::{Address, Bytes, Env};

/// Where claimed output goes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Delivery {
    Wallet,
    Stake(u32),
}

pub fn convert_all(e: &Env) -> Result<(), PrelaunchError> {
    let config = storage::get_config(e)?;
    let mut state = storage::get_phase_state(e)?;
    let now = TimeUtils::now(e);

    let targets = match state.ensure_convertible(now) {
        Ok(targets) => targets,
        Err(err) => return Err(fail(e, err, "convert_all")),
    };

    let supply = ledger::total_locked(e, &config.base_token);
    // Phase is committed before the external deposit
    state.mark_converted(now, supply, 0);
    storage::set_phase_state(e, &state);

    let minted = loop_targets::mint_output(e, &targets, &config.base_token, supply);
    state.total_output = minted;
    storage::set_phase_state(e, &state);

    events::converted(e, supply, minted);
    Ok(())
}

pub fn claim(
    e: &Env,
    claimer: &Address,
    token: &Address,
    min_output_pct: u32,
    exchange: Exchange,
    payload: &Bytes,
    delivery: Delivery,
) -> Result<i128, PrelaunchError> {
    let config = storage::get_config(e)?;
    let state = storage::get_phase_state(e)?;

    if let Err(err) = state.ensure_claimable() {
        return Err(fail(e, err, "claim"));
    }
    if !Validation::is_valid_percent(min_output_pct) {
        return Err(fail(e, PrelaunchError::InvalidPercentage, "claim"));
    }
    if !crate::allowlist::is_allowed(e, token) {
        return Err(fail(e, PrelaunchError::TokenNotAllowed, "claim"));
    }
    let targets = state.targets()?;

    storage::enter_guard(e)?;

    let stake = ledger::take(e, claimer, token);
    if stake == 0 {
        return Err(fail(e, PrelaunchError::NothingToClaim, "claim"));
    }

    let output = if *token == config.base_token {
        SafeMath::mul_div_floor(e, stake, state.total_output, state.converted_supply)
    } else {
        convert_stake(e, &config, &targets, token, stake, min_output_pct, exchange, payload)?
    };

    if output > 0 {
        match delivery {
            Delivery::Wallet => loop_targets::send_output(e, &targets, claimer, output),
            Delivery::Stake(option) => {
                loop_targets::stake_output(e, &targets, claimer, output, option);
                events::staked(e, claimer, output, option);
            }
        }
    }

    storage::exit_guard(e);
    events::claimed(e, claimer, token, output);
    Ok(output)
}

/// Swap `stake` of `token` into the base token and mint the output for it.
#[allow(clippy::too_many_arguments)]
fn convert_stake(
    e: &Env,
    config: &Config,
    targets: &LoopTargets,
    token: &Address,
    stake: i128,
    min_output_pct: u32,
    exchange: Exchange,
    payload: &Bytes,
) -> Result<i128, PrelaunchError> {
    let floor = SafeMath::percent(stake, min_output_pct);
    let request = SwapRequest {
        token_in: token,
        token_out: &config.base_token,
        amount_in: stake,
        min_out: floor,
        payload,
    };

    let realized = match exchange.swap(e, config, &request) {
        Ok(realized) => realized,
        Err(err) => return Err(fail(e, err, "claim: swap")),
    };
    if realized < floor {
        return Err(fail(e, PrelaunchError::SlippageExceeded, "claim: swap"));
    }

    Ok(loop_targets::mint_output(e, targets, &config.base_token, realized))
}
