//! Phase controller.
//!
//! ```text
//! Open ──set_loop_addresses──▶ LoopConfigured ──convert_all (after TIMELOCK)──▶ Converted
//!                               ▲            │
//!                               └────────────┘ set_loop_addresses (restarts the timelock)
//! ```
//!
//! `Converted` is terminal. Every transition goes through a guarded method on
//! [`PhaseState`]; nothing else writes the phase.

use crate::errors::PrelaunchError;
use shared_utils::TimeUtils;
use soroban_sdk::{contracttype, Address};

/// Minimum delay between configuring the loop targets and converting the base pool.
pub const TIMELOCK: u64 = TimeUtils::days_to_seconds(7);

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Phase {
    /// Locking and withdrawal open
    Open = 0,
    /// Targets set, timelock running; withdrawal only
    LoopConfigured = 1,
    /// Base pool converted; claims open
    Converted = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoopTargets {
    pub output_asset: Address,
    pub staking_vault: Address,
}

/// Loop targets slot; `Unset` until the first `set_loop_addresses`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LoopConfig {
    Unset,
    Set(LoopTargets),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PhaseState {
    pub phase: Phase,
    /// Timestamp of the last `set_loop_addresses`
    pub loop_activation: u64,
    /// Timestamp of the conversion; 0 before it
    pub claim_start: u64,
    pub loop_config: LoopConfig,
    /// Base pool size at conversion, the pro-rata denominator
    pub converted_supply: i128,
    /// Output minted for the base pool, the pro-rata numerator
    pub total_output: i128,
}

impl PhaseState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Open,
            loop_activation: 0,
            claim_start: 0,
            loop_config: LoopConfig::Unset,
            converted_supply: 0,
            total_output: 0,
        }
    }

    pub fn is_converted(&self) -> bool {
        self.phase == Phase::Converted
    }

    pub fn ensure_locking_open(&self) -> Result<(), PrelaunchError> {
        match self.phase {
            Phase::Open => Ok(()),
            _ => Err(PrelaunchError::NoLongerPossible),
        }
    }

    /// Withdrawal closes with the conversion. Emergency mode re-opens it for
    /// non-base tokens, which are still held as-is.
    pub fn ensure_withdrawable(&self, is_base: bool, emergency: bool) -> Result<(), PrelaunchError> {
        if !self.is_converted() || (emergency && !is_base) {
            return Ok(());
        }
        Err(PrelaunchError::NoLongerPossible)
    }

    pub fn ensure_claimable(&self) -> Result<(), PrelaunchError> {
        if self.is_converted() {
            Ok(())
        } else {
            Err(PrelaunchError::CurrentlyNotPossible)
        }
    }

    pub fn targets(&self) -> Result<LoopTargets, PrelaunchError> {
        match &self.loop_config {
            LoopConfig::Set(targets) => Ok(targets.clone()),
            LoopConfig::Unset => Err(PrelaunchError::LoopNotConfigured),
        }
    }

    /// `Open | LoopConfigured → LoopConfigured`
    pub fn configure(&mut self, targets: LoopTargets, now: u64) -> Result<(), PrelaunchError> {
        if self.is_converted() {
            return Err(PrelaunchError::NoLongerPossible);
        }
        self.loop_config = LoopConfig::Set(targets);
        self.loop_activation = now;
        self.phase = Phase::LoopConfigured;
        Ok(())
    }

    /// Check every conversion precondition and return the targets to convert into.
    pub fn ensure_convertible(&self, now: u64) -> Result<LoopTargets, PrelaunchError> {
        match self.phase {
            Phase::Open => Err(PrelaunchError::LoopNotConfigured),
            Phase::Converted => Err(PrelaunchError::AlreadyConverted),
            Phase::LoopConfigured => {
                if now < TimeUtils::unlocks_at(self.loop_activation, TIMELOCK) {
                    return Err(PrelaunchError::CurrentlyNotPossible);
                }
                self.targets()
            }
        }
    }

    /// `LoopConfigured → Converted`. Call only after [`Self::ensure_convertible`].
    pub fn mark_converted(&mut self, now: u64, converted_supply: i128, total_output: i128) {
        self.phase = Phase::Converted;
        self.claim_start = now;
        self.converted_supply = converted_supply;
        self.total_output = total_output;
    }
}

impl Default for PhaseState {
    fn default() -> Self {
        Self::new()
    }
}
