//! Time utilities for timestamp and timelock calculations

use soroban_sdk::Env;

/// Time utility functions for working with timestamps and durations
pub struct TimeUtils;

impl TimeUtils {
    /// Get the current ledger timestamp
    pub fn now(e: &Env) -> u64 {
        e.ledger().timestamp()
    }

    /// Convert days to seconds
    pub const fn days_to_seconds(days: u32) -> u64 {
        days as u64 * 24 * 60 * 60
    }

    /// Timestamp at which a timelock started at `start` opens
    ///
    /// Saturates instead of wrapping, so an absurd duration keeps the lock closed.
    pub fn unlocks_at(start: u64, duration: u64) -> u64 {
        start.saturating_add(duration)
    }
}
