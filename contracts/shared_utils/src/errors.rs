//! Error logging helpers

use soroban_sdk::{log, Env};

/// Error helper functions
pub struct ErrorHelper;

impl ErrorHelper {
    /// Log an error with context
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `context` - The error context, usually `contract::function`
    /// * `message` - The error message
    pub fn log_error_with_context(e: &Env, context: &str, message: &str) {
        log!(e, "Error [{}]: {}", context, message);
    }
}
