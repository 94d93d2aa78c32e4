#![no_std]

//! Shared utility library for the prelaunch Soroban contracts
//!
//! This library provides common functions, helpers, and patterns used across
//! the workspace contracts including:
//! - Math utilities (checked math, percentages, pro-rata shares)
//! - Time utilities (timestamps, timelocks)
//! - Validation utilities
//! - Storage helpers
//! - Error helpers and error codes
//! - Two-step ownership control
//! - Emergency mode control
//! - Event emission patterns

pub mod access_control;
pub mod emergency;
pub mod error_codes;
pub mod errors;
pub mod events;
pub mod math;
pub mod storage;
pub mod time;
pub mod validation;


// Re-export commonly used items
pub use access_control::*;
pub use emergency::EmergencyControl;
pub use error_codes::*;
pub use errors::*;
pub use events::*;
pub use math::*;
pub use storage::Storage;
pub use time::*;
pub use validation::*;
