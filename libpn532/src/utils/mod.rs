//! Utilities for libpn532: small, reusable helpers used across the crate.
//!
//! Hex formatting for frame dumps in log output, and millisecond/elapsed
//! time helpers for the bounded readiness loop.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
