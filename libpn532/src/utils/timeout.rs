//! Timeout helpers used across the crate.
//!
//! Keep these helpers minimal: they provide a small conversion helper so
//! tests and code can express durations in milliseconds clearly, plus a
//! simulated clock for bounded retry loops driven by a delay collaborator.

use std::time::Duration;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Elapsed-time bookkeeping for retry loops whose only notion of time is
/// the sleeps they perform.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    limit: Duration,
    elapsed: Duration,
}

impl Deadline {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            elapsed: Duration::ZERO,
        }
    }

    /// Record a sleep of `step`.
    pub fn advance(&mut self, step: Duration) {
        self.elapsed = self.elapsed.saturating_add(step);
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn expired(&self) -> bool {
        self.elapsed >= self.limit
    }
}
