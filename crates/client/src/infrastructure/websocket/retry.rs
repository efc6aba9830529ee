//! Reconnect backoff policy.
//!
//! The delay grows linearly with consecutive failures and is clamped at a
//! ceiling; a successful open resets it to zero. Reconnection itself is
//! unconditional: the policy bounds the delay, not the number of attempts.

pub const BACKOFF_INCREMENT_SECS: u64 = 1;
pub const MAX_BACKOFF_SECS: u64 = 5;

/// Linear backoff parameters.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub increment_secs: u64,
    pub max_secs: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            increment_secs: BACKOFF_INCREMENT_SECS,
            max_secs: MAX_BACKOFF_SECS,
        }
    }
}

/// Backoff state for the reconnect loop.
///
/// Starts at zero so the very first attempt connects immediately.
#[derive(Debug, Clone, Copy)]
pub struct BackoffState {
    policy: RetryPolicy,
    delay_secs: u64,
}

impl BackoffState {
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            delay_secs: 0,
        }
    }

    /// The delay to wait before the next connection attempt.
    pub fn delay_secs(&self) -> u64 {
        self.delay_secs
    }

    /// Record a failure, advancing the delay. Returns the new delay.
    pub fn on_failure(&mut self) -> u64 {
        self.delay_secs = (self.delay_secs + self.policy.increment_secs).min(self.policy.max_secs);
        self.delay_secs
    }

    /// Record a successful open, resetting the delay to zero.
    pub fn reset(&mut self) {
        self.delay_secs = 0;
    }
}

impl Default for BackoffState {
    fn default() -> Self {
        Self::new(RetryPolicy::default())
    }
}
