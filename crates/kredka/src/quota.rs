//! Daily generation allowance.
//!
//! Every user-initiated generation action spends one unit of a fixed
//! per-session allowance, no matter how many artifacts it produces: a
//! four-page storybook batch still counts once. The guard is consulted
//! before any model call is issued, so an exhausted allowance never reaches
//! the network. Exhaustion is a distinct signal
//! ([`StudioError::QuotaExceeded`]) rather than a generic failure, which
//! lets a caller show a blocking limit prompt instead of an error banner.
//!
//! The counter resets only with a fresh session (or an explicit
//! [`reset`](QuotaGuard::reset)); there is no server-verified daily
//! rollover in this engine.

use crate::DAILY_LIMIT;
use crate::error::StudioError;

/// Tracks generation actions against a fixed allowance.
#[derive(Debug, Clone)]
pub struct QuotaGuard {
    used: u32,
    limit: u32,
}

impl Default for QuotaGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl QuotaGuard {
    /// Guard with the standard daily allowance ([`DAILY_LIMIT`]).
    pub fn new() -> Self {
        Self::with_limit(DAILY_LIMIT)
    }

    /// Guard with a custom allowance.
    pub fn with_limit(limit: u32) -> Self {
        Self { used: 0, limit }
    }

    /// Whether another generation action may start.
    pub fn can_generate(&self) -> bool {
        self.used < self.limit
    }

    /// Pre-flight gate. Once the allowance is spent every call returns
    /// [`StudioError::QuotaExceeded`]; callers must not invoke a
    /// collaborator after that.
    pub fn check(&self) -> Result<(), StudioError> {
        if self.can_generate() {
            Ok(())
        } else {
            Err(StudioError::QuotaExceeded {
                used: self.used,
                limit: self.limit,
            })
        }
    }

    /// Records one completed generation action. Called exactly once per
    /// user action, from the success branch only.
    pub fn record_success(&mut self) {
        self.used = self.used.saturating_add(1);
    }

    /// Starts a fresh allowance.
    pub fn reset(&mut self) {
        self.used = 0;
    }

    /// Actions recorded so far.
    pub fn used(&self) -> u32 {
        self.used
    }

    /// The configured allowance.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Actions left before the gate blocks.
    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.used)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_guard_allows_generation() {
        let quota = QuotaGuard::new();
        assert!(quota.can_generate());
        assert!(quota.check().is_ok());
        assert_eq!(quota.used(), 0);
        assert_eq!(quota.remaining(), DAILY_LIMIT);
    }

    #[test]
    fn blocks_exactly_at_the_limit() {
        let mut quota = QuotaGuard::with_limit(2);
        quota.record_success();
        assert!(quota.can_generate());
        quota.record_success();
        assert!(!quota.can_generate());
        match quota.check() {
            Err(StudioError::QuotaExceeded { used, limit }) => {
                assert_eq!(used, 2);
                assert_eq!(limit, 2);
            }
            other => panic!("expected QuotaExceeded, got {other:?}"),
        }
    }

    #[test]
    fn record_counts_one_per_action() {
        let mut quota = QuotaGuard::with_limit(10);
        for expected in 1..=4 {
            quota.record_success();
            assert_eq!(quota.used(), expected);
        }
        assert_eq!(quota.remaining(), 6);
    }

    #[test]
    fn reset_restores_the_allowance() {
        let mut quota = QuotaGuard::with_limit(1);
        quota.record_success();
        assert!(!quota.can_generate());
        quota.reset();
        assert!(quota.can_generate());
        assert_eq!(quota.used(), 0);
    }

    #[test]
    fn zero_limit_never_allows() {
        let quota = QuotaGuard::with_limit(0);
        assert!(!quota.can_generate());
        assert!(quota.check().is_err());
    }
}
