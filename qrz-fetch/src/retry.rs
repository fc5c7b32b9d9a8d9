//! Re-authentication budget for a single query term.

/// Maximum re-authentication attempts for one term.
pub const MAX_AUTH_FAILURES: u32 = 4;

/// Counts authentication failures for the term at the cursor.
///
/// The orchestrator resets the budget whenever the cursor advances, so each
/// term gets the full allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryBudget {
    max_failures: u32,
    failures: u32,
}

impl RetryBudget {
    /// Creates a budget allowing `max_failures` re-authentications.
    pub fn new(max_failures: u32) -> Self {
        Self {
            max_failures,
            failures: 0,
        }
    }

    /// Returns the failures recorded so far.
    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// Returns the configured cap.
    pub fn max_failures(&self) -> u32 {
        self.max_failures
    }

    /// Returns true once no further re-authentication is allowed.
    pub fn is_exhausted(&self) -> bool {
        self.failures >= self.max_failures
    }

    /// Records one failure and returns the new count.
    pub fn record_failure(&mut self) -> u32 {
        self.failures = self.failures.saturating_add(1);
        self.failures
    }

    /// Clears the count.
    pub fn reset(&mut self) {
        self.failures = 0;
    }
}

impl Default for RetryBudget {
    fn default() -> Self {
        Self::new(MAX_AUTH_FAILURES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_exhausts_at_cap() {
        let mut budget = RetryBudget::default();

        for expected in 1..=MAX_AUTH_FAILURES {
            assert!(!budget.is_exhausted());
            assert_eq!(budget.record_failure(), expected);
        }
        assert!(budget.is_exhausted());
    }

    #[test]
    fn test_reset() {
        let mut budget = RetryBudget::new(1);
        budget.record_failure();
        assert!(budget.is_exhausted());

        budget.reset();
        assert_eq!(budget.failures(), 0);
        assert!(!budget.is_exhausted());
    }

    #[test]
    fn test_zero_cap_is_exhausted() {
        assert!(RetryBudget::new(0).is_exhausted());
    }
}
