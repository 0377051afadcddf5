//! Failure escalation counter.
//!
//! # State Transitions
//! ```text
//! failed:      consecutive_failures += 1
//! not failed:  unchanged
//! consecutive_failures >= threshold → fire, reset to 0
//! ```
//!
//! The counter is only cleared when an alert fires; a passing cycle between
//! failures leaves it untouched.

/// Counts failing cycles and decides when to alert.
#[derive(Debug, Clone)]
pub struct EscalationTracker {
    consecutive_failures: u32,
    threshold: u32,
}

impl EscalationTracker {
    pub fn new(threshold: u32) -> Self {
        Self {
            consecutive_failures: 0,
            threshold,
        }
    }

    /// Record one cycle. Returns true when an alert should be sent now.
    pub fn observe(&mut self, failed: bool) -> bool {
        if !failed {
            return false;
        }

        self.consecutive_failures = self.consecutive_failures.saturating_add(1);

        if self.consecutive_failures >= self.threshold {
            self.consecutive_failures = 0;
            return true;
        }
        false
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}

impl Default for EscalationTracker {
    fn default() -> Self {
        Self::new(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_on_fifth_failure() {
        let mut tracker = EscalationTracker::default();

        let fired: Vec<bool> = (0..5).map(|_| tracker.observe(true)).collect();
        assert_eq!(fired, vec![false, false, false, false, true]);
        assert_eq!(tracker.consecutive_failures(), 0);

        assert!(!tracker.observe(true));
        assert_eq!(tracker.consecutive_failures(), 1);
    }

    #[test]
    fn test_success_does_not_reset() {
        let mut tracker = EscalationTracker::default();
        tracker.observe(true);
        tracker.observe(true);

        assert!(!tracker.observe(false));
        assert_eq!(tracker.consecutive_failures(), 2);

        assert!(!tracker.observe(true));
        assert!(!tracker.observe(true));
        assert!(tracker.observe(true));
    }

    #[test]
    fn test_threshold_of_one_fires_every_failure() {
        let mut tracker = EscalationTracker::new(1);
        assert!(tracker.observe(true));
        assert!(!tracker.observe(false));
        assert!(tracker.observe(true));
    }
}
