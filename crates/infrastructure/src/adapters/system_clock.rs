//! System clock adapter

use chrono::{DateTime, SubsecRound, Utc};
use ludex_application::ports::Clock;

/// Wall clock truncated to milliseconds.
///
/// The favorites store keeps `added_at` in unix milliseconds, so stamping
/// with the same precision makes a stored favorite compare equal to the one
/// that was written.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a new system clock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_system_clock_has_millisecond_precision() {
        let now = SystemClock::new().now();

        assert!(now.timestamp() > 0);
        assert_eq!(now.nanosecond() % 1_000_000, 0);
    }
}
