//! Lease resolver configuration.

use std::time::Duration;

/// Lease duration used whenever the backend does not report one (5 minutes).
pub const DEFAULT_LEASE_DURATION: Duration = Duration::from_secs(300);

/// Lease resolver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaseConfig {
    default_lease_duration: Duration,
}

impl Default for LeaseConfig {
    fn default() -> Self {
        Self {
            default_lease_duration: DEFAULT_LEASE_DURATION,
        }
    }
}

impl LeaseConfig {
    /// Create a configuration with the given default lease duration
    /// (truncated to whole seconds, at least 1s).
    #[must_use]
    pub const fn new(default_lease_duration: Duration) -> Self {
        Self {
            default_lease_duration: whole_secs_at_least_one(default_lease_duration),
        }
    }

    /// Set the default lease duration (truncated to whole seconds, at least 1s).
    #[must_use]
    pub const fn with_default_lease_duration(mut self, duration: Duration) -> Self {
        self.default_lease_duration = whole_secs_at_least_one(duration);
        self
    }

    /// Fallback lease duration for unspecified or degenerate leases.
    #[must_use]
    pub const fn default_lease_duration(&self) -> Duration {
        self.default_lease_duration
    }

    /// Default lease duration in whole seconds, saturating at `i64::MAX`.
    #[must_use]
    pub fn default_lease_secs(&self) -> i64 {
        i64::try_from(self.default_lease_duration.as_secs()).unwrap_or(i64::MAX)
    }
}

// A zero default would read as "unspecified" again and renew in a busy loop.
const fn whole_secs_at_least_one(duration: Duration) -> Duration {
    let secs = duration.as_secs();
    Duration::from_secs(if secs == 0 { 1 } else { secs })
}
