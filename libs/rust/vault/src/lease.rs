//! Lease bookkeeping for a fetched secret.
//!
//! Renewal is due at the midpoint of the lease, never later than expiry.

use crate::{resolver::LeaseResolver, secrets::Secret};
use chrono::{DateTime, TimeDelta, Utc};
use std::time::Duration;

/// Snapshot of one secret's lease, taken when the secret was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lease {
    /// Lease ID used for renewal and revocation
    pub lease_id: String,
    /// Whether the backend permits renewal
    pub renewable: bool,
    /// Effective lease duration in seconds
    pub duration_secs: i64,
    /// Wait before the next renewal attempt
    pub renew_after: Duration,
    /// When the secret was issued
    pub issued_at: DateTime<Utc>,
}

impl Lease {
    /// Capture the lease of `secret` issued at `issued_at`.
    #[must_use]
    pub fn new(secret: &Secret, resolver: &LeaseResolver, issued_at: DateTime<Utc>) -> Self {
        let duration_secs = resolver.lease_duration_for(secret);
        Self {
            lease_id: secret.lease_id.clone(),
            renewable: secret.renewable,
            duration_secs,
            renew_after: resolver.renewal_interval(duration_secs),
            issued_at,
        }
    }

    /// When the lease runs out.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        TimeDelta::try_seconds(self.duration_secs)
            .and_then(|delta| self.issued_at.checked_add_signed(delta))
            .unwrap_or(if self.duration_secs < 0 {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            })
    }

    /// When the next renewal is due.
    #[must_use]
    pub fn renew_at(&self) -> DateTime<Utc> {
        let due = TimeDelta::from_std(self.renew_after)
            .ok()
            .and_then(|delta| self.issued_at.checked_add_signed(delta))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        due.min(self.expires_at())
    }

    /// Check if renewal is due at `now`.
    ///
    /// Non-renewable leases report this too; the caller re-fetches instead.
    #[must_use]
    pub fn should_renew(&self, now: DateTime<Utc>) -> bool {
        now >= self.renew_at()
    }

    /// Check if the lease has expired at `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }

    /// Time left until expiry, or `None` once expired.
    #[must_use]
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        (self.expires_at() - now).to_std().ok()
    }
}
