//! Lease duration resolution and renewal timing.

use crate::{
    certificate::duration_from_certificate,
    config::LeaseConfig,
    error::LeaseResult,
    secrets::Secret,
};
use std::time::Duration;
use tracing::{debug, warn};

/// Resolves lease durations and renewal intervals against a fixed default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeaseResolver {
    config: LeaseConfig,
}

impl LeaseResolver {
    /// Create a resolver from configuration.
    #[must_use]
    pub const fn new(config: LeaseConfig) -> Self {
        Self { config }
    }

    /// Resolver configuration.
    #[must_use]
    pub const fn config(&self) -> &LeaseConfig {
        &self.config
    }

    /// Return `lease_duration`, or the default in seconds when it is `0`.
    ///
    /// Only an exact zero means "unspecified"; negative values pass through.
    #[must_use]
    pub fn normalize(&self, lease_duration: i64) -> i64 {
        if lease_duration == 0 {
            self.config.default_lease_secs()
        } else {
            lease_duration
        }
    }

    /// Wait before the next renewal attempt: half the lease, rounded down.
    ///
    /// Falls back to the default when the half is not a positive number of
    /// seconds, so unknown or one-second leases never spin.
    #[must_use]
    pub fn renewal_interval(&self, lease_duration: i64) -> Duration {
        match u64::try_from(lease_duration / 2) {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => self.config.default_lease_duration(),
        }
    }

    /// Lease duration in seconds from a PEM certificate's validity window.
    ///
    /// # Errors
    ///
    /// Returns a [`CertificateError`](crate::CertificateError) when the
    /// input is not a PEM-encoded X.509 certificate.
    pub fn duration_from_certificate(&self, pem: &str) -> LeaseResult<i64> {
        duration_from_certificate(pem)
    }

    /// Effective lease duration of `secret`.
    ///
    /// Certificate-bearing secrets use the certificate's validity span when
    /// it parses and is positive; everything else uses the normalized
    /// `lease_duration`.
    #[must_use]
    pub fn lease_duration_for(&self, secret: &Secret) -> i64 {
        if let Some(pem) = secret.certificate() {
            match duration_from_certificate(pem) {
                Ok(secs) if secs > 0 => {
                    debug!(lease_id = %secret.lease_id, secs, "Lease duration taken from certificate");
                    return secs;
                }
                Ok(secs) => {
                    warn!(
                        lease_id = %secret.lease_id,
                        secs,
                        "Certificate validity window is not positive, using lease duration"
                    );
                }
                Err(e) => {
                    warn!(lease_id = %secret.lease_id, error = %e, "Unreadable certificate, using lease duration");
                }
            }
        }

        self.normalize(secret.lease_duration)
    }

    /// Renewal interval for `secret`, based on [`Self::lease_duration_for`].
    #[must_use]
    pub fn renewal_interval_for(&self, secret: &Secret) -> Duration {
        self.renewal_interval(self.lease_duration_for(secret))
    }
}

/// [`LeaseResolver::normalize`] with the default configuration.
#[must_use]
pub fn normalize_lease_duration(lease_duration: i64) -> i64 {
    LeaseResolver::default().normalize(lease_duration)
}

/// [`LeaseResolver::renewal_interval`] with the default configuration.
#[must_use]
pub fn renewal_interval(lease_duration: i64) -> Duration {
    LeaseResolver::default().renewal_interval(lease_duration)
}
