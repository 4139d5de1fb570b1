//! Lease durations derived from X.509 certificate validity windows.
//!
//! PKI backends issue certificates without a meaningful lease; the lease is
//! the certificate's own `notBefore..notAfter` span.

use crate::error::{CertificateError, LeaseResult};
use chrono::{DateTime, Utc};
use std::time::Duration;
use x509_parser::parse_x509_certificate;

/// Sentinel returned by [`duration_from_certificate_or_unknown`] on failure.
pub const UNKNOWN_LEASE_DURATION: i64 = -1;

const PEM_BEGIN: &str = "-----BEGIN ";

/// Validity window of a parsed certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CertificateValidity {
    /// Start of validity (`notBefore`)
    pub not_before: DateTime<Utc>,
    /// End of validity (`notAfter`)
    pub not_after: DateTime<Utc>,
}

impl CertificateValidity {
    /// Create a validity window.
    #[must_use]
    pub const fn new(not_before: DateTime<Utc>, not_after: DateTime<Utc>) -> Self {
        Self {
            not_before,
            not_after,
        }
    }

    /// Parse the validity window of the first decodable certificate in `pem`.
    ///
    /// Blocks that fail PEM decoding are skipped; RFC 1421 headers inside a
    /// block are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CertificateError::MalformedPem`] when no PEM block can be
    /// decoded, and [`CertificateError::InvalidCertificate`] when the block
    /// is not a DER-encoded X.509 certificate.
    pub fn from_pem(pem: &str) -> LeaseResult<Self> {
        let block = first_pem_block(pem)?;

        let (rest, cert) = parse_x509_certificate(block.contents())
            .map_err(|e| CertificateError::invalid_certificate(e.to_string()))?;
        if !rest.is_empty() {
            return Err(CertificateError::invalid_certificate(format!(
                "{} trailing bytes after certificate",
                rest.len()
            )));
        }

        let validity = cert.validity();
        Ok(Self::new(
            timestamp_to_utc(validity.not_before.timestamp())?,
            timestamp_to_utc(validity.not_after.timestamp())?,
        ))
    }

    /// Span of the window in whole seconds. Negative when inverted.
    ///
    /// Not capped: a `99991231235959Z` "no expiry" certificate reports its
    /// full span of several thousand years.
    #[must_use]
    pub fn lease_seconds(&self) -> i64 {
        (self.not_after - self.not_before).num_seconds()
    }

    /// Check if `notAfter` precedes `notBefore`.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.not_after < self.not_before
    }

    /// Check if `at` falls inside the window (both ends inclusive).
    #[must_use]
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        self.not_before <= at && at <= self.not_after
    }

    /// Time left before `notAfter`, or `None` once it has passed.
    #[must_use]
    pub fn remaining_at(&self, at: DateTime<Utc>) -> Option<Duration> {
        (self.not_after - at).to_std().ok()
    }
}

fn first_pem_block(input: &str) -> LeaseResult<pem::Pem> {
    let mut last_error = None;
    for (start, _) in input.match_indices(PEM_BEGIN) {
        match pem::parse(&input[start..]) {
            Ok(block) => return Ok(block),
            Err(e) => last_error = Some(e.to_string()),
        }
    }

    Err(CertificateError::malformed_pem(
        last_error.unwrap_or_else(|| "no PEM block found".to_string()),
    ))
}

fn timestamp_to_utc(secs: i64) -> LeaseResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| {
        CertificateError::invalid_certificate(format!("validity timestamp {secs} out of range"))
    })
}

/// Parse the validity window of the first certificate in `pem`.
///
/// # Errors
///
/// See [`CertificateValidity::from_pem`].
pub fn certificate_validity(pem: &str) -> LeaseResult<CertificateValidity> {
    CertificateValidity::from_pem(pem)
}

/// Lease duration in whole seconds taken from a PEM certificate's validity
/// window. Fractional seconds are truncated; an inverted window yields a
/// negative value.
///
/// # Errors
///
/// See [`CertificateValidity::from_pem`].
pub fn duration_from_certificate(pem: &str) -> LeaseResult<i64> {
    certificate_validity(pem).map(|validity| validity.lease_seconds())
}

/// Like [`duration_from_certificate`], collapsing every failure into
/// [`UNKNOWN_LEASE_DURATION`].
#[must_use]
pub fn duration_from_certificate_or_unknown(pem: &str) -> i64 {
    duration_from_certificate(pem).unwrap_or(UNKNOWN_LEASE_DURATION)
}
