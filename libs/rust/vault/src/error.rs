//! Lease error types using thiserror 2.0.
//!
//! Certificate parsing is the only fallible step in lease resolution; the
//! error kind tells callers whether the PEM envelope or the certificate
//! inside it was at fault.

use thiserror::Error;

/// Errors raised while deriving a lease duration from a certificate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CertificateError {
    /// Input did not contain a decodable PEM block
    #[error("Malformed PEM: {0}")]
    MalformedPem(String),

    /// PEM block did not hold a valid X.509 certificate
    #[error("Invalid certificate: {0}")]
    InvalidCertificate(String),
}

/// Result type for lease operations.
pub type LeaseResult<T> = Result<T, CertificateError>;

impl CertificateError {
    /// Create a malformed PEM error.
    #[must_use]
    pub fn malformed_pem(msg: impl Into<String>) -> Self {
        Self::MalformedPem(msg.into())
    }

    /// Create an invalid certificate error.
    #[must_use]
    pub fn invalid_certificate(msg: impl Into<String>) -> Self {
        Self::InvalidCertificate(msg.into())
    }

    /// Check if the PEM envelope itself was at fault.
    #[must_use]
    pub const fn is_envelope_error(&self) -> bool {
        matches!(self, Self::MalformedPem(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CertificateError::malformed_pem("missing header");
        assert_eq!(err.to_string(), "Malformed PEM: missing header");

        let err = CertificateError::invalid_certificate("truncated");
        assert_eq!(err.to_string(), "Invalid certificate: truncated");
    }

    #[test]
    fn test_envelope_classification() {
        assert!(CertificateError::malformed_pem("x").is_envelope_error());
        assert!(!CertificateError::invalid_certificate("x").is_envelope_error());
    }
}
