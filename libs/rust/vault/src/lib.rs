//! Vault lease duration resolution for Auth Platform.
//!
//! Derives how long a leased secret stays valid, either from the backend's
//! `lease_duration` or from an issued certificate's validity window, and
//! turns that into a renewal interval.

pub mod certificate;
pub mod config;
pub mod error;
pub mod lease;
pub mod resolver;
pub mod secrets;

pub use certificate::{
    CertificateValidity, UNKNOWN_LEASE_DURATION, certificate_validity, duration_from_certificate,
    duration_from_certificate_or_unknown,
};
pub use config::{DEFAULT_LEASE_DURATION, LeaseConfig};
pub use error::{CertificateError, LeaseResult};
pub use lease::Lease;
pub use resolver::{LeaseResolver, normalize_lease_duration, renewal_interval};
pub use secrets::Secret;
