//! Leased secret record as returned by a Vault backend.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Payload key under which PKI backends return the issued certificate.
pub const CERTIFICATE_KEY: &str = "certificate";

/// One leased credential returned by a backend.
///
/// `Debug` lists payload keys only, never their values.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Secret {
    /// Identifier of the originating request
    pub request_id: String,
    /// Identifier used to renew or revoke this lease
    pub lease_id: String,
    /// Seconds the lease is valid for; `0` means unspecified
    pub lease_duration: i64,
    /// Whether the backend permits renewal
    pub renewable: bool,
    /// Backend-defined payload
    pub data: HashMap<String, serde_json::Value>,
}

impl Secret {
    /// Create a secret with the given lease and an empty payload.
    #[must_use]
    pub fn new(lease_id: impl Into<String>, lease_duration: i64, renewable: bool) -> Self {
        Self {
            lease_id: lease_id.into(),
            lease_duration,
            renewable,
            ..Default::default()
        }
    }

    /// Set the request identifier.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    /// Insert a payload entry.
    #[must_use]
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// PEM certificate carried in the payload, if this came from a PKI backend.
    #[must_use]
    pub fn certificate(&self) -> Option<&str> {
        self.data.get(CERTIFICATE_KEY).and_then(serde_json::Value::as_str)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.data.keys().map(String::as_str).collect();
        keys.sort_unstable();

        f.debug_struct("Secret")
            .field("request_id", &self.request_id)
            .field("lease_id", &self.lease_id)
            .field("lease_duration", &self.lease_duration)
            .field("renewable", &self.renewable)
            .field("data", &keys)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_vault_response() {
        let json = r#"{
            "request_id": "4b3c6a1e-0d52-8f25-61a0-7e9d21d5b6c3",
            "lease_id": "database/creds/readonly/2f6a614c",
            "lease_duration": 3600,
            "renewable": true,
            "data": {"username": "v-token-readonly", "password": "A1a-8u7s9d"},
            "warnings": null
        }"#;

        let secret: Secret = serde_json::from_str(json).unwrap();
        assert_eq!(secret.lease_id, "database/creds/readonly/2f6a614c");
        assert_eq!(secret.lease_duration, 3600);
        assert!(secret.renewable);
        assert_eq!(secret.data["username"], "v-token-readonly");
        assert_eq!(secret.certificate(), None);
    }

    #[test]
    fn test_missing_fields_default() {
        let secret: Secret = serde_json::from_str(r#"{"data": {"key": "value"}}"#).unwrap();
        assert_eq!(secret.lease_duration, 0);
        assert!(!secret.renewable);
        assert!(secret.lease_id.is_empty());
    }

    #[test]
    fn test_certificate_lookup() {
        let secret = Secret::new("pki/issue/web/abc", 0, false)
            .with_data(CERTIFICATE_KEY, "-----BEGIN CERTIFICATE-----");
        assert_eq!(secret.certificate(), Some("-----BEGIN CERTIFICATE-----"));

        let secret = Secret::new("", 0, false).with_data(CERTIFICATE_KEY, 42);
        assert_eq!(secret.certificate(), None);
    }

    #[test]
    fn test_debug_hides_payload_values() {
        let secret = Secret::new("lease-1", 60, true)
            .with_request_id("req-1")
            .with_data("password", "hunter2");

        let debug = format!("{secret:?}");
        assert!(debug.contains("password"));
        assert!(debug.contains("lease-1"));
        assert!(!debug.contains("hunter2"));
    }
}
