//! Shared test helpers for authority client tests.

#![allow(dead_code)]

use usagetrack_license::{AuthorityConfig, HttpLicenseAuthority};
use wiremock::MockServer;

pub const AUTHORITY_USER: &str = "authority-user";
pub const AUTHORITY_PASSWORD: &str = "authority-secret";

pub const LICENSE_CODE: &str = "1234";
pub const BIN_NUMBER: &str = "1234567890123";

/// Config pointing at the mock server, with a short timeout.
pub fn mock_config(server: &MockServer) -> AuthorityConfig {
    AuthorityConfig::new(server.uri(), AUTHORITY_USER, AUTHORITY_PASSWORD).with_timeout_secs(2)
}

/// HTTP authority client pointing at the mock server.
pub fn mock_authority(server: &MockServer) -> HttpLicenseAuthority {
    HttpLicenseAuthority::new(mock_config(server)).unwrap()
}
