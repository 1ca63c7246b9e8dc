//! The License Authority capability.
//!
//! The registration workflow only depends on this trait, so it can run
//! against the HTTP client in production and a substitute in tests.

use crate::error::LicenseResult;
use async_trait::async_trait;
use std::fmt;

/// Default per-request timeout for authority calls, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the external License Authority.
///
/// These credentials are used for outbound calls only. They are kept apart
/// from the credentials that gate inbound requests.
#[derive(Clone)]
pub struct AuthorityConfig {
    /// Base URL of the authority API, without a trailing slash.
    pub base_url: String,
    /// Basic-auth username for authority calls.
    pub username: String,
    /// Basic-auth password for authority calls.
    pub password: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl AuthorityConfig {
    /// Creates a config with the default timeout.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Overrides the per-request timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl fmt::Debug for AuthorityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorityConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Remote system of record for license validity.
#[async_trait]
pub trait LicenseAuthority: Send + Sync {
    /// Asks whether `license_code` may be used by the terminal `bin_number`.
    ///
    /// Any failure to get a definite "true" answer yields `false`.
    async fn check_license(&self, license_code: &str, bin_number: &str) -> bool;

    /// Deactivates `license_code` so it cannot be used again.
    async fn deactivate_license(&self, license_code: &str) -> LicenseResult<()>;
}
