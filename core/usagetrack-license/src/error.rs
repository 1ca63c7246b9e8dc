//! Error types for the licensing module.

use thiserror::Error;

/// Licensing-specific errors.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// Network or transport failure talking to the authority.
    #[error("network error: {0}")]
    Network(String),

    /// The authority answered with a non-success HTTP status.
    #[error("authority returned HTTP {status}")]
    Status { status: u16 },

    /// The authority answered with a body we could not interpret.
    #[error("invalid authority response: {0}")]
    InvalidResponse(String),

    /// The authority reported the license as not valid.
    #[error("license {0} rejected by authority")]
    Rejected(String),

    /// Client configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for LicenseError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Status {
                status: status.as_u16(),
            },
            None if err.is_decode() => Self::InvalidResponse(err.to_string()),
            None => Self::Network(err.to_string()),
        }
    }
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
