//! License checks for UsageTrack.
//!
//! This crate handles:
//! - Input-shape validation of bin numbers, license codes and SAD numbers
//! - The `LicenseAuthority` capability: validate a license for a terminal,
//!   then deactivate it after its one permitted use
//! - An HTTP implementation of that capability backed by `reqwest`
//!
//! # Failure model
//!
//! Validation collapses every failure (explicit "invalid", HTTP error,
//! malformed body, transport error) into `false`. Deactivation never
//! collapses: callers always see a `LicenseError` when it does not succeed.

mod authority;
mod error;
mod http;
mod validator;

pub use authority::{AuthorityConfig, LicenseAuthority, DEFAULT_TIMEOUT_SECS};
pub use error::{LicenseError, LicenseResult};
pub use http::HttpLicenseAuthority;
pub use validator::{
    validate_bin_number, validate_license_code, validate_sad_number, BIN_NUMBER_LEN,
    LICENSE_CODE_LEN, SAD_NUMBER_MAX_LEN,
};
