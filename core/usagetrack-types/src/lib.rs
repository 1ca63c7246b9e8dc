//! Core type definitions for UsageTrack.
//!
//! This crate defines the types shared by every layer of the service:
//! - Store-assigned usage record identifiers
//! - The usage status enumeration
//! - Usage records, both persisted and pending insertion
//!
//! A `NewUsageRecord` can only be built with the workflow-assigned status
//! and timestamp, so callers never get to forge usage history.

mod ids;
mod record;

pub use ids::UsageRecordId;
pub use record::{NewUsageRecord, UsageRecord, UsageStatus};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid usage status: {0}")]
    InvalidStatus(String),
}
