//! Identifier types for usage records.
//!
//! Record ids are allocated by the store's auto-increment sequence and are
//! never chosen by callers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a persisted usage record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsageRecordId(i64);

impl UsageRecordId {
    /// Wraps a raw id handed out by the store.
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UsageRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

