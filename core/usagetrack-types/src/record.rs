//! Usage records and their status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ids::UsageRecordId;

/// Lifecycle status of a license usage.
///
/// Only `Used` is ever assigned by the registration workflow. The enum is
/// open for future states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum UsageStatus {
    /// The license has not been consumed.
    Unused,
    /// The license was consumed by a registered usage.
    Used,
}

impl UsageStatus {
    /// Returns the canonical wire name (`"USED"`, `"UNUSED"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unused => "UNUSED",
            Self::Used => "USED",
        }
    }
}

impl fmt::Display for UsageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UsageStatus {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNUSED" => Ok(Self::Unused),
            "USED" => Ok(Self::Used),
            other => Err(crate::Error::InvalidStatus(other.to_string())),
        }
    }
}

/// A usage record that has been persisted and assigned an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRecord {
    /// Store-assigned identifier.
    pub id: UsageRecordId,
    /// 13-digit terminal identifier.
    pub bin_number: String,
    /// Opaque secondary application data (at most 8 characters).
    pub sad_number: String,
    /// 4-digit license code. Not unique across records.
    pub license_code: String,
    /// Status assigned at creation.
    pub status: UsageStatus,
    /// Moment of persistence.
    pub usage_date: DateTime<Utc>,
}

/// A usage record waiting to be persisted.
///
/// Status and usage date are never caller-supplied; `used_now` stamps both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUsageRecord {
    bin_number: String,
    sad_number: String,
    license_code: String,
    status: UsageStatus,
    usage_date: DateTime<Utc>,
}

impl NewUsageRecord {
    /// Builds a record marked `USED` at the current time.
    #[must_use]
    pub fn used_now(
        license_code: impl Into<String>,
        bin_number: impl Into<String>,
        sad_number: impl Into<String>,
    ) -> Self {
        Self {
            bin_number: bin_number.into(),
            sad_number: sad_number.into(),
            license_code: license_code.into(),
            status: UsageStatus::Used,
            usage_date: Utc::now(),
        }
    }

    #[must_use]
    pub fn bin_number(&self) -> &str {
        &self.bin_number
    }

    #[must_use]
    pub fn sad_number(&self) -> &str {
        &self.sad_number
    }

    #[must_use]
    pub fn license_code(&self) -> &str {
        &self.license_code
    }

    #[must_use]
    pub const fn status(&self) -> UsageStatus {
        self.status
    }

    #[must_use]
    pub const fn usage_date(&self) -> DateTime<Utc> {
        self.usage_date
    }

    /// Attaches the id allocated by the store, producing the persisted form.
    #[must_use]
    pub fn into_record(self, id: UsageRecordId) -> UsageRecord {
        UsageRecord {
            id,
            bin_number: self.bin_number,
            sad_number: self.sad_number,
            license_code: self.license_code,
            status: self.status,
            usage_date: self.usage_date,
        }
    }
}
