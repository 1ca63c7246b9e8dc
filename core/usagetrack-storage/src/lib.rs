//! Storage layer for UsageTrack.
//!
//! Usage records are append-only: the `UsageStore` trait exposes inserts
//! and reads, never updates or deletes.
//!
//! # Architecture
//!
//! - `UsageStore` is the seam the workflow and query service depend on
//! - `SqliteUsageStore` keeps records in one SQLite table whose
//!   `AUTOINCREMENT` key supplies record ids
//! - Timestamps are stored as RFC 3339 text

mod error;
mod sqlite;

pub use error::{StorageError, StorageResult};
pub use sqlite::SqliteUsageStore;

use usagetrack_types::{NewUsageRecord, UsageRecord};

/// Durable, append-only storage for usage records.
pub trait UsageStore: Send + Sync {
    /// Persists a record and returns it with its assigned id.
    fn insert(&self, record: NewUsageRecord) -> StorageResult<UsageRecord>;

    /// Returns every stored record.
    fn find_all(&self) -> StorageResult<Vec<UsageRecord>>;

    /// Returns every record for the given license code (possibly none).
    fn find_by_license_code(&self, license_code: &str) -> StorageResult<Vec<UsageRecord>>;

    /// Returns the number of stored records.
    fn count(&self) -> StorageResult<u64>;
}
