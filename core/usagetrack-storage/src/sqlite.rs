//! SQLite-backed usage record store.

use crate::error::{StorageError, StorageResult};
use crate::UsageStore;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;
use usagetrack_types::{NewUsageRecord, UsageRecord, UsageRecordId};

const SELECT_COLUMNS: &str =
    "SELECT id, bin_number, sad_number, license_code, status, usage_date FROM usage_logs";

type RawRow = (i64, String, String, String, String, String);

/// Persistent usage record store backed by SQLite.
///
/// A single connection is shared behind a mutex, which serializes writes.
#[derive(Clone)]
pub struct SqliteUsageStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteUsageStore {
    /// Opens (or creates) a store at the given path.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let conn = Connection::open(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "opened usage store");
        Self::with_connection(conn)
    }

    /// Opens an in-memory store (for testing).
    pub fn open_in_memory() -> StorageResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> StorageResult<Self> {
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StorageError::LockPoisoned)
    }

    fn init_schema(&self) -> StorageResult<()> {
        let conn = self.lock()?;
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS usage_logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                bin_number TEXT NOT NULL,
                sad_number TEXT NOT NULL,
                license_code TEXT NOT NULL,
                status TEXT NOT NULL,
                usage_date TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_usage_logs_license_code
                ON usage_logs (license_code);
            ",
        )?;
        Ok(())
    }

    fn query(&self, sql: &str, args: &[&dyn rusqlite::ToSql]) -> StorageResult<Vec<UsageRecord>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(args, |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(decode_row(row?)?);
        }
        Ok(records)
    }
}

fn decode_row(raw: RawRow) -> StorageResult<UsageRecord> {
    let (id, bin_number, sad_number, license_code, status, usage_date) = raw;

    let status = status
        .parse()
        .map_err(|e| StorageError::InvalidData(format!("row {id}: {e}")))?;
    let usage_date = DateTime::parse_from_rfc3339(&usage_date)
        .map_err(|e| StorageError::InvalidData(format!("row {id}: bad usage_date: {e}")))?
        .with_timezone(&Utc);

    Ok(UsageRecord {
        id: UsageRecordId::from_raw(id),
        bin_number,
        sad_number,
        license_code,
        status,
        usage_date,
    })
}

impl UsageStore for SqliteUsageStore {
    fn insert(&self, record: NewUsageRecord) -> StorageResult<UsageRecord> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO usage_logs (bin_number, sad_number, license_code, status, usage_date)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.bin_number(),
                record.sad_number(),
                record.license_code(),
                record.status().as_str(),
                record.usage_date().to_rfc3339(),
            ],
        )?;
        let id = UsageRecordId::from_raw(conn.last_insert_rowid());
        debug!(%id, license_code = record.license_code(), "usage record inserted");
        Ok(record.into_record(id))
    }

    fn find_all(&self) -> StorageResult<Vec<UsageRecord>> {
        self.query(&format!("{SELECT_COLUMNS} ORDER BY id"), &[])
    }

    fn find_by_license_code(&self, license_code: &str) -> StorageResult<Vec<UsageRecord>> {
        self.query(
            &format!("{SELECT_COLUMNS} WHERE license_code = ?1 ORDER BY id"),
            &[&license_code],
        )
    }

    fn count(&self) -> StorageResult<u64> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM usage_logs", [], |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}
