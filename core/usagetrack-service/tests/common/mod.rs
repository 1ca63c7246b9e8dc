//! Shared test doubles for workflow tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use usagetrack_license::{LicenseAuthority, LicenseError, LicenseResult};
use usagetrack_service::{UsageQueries, UsageWorkflow};
use usagetrack_storage::{SqliteUsageStore, StorageError, StorageResult, UsageStore};
use usagetrack_types::{NewUsageRecord, UsageRecord};

pub const LICENSE_CODE: &str = "1234";
pub const BIN_NUMBER: &str = "1234567890123";
pub const SAD_NUMBER: &str = "AB";

/// Authority with scripted answers that records every call.
pub struct ScriptedAuthority {
    valid: bool,
    deactivate_status: Option<u16>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedAuthority {
    /// Accepts every license and deactivates successfully.
    pub fn accepting() -> Self {
        Self {
            valid: true,
            deactivate_status: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Rejects every license.
    pub fn rejecting() -> Self {
        Self {
            valid: false,
            ..Self::accepting()
        }
    }

    /// Accepts every license but fails deactivation with the given status.
    pub fn failing_deactivation(status: u16) -> Self {
        Self {
            deactivate_status: Some(status),
            ..Self::accepting()
        }
    }

    /// Calls made so far, e.g. `check:1234:1234567890123`, `deactivate:1234`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LicenseAuthority for ScriptedAuthority {
    async fn check_license(&self, license_code: &str, bin_number: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .push(format!("check:{license_code}:{bin_number}"));
        self.valid
    }

    async fn deactivate_license(&self, license_code: &str) -> LicenseResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("deactivate:{license_code}"));
        match self.deactivate_status {
            Some(status) => Err(LicenseError::Status { status }),
            None => Ok(()),
        }
    }
}

/// Store wrapper that counts inserts and can be told to fail or stall them.
pub struct CountingStore {
    inner: SqliteUsageStore,
    fail_inserts: bool,
    delay: Option<Duration>,
    inserts: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Self {
        Self {
            inner: SqliteUsageStore::open_in_memory().unwrap(),
            fail_inserts: false,
            delay: None,
            inserts: AtomicUsize::new(0),
        }
    }

    /// Holds the calling thread for `delay` on every insert and read,
    /// like a disk under contention.
    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_inserts: true,
            ..Self::new()
        }
    }

    pub fn insert_calls(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    fn stall(&self) {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
    }
}

impl UsageStore for CountingStore {
    fn insert(&self, record: NewUsageRecord) -> StorageResult<UsageRecord> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.stall();
        if self.fail_inserts {
            return Err(StorageError::InvalidData("disk full".into()));
        }
        self.inner.insert(record)
    }

    fn find_all(&self) -> StorageResult<Vec<UsageRecord>> {
        self.stall();
        self.inner.find_all()
    }

    fn find_by_license_code(&self, license_code: &str) -> StorageResult<Vec<UsageRecord>> {
        self.stall();
        self.inner.find_by_license_code(license_code)
    }

    fn count(&self) -> StorageResult<u64> {
        self.inner.count()
    }
}

/// Spawns a task that sleeps for `tick` and reports how long after
/// spawning it actually woke up.
pub fn spawn_ticker(tick: Duration) -> tokio::task::JoinHandle<Duration> {
    let started = std::time::Instant::now();
    tokio::spawn(async move {
        tokio::time::sleep(tick).await;
        started.elapsed()
    })
}

/// Workflow and queries wired to the given doubles.
pub fn wire(
    authority: Arc<ScriptedAuthority>,
    store: Arc<CountingStore>,
) -> (UsageWorkflow, UsageQueries) {
    (
        UsageWorkflow::new(authority, store.clone()),
        UsageQueries::new(store),
    )
}
