//! Read-only access to usage records.

use crate::store_task;
use std::sync::Arc;
use usagetrack_storage::{StorageResult, UsageStore};
use usagetrack_types::{UsageRecord, UsageStatus};

/// Thin read-only facade over the usage store.
#[derive(Clone)]
pub struct UsageQueries {
    store: Arc<dyn UsageStore>,
}

impl UsageQueries {
    pub fn new(store: Arc<dyn UsageStore>) -> Self {
        Self { store }
    }

    /// Every stored usage record.
    pub async fn list_all(&self) -> StorageResult<Vec<UsageRecord>> {
        store_task::run(&self.store, |store| store.find_all()).await
    }

    /// Usage history of one license code. Empty when the code was never used.
    pub async fn list_by_license_code(
        &self,
        license_code: &str,
    ) -> StorageResult<Vec<UsageRecord>> {
        let license_code = license_code.to_string();
        store_task::run(&self.store, move |store| store.find_by_license_code(&license_code)).await
    }

    /// Records with the given status.
    ///
    /// Filters `list_all` in memory; status is not indexed.
    pub async fn list_by_status(&self, status: UsageStatus) -> StorageResult<Vec<UsageRecord>> {
        Ok(self
            .list_all()
            .await?
            .into_iter()
            .filter(|record| record.status == status)
            .collect())
    }
}
