//! Runs synchronous store calls on the blocking thread pool.

use std::sync::Arc;
use usagetrack_storage::{StorageError, StorageResult, UsageStore};

pub(crate) async fn run<T, F>(store: &Arc<dyn UsageStore>, op: F) -> StorageResult<T>
where
    F: FnOnce(&dyn UsageStore) -> StorageResult<T> + Send + 'static,
    T: Send + 'static,
{
    let store = Arc::clone(store);
    tokio::task::spawn_blocking(move || op(store.as_ref()))
        .await
        .map_err(|e| StorageError::TaskFailed(e.to_string()))?
}
