//! The registration workflow: validate, persist, deactivate.

use crate::error::{WorkflowError, WorkflowResult};
use crate::store_task;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, info_span, warn, Instrument};
use usagetrack_license::{
    validate_bin_number, validate_license_code, validate_sad_number, LicenseAuthority,
    BIN_NUMBER_LEN, LICENSE_CODE_LEN, SAD_NUMBER_MAX_LEN,
};
use usagetrack_storage::UsageStore;
use usagetrack_types::{NewUsageRecord, UsageRecord};
use uuid::Uuid;

/// Progress of a single submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SubmissionStage {
    /// Request accepted, nothing checked yet.
    Received,
    /// The authority confirmed the license.
    Validated,
    /// The usage record is in the store.
    Persisted,
    /// The license was deactivated. Terminal success.
    Deactivated,
}

impl fmt::Display for SubmissionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Received => "received",
            Self::Validated => "validated",
            Self::Persisted => "persisted",
            Self::Deactivated => "deactivated",
        };
        f.write_str(name)
    }
}

/// Registers one-time license usages.
///
/// Each `submit` makes at most one validation call and one deactivation
/// call, in that order, with no retries.
#[derive(Clone)]
pub struct UsageWorkflow {
    authority: Arc<dyn LicenseAuthority>,
    store: Arc<dyn UsageStore>,
}

impl UsageWorkflow {
    pub fn new(authority: Arc<dyn LicenseAuthority>, store: Arc<dyn UsageStore>) -> Self {
        Self { authority, store }
    }

    /// Registers a usage of `license_code` by terminal `bin_number`.
    ///
    /// On success the license has been deactivated and the persisted record
    /// is returned. A `WorkflowError::Deactivation` means the record was
    /// persisted anyway.
    pub async fn submit(
        &self,
        license_code: &str,
        bin_number: &str,
        sad_number: &str,
    ) -> WorkflowResult<UsageRecord> {
        let span = info_span!("submit", submission = %Uuid::now_v7(), license_code);
        async {
            let result = self.run(license_code, bin_number, sad_number).await;
            match &result {
                Ok(record) => info!(id = %record.id, "usage registered"),
                Err(e) => warn!(stage = %e.stage(), error = %e, "usage registration failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn run(
        &self,
        license_code: &str,
        bin_number: &str,
        sad_number: &str,
    ) -> WorkflowResult<UsageRecord> {
        check_shape(license_code, bin_number, sad_number)?;
        debug!(stage = %SubmissionStage::Received, "input accepted");

        if !self.authority.check_license(license_code, bin_number).await {
            return Err(WorkflowError::ValidationFailed {
                license_code: license_code.to_string(),
            });
        }
        debug!(stage = %SubmissionStage::Validated, "license confirmed");

        let new_record = NewUsageRecord::used_now(license_code, bin_number, sad_number);
        let record = store_task::run(&self.store, move |store| store.insert(new_record)).await?;
        debug!(stage = %SubmissionStage::Persisted, id = %record.id, "usage record stored");

        // No rollback: the record stays even if deactivation fails.
        if let Err(source) = self.authority.deactivate_license(license_code).await {
            return Err(WorkflowError::Deactivation {
                record: Box::new(record),
                source,
            });
        }
        debug!(stage = %SubmissionStage::Deactivated, "license deactivated");

        Ok(record)
    }
}

fn check_shape(license_code: &str, bin_number: &str, sad_number: &str) -> WorkflowResult<()> {
    if !validate_bin_number(bin_number) {
        return Err(WorkflowError::InputShape(format!(
            "bin number must be {BIN_NUMBER_LEN} digits"
        )));
    }
    if !validate_license_code(license_code) {
        return Err(WorkflowError::InputShape(format!(
            "license code must be {LICENSE_CODE_LEN} digits"
        )));
    }
    if !validate_sad_number(sad_number) {
        return Err(WorkflowError::InputShape(format!(
            "SAD number is required and must be at most {SAD_NUMBER_MAX_LEN} characters"
        )));
    }
    Ok(())
}
