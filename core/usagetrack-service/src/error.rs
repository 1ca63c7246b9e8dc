//! Error types for the registration workflow.

use thiserror::Error;
use usagetrack_license::LicenseError;
use usagetrack_storage::StorageError;
use usagetrack_types::UsageRecord;

use crate::workflow::SubmissionStage;

/// Result type for workflow operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Errors surfaced by `UsageWorkflow::submit`.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Bin number, license code or SAD number is malformed.
    #[error("invalid input: {0}")]
    InputShape(String),

    /// The authority did not confirm the license.
    #[error("license validation failed for license code {license_code}")]
    ValidationFailed { license_code: String },

    /// The usage record could not be written.
    #[error("failed to persist usage record: {0}")]
    Persistence(#[from] StorageError),

    /// The record was persisted but the license is still active.
    #[error(
        "usage record {} persisted but license {} was not deactivated: {source}",
        .record.id,
        .record.license_code
    )]
    Deactivation {
        record: Box<UsageRecord>,
        #[source]
        source: LicenseError,
    },
}

impl WorkflowError {
    /// Last stage the submission reached before failing.
    #[must_use]
    pub fn stage(&self) -> SubmissionStage {
        match self {
            Self::InputShape(_) | Self::ValidationFailed { .. } => SubmissionStage::Received,
            Self::Persistence(_) => SubmissionStage::Validated,
            Self::Deactivation { .. } => SubmissionStage::Persisted,
        }
    }

    /// The record persisted before the failure, if any.
    #[must_use]
    pub fn persisted_record(&self) -> Option<&UsageRecord> {
        match self {
            Self::Deactivation { record, .. } => Some(&**record),
            _ => None,
        }
    }
}
