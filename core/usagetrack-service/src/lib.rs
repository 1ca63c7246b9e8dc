//! License usage registration for UsageTrack.
//!
//! # Components
//!
//! - **Workflow**: validates input, asks the License Authority, persists a
//!   usage record and deactivates the license, strictly in that order
//! - **Queries**: read-only access to stored usage records
//!
//! # Registration
//!
//! A submission moves through `Received → Validated → Persisted →
//! Deactivated`. Failures before `Persisted` leave no trace. A failed
//! deactivation is reported, but the record written in the previous step
//! stays in the store: the license can then be used once more than intended
//! until an operator deactivates it by hand.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use usagetrack_license::{AuthorityConfig, HttpLicenseAuthority};
//! use usagetrack_service::UsageWorkflow;
//! use usagetrack_storage::SqliteUsageStore;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let authority = HttpLicenseAuthority::new(AuthorityConfig::new(
//!     "https://licenses.example.com/api",
//!     "svc-user",
//!     "svc-password",
//! ))?;
//! let store = SqliteUsageStore::open("usagetrack.db")?;
//! let workflow = UsageWorkflow::new(Arc::new(authority), Arc::new(store));
//!
//! let record = workflow.submit("1234", "1234567890123", "AB").await?;
//! println!("registered usage {}", record.id);
//! # Ok(())
//! # }
//! ```

mod error;
mod queries;
mod store_task;
mod workflow;

pub use error::{WorkflowError, WorkflowResult};
pub use queries::UsageQueries;
pub use workflow::{SubmissionStage, UsageWorkflow};
