//! HTTP error mapping.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;
use usagetrack_service::WorkflowError;
use usagetrack_storage::StorageError;
use usagetrack_types::UsageRecord;

/// Challenge sent with every 401 response.
pub const AUTH_CHALLENGE: &str = "Basic realm=\"usagetrack\"";

/// Errors returned by API handlers and middleware.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),

    /// The authority failed after a record was already stored.
    #[error("{message}")]
    BadGateway {
        message: String,
        record: Option<Box<UsageRecord>>,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadGateway { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<WorkflowError> for ApiError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::InputShape(_) | WorkflowError::ValidationFailed { .. } => {
                Self::BadRequest(err.to_string())
            }
            WorkflowError::Persistence(_) => Self::Internal(err.to_string()),
            WorkflowError::Deactivation { .. } => {
                let message = err.to_string();
                let record = err.persisted_record().cloned().map(Box::new);
                Self::BadGateway { message, record }
            }
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        Self::Internal(format!("failed to read usage records: {err}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(%status, error = %self, "request failed");
        }

        let body = match &self {
            Self::BadGateway {
                message,
                record: Some(record),
            } => json!({ "error": message, "record": record }),
            other => json!({ "error": other.to_string() }),
        };

        let mut response = (status, Json(body)).into_response();
        if matches!(self, Self::Unauthorized) {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(AUTH_CHALLENGE),
            );
        }
        response
    }
}
