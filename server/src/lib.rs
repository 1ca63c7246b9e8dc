//! HTTP API for UsageTrack.
//!
//! Routes:
//! - `POST /api/usageLogsRegistration`: register a license usage
//! - `GET  /api/getAllUsageLogs`: list every usage record
//! - `GET  /api/license/{licenseCode}`: usage history of one license
//! - `GET  /api/status?status=USED|UNUSED`: records with a given status
//! - `GET  /v3/api-docs`: endpoint description (no authentication)

pub mod auth;
pub mod error;

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use usagetrack_service::{UsageQueries, UsageWorkflow};
use usagetrack_types::{UsageRecord, UsageStatus};

pub use auth::Credentials;
pub use error::ApiError;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub workflow: UsageWorkflow,
    pub queries: UsageQueries,
    pub credentials: Arc<Credentials>,
}

impl AppState {
    pub fn new(workflow: UsageWorkflow, queries: UsageQueries, credentials: Credentials) -> Self {
        Self {
            workflow,
            queries,
            credentials: Arc::new(credentials),
        }
    }
}

/// Body of a registration request.
///
/// Only these three fields are read. Anything else the caller sends,
/// including `status` or `usageDate`, is ignored.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    #[serde(default)]
    pub bin_number: String,
    #[serde(default)]
    pub sad_number: String,
    #[serde(default)]
    pub license_code: String,
}

#[derive(Deserialize, Debug)]
struct StatusQuery {
    status: UsageStatus,
}

async fn register_usage(
    State(state): State<AppState>,
    payload: Result<Json<RegistrationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UsageRecord>), ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let record = state
        .workflow
        .submit(&request.license_code, &request.bin_number, &request.sad_number)
        .await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<UsageRecord>>, ApiError> {
    Ok(Json(state.queries.list_all().await?))
}

async fn list_by_license_code(
    State(state): State<AppState>,
    Path(license_code): Path<String>,
) -> Result<Json<Vec<UsageRecord>>, ApiError> {
    let records = state.queries.list_by_license_code(&license_code).await?;
    if records.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No usage logs found for license code: {license_code}"
        )));
    }
    Ok(Json(records))
}

async fn list_by_status(
    State(state): State<AppState>,
    query: Result<Query<StatusQuery>, QueryRejection>,
) -> Result<Json<Vec<UsageRecord>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    Ok(Json(state.queries.list_by_status(query.status).await?))
}

async fn api_docs() -> Json<Value> {
    Json(json!({
        "title": "UsageTrack API",
        "version": env!("CARGO_PKG_VERSION"),
        "authentication": "HTTP Basic",
        "endpoints": [
            {
                "method": "POST",
                "path": "/api/usageLogsRegistration",
                "body": ["binNumber", "sadNumber", "licenseCode"],
                "responses": {
                    "201": "created usage record",
                    "400": "invalid input or license",
                    "502": "license not deactivated, record kept"
                }
            },
            {
                "method": "GET",
                "path": "/api/getAllUsageLogs",
                "responses": { "200": "all usage records" }
            },
            {
                "method": "GET",
                "path": "/api/license/{licenseCode}",
                "responses": { "200": "usage history", "404": "no usage for this license code" }
            },
            {
                "method": "GET",
                "path": "/api/status",
                "query": { "status": ["USED", "UNUSED"] },
                "responses": { "200": "usage records with the status" }
            }
        ]
    }))
}

/// Build the HTTP API router, with Basic auth in front of every request
/// except the public paths. Unknown paths are authenticated too, so an
/// anonymous caller gets 401 rather than 404.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/usageLogsRegistration", post(register_usage))
        .route("/api/getAllUsageLogs", get(list_all))
        .route("/api/license/{license_code}", get(list_by_license_code))
        .route("/api/status", get(list_by_status))
        .route("/v3/api-docs", get(api_docs))
        .layer(axum::middleware::from_fn_with_state(
            state.credentials.clone(),
            auth::require_basic_auth,
        ))
        .with_state(state)
}
