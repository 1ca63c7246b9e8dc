//! UsageTrack server
//!
//! Registers license usages, deactivates used licenses at the License
//! Authority, and serves the usage history over HTTP.
//!
//! Usage:
//!   usagetrack-server --license-api https://authority.example/api \
//!       --api-username admin --api-password secret \
//!       --authority-username svc --authority-password secret

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use usagetrack_license::{AuthorityConfig, HttpLicenseAuthority, DEFAULT_TIMEOUT_SECS};
use usagetrack_server::{build_router, AppState, Credentials};
use usagetrack_service::{UsageQueries, UsageWorkflow};
use usagetrack_storage::{SqliteUsageStore, UsageStore};

#[derive(Parser)]
#[command(name = "usagetrack-server")]
#[command(about = "License usage registration service")]
struct Args {
    /// Address the HTTP API listens on
    #[arg(long, env = "USAGETRACK_LISTEN", default_value = "0.0.0.0:8080")]
    listen: String,

    /// Path to the SQLite database file
    #[arg(long, env = "USAGETRACK_DATABASE", default_value = "usagetrack.db")]
    database: PathBuf,

    /// Base URL of the License Authority API
    #[arg(long, env = "USAGETRACK_LICENSE_API")]
    license_api: String,

    /// Username required from API callers
    #[arg(long, env = "USAGETRACK_API_USERNAME")]
    api_username: String,

    /// Password required from API callers
    #[arg(long, env = "USAGETRACK_API_PASSWORD", hide_env_values = true)]
    api_password: String,

    /// Username for License Authority calls
    #[arg(long, env = "USAGETRACK_AUTHORITY_USERNAME")]
    authority_username: String,

    /// Password for License Authority calls
    #[arg(long, env = "USAGETRACK_AUTHORITY_PASSWORD", hide_env_values = true)]
    authority_password: String,

    /// Per-request timeout for License Authority calls
    #[arg(long, env = "USAGETRACK_AUTHORITY_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    authority_timeout_secs: u64,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!("UsageTrack server starting...");

    let store = SqliteUsageStore::open(&args.database)
        .with_context(|| format!("failed to open database {}", args.database.display()))?;
    let records = store.count().context("failed to read usage store")?;
    info!(path = %args.database.display(), records, "usage store ready");

    let authority_config = AuthorityConfig::new(
        args.license_api,
        args.authority_username,
        args.authority_password,
    )
    .with_timeout_secs(args.authority_timeout_secs);
    let authority = HttpLicenseAuthority::new(authority_config)
        .context("invalid License Authority configuration")?;
    info!(url = %authority.config().base_url, "license authority configured");

    let store = Arc::new(store);
    let workflow = UsageWorkflow::new(Arc::new(authority), store.clone());
    let queries = UsageQueries::new(store);
    let credentials = Credentials::new(args.api_username, args.api_password);
    let app = build_router(AppState::new(workflow, queries, credentials));

    let listener = tokio::net::TcpListener::bind(&args.listen)
        .await
        .with_context(|| format!("failed to bind {}", args.listen))?;
    info!("HTTP API listening on {}", args.listen);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("UsageTrack server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
