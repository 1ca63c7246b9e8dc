#![allow(dead_code)]

use std::sync::Arc;

use usagetrack_license::{AuthorityConfig, HttpLicenseAuthority};
use usagetrack_server::{build_router, AppState, Credentials};
use usagetrack_service::{UsageQueries, UsageWorkflow};
use usagetrack_storage::SqliteUsageStore;
use usagetrack_types::UsageRecord;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_USER: &str = "operator";
pub const API_PASSWORD: &str = "op-secret";
pub const LICENSE_CODE: &str = "1234";
pub const BIN_NUMBER: &str = "1234567890123";
pub const SAD_NUMBER: &str = "SAD001";

pub struct TestServer {
    pub base: String,
    pub authority: MockServer,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, route: &str) -> String {
        format!("{}{}", self.base, route)
    }

    pub fn get(&self, route: &str) -> reqwest::RequestBuilder {
        self.client
            .get(self.url(route))
            .basic_auth(API_USER, Some(API_PASSWORD))
    }

    /// Authenticated GET that expects a list of records.
    pub async fn records(&self, route: &str) -> Vec<UsageRecord> {
        let resp = self.get(route).send().await.unwrap();
        assert_eq!(resp.status(), 200, "GET {route}");
        resp.json().await.unwrap()
    }

    pub fn register(&self, body: serde_json::Value) -> reqwest::RequestBuilder {
        self.client
            .post(self.url("/api/usageLogsRegistration"))
            .basic_auth(API_USER, Some(API_PASSWORD))
            .json(&body)
    }
}

pub fn registration(license_code: &str) -> serde_json::Value {
    serde_json::json!({
        "binNumber": BIN_NUMBER,
        "sadNumber": SAD_NUMBER,
        "licenseCode": license_code,
    })
}

/// Mounts authority responses for one license code.
pub async fn mount_authority(
    server: &MockServer,
    license_code: &str,
    is_valid: &str,
    deactivate_status: u16,
) {
    Mock::given(method("GET"))
        .and(path(format!("/validateByBinAndLicenseCode/{license_code}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "isValid": is_valid })),
        )
        .mount(server)
        .await;
    Mock::given(method("PUT"))
        .and(path(format!("/deactivate/{license_code}")))
        .respond_with(ResponseTemplate::new(deactivate_status))
        .mount(server)
        .await;
}

/// Spin up the HTTP API on an OS-assigned port, backed by an in-memory
/// store and a mock License Authority.
pub async fn spawn_test_server() -> TestServer {
    let authority_server = MockServer::start().await;
    let authority = HttpLicenseAuthority::new(AuthorityConfig::new(
        authority_server.uri(),
        "svc",
        "svc-secret",
    ))
    .unwrap();
    let store = Arc::new(SqliteUsageStore::open_in_memory().unwrap());
    let workflow = UsageWorkflow::new(Arc::new(authority), store.clone());
    let queries = UsageQueries::new(store);
    let app = build_router(AppState::new(
        workflow,
        queries,
        Credentials::new(API_USER, API_PASSWORD),
    ));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base: format!("http://127.0.0.1:{}", port),
        authority: authority_server,
        client: reqwest::Client::new(),
    }
}
