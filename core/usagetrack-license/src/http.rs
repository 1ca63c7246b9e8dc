//! HTTP client for the License Authority API.

use crate::authority::{AuthorityConfig, LicenseAuthority};
use crate::error::{LicenseError, LicenseResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Body of a validation response: `{"isValid": "true"}`.
#[derive(Debug, Deserialize)]
struct ValidityResponse {
    #[serde(rename = "isValid")]
    is_valid: Option<String>,
}

/// `LicenseAuthority` backed by the authority's REST API.
pub struct HttpLicenseAuthority {
    config: AuthorityConfig,
    client: Client,
}

impl HttpLicenseAuthority {
    /// Creates a client for the given authority.
    pub fn new(mut config: AuthorityConfig) -> LicenseResult<Self> {
        let trimmed = config.base_url.trim_end_matches('/').to_string();
        if trimmed.is_empty() {
            return Err(LicenseError::Config("authority base URL is empty".into()));
        }
        config.base_url = trimmed;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LicenseError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// Returns the normalized configuration.
    pub fn config(&self) -> &AuthorityConfig {
        &self.config
    }

    fn validate_url(&self, license_code: &str) -> String {
        format!(
            "{}/validateByBinAndLicenseCode/{}",
            self.config.base_url, license_code
        )
    }

    fn deactivate_url(&self, license_code: &str) -> String {
        format!("{}/deactivate/{}", self.config.base_url, license_code)
    }

    /// Performs the validation call without collapsing failures.
    async fn fetch_validity(&self, license_code: &str, bin_number: &str) -> LicenseResult<()> {
        let response = self
            .client
            .get(self.validate_url(license_code))
            .query(&[("binNumber", bin_number)])
            .basic_auth(&self.config.username, Some(&self.config.password))
            .send()
            .await?
            .error_for_status()?;

        let body: ValidityResponse = response.json().await?;
        match body.is_valid {
            Some(flag) if flag.eq_ignore_ascii_case("true") => Ok(()),
            Some(_) => Err(LicenseError::Rejected(license_code.to_string())),
            None => Err(LicenseError::InvalidResponse("missing isValid field".into())),
        }
    }
}

#[async_trait]
impl LicenseAuthority for HttpLicenseAuthority {
    async fn check_license(&self, license_code: &str, bin_number: &str) -> bool {
        match self.fetch_validity(license_code, bin_number).await {
            Ok(()) => {
                debug!(license_code, "license accepted by authority");
                true
            }
            Err(e) => {
                warn!(license_code, error = %e, "license validation failed");
                false
            }
        }
    }

    async fn deactivate_license(&self, license_code: &str) -> LicenseResult<()> {
        self.client
            .put(self.deactivate_url(license_code))
            .basic_auth(&self.config.username, Some(&self.config.password))
            .send()
            .await?
            .error_for_status()?;

        debug!(license_code, "license deactivated");
        Ok(())
    }
}
