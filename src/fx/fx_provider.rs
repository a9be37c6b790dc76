use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use super::fx_errors::FxError;
use super::fx_model::LatestRatesResponse;
use crate::constants::DEFAULT_CURRENCY;

/// Bounded ceiling for connect and response, in seconds.
pub const RATE_TIMEOUT_SECS: u64 = 3;

/// Transport-level access to the external exchange rate service.
#[async_trait]
pub trait RateApi: Send + Sync {
    async fn fetch_latest(&self, to_currency: &str) -> Result<LatestRatesResponse, FxError>;
    async fn fetch_currencies(&self) -> Result<HashMap<String, String>, FxError>;
}

/// Connection settings for the external rate service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for RateApiConfig {
    fn default() -> Self {
        RateApiConfig {
            base_url: "https://api.frankfurter.app".to_string(),
            timeout_secs: RATE_TIMEOUT_SECS,
        }
    }
}

pub struct HttpRateApi {
    client: Client,
    config: RateApiConfig,
}

impl HttpRateApi {
    pub fn new(config: RateApiConfig) -> Result<Self, FxError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| FxError::Unavailable(format!("Failed to build HTTP client: {}", e)))?;
        Ok(HttpRateApi { client, config })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FxError> {
        let url = format!("{}{}", self.config.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| FxError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FxError::Unavailable(format!(
                "Unexpected status {} from {}",
                status, path
            )));
        }

        response.json::<T>().await.map_err(|e| {
            FxError::Unavailable(format!("Failed to decode response from {}: {}", path, e))
        })
    }
}

#[async_trait]
impl RateApi for HttpRateApi {
    async fn fetch_latest(&self, to_currency: &str) -> Result<LatestRatesResponse, FxError> {
        self.get_json("/latest", &[("from", DEFAULT_CURRENCY), ("to", to_currency)])
            .await
    }

    async fn fetch_currencies(&self) -> Result<HashMap<String, String>, FxError> {
        self.get_json("/currencies", &[]).await
    }
}
