use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use super::catalog_errors::CatalogError;
use super::catalog_model::ExternalProduct;

/// Per-attempt ceiling for connect and response, in seconds.
pub const PRODUCT_TIMEOUT_SECS: u64 = 3;

/// Transport-level access to the external product service.
#[async_trait]
pub trait ProductApi: Send + Sync {
    async fn fetch_product(&self, id: &str) -> Result<ExternalProduct, CatalogError>;
    async fn fetch_products(&self) -> Result<Vec<ExternalProduct>, CatalogError>;
}

/// Connection settings for the external product service. Basic-auth
/// credentials are attached to every request.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProductApiConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub timeout_secs: u64,
}

impl Default for ProductApiConfig {
    fn default() -> Self {
        ProductApiConfig {
            base_url: "https://product-service.example.com/api/v1".to_string(),
            username: "user".to_string(),
            password: "pass".to_string(),
            timeout_secs: PRODUCT_TIMEOUT_SECS,
        }
    }
}

pub struct HttpProductApi {
    client: Client,
    config: ProductApiConfig,
}

impl HttpProductApi {
    pub fn new(config: ProductApiConfig) -> Result<Self, CatalogError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| {
                CatalogError::Unavailable(format!("Failed to build HTTP client: {}", e))
            })?;
        Ok(HttpProductApi { client, config })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.config.base_url, path);
        let response = self
            .client
            .get(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(format!(
                "Upstream reported no record at {}",
                path
            )));
        }
        if status.is_server_error() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CatalogError::ServerError(format!(
                "{} from {}: {}",
                status, path, body
            )));
        }
        if !status.is_success() {
            return Err(CatalogError::Unavailable(format!(
                "Unexpected status {} from {}",
                status, path
            )));
        }

        response.json::<T>().await.map_err(|e| {
            CatalogError::Unavailable(format!("Failed to decode response from {}: {}", path, e))
        })
    }
}

fn map_transport_error(err: reqwest::Error) -> CatalogError {
    if err.is_timeout() {
        CatalogError::Transport(format!("Request timed out: {}", err))
    } else {
        CatalogError::Transport(err.to_string())
    }
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn fetch_product(&self, id: &str) -> Result<ExternalProduct, CatalogError> {
        self.get_json(&format!("/products/{}", id)).await
    }

    async fn fetch_products(&self) -> Result<Vec<ExternalProduct>, CatalogError> {
        self.get_json("/products").await
    }
}
