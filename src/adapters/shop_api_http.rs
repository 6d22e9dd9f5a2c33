//! Stock and catalog lookups over HTTP using reqwest.

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::{CartError, Product, ProductId, ServiceError, Stock};
use crate::ports::{CatalogService, StockService};

/// HTTP client for the shop API, serving both the stock and catalog ports.
///
/// Issues plain blocking GETs with no retry and no client-side deadline;
/// a hung call blocks the single operation that triggered it.
#[derive(Debug, Clone)]
pub struct HttpShopApi {
    base_url: Url,
    client: Client,
}

impl HttpShopApi {
    /// Create a new client against the given API base URL.
    pub fn new(mut base_url: Url) -> Result<Self, CartError> {
        // Url::join drops the last path segment unless the base ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .build()
            .map_err(|e| CartError::Configuration(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { base_url, client })
    }

    fn get_json<T: DeserializeOwned>(&self, resource: &str) -> Result<T, ServiceError> {
        let url = self.base_url.join(resource).map_err(|e| ServiceError::Transport {
            resource: resource.to_string(),
            detail: e.to_string(),
        })?;

        let response = self.client.get(url).send().map_err(|e| ServiceError::Transport {
            resource: resource.to_string(),
            detail: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status {
                resource: resource.to_string(),
                status: status.as_u16(),
            });
        }

        response.json().map_err(|e| ServiceError::Decode {
            resource: resource.to_string(),
            detail: e.to_string(),
        })
    }
}

impl StockService for HttpShopApi {
    fn stock(&self, product_id: ProductId) -> Result<Stock, ServiceError> {
        self.get_json(&format!("stock/{product_id}"))
    }
}

impl CatalogService for HttpShopApi {
    fn product(&self, product_id: ProductId) -> Result<Product, ServiceError> {
        self.get_json(&format!("products/{product_id}"))
    }
}
