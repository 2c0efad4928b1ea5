//! HTTP client for the storefront product API.

mod urls;

use std::time::Duration;

use boutique_core::{AppConfig, NormalizerOptions, Product};
use reqwest::Client;
use serde_json::Value;

use crate::envelope::{extract_product_list, extract_single_product};
use crate::error::ClientError;
use crate::normalize::{normalize, normalize_all};
use crate::raw::RawProduct;
use crate::retry::retry_with_backoff;

use urls::{product_url, products_url};

/// Client for `GET /api/products` and `GET /api/products/{id}`.
///
/// Non-2xx statuses become typed errors. Transient failures are retried only
/// when `max_retries > 0`.
pub struct StorefrontClient {
    client: Client,
    base_url: String,
    max_retries: u32,
    backoff_base_secs: u64,
}

impl StorefrontClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if `base_url` is not an
    /// `http(s)` URL, or [`ClientError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, ClientError> {
        products_url(base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.to_owned(),
            max_retries,
            backoff_base_secs,
        })
    }

    /// Creates a client from the loaded application config.
    ///
    /// # Errors
    ///
    /// See [`StorefrontClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
            config.max_retries,
            config.retry_backoff_base_secs,
        )
    }

    /// Fetches the raw product list, accepting any of the known envelopes.
    ///
    /// # Errors
    ///
    /// - [`ClientError::UnexpectedFormat`] if no envelope matches.
    /// - [`ClientError::UnexpectedStatus`] / [`ClientError::NotFound`] for non-2xx.
    /// - [`ClientError::Http`] on transport failure.
    /// - [`ClientError::Deserialize`] if the body is not JSON.
    pub async fn fetch_raw_products(&self) -> Result<Vec<RawProduct>, ClientError> {
        let url = products_url(&self.base_url)?;
        let body = self.get_json(&url).await?;
        extract_product_list(&body, &url)
    }

    /// Fetches and normalizes the full catalog.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_raw_products`]. Normalization
    /// itself never fails.
    pub async fn fetch_products(
        &self,
        options: &NormalizerOptions,
    ) -> Result<Vec<Product>, ClientError> {
        let raws = self.fetch_raw_products().await?;
        let products = normalize_all(&raws, options);
        tracing::info!(count = products.len(), "fetched product catalog");
        Ok(products)
    }

    /// Fetches one product by id.
    ///
    /// Every failure, including transport errors, is treated as "not found" and
    /// logged rather than returned.
    pub async fn fetch_product(&self, id: &str, options: &NormalizerOptions) -> Option<Product> {
        let url = match product_url(&self.base_url, id) {
            Ok(url) => url,
            Err(error) => {
                tracing::warn!(product_id = id, %error, "could not build product URL");
                return None;
            }
        };

        let body = match self.get_json(&url).await {
            Ok(body) => body,
            Err(ClientError::NotFound { .. }) => {
                tracing::debug!(product_id = id, "product not found");
                return None;
            }
            Err(error) => {
                tracing::warn!(
                    product_id = id,
                    %error,
                    "product fetch failed, treating as not found"
                );
                return None;
            }
        };

        let Some(raw) = extract_single_product(&body) else {
            tracing::debug!(product_id = id, "product response carried no data");
            return None;
        };
        Some(normalize(&raw, options))
    }

    async fn get_json(&self, url: &str) -> Result<Value, ClientError> {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, move || async move {
            let response = self
                .client
                .get(url)
                .header(reqwest::header::ACCEPT, "application/json")
                .send()
                .await?;
            let status = response.status();

            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(ClientError::NotFound {
                    url: url.to_owned(),
                });
            }

            if !status.is_success() {
                return Err(ClientError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: url.to_owned(),
                });
            }

            let body = response.text().await?;
            serde_json::from_str::<Value>(&body).map_err(|e| ClientError::Deserialize {
                context: format!("response from {url}"),
                source: e,
            })
        })
        .await
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
