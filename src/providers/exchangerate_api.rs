use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::core::currency::{RateProvider, RateTable};

pub const DEFAULT_BASE_URL: &str = "https://api.exchangerate-api.com";

// RateProvider backed by the public exchangerate-api.com v4 endpoint
pub struct ExchangeRateApiProvider {
    base_url: String,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str) -> Self {
        ExchangeRateApiProvider {
            base_url: base_url.to_string(),
        }
    }

    /// Builds the request URL for `base`. The code is appended as is, without escaping.
    pub fn request_url(&self, base: &str) -> String {
        format!("{}/v4/latest/{}", self.base_url, base)
    }
}

impl Default for ExchangeRateApiProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

// Only `rates` is read, everything else in the payload is ignored.
// A missing or null `rates` decodes as an empty table.
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    #[serde(default)]
    rates: Option<RateTable>,
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    #[instrument(name = "ExchangeRateFetch", skip(self), fields(base = %base))]
    async fn fetch_rates(&self, base: &str) -> Result<RateTable> {
        let url = self.request_url(base);
        debug!("Requesting latest rates from {}", url);

        let response = reqwest::get(&url)
            .await
            .map_err(|e| anyhow!("HTTP request failed: {}", e))?;

        debug!(status = %response.status(), "Received exchange rate response");

        // Consumes the response, the connection is released whether or not decoding succeeds
        let text = response
            .text()
            .await
            .map_err(|e| anyhow!("Failed to read response body: {}", e))?;

        // Only the first JSON value is decoded, anything after it is ignored
        let data = serde_json::Deserializer::from_str(&text)
            .into_iter::<LatestRatesResponse>()
            .next()
            .ok_or_else(|| anyhow!("JSON decoding failed: empty response body"))?
            .map_err(|e| anyhow!("JSON decoding failed: {}", e))?;

        let rates = data.rates.unwrap_or_default();
        debug!(count = rates.len(), "Decoded rate table");
        Ok(rates)
    }
}
