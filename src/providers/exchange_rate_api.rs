use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

use crate::core::currency::{ConversionError, CurrencyCode, RateTable, RateTableProvider};

// ExchangeRateApiProvider implementation for RateTableProvider
pub struct ExchangeRateApiProvider {
    base_url: String,
    api_key: Option<String>,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        ExchangeRateApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    result: Option<String>,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
    base_code: Option<String>,
    time_last_update_unix: Option<i64>,
    #[serde(default)]
    conversion_rates: HashMap<String, f64>,
}

fn service_error(
    base: &CurrencyCode,
    status: Option<StatusCode>,
    message: String,
) -> ConversionError {
    ConversionError::Service {
        base: base.clone(),
        status,
        message,
    }
}

#[async_trait]
impl RateTableProvider for ExchangeRateApiProvider {
    #[instrument(
        name = "ExchangeRateLookup",
        skip(self),
        fields(base = %base)
    )]
    async fn latest_rates(&self, base: &CurrencyCode) -> Result<RateTable, ConversionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| service_error(base, None, "API key is not configured".to_string()))?;

        let url = format!("{}/v6/{}/latest/{}", self.base_url, api_key, base);
        debug!(
            "Requesting latest rates from {}/v6/<redacted>/latest/{}",
            self.base_url, base
        );

        let client = reqwest::Client::builder()
            .user_agent(concat!("fxc/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| service_error(base, None, format!("Client error: {e}")))?;

        // `without_url` keeps the key out of error messages
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| service_error(base, None, format!("Request error: {}", e.without_url())))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| service_error(base, Some(status), format!("Read error: {}", e.without_url())))?;

        if !status.is_success() {
            let detail = serde_json::from_str::<LatestRatesResponse>(&text)
                .ok()
                .and_then(|r| r.error_type)
                .map(|t| format!(" ({t})"))
                .unwrap_or_default();
            warn!(%status, "Rate service returned an error status");
            return Err(service_error(
                base,
                Some(status),
                format!("HTTP error: {status}{detail}"),
            ));
        }

        let data: LatestRatesResponse = serde_json::from_str(&text).map_err(|e| {
            service_error(
                base,
                Some(status),
                format!("Failed to parse JSON response: {e}"),
            )
        })?;

        if data.result.as_deref() == Some("error") {
            let error_type = data.error_type.as_deref().unwrap_or("unknown-error");
            return Err(service_error(
                base,
                Some(status),
                format!("Service reported error: {error_type}"),
            ));
        }

        if let Some(code) = data.base_code.as_deref() {
            if !code.eq_ignore_ascii_case(base.as_str()) {
                debug!(reported = code, "Rate table base differs from request");
            }
        }

        let last_updated = data
            .time_last_update_unix
            .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0));
        debug!(
            rates = data.conversion_rates.len(),
            ?last_updated,
            "Received rate table"
        );

        Ok(RateTable {
            base: base.clone(),
            rates: data.conversion_rates,
            last_updated,
        })
    }
}
