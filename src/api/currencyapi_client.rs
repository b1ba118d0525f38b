use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::config::Settings;
use crate::error::AppError;

/// Client for the currencyapi.com REST provider. One outbound GET per call,
/// no retry and no caching of repeated lookups.
#[derive(Clone)]
pub struct CurrencyApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl CurrencyApiClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.upstream_timeout_secs))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key: settings.api_key.clone(),
            base_url: settings.upstream_base_url.clone(),
        })
    }

    /// Fetch the latest rates for `code` and unwrap the provider's `data`
    /// field. The payload under `data` is returned structurally unchanged.
    pub async fn latest(&self, code: &str) -> Result<Value, AppError> {
        let url = self.latest_url(code);

        // reqwest errors are stripped of their URL before display: the URL
        // carries the API key as a query parameter.
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        let mut body: Value = response
            .json()
            .await
            .map_err(|e| AppError::UpstreamContractViolation(e.without_url().to_string()))?;

        match body.get_mut("data") {
            Some(data) => Ok(data.take()),
            None => Err(AppError::UpstreamContractViolation(
                "response body has no `data` field".to_string(),
            )),
        }
    }

    fn latest_url(&self, code: &str) -> String {
        format!(
            "{}/v3/latest?currencies={}&apikey={}",
            self.base_url, code, self.api_key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CurrencyApiClient {
        let settings = Settings {
            api_key: "k-123".to_string(),
            port: 0,
            upstream_base_url: "https://api.currencyapi.com".to_string(),
            upstream_timeout_secs: 5,
        };
        CurrencyApiClient::new(&settings).unwrap()
    }

    #[test]
    fn latest_url_substitutes_code_and_key() {
        assert_eq!(
            client().latest_url("USD"),
            "https://api.currencyapi.com/v3/latest?currencies=USD&apikey=k-123"
        );
    }
}
