use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::errors::CoreError;

use super::traits::{TickerMatch, TickerSearchProvider};

const BASE_URL: &str = "https://api.polygon.io";

/// Polygon.io reference-tickers provider for stock symbol search.
///
/// - **Requires**: API key.
/// - **Endpoint**: `/v3/reference/tickers?active=true&limit=100&search=...`
/// - **Free tier**: 5 requests/minute — callers should debounce
///   (see `TickerSearchService`).
pub struct PolygonProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl PolygonProvider {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the provider at a different host (tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

// ── Polygon API response types ──────────────────────────────────────

#[derive(Deserialize)]
struct TickersResponse {
    #[serde(default)]
    results: Vec<TickerEntry>,
}

#[derive(Deserialize)]
struct TickerEntry {
    ticker: String,
    #[serde(default)]
    name: String,
}

#[async_trait]
impl TickerSearchProvider for PolygonProvider {
    fn name(&self) -> &str {
        "Polygon"
    }

    async fn search(&self, query: &str) -> Result<Vec<TickerMatch>, CoreError> {
        let url = format!("{}/v3/reference/tickers", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("active", "true"),
                ("limit", "100"),
                ("search", query),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CoreError::Api {
                status: response.status().as_u16(),
                message: format!("Polygon ticker search failed for '{query}'"),
            });
        }

        let parsed: TickersResponse = response.json().await.map_err(|e| {
            CoreError::UnexpectedResponse(format!("Polygon response did not parse: {e}"))
        })?;

        Ok(parsed
            .results
            .into_iter()
            .map(|entry| TickerMatch {
                symbol: entry.ticker.to_uppercase(),
                name: entry.name,
            })
            .collect())
    }
}
