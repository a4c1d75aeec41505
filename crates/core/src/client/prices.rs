use reqwest::Client;
use tracing::debug;

use crate::config::Config;
use crate::errors::CoreError;
use crate::models::snapshot::{CryptoPrices, GoldPrice, PriceSnapshot, StockPrices};

use super::{api_error, build_http_client};

/// Client for the valuation endpoints of the Financify API.
///
/// The server does the market-data lookups (stock quotes, gold rate, crypto
/// prices); this client only fetches the computed snapshot per render cycle.
pub struct PriceApiClient {
    client: Client,
    config: Config,
}

impl PriceApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            client: build_http_client(),
            config,
        }
    }

    /// `GET /assets/stock-prices` — per-ticker valuation of held stocks.
    pub async fn get_stock_prices(&self, token: &str) -> Result<StockPrices, CoreError> {
        self.get_json(token, "/assets/stock-prices", "Failed to fetch stock prices")
            .await
    }

    /// `GET /gold-price` — current 24k gold price per gram.
    pub async fn get_gold_price(&self, token: &str) -> Result<GoldPrice, CoreError> {
        self.get_json(token, "/gold-price", "Failed to fetch gold price")
            .await
    }

    /// `GET /crypto-prices` — total current value of held crypto.
    pub async fn get_crypto_prices(&self, token: &str) -> Result<CryptoPrices, CoreError> {
        self.get_json(token, "/crypto-prices", "Failed to fetch crypto prices")
            .await
    }

    /// Fetch all three price feeds into one snapshot.
    /// Any failed leg fails the whole snapshot — no partial data.
    pub async fn fetch_snapshot(&self, token: &str) -> Result<PriceSnapshot, CoreError> {
        let stock_prices = self.get_stock_prices(token).await?;
        let gold_price = self.get_gold_price(token).await?;
        let crypto_prices = self.get_crypto_prices(token).await?;

        debug!(
            total_stock_value = stock_prices.total_stock_value,
            gold_per_gram = gold_price.price_gram_24k,
            total_crypto_value = crypto_prices.total_crypto_value,
            "price snapshot fetched"
        );

        Ok(PriceSnapshot {
            stock_prices,
            gold_price,
            crypto_prices,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
        fallback: &str,
    ) -> Result<T, CoreError> {
        let url = self.config.api_url(path);
        debug!(url = %url, "fetching prices");

        let response = self.client.get(&url).bearer_auth(token).send().await?;
        if !response.status().is_success() {
            return Err(api_error(response, fallback).await);
        }

        response
            .json()
            .await
            .map_err(|e| CoreError::UnexpectedResponse(format!("{path} did not parse: {e}")))
    }
}
