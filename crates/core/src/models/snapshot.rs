use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Live valuation of one held stock, keyed by ticker in `StockPrices`.
/// Values are computed server-side against current market quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    pub current_value: f64,
    pub invested_value: f64,
    pub pnl: f64,
    pub pnl_percentage: f64,
    pub shares: f64,
}

/// Response of `GET /assets/stock-prices`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPrices {
    pub total_stock_value: f64,
    #[serde(default)]
    pub stocks: HashMap<String, StockQuote>,
}

/// Response of `GET /gold-price`. Field name comes from the upstream
/// gold-rate feed the server proxies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoldPrice {
    /// Current price of 24-karat gold per gram.
    pub price_gram_24k: f64,
}

/// Response of `GET /crypto-prices`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoPrices {
    pub total_crypto_value: f64,
}

/// Market prices for one fetch cycle. Ephemeral: rebuilt on every refresh,
/// never persisted or mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSnapshot {
    pub stock_prices: StockPrices,
    pub gold_price: GoldPrice,
    pub crypto_prices: CryptoPrices,
}

impl PriceSnapshot {
    /// Current value of a specific ticker, if the server quoted it.
    #[must_use]
    pub fn stock_current_value(&self, ticker: &str) -> Option<f64> {
        self.stock_prices
            .stocks
            .get(&ticker.to_uppercase())
            .map(|q| q.current_value)
    }
}
