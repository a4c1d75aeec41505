use async_trait::async_trait;

use crate::errors::CoreError;

/// A ticker symbol with its company name, as offered in the stock form's
/// symbol picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerMatch {
    /// Symbol, uppercased (e.g., "AAPL")
    pub symbol: String,

    /// Company name (e.g., "Apple Inc.")
    pub name: String,
}

/// Trait abstraction for external ticker-symbol search APIs.
///
/// The stock form needs symbol lookup from a third-party financial-data
/// provider. If that API changes or gets swapped out, only the one
/// implementation changes — callers see this trait.
#[async_trait]
pub trait TickerSearchProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Search active tickers matching the query string.
    async fn search(&self, query: &str) -> Result<Vec<TickerMatch>, CoreError>;
}
