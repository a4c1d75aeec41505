use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::errors::CoreError;
use crate::providers::traits::{TickerMatch, TickerSearchProvider};

/// Minimum spacing between remote ticker-search requests.
const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(500);

/// Result of a debounced search attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Matches, either freshly fetched or served from the query cache.
    Results(Vec<TickerMatch>),

    /// The previous remote request was too recent. The caller should retry
    /// after `retry_after`; this service never sleeps.
    Throttled { retry_after: Duration },
}

/// Client-side debounce around a ticker search provider.
///
/// The search box fires on every keystroke; the upstream API is strictly
/// rate limited. Repeated queries are answered from an in-memory cache, and
/// remote hits are spaced out by a minimum interval.
pub struct TickerSearchService {
    provider: Box<dyn TickerSearchProvider>,
    min_interval: Duration,
    last_request_at: Option<Instant>,
    /// Keyed by normalized (trimmed, uppercased) query.
    cache: HashMap<String, Vec<TickerMatch>>,
}

impl TickerSearchService {
    pub fn new(provider: Box<dyn TickerSearchProvider>) -> Self {
        Self {
            provider,
            min_interval: DEFAULT_MIN_INTERVAL,
            last_request_at: None,
            cache: HashMap::new(),
        }
    }

    /// Override the debounce interval (tests, aggressive free tiers).
    #[must_use]
    pub fn with_min_interval(mut self, min_interval: Duration) -> Self {
        self.min_interval = min_interval;
        self
    }

    /// Search tickers matching `query`. Empty queries yield no results
    /// without touching the provider.
    pub async fn search(&mut self, query: &str) -> Result<SearchOutcome, CoreError> {
        let normalized = query.trim().to_uppercase();
        if normalized.is_empty() {
            return Ok(SearchOutcome::Results(Vec::new()));
        }

        if let Some(cached) = self.cache.get(&normalized) {
            debug!(query = %normalized, "ticker search served from cache");
            return Ok(SearchOutcome::Results(cached.clone()));
        }

        if let Some(last) = self.last_request_at {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                return Ok(SearchOutcome::Throttled {
                    retry_after: self.min_interval - elapsed,
                });
            }
        }

        self.last_request_at = Some(Instant::now());
        let matches = self.provider.search(&normalized).await?;
        debug!(
            query = %normalized,
            provider = self.provider.name(),
            count = matches.len(),
            "ticker search fetched"
        );
        self.cache.insert(normalized, matches.clone());
        Ok(SearchOutcome::Results(matches))
    }

    /// Drop all cached query results.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
