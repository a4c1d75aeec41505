use std::collections::HashSet;

use crate::models::aggregate::{PortfolioOverview, TypeAggregate};
use crate::models::asset::{AssetDetails, AssetRecord, AssetType};
use crate::models::snapshot::PriceSnapshot;

/// Reduces an asset list plus a price snapshot into per-type totals and
/// portfolio-wide profit figures.
///
/// Current value sources per type:
/// - stocks: the server's per-ticker valuations from the snapshot
/// - crypto: the server's total crypto value from the snapshot
/// - gold: grams held × live gold price per gram
/// - real estate / fixed deposits: no live feed — valued at cost
///
/// Pure and stateless: recomputed fully on every call, nothing cached.
pub struct ValuationService;

impl ValuationService {
    pub fn new() -> Self {
        Self
    }

    /// Build the full overview. `by_type` always carries all five types in
    /// fixed order; `total_assets` equals the sum of the per-type totals.
    #[must_use]
    pub fn aggregate(
        &self,
        assets: &[AssetRecord],
        snapshot: &PriceSnapshot,
    ) -> PortfolioOverview {
        let by_type: Vec<TypeAggregate> = AssetType::ALL
            .iter()
            .map(|&asset_type| self.aggregate_type(asset_type, assets, snapshot))
            .collect();

        let total_assets: f64 = by_type.iter().map(|a| a.total).sum();
        let total_invested: f64 = by_type.iter().map(|a| a.invested).sum();
        let profit = total_assets - total_invested;
        // Guard the zero-invested case: a percentage over a zero base is
        // meaningless, not 0 and not infinity.
        let profit_pct = if total_invested > 0.0 {
            Some(profit / total_invested * 100.0)
        } else {
            None
        };

        PortfolioOverview {
            as_of: chrono::Utc::now(),
            total_assets,
            total_invested,
            profit,
            profit_pct,
            by_type,
        }
    }

    fn aggregate_type(
        &self,
        asset_type: AssetType,
        assets: &[AssetRecord],
        snapshot: &PriceSnapshot,
    ) -> TypeAggregate {
        let of_type = || assets.iter().filter(move |a| a.asset_type == asset_type);

        let invested: f64 = of_type().map(|a| a.details.invested_value()).sum();

        let total = match asset_type {
            AssetType::Gold => {
                let grams: f64 = of_type()
                    .map(|a| match &a.details {
                        AssetDetails::Gold { quantity, .. } => *quantity,
                        _ => 0.0,
                    })
                    .sum();
                grams * snapshot.gold_price.price_gram_24k
            }
            AssetType::Stocks => {
                // Quotes are keyed per ticker; count each held ticker once
                // even if it appears in several records.
                let held: HashSet<&str> = of_type()
                    .filter_map(|a| match &a.details {
                        AssetDetails::Stocks { ticker, .. } => Some(ticker.as_str()),
                        _ => None,
                    })
                    .collect();
                held.iter()
                    .filter_map(|ticker| snapshot.stock_current_value(ticker))
                    .sum()
            }
            AssetType::Crypto => {
                if of_type().next().is_some() {
                    snapshot.crypto_prices.total_crypto_value
                } else {
                    0.0
                }
            }
            // No live price feed — current value approximated by cost.
            AssetType::RealEstate | AssetType::FixedDeposit => invested,
        };

        TypeAggregate {
            asset_type,
            total,
            invested,
        }
    }
}

impl Default for ValuationService {
    fn default() -> Self {
        Self::new()
    }
}
