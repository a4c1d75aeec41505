use std::collections::BTreeMap;

use crate::models::aggregate::PortfolioOverview;
use crate::models::asset::AssetRecord;
use crate::models::chart::{ChartPoint, ChartSlice, GrowthBar};

/// Generates chart-ready data sets from an overview and the asset list.
///
/// The core computes all the numbers — the frontend only renders.
/// No chart-library configuration lives here, only labelled series.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Allocation pie: one slice per asset type with a nonzero current
    /// value, labelled with the type's display name.
    #[must_use]
    pub fn allocation_series(&self, overview: &PortfolioOverview) -> Vec<ChartSlice> {
        overview
            .by_type
            .iter()
            .filter(|a| a.total > 0.0)
            .map(|a| ChartSlice {
                label: a.asset_type.to_string(),
                value: a.total,
            })
            .collect()
    }

    /// Growth comparison bars: current vs invested per asset type, all five
    /// types so the axis stays stable across refreshes.
    #[must_use]
    pub fn growth_series(&self, overview: &PortfolioOverview) -> Vec<GrowthBar> {
        overview
            .by_type
            .iter()
            .map(|a| GrowthBar {
                label: a.asset_type.to_string(),
                current: a.total,
                invested: a.invested,
            })
            .collect()
    }

    /// Cumulative invested amount bucketed by the month each asset was
    /// created, sorted chronologically. Feeds the "Investment Over Time"
    /// area chart.
    #[must_use]
    pub fn invested_over_time(&self, assets: &[AssetRecord]) -> Vec<ChartPoint> {
        let mut by_month: BTreeMap<String, f64> = BTreeMap::new();
        for asset in assets {
            let month = asset.created_at.format("%Y-%m").to_string();
            *by_month.entry(month).or_insert(0.0) += asset.details.invested_value();
        }

        let mut running = 0.0;
        by_month
            .into_iter()
            .map(|(month, invested)| {
                running += invested;
                ChartPoint {
                    month,
                    value: running,
                }
            })
            .collect()
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
