use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::asset::AssetType;

/// Derived current/invested totals for one asset type.
/// Regenerated on every aggregation pass — no stored identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeAggregate {
    pub asset_type: AssetType,

    /// Current market value of all holdings of this type.
    pub total: f64,

    /// Amount originally invested into this type.
    pub invested: f64,
}

impl TypeAggregate {
    /// Profit (or loss, when negative) for this type.
    #[must_use]
    pub fn profit(&self) -> f64 {
        self.total - self.invested
    }
}

/// The full dashboard aggregate: one row per asset type plus portfolio
/// totals. Computed from the asset list and a price snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioOverview {
    /// When this overview was computed.
    pub as_of: DateTime<Utc>,

    /// Sum of per-type current values.
    pub total_assets: f64,

    /// Sum of per-type invested values.
    pub total_invested: f64,

    /// total_assets − total_invested.
    pub profit: f64,

    /// profit / total_invested × 100. `None` when nothing is invested —
    /// there is no meaningful percentage on a zero base.
    pub profit_pct: Option<f64>,

    /// One entry per asset type, in `AssetType::ALL` order. Types with no
    /// holdings appear with zero totals so chart labels stay stable.
    pub by_type: Vec<TypeAggregate>,
}

impl PortfolioOverview {
    /// Look up the aggregate for a single type.
    #[must_use]
    pub fn for_type(&self, asset_type: AssetType) -> Option<&TypeAggregate> {
        self.by_type.iter().find(|a| a.asset_type == asset_type)
    }
}
