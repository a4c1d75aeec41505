use serde::{Deserialize, Serialize};

/// One labelled value in a pie/bar series. The core computes the numbers —
/// the frontend only renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub label: String,
    pub value: f64,
}

/// One grouped bar of the growth chart: a type's current valuation next
/// to what was put in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthBar {
    pub label: String,
    pub current: f64,
    pub invested: f64,
}

/// One point of a time-bucketed series (e.g., cumulative invested by month).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Month bucket, formatted `YYYY-MM`.
    pub month: String,
    pub value: f64,
}
