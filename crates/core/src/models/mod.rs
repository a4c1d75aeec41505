pub mod aggregate;
pub mod asset;
pub mod chart;
pub mod snapshot;
