pub mod chart;
pub mod ticker_search;
pub mod valuation;
