use chrono::{TimeZone, Utc};
use std::collections::HashMap;

use financify_core::models::asset::{AssetDetails, AssetRecord, AssetType, PropertyType};
use financify_core::models::snapshot::{
    CryptoPrices, GoldPrice, PriceSnapshot, StockPrices, StockQuote,
};
use financify_core::services::valuation::ValuationService;

fn record(id: &str, details: AssetDetails) -> AssetRecord {
    AssetRecord {
        id: id.to_string(),
        asset_type: details.asset_type(),
        details,
        created_at: Utc.with_ymd_and_hms(2024, 10, 1, 0, 0, 0).unwrap(),
    }
}

fn quote(current_value: f64) -> StockQuote {
    StockQuote {
        current_value,
        invested_value: 0.0,
        pnl: 0.0,
        pnl_percentage: 0.0,
        shares: 0.0,
    }
}

fn snapshot(gold_per_gram: f64, crypto_total: f64, stocks: &[(&str, f64)]) -> PriceSnapshot {
    let stocks_map: HashMap<String, StockQuote> = stocks
        .iter()
        .map(|(ticker, value)| (ticker.to_string(), quote(*value)))
        .collect();
    PriceSnapshot {
        stock_prices: StockPrices {
            total_stock_value: stocks.iter().map(|(_, v)| v).sum(),
            stocks: stocks_map,
        },
        gold_price: GoldPrice {
            price_gram_24k: gold_per_gram,
        },
        crypto_prices: CryptoPrices {
            total_crypto_value: crypto_total,
        },
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Per-type reduction rules
// ═══════════════════════════════════════════════════════════════════

mod per_type {
    use super::*;

    #[test]
    fn gold_current_uses_live_price_per_gram() {
        // 10 g at a live price of 6000/g → 60,000
        let assets = vec![record("g1", AssetDetails::gold(10.0, 5000.0))];
        let overview = ValuationService::new().aggregate(&assets, &snapshot(6000.0, 0.0, &[]));

        let gold = overview.for_type(AssetType::Gold).unwrap();
        assert_eq!(gold.total, 60000.0);
        assert_eq!(gold.invested, 50000.0);
        assert_eq!(gold.profit(), 10000.0);
    }

    #[test]
    fn gold_sums_multiple_holdings() {
        let assets = vec![
            record("g1", AssetDetails::gold(10.0, 5000.0)),
            record("g2", AssetDetails::gold(5.0, 5500.0)),
        ];
        let overview = ValuationService::new().aggregate(&assets, &snapshot(6000.0, 0.0, &[]));

        let gold = overview.for_type(AssetType::Gold).unwrap();
        assert_eq!(gold.total, 15.0 * 6000.0);
        assert_eq!(gold.invested, 10.0 * 5000.0 + 5.0 * 5500.0);
    }

    #[test]
    fn stocks_current_from_snapshot_invested_from_records() {
        let assets = vec![
            record("s1", AssetDetails::stocks("AAPL", 5.0, 180.0)),
            record("s2", AssetDetails::stocks("MSFT", 2.0, 400.0)),
        ];
        let snap = snapshot(0.0, 0.0, &[("AAPL", 1000.0), ("MSFT", 900.0)]);
        let overview = ValuationService::new().aggregate(&assets, &snap);

        let stocks = overview.for_type(AssetType::Stocks).unwrap();
        assert_eq!(stocks.total, 1900.0);
        assert_eq!(stocks.invested, 5.0 * 180.0 + 2.0 * 400.0);
    }

    #[test]
    fn duplicate_ticker_counted_once_for_current_value() {
        // Two records of the same ticker: the server's per-ticker valuation
        // already covers all shares, so the quote must not be double counted.
        let assets = vec![
            record("s1", AssetDetails::stocks("AAPL", 5.0, 180.0)),
            record("s2", AssetDetails::stocks("AAPL", 3.0, 190.0)),
        ];
        let snap = snapshot(0.0, 0.0, &[("AAPL", 1600.0)]);
        let overview = ValuationService::new().aggregate(&assets, &snap);

        let stocks = overview.for_type(AssetType::Stocks).unwrap();
        assert_eq!(stocks.total, 1600.0);
        assert_eq!(stocks.invested, 5.0 * 180.0 + 3.0 * 190.0);
    }

    #[test]
    fn held_ticker_without_quote_contributes_zero() {
        let assets = vec![record("s1", AssetDetails::stocks("TSLA", 1.0, 250.0))];
        let snap = snapshot(0.0, 0.0, &[("AAPL", 1000.0)]);
        let overview = ValuationService::new().aggregate(&assets, &snap);

        assert_eq!(overview.for_type(AssetType::Stocks).unwrap().total, 0.0);
    }

    #[test]
    fn crypto_current_is_snapshot_total() {
        let assets = vec![record("c1", AssetDetails::crypto("BTC", 0.5, 40000.0))];
        let overview = ValuationService::new().aggregate(&assets, &snapshot(0.0, 25000.0, &[]));

        let crypto = overview.for_type(AssetType::Crypto).unwrap();
        assert_eq!(crypto.total, 25000.0);
        assert_eq!(crypto.invested, 20000.0);
    }

    #[test]
    fn crypto_total_ignored_when_nothing_held() {
        let overview = ValuationService::new().aggregate(&[], &snapshot(0.0, 25000.0, &[]));
        assert_eq!(overview.for_type(AssetType::Crypto).unwrap().total, 0.0);
    }

    #[test]
    fn realestate_and_fd_valued_at_cost() {
        let assets = vec![
            record(
                "r1",
                AssetDetails::real_estate(PropertyType::Residential, 1200.0, 5000000.0),
            ),
            record("f1", AssetDetails::fixed_deposit(100000.0, 7.1, 5.0)),
        ];
        let overview = ValuationService::new().aggregate(&assets, &snapshot(0.0, 0.0, &[]));

        let re = overview.for_type(AssetType::RealEstate).unwrap();
        assert_eq!(re.total, 5000000.0);
        assert_eq!(re.total, re.invested);

        let fd = overview.for_type(AssetType::FixedDeposit).unwrap();
        assert_eq!(fd.total, 100000.0);
        assert_eq!(fd.total, fd.invested);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Portfolio totals
// ═══════════════════════════════════════════════════════════════════

mod totals {
    use super::*;

    fn mixed_portfolio() -> (Vec<AssetRecord>, PriceSnapshot) {
        let assets = vec![
            record("g1", AssetDetails::gold(10.0, 5000.0)),
            record("s1", AssetDetails::stocks("AAPL", 5.0, 180.0)),
            record("c1", AssetDetails::crypto("BTC", 0.5, 40000.0)),
            record("f1", AssetDetails::fixed_deposit(100000.0, 7.0, 5.0)),
        ];
        let snap = snapshot(6000.0, 22000.0, &[("AAPL", 1000.0)]);
        (assets, snap)
    }

    #[test]
    fn total_assets_equals_sum_of_per_type_totals() {
        let (assets, snap) = mixed_portfolio();
        let overview = ValuationService::new().aggregate(&assets, &snap);

        let sum: f64 = overview.by_type.iter().map(|a| a.total).sum();
        assert!((overview.total_assets - sum).abs() < 1e-9);
        assert_eq!(overview.total_assets, 60000.0 + 1000.0 + 22000.0 + 100000.0);
    }

    #[test]
    fn profit_is_current_minus_invested() {
        let (assets, snap) = mixed_portfolio();
        let overview = ValuationService::new().aggregate(&assets, &snap);

        assert!((overview.profit - (overview.total_assets - overview.total_invested)).abs() < 1e-9);
    }

    #[test]
    fn profit_pct_on_simple_case() {
        let assets = vec![record("g1", AssetDetails::gold(10.0, 5000.0))];
        let overview = ValuationService::new().aggregate(&assets, &snapshot(6000.0, 0.0, &[]));

        // 60,000 current on 50,000 invested → +20%
        let pct = overview.profit_pct.unwrap();
        assert!((pct - 20.0).abs() < 1e-9);
    }

    #[test]
    fn profit_pct_is_none_when_nothing_invested() {
        // Zero invested with a positive current value must not yield 0, NaN,
        // or infinity — there is no percentage over a zero base.
        let assets = vec![record("c1", AssetDetails::crypto("AIR", 1.0, 0.0))];
        let overview = ValuationService::new().aggregate(&assets, &snapshot(0.0, 5000.0, &[]));

        assert_eq!(overview.total_invested, 0.0);
        assert!(overview.total_assets > 0.0);
        assert_eq!(overview.profit_pct, None);
    }

    #[test]
    fn empty_portfolio_is_all_zero() {
        let overview = ValuationService::new().aggregate(&[], &snapshot(6000.0, 0.0, &[]));
        assert_eq!(overview.total_assets, 0.0);
        assert_eq!(overview.total_invested, 0.0);
        assert_eq!(overview.profit, 0.0);
        assert_eq!(overview.profit_pct, None);
    }

    #[test]
    fn by_type_is_complete_and_ordered() {
        let overview = ValuationService::new().aggregate(&[], &snapshot(0.0, 0.0, &[]));
        let types: Vec<AssetType> = overview.by_type.iter().map(|a| a.asset_type).collect();
        assert_eq!(types, AssetType::ALL.to_vec());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Chart series
// ═══════════════════════════════════════════════════════════════════

mod charts {
    use super::*;
    use financify_core::services::chart::ChartService;

    #[test]
    fn allocation_series_skips_empty_types() {
        let assets = vec![record("g1", AssetDetails::gold(10.0, 5000.0))];
        let overview = ValuationService::new().aggregate(&assets, &snapshot(6000.0, 0.0, &[]));
        let slices = ChartService::new().allocation_series(&overview);

        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].label, "Gold Investment");
        assert_eq!(slices[0].value, 60000.0);
    }

    #[test]
    fn growth_series_keeps_all_five_labels() {
        let overview = ValuationService::new().aggregate(&[], &snapshot(0.0, 0.0, &[]));
        let bars = ChartService::new().growth_series(&overview);
        assert_eq!(bars.len(), 5);
        assert!(bars.iter().all(|b| b.current == 0.0 && b.invested == 0.0));
    }

    #[test]
    fn growth_series_pairs_current_with_invested() {
        // A profitable position must show both sides of the comparison,
        // not just the current valuation.
        let assets = vec![record("g1", AssetDetails::gold(10.0, 5000.0))];
        let overview = ValuationService::new().aggregate(&assets, &snapshot(6000.0, 0.0, &[]));
        let bars = ChartService::new().growth_series(&overview);

        let gold = bars.iter().find(|b| b.label == "Gold Investment").unwrap();
        assert_eq!(gold.current, 60000.0);
        assert_eq!(gold.invested, 50000.0);
        assert_ne!(gold.current, gold.invested);
    }

    #[test]
    fn invested_over_time_accumulates_by_month() {
        let mut a = record("g1", AssetDetails::gold(10.0, 5000.0));
        a.created_at = Utc.with_ymd_and_hms(2024, 9, 15, 0, 0, 0).unwrap();
        let mut b = record("f1", AssetDetails::fixed_deposit(100000.0, 7.0, 5.0));
        b.created_at = Utc.with_ymd_and_hms(2024, 11, 2, 0, 0, 0).unwrap();

        // Out of order on purpose — buckets must sort chronologically.
        let points = ChartService::new().invested_over_time(&[b, a]);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].month, "2024-09");
        assert_eq!(points[0].value, 50000.0);
        assert_eq!(points[1].month, "2024-11");
        assert_eq!(points[1].value, 150000.0);
    }
}
