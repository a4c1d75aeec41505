use financify_core::form::{AssetForm, FormState, COMMON_COINS};
use financify_core::models::asset::{AssetDetails, AssetType, PropertyType};

#[test]
fn common_coins_offer_valid_crypto_choices() {
    // Every picker entry must produce a buildable crypto form.
    for (symbol, _name) in COMMON_COINS {
        let mut form = AssetForm::new();
        form.select(AssetType::Crypto);
        {
            let fields = form.crypto_mut().unwrap();
            fields.cryptocurrency = Some(symbol.to_string());
            fields.quantity = Some(1.0);
            fields.price = Some(100.0);
        }
        assert_eq!(form.build().unwrap().asset_type, AssetType::Crypto);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Variant selection
// ═══════════════════════════════════════════════════════════════════

mod selection {
    use super::*;

    #[test]
    fn starts_unselected() {
        let form = AssetForm::new();
        assert_eq!(form.selected_type(), None);
        assert!(matches!(form.state(), FormState::Unselected));
    }

    #[test]
    fn select_activates_that_types_fields() {
        let mut form = AssetForm::new();
        form.select(AssetType::Gold);
        assert_eq!(form.selected_type(), Some(AssetType::Gold));
        assert!(form.gold_mut().is_ok());
    }

    #[test]
    fn switching_type_clears_previous_fields() {
        let mut form = AssetForm::new();
        form.select(AssetType::Gold);
        form.gold_mut().unwrap().quantity = Some(10.0);
        form.gold_mut().unwrap().price_per_gram = Some(6000.0);

        form.select(AssetType::Stocks);
        assert_eq!(form.selected_type(), Some(AssetType::Stocks));

        // No carryover: going back to gold yields an empty field set.
        form.select(AssetType::Gold);
        assert_eq!(form.gold_mut().unwrap().quantity, None);
        assert_eq!(form.gold_mut().unwrap().price_per_gram, None);
    }

    #[test]
    fn reselecting_same_type_resets() {
        let mut form = AssetForm::new();
        form.select(AssetType::Crypto);
        form.crypto_mut().unwrap().quantity = Some(1.0);

        form.select(AssetType::Crypto);
        assert_eq!(form.crypto_mut().unwrap().quantity, None);
    }

    #[test]
    fn clear_returns_to_unselected() {
        let mut form = AssetForm::new();
        form.select(AssetType::Gold);
        form.clear();
        assert_eq!(form.selected_type(), None);
    }

    #[test]
    fn wrong_variant_access_is_rejected() {
        let mut form = AssetForm::new();
        form.select(AssetType::Gold);
        assert!(form.stocks_mut().is_err());
        assert!(form.crypto_mut().is_err());

        form.clear();
        let err = form.gold_mut().unwrap_err();
        assert!(err.to_string().contains("no asset type"));
    }

    #[test]
    fn wrong_variant_error_names_the_active_type() {
        let mut form = AssetForm::new();
        form.select(AssetType::Gold);

        let err = form.stocks_mut().unwrap_err();
        assert!(err.to_string().contains("Stock Market"));
        assert!(err.to_string().contains("Gold Investment"));

        // A rejected access must leave the form usable.
        form.gold_mut().unwrap().quantity = Some(10.0);
        form.gold_mut().unwrap().price_per_gram = Some(6000.0);
        assert!(form.build().is_ok());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Building the POST body
// ═══════════════════════════════════════════════════════════════════

mod build {
    use super::*;

    #[test]
    fn unselected_cannot_build() {
        let err = AssetForm::new().build().unwrap_err();
        assert!(err.to_string().contains("select an asset type"));
    }

    #[test]
    fn gold_happy_path() {
        let mut form = AssetForm::new();
        form.select(AssetType::Gold);
        {
            let fields = form.gold_mut().unwrap();
            fields.quantity = Some(10.0);
            fields.price_per_gram = Some(6000.0);
        }

        let new_asset = form.build().unwrap();
        assert_eq!(new_asset.asset_type, AssetType::Gold);
        assert_eq!(new_asset.details, AssetDetails::gold(10.0, 6000.0));
    }

    #[test]
    fn stocks_happy_path_uppercases_ticker() {
        let mut form = AssetForm::new();
        form.select(AssetType::Stocks);
        {
            let fields = form.stocks_mut().unwrap();
            fields.ticker = Some("aapl".to_string());
            fields.shares = Some(5.0);
            fields.price_per_share = Some(180.0);
        }

        let new_asset = form.build().unwrap();
        assert_eq!(new_asset.details, AssetDetails::stocks("AAPL", 5.0, 180.0));
    }

    #[test]
    fn crypto_happy_path() {
        let mut form = AssetForm::new();
        form.select(AssetType::Crypto);
        {
            let fields = form.crypto_mut().unwrap();
            fields.cryptocurrency = Some("BTC".to_string());
            fields.quantity = Some(0.5);
            fields.price = Some(40000.0);
        }

        assert_eq!(
            form.build().unwrap().details,
            AssetDetails::crypto("BTC", 0.5, 40000.0)
        );
    }

    #[test]
    fn real_estate_happy_path() {
        let mut form = AssetForm::new();
        form.select(AssetType::RealEstate);
        {
            let fields = form.real_estate_mut().unwrap();
            fields.property_type = Some(PropertyType::Land);
            fields.area = Some(2400.0);
            fields.purchase_price = Some(1500000.0);
        }

        assert_eq!(
            form.build().unwrap().details,
            AssetDetails::real_estate(PropertyType::Land, 2400.0, 1500000.0)
        );
    }

    #[test]
    fn fixed_deposit_happy_path() {
        let mut form = AssetForm::new();
        form.select(AssetType::FixedDeposit);
        {
            let fields = form.fixed_deposit_mut().unwrap();
            fields.principal_amount = Some(100000.0);
            fields.interest_rate = Some(7.1);
            fields.maturity_years = Some(5.0);
        }

        assert_eq!(
            form.build().unwrap().details,
            AssetDetails::fixed_deposit(100000.0, 7.1, 5.0)
        );
    }

    #[test]
    fn missing_field_error_names_the_field() {
        let mut form = AssetForm::new();
        form.select(AssetType::Gold);
        form.gold_mut().unwrap().quantity = Some(10.0);

        let err = form.build().unwrap_err();
        assert!(err.to_string().contains("Purchase Price (per gram)"));
    }

    #[test]
    fn blank_ticker_is_missing() {
        let mut form = AssetForm::new();
        form.select(AssetType::Stocks);
        {
            let fields = form.stocks_mut().unwrap();
            fields.ticker = Some("   ".to_string());
            fields.shares = Some(1.0);
            fields.price_per_share = Some(1.0);
        }
        let err = form.build().unwrap_err();
        assert!(err.to_string().contains("Company"));
    }

    #[test]
    fn zero_and_negative_amounts_rejected() {
        let mut form = AssetForm::new();
        form.select(AssetType::Gold);
        {
            let fields = form.gold_mut().unwrap();
            fields.quantity = Some(0.0);
            fields.price_per_gram = Some(6000.0);
        }
        assert!(form.build().is_err());

        form.gold_mut().unwrap().quantity = Some(-2.0);
        assert!(form.build().is_err());
    }

    #[test]
    fn zero_interest_rate_is_allowed() {
        let mut form = AssetForm::new();
        form.select(AssetType::FixedDeposit);
        {
            let fields = form.fixed_deposit_mut().unwrap();
            fields.principal_amount = Some(50000.0);
            fields.interest_rate = Some(0.0);
            fields.maturity_years = Some(1.0);
        }
        assert!(form.build().is_ok());

        form.fixed_deposit_mut().unwrap().interest_rate = Some(-1.0);
        assert!(form.build().is_err());
    }
}
