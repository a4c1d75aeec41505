use crate::errors::CoreError;
use crate::models::asset::{AssetDetails, AssetType, NewAsset, PropertyType};

/// Coins offered in the crypto form's picker when the user hasn't typed
/// a symbol: (symbol, display name).
pub const COMMON_COINS: [(&str, &str); 4] = [
    ("BTC", "Bitcoin"),
    ("ETH", "Ethereum"),
    ("USDT", "Tether"),
    ("BNB", "Binance Coin"),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoldFields {
    pub quantity: Option<f64>,
    pub price_per_gram: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockFields {
    pub ticker: Option<String>,
    pub shares: Option<f64>,
    pub price_per_share: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CryptoFields {
    pub cryptocurrency: Option<String>,
    pub quantity: Option<f64>,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RealEstateFields {
    pub property_type: Option<PropertyType>,
    pub area: Option<f64>,
    pub purchase_price: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixedDepositFields {
    pub principal_amount: Option<f64>,
    pub interest_rate: Option<f64>,
    pub maturity_years: Option<f64>,
}

/// The active field set — one state per asset type plus the initial
/// "nothing selected" state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormState {
    #[default]
    Unselected,
    Gold(GoldFields),
    Stocks(StockFields),
    Crypto(CryptoFields),
    RealEstate(RealEstateFields),
    FixedDeposit(FixedDepositFields),
}

/// The "add investment" form.
///
/// Selecting an asset type swaps in that type's empty field set; values
/// never carry over between types (re-selecting the current type also
/// resets). `build` runs the per-variant required-field checks and emits
/// the POST body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetForm {
    state: FormState,
}

impl AssetForm {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    #[must_use]
    pub fn selected_type(&self) -> Option<AssetType> {
        match self.state {
            FormState::Unselected => None,
            FormState::Gold(_) => Some(AssetType::Gold),
            FormState::Stocks(_) => Some(AssetType::Stocks),
            FormState::Crypto(_) => Some(AssetType::Crypto),
            FormState::RealEstate(_) => Some(AssetType::RealEstate),
            FormState::FixedDeposit(_) => Some(AssetType::FixedDeposit),
        }
    }

    /// Switch the form to a type, resetting all fields.
    pub fn select(&mut self, asset_type: AssetType) {
        self.state = match asset_type {
            AssetType::Gold => FormState::Gold(GoldFields::default()),
            AssetType::Stocks => FormState::Stocks(StockFields::default()),
            AssetType::Crypto => FormState::Crypto(CryptoFields::default()),
            AssetType::RealEstate => FormState::RealEstate(RealEstateFields::default()),
            AssetType::FixedDeposit => FormState::FixedDeposit(FixedDepositFields::default()),
        };
    }

    /// Back to the initial "select an asset type" state.
    pub fn clear(&mut self) {
        self.state = FormState::Unselected;
    }

    // ── Field access (wrong-variant writes are rejected) ────────────

    // The active type is read before `state` is borrowed mutably, so the
    // error arms only touch locals.

    pub fn gold_mut(&mut self) -> Result<&mut GoldFields, CoreError> {
        let active = self.selected_type();
        match &mut self.state {
            FormState::Gold(fields) => Ok(fields),
            _ => Err(wrong_variant(AssetType::Gold, active)),
        }
    }

    pub fn stocks_mut(&mut self) -> Result<&mut StockFields, CoreError> {
        let active = self.selected_type();
        match &mut self.state {
            FormState::Stocks(fields) => Ok(fields),
            _ => Err(wrong_variant(AssetType::Stocks, active)),
        }
    }

    pub fn crypto_mut(&mut self) -> Result<&mut CryptoFields, CoreError> {
        let active = self.selected_type();
        match &mut self.state {
            FormState::Crypto(fields) => Ok(fields),
            _ => Err(wrong_variant(AssetType::Crypto, active)),
        }
    }

    pub fn real_estate_mut(&mut self) -> Result<&mut RealEstateFields, CoreError> {
        let active = self.selected_type();
        match &mut self.state {
            FormState::RealEstate(fields) => Ok(fields),
            _ => Err(wrong_variant(AssetType::RealEstate, active)),
        }
    }

    pub fn fixed_deposit_mut(&mut self) -> Result<&mut FixedDepositFields, CoreError> {
        let active = self.selected_type();
        match &mut self.state {
            FormState::FixedDeposit(fields) => Ok(fields),
            _ => Err(wrong_variant(AssetType::FixedDeposit, active)),
        }
    }

    /// Validate required fields and produce the POST body.
    pub fn build(&self) -> Result<NewAsset, CoreError> {
        let details = match &self.state {
            FormState::Unselected => {
                return Err(CoreError::Validation("select an asset type first".into()))
            }
            FormState::Gold(f) => {
                let quantity = require_positive(f.quantity, "Quantity (grams)")?;
                let price = require_positive(f.price_per_gram, "Purchase Price (per gram)")?;
                AssetDetails::gold(quantity, price)
            }
            FormState::Stocks(f) => {
                let ticker = require_text(f.ticker.as_deref(), "Company")?;
                let shares = require_positive(f.shares, "Number of Shares")?;
                let price = require_positive(f.price_per_share, "Purchase Price (per share)")?;
                AssetDetails::stocks(ticker, shares, price)
            }
            FormState::Crypto(f) => {
                let coin = require_text(f.cryptocurrency.as_deref(), "Cryptocurrency")?;
                let quantity = require_positive(f.quantity, "Quantity")?;
                let price = require_positive(f.price, "Purchase Price")?;
                AssetDetails::crypto(coin, quantity, price)
            }
            FormState::RealEstate(f) => {
                let property_type = f
                    .property_type
                    .ok_or_else(|| required("Property Type"))?;
                let area = require_positive(f.area, "Area (sq. ft)")?;
                let price = require_positive(f.purchase_price, "Purchase Price")?;
                AssetDetails::real_estate(property_type, area, price)
            }
            FormState::FixedDeposit(f) => {
                let principal = require_positive(f.principal_amount, "Principal Amount")?;
                let rate = f.interest_rate.ok_or_else(|| required("Interest Rate"))?;
                if rate < 0.0 {
                    return Err(CoreError::Validation(
                        "Interest Rate must not be negative".into(),
                    ));
                }
                let years = require_positive(f.maturity_years, "Maturity Period (Years)")?;
                AssetDetails::fixed_deposit(principal, rate, years)
            }
        };

        Ok(NewAsset::new(details))
    }
}

fn wrong_variant(wanted: AssetType, active: Option<AssetType>) -> CoreError {
    let active = active.map_or_else(|| "no asset type".to_string(), |t| t.to_string());
    CoreError::Validation(format!(
        "cannot edit '{wanted}' fields while {active} is selected"
    ))
}

fn required(label: &str) -> CoreError {
    CoreError::Validation(format!("{label} is required"))
}

fn require_positive(value: Option<f64>, label: &str) -> Result<f64, CoreError> {
    let v = value.ok_or_else(|| required(label))?;
    if !v.is_finite() || v <= 0.0 {
        return Err(CoreError::Validation(format!(
            "{label} must be a positive number"
        )));
    }
    Ok(v)
}

fn require_text(value: Option<&str>, label: &str) -> Result<String, CoreError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        _ => Err(required(label)),
    }
}
