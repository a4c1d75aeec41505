use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// The type/category of a tracked holding.
/// Wire names match the REST API: `gold`, `stocks`, `crypto`, `realestate`, `fd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetType {
    #[serde(rename = "gold")]
    Gold,
    #[serde(rename = "stocks")]
    Stocks,
    #[serde(rename = "crypto")]
    Crypto,
    #[serde(rename = "realestate")]
    RealEstate,
    #[serde(rename = "fd")]
    FixedDeposit,
}

impl AssetType {
    /// All types in the order they appear in dashboards and forms.
    pub const ALL: [AssetType; 5] = [
        AssetType::Gold,
        AssetType::Stocks,
        AssetType::Crypto,
        AssetType::RealEstate,
        AssetType::FixedDeposit,
    ];
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetType::Gold => write!(f, "Gold Investment"),
            AssetType::Stocks => write!(f, "Stock Market"),
            AssetType::Crypto => write!(f, "Cryptocurrency"),
            AssetType::RealEstate => write!(f, "Real Estate"),
            AssetType::FixedDeposit => write!(f, "Fixed Deposits"),
        }
    }
}

/// Category of a real-estate holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Residential,
    Commercial,
    Land,
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyType::Residential => write!(f, "residential"),
            PropertyType::Commercial => write!(f, "commercial"),
            PropertyType::Land => write!(f, "land"),
        }
    }
}

/// Type-specific fields of an asset record.
///
/// The wire format carries `assetType` next to an untagged `details` object;
/// each variant's field set is disjoint, so serde resolves the shape from
/// the fields alone. `AssetRecord::validate` checks that it agrees with
/// `assetType` — exactly one shape, matching the declared type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssetDetails {
    #[serde(rename_all = "camelCase")]
    Gold {
        /// Grams held
        quantity: f64,
        /// Purchase price per gram
        price_per_gram: f64,
    },
    #[serde(rename_all = "camelCase")]
    Stocks {
        shares: f64,
        price_per_share: f64,
        /// Ticker symbol, uppercased (e.g., "AAPL")
        ticker: String,
    },
    #[serde(rename_all = "camelCase")]
    Crypto {
        crypto_quantity: f64,
        /// Purchase price per coin
        crypto_price: f64,
        /// Coin symbol, uppercased (e.g., "BTC")
        cryptocurrency: String,
    },
    #[serde(rename_all = "camelCase")]
    RealEstate {
        /// Square feet
        area: f64,
        purchase_price: f64,
        property_type: PropertyType,
    },
    #[serde(rename_all = "camelCase")]
    FixedDeposit {
        principal_amount: f64,
        /// Annual interest rate in percent
        interest_rate: f64,
        /// Maturity period in years
        maturity_period: f64,
    },
}

impl AssetDetails {
    pub fn gold(quantity: f64, price_per_gram: f64) -> Self {
        AssetDetails::Gold {
            quantity,
            price_per_gram,
        }
    }

    pub fn stocks(ticker: impl Into<String>, shares: f64, price_per_share: f64) -> Self {
        AssetDetails::Stocks {
            shares,
            price_per_share,
            ticker: ticker.into().to_uppercase(),
        }
    }

    pub fn crypto(coin: impl Into<String>, quantity: f64, price: f64) -> Self {
        AssetDetails::Crypto {
            crypto_quantity: quantity,
            crypto_price: price,
            cryptocurrency: coin.into().to_uppercase(),
        }
    }

    pub fn real_estate(property_type: PropertyType, area: f64, purchase_price: f64) -> Self {
        AssetDetails::RealEstate {
            area,
            purchase_price,
            property_type,
        }
    }

    pub fn fixed_deposit(principal: f64, interest_rate: f64, maturity_years: f64) -> Self {
        AssetDetails::FixedDeposit {
            principal_amount: principal,
            interest_rate,
            maturity_period: maturity_years,
        }
    }

    /// The asset type this shape belongs to.
    #[must_use]
    pub fn asset_type(&self) -> AssetType {
        match self {
            AssetDetails::Gold { .. } => AssetType::Gold,
            AssetDetails::Stocks { .. } => AssetType::Stocks,
            AssetDetails::Crypto { .. } => AssetType::Crypto,
            AssetDetails::RealEstate { .. } => AssetType::RealEstate,
            AssetDetails::FixedDeposit { .. } => AssetType::FixedDeposit,
        }
    }

    /// The "Amount" column: grams, shares, coins, square feet, or principal.
    #[must_use]
    pub fn amount(&self) -> f64 {
        match self {
            AssetDetails::Gold { quantity, .. } => *quantity,
            AssetDetails::Stocks { shares, .. } => *shares,
            AssetDetails::Crypto { crypto_quantity, .. } => *crypto_quantity,
            AssetDetails::RealEstate { area, .. } => *area,
            AssetDetails::FixedDeposit {
                principal_amount, ..
            } => *principal_amount,
        }
    }

    /// The "Purchase Price" column. Fixed deposits carry no unit price.
    #[must_use]
    pub fn unit_price(&self) -> Option<f64> {
        match self {
            AssetDetails::Gold { price_per_gram, .. } => Some(*price_per_gram),
            AssetDetails::Stocks {
                price_per_share, ..
            } => Some(*price_per_share),
            AssetDetails::Crypto { crypto_price, .. } => Some(*crypto_price),
            AssetDetails::RealEstate { purchase_price, .. } => Some(*purchase_price),
            AssetDetails::FixedDeposit { .. } => None,
        }
    }

    /// Cost of this holding at purchase time.
    ///
    /// Real estate and fixed deposits are tracked at their purchase
    /// price / principal — the amount column is informational (area, term).
    #[must_use]
    pub fn invested_value(&self) -> f64 {
        match self {
            AssetDetails::Gold {
                quantity,
                price_per_gram,
            } => quantity * price_per_gram,
            AssetDetails::Stocks {
                shares,
                price_per_share,
                ..
            } => shares * price_per_share,
            AssetDetails::Crypto {
                crypto_quantity,
                crypto_price,
                ..
            } => crypto_quantity * crypto_price,
            AssetDetails::RealEstate { purchase_price, .. } => *purchase_price,
            AssetDetails::FixedDeposit {
                principal_amount, ..
            } => *principal_amount,
        }
    }

    /// The "Details" column text shown in the investments table.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            AssetDetails::Gold { .. } => "24K Gold".to_string(),
            AssetDetails::Stocks { ticker, .. } => format!("Stock Name: {ticker}"),
            AssetDetails::Crypto { cryptocurrency, .. } => format!("Coin: {cryptocurrency}"),
            AssetDetails::RealEstate { property_type, .. } => {
                format!("Land Type: {property_type}")
            }
            AssetDetails::FixedDeposit {
                interest_rate,
                maturity_period,
                ..
            } => format!("{interest_rate}% for {maturity_period} years"),
        }
    }
}

/// A single tracked holding as stored by the API server.
/// The server owns the source of truth; this is a transient view copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "assetType")]
    pub asset_type: AssetType,

    pub details: AssetDetails,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl AssetRecord {
    /// Check the shape invariant: `details` must match `asset_type`.
    pub fn validate(&self) -> Result<(), CoreError> {
        let actual = self.details.asset_type();
        if actual != self.asset_type {
            return Err(CoreError::Validation(format!(
                "asset {}: declared type '{}' but details are for '{}'",
                self.id, self.asset_type, actual
            )));
        }
        Ok(())
    }
}

/// An inline edit from the investments table: new amount and/or purchase
/// price. Applied onto the record's own variant, so a gold edit can never
/// touch stock fields.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AssetEdit {
    /// New value for the "Amount" column (grams, shares, coins, square
    /// feet, or principal).
    pub amount: Option<f64>,

    /// New value for the "Purchase Price" column. Not applicable to fixed
    /// deposits, which have no unit price.
    pub unit_price: Option<f64>,
}

impl AssetEdit {
    /// Write the edited values into the matching fields of `details`.
    pub fn apply_to(&self, details: &mut AssetDetails) -> Result<(), CoreError> {
        if let Some(amount) = self.amount {
            if !amount.is_finite() || amount <= 0.0 {
                return Err(CoreError::Validation(
                    "Amount must be a positive number".into(),
                ));
            }
            match details {
                AssetDetails::Gold { quantity, .. } => *quantity = amount,
                AssetDetails::Stocks { shares, .. } => *shares = amount,
                AssetDetails::Crypto {
                    crypto_quantity, ..
                } => *crypto_quantity = amount,
                AssetDetails::RealEstate { area, .. } => *area = amount,
                AssetDetails::FixedDeposit {
                    principal_amount, ..
                } => *principal_amount = amount,
            }
        }

        if let Some(price) = self.unit_price {
            if !price.is_finite() || price <= 0.0 {
                return Err(CoreError::Validation(
                    "Purchase Price must be a positive number".into(),
                ));
            }
            match details {
                AssetDetails::Gold { price_per_gram, .. } => *price_per_gram = price,
                AssetDetails::Stocks {
                    price_per_share, ..
                } => *price_per_share = price,
                AssetDetails::Crypto { crypto_price, .. } => *crypto_price = price,
                AssetDetails::RealEstate { purchase_price, .. } => *purchase_price = price,
                AssetDetails::FixedDeposit { .. } => {
                    return Err(CoreError::Validation(
                        "fixed deposits have no purchase price to edit".into(),
                    ))
                }
            }
        }

        Ok(())
    }
}

/// Body of `POST /assets`. The server assigns `_id` and `createdAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAsset {
    #[serde(rename = "assetType")]
    pub asset_type: AssetType,

    pub details: AssetDetails,
}

impl NewAsset {
    /// Build a new asset; the type is derived from the details, so the
    /// shape invariant holds by construction.
    pub fn new(details: AssetDetails) -> Self {
        Self {
            asset_type: details.asset_type(),
            details,
        }
    }
}
