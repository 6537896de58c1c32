//! Spending rules attached to issuing holders and cards.

use serde::{Deserialize, Serialize};

/// A spending limit applied to a holder or card.
///
/// Rules are created nested inside an [`IssuingHolder`] or [`IssuingCard`]
/// and returned by the API with their computed counters.
///
/// [`IssuingHolder`]: crate::IssuingHolder
/// [`IssuingCard`]: crate::IssuingCard
///
/// # Example
///
/// ```rust
/// use starkinfra::IssuingRule;
///
/// let rule = IssuingRule::new("Travel", "week", 500_000);
/// let json = serde_json::to_value(&rule).unwrap();
/// assert_eq!(json["amount"], 500_000);
/// assert!(json.get("counterAmount").is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssuingRule {
    /// Rule name.
    pub name: String,

    /// Period after which the counter resets: `day`, `week`, `month`,
    /// `instant` or `lifetime`.
    pub interval: String,

    /// Maximum spend per interval, in cents.
    pub amount: i64,

    /// ISO 4217 currency code. Defaults to `BRL` on the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    /// Merchant categories the rule is limited to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<MerchantCategory>>,

    /// Merchant countries the rule is limited to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<MerchantCountry>>,

    /// Card methods the rule is limited to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<CardMethod>>,

    /// Unique id assigned by the server.
    #[serde(default, skip_serializing)]
    pub id: Option<String>,

    /// Amount already spent in the current interval.
    #[serde(default, skip_serializing)]
    pub counter_amount: Option<i64>,

    /// Currency name (e.g., `Brazilian Real`).
    #[serde(default, skip_serializing)]
    pub currency_name: Option<String>,

    /// Currency symbol (e.g., `R$`).
    #[serde(default, skip_serializing)]
    pub currency_symbol: Option<String>,
}

impl IssuingRule {
    /// Creates a rule with the required fields.
    #[must_use]
    pub fn new(name: impl Into<String>, interval: impl Into<String>, amount: i64) -> Self {
        Self {
            name: name.into(),
            interval: interval.into(),
            amount,
            ..Self::default()
        }
    }
}

/// A merchant category filter, by code or by type.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MerchantCategory {
    /// Category code (e.g., `fastFoodRestaurants`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Category type (e.g., `food`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Display name.
    #[serde(default, skip_serializing)]
    pub name: Option<String>,
}

/// A merchant country filter.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MerchantCountry {
    /// ISO 3166 alpha-3 code (e.g., `BRA`).
    pub code: String,

    /// Country name.
    #[serde(default, skip_serializing)]
    pub name: Option<String>,

    /// Numeric country code.
    #[serde(default, skip_serializing)]
    pub number: Option<String>,

    /// ISO 3166 alpha-2 code.
    #[serde(default, skip_serializing)]
    pub short_code: Option<String>,
}

/// A card method filter (`chip`, `token`, `server`, `manual`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CardMethod {
    /// Method code.
    pub code: String,

    /// Method name.
    #[serde(default, skip_serializing)]
    pub name: Option<String>,

    /// Method number.
    #[serde(default, skip_serializing)]
    pub number: Option<String>,
}
