//! `IssuingPurchase` resource implementation.
//!
//! Purchases are card transactions authorized (or denied) against issuing
//! cards. They are created by the card network and are read-only.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::StarkClient;
use crate::rest::{operations, Page, Resource, ResourceError, ResourceStream};

/// A card purchase.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssuingPurchase {
    /// Unique id.
    #[serde(default)]
    pub id: Option<String>,

    /// Holder name.
    #[serde(default)]
    pub holder_name: Option<String>,

    /// Purchased card.
    #[serde(default)]
    pub card_id: Option<String>,

    /// Last four digits of the card number.
    #[serde(default)]
    pub card_ending: Option<String>,

    /// Purpose (e.g., `purchase`, `withdrawal`).
    #[serde(default)]
    pub purpose: Option<String>,

    /// Amount in cents, in the issuing currency.
    #[serde(default)]
    pub amount: Option<i64>,

    /// Installment count.
    #[serde(default)]
    pub installment_count: Option<i64>,

    /// Tax charged, in cents.
    #[serde(default)]
    pub tax: Option<i64>,

    /// Issuer fee charged, in cents.
    #[serde(default)]
    pub issuer_amount: Option<i64>,

    /// Issuer currency code.
    #[serde(default)]
    pub issuer_currency_code: Option<String>,

    /// Issuer currency symbol.
    #[serde(default)]
    pub issuer_currency_symbol: Option<String>,

    /// Issuer currency name.
    #[serde(default)]
    pub issuer_currency_name: Option<String>,

    /// Merchant amount, in cents of the merchant currency.
    #[serde(default)]
    pub merchant_amount: Option<i64>,

    /// Merchant currency code.
    #[serde(default)]
    pub merchant_currency_code: Option<String>,

    /// Merchant currency symbol.
    #[serde(default)]
    pub merchant_currency_symbol: Option<String>,

    /// Merchant currency name.
    #[serde(default)]
    pub merchant_currency_name: Option<String>,

    /// Merchant category code.
    #[serde(default)]
    pub merchant_category_code: Option<String>,

    /// Merchant category type.
    #[serde(default)]
    pub merchant_category_type: Option<String>,

    /// Merchant country code.
    #[serde(default)]
    pub merchant_country_code: Option<String>,

    /// Merchant name.
    #[serde(default)]
    pub merchant_name: Option<String>,

    /// Merchant display name.
    #[serde(default)]
    pub merchant_display_name: Option<String>,

    /// Merchant display URL.
    #[serde(default)]
    pub merchant_display_url: Option<String>,

    /// Merchant fee, in cents.
    #[serde(default)]
    pub merchant_fee: Option<i64>,

    /// Card method (e.g., `chip`, `token`).
    #[serde(default)]
    pub method_code: Option<String>,

    /// Card network end-to-end id.
    #[serde(default)]
    pub end_to_end_id: Option<String>,

    /// Tags for filtering.
    #[serde(default)]
    pub tags: Option<Vec<String>>,

    /// Ids of the issuing transactions tied to the purchase.
    #[serde(default)]
    pub issuing_transaction_ids: Option<Vec<String>>,

    /// Current status (`approved`, `canceled`, `denied`, `confirmed`, `voided`).
    #[serde(default)]
    pub status: Option<String>,

    /// Reason the purchase was denied, if any.
    #[serde(default)]
    pub description: Option<String>,

    /// Wallet used, if any.
    #[serde(default)]
    pub wallet_id: Option<String>,

    /// Latest update time.
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "crate::rest::datetime::deserialize_option"
    )]
    pub updated: Option<DateTime<Utc>>,

    /// Creation time.
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "crate::rest::datetime::deserialize_option"
    )]
    pub created: Option<DateTime<Utc>>,
}

impl Resource for IssuingPurchase {
    const NAME: &'static str = "IssuingPurchase";

    fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl IssuingPurchase {
    /// Fetches one purchase.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the purchase does not exist.
    pub async fn get(client: &StarkClient, id: &str) -> Result<Self, ResourceError> {
        operations::get_id(client, id, None).await
    }

    /// Lists purchases lazily, up to `params.limit`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if the params cannot be serialized.
    pub fn query<'c>(
        client: &'c StarkClient,
        params: &IssuingPurchaseQuery,
    ) -> Result<ResourceStream<'c, Self>, ResourceError> {
        operations::get_stream(client, params, params.limit)
    }

    /// Fetches one page of purchases.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if `params.limit` is out of range.
    pub async fn page(
        client: &StarkClient,
        params: &IssuingPurchaseQuery,
        cursor: Option<&str>,
    ) -> Result<Page<Self>, ResourceError> {
        operations::get_page(client, params, params.limit, cursor).await
    }
}

/// Filters for listing purchases.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssuingPurchaseQuery {
    /// Maximum number of purchases to return.
    #[serde(skip_serializing)]
    pub limit: Option<u32>,

    /// Only purchases created after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<NaiveDate>,

    /// Only purchases created before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<NaiveDate>,

    /// End-to-end id filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub end_to_end_ids: Vec<String>,

    /// Holder id filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub holder_ids: Vec<String>,

    /// Card id filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub card_ids: Vec<String>,

    /// Status filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,

    /// Id filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_purchase_deserialization_tolerates_missing_fields() {
        let purchase: IssuingPurchase = serde_json::from_value(json!({
            "id": "5656565656565656",
            "cardId": "5189831499972608",
            "cardEnding": "1234",
            "amount": 2500,
            "merchantName": "Stark Cafe",
            "merchantCategoryType": "food",
            "issuingTransactionIds": ["1", "2"],
            "status": "confirmed",
            "created": "2024-01-02T03:04:05+00:00"
        }))
        .unwrap();

        assert_eq!(purchase.amount, Some(2500));
        assert_eq!(purchase.card_ending.as_deref(), Some("1234"));
        assert_eq!(purchase.issuing_transaction_ids.unwrap().len(), 2);
        assert!(purchase.wallet_id.is_none());
    }

    #[test]
    fn test_purchase_query_serialization() {
        let params = IssuingPurchaseQuery {
            end_to_end_ids: vec!["E1".to_string()],
            card_ids: vec!["5189831499972608".to_string()],
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"endToEndIds": ["E1"], "cardIds": ["5189831499972608"]})
        );
    }
}
