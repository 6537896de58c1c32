//! `IssuingCard` resource implementation.
//!
//! Cards are issued to a holder and may be virtual or physical. Sensitive
//! fields (`number`, `securityCode`, `expiration`) are returned only when
//! explicitly expanded.
//!
//! # Example
//!
//! ```rust,ignore
//! use starkinfra::{GetParams, IssuingCard, IssuingCardQuery};
//!
//! let cards = IssuingCard::create(
//!     &client,
//!     &[IssuingCard::new("Tony Stark", "012.345.678-90", "my-unique-id")],
//!     Some(&GetParams::expand(["securityCode", "number", "expiration"])),
//! )
//! .await?;
//!
//! let canceled = IssuingCard::cancel(&client, cards[0].id.as_deref().unwrap()).await?;
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::common::IssuingRule;
use crate::clients::StarkClient;
use crate::rest::{operations, GetParams, Page, Resource, ResourceError, ResourceStream};

/// A payment card issued to a holder.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssuingCard {
    /// Name of the card holder.
    pub holder_name: String,

    /// CPF or CNPJ of the card holder.
    pub holder_tax_id: String,

    /// External id of the card holder.
    pub holder_external_id: String,

    /// Name printed on the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Spending rules. Returned only when expanded with `rules`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<IssuingRule>>,

    /// BIN the card is issued under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin_id: Option<String>,

    /// Tags for filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Billing street, first line.
    #[serde(
        rename = "streetLine1",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub street_line_1: Option<String>,

    /// Billing street, second line.
    #[serde(
        rename = "streetLine2",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub street_line_2: Option<String>,

    /// Billing district.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,

    /// Billing city.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Billing state code (e.g., `SP`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_code: Option<String>,

    /// Billing zip code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,

    /// Unique id assigned by the server.
    #[serde(default, skip_serializing)]
    pub id: Option<String>,

    /// Id of the holder the card belongs to.
    #[serde(default, skip_serializing)]
    pub holder_id: Option<String>,

    /// Card type (`physical` or `virtual`).
    #[serde(rename = "type", default, skip_serializing)]
    pub kind: Option<String>,

    /// Current status (`active`, `blocked`, `canceled`, `expired`).
    #[serde(default, skip_serializing)]
    pub status: Option<String>,

    /// Card number. Masked unless expanded with `number`.
    #[serde(default, skip_serializing)]
    pub number: Option<String>,

    /// Security code. Masked unless expanded with `securityCode`.
    #[serde(default, skip_serializing)]
    pub security_code: Option<String>,

    /// Expiration time. Returned only when expanded with `expiration`.
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "crate::rest::datetime::deserialize_option"
    )]
    pub expiration: Option<DateTime<Utc>>,

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

impl Resource for IssuingCard {
    const NAME: &'static str = "IssuingCard";

    fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl IssuingCard {
    /// Creates a card pending creation for the given holder.
    #[must_use]
    pub fn new(
        holder_name: impl Into<String>,
        holder_tax_id: impl Into<String>,
        holder_external_id: impl Into<String>,
    ) -> Self {
        Self {
            holder_name: holder_name.into(),
            holder_tax_id: holder_tax_id.into(),
            holder_external_id: holder_external_id.into(),
            ..Self::default()
        }
    }

    /// Creates cards in a single batch.
    ///
    /// `params` may expand `rules`, `securityCode`, `number` or `expiration`
    /// in the returned cards.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] for an empty batch, or the
    /// API error.
    pub async fn create(
        client: &StarkClient,
        cards: &[Self],
        params: Option<&GetParams>,
    ) -> Result<Vec<Self>, ResourceError> {
        operations::post_multi(client, cards, params).await
    }

    /// Fetches one card.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the card does not exist.
    pub async fn get(
        client: &StarkClient,
        id: &str,
        params: Option<&GetParams>,
    ) -> Result<Self, ResourceError> {
        operations::get_id(client, id, params).await
    }

    /// Lists cards lazily, up to `params.limit`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if the params cannot be serialized.
    pub fn query<'c>(
        client: &'c StarkClient,
        params: &IssuingCardQuery,
    ) -> Result<ResourceStream<'c, Self>, ResourceError> {
        operations::get_stream(client, params, params.limit)
    }

    /// Fetches one page of cards.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if `params.limit` is out of range.
    pub async fn page(
        client: &StarkClient,
        params: &IssuingCardQuery,
        cursor: Option<&str>,
    ) -> Result<Page<Self>, ResourceError> {
        operations::get_page(client, params, params.limit, cursor).await
    }

    /// Updates the given fields of a card.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the card does not exist.
    pub async fn update(
        client: &StarkClient,
        id: &str,
        update: &IssuingCardUpdate,
    ) -> Result<Self, ResourceError> {
        operations::patch_id(client, id, update).await
    }

    /// Cancels a card, returning its final state.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the card does not exist.
    pub async fn cancel(client: &StarkClient, id: &str) -> Result<Self, ResourceError> {
        operations::delete_id(client, id).await
    }
}

/// Filters for listing cards.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssuingCardQuery {
    /// Maximum number of cards to return.
    #[serde(skip_serializing)]
    pub limit: Option<u32>,

    /// Only cards created after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<NaiveDate>,

    /// Only cards created before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<NaiveDate>,

    /// Status filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,

    /// Card type filter (`physical`, `virtual`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,

    /// Holder id filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub holder_ids: Vec<String>,

    /// Tag filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Id filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,

    /// Fields to expand.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

/// Fields to change on a card. Unset fields are left unchanged.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssuingCardUpdate {
    /// New status (`active` or `blocked`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// New printed name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Replacement rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<IssuingRule>>,

    /// Replacement tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_card_names() {
        assert_eq!(IssuingCard::endpoint(), "issuing-card");
        assert_eq!(IssuingCard::resource_key(), "card");
        assert_eq!(IssuingCard::plural_key(), "cards");
    }

    #[test]
    fn test_card_serialization_uses_api_field_names() {
        let card = IssuingCard {
            display_name: Some("ANTHONY STARK".to_string()),
            street_line_1: Some("Av. Paulista, 200".to_string()),
            zip_code: Some("01311-200".to_string()),
            number: Some("5555 **** **** 1234".to_string()),
            ..IssuingCard::new("Tony Stark", "012.345.678-90", "ext-1")
        };

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["holderName"], "Tony Stark");
        assert_eq!(json["holderTaxId"], "012.345.678-90");
        assert_eq!(json["displayName"], "ANTHONY STARK");
        assert_eq!(json["streetLine1"], "Av. Paulista, 200");
        assert_eq!(json["zipCode"], "01311-200");
        assert!(json.get("number").is_none());
        assert!(json.get("streetLine2").is_none());
    }

    #[test]
    fn test_card_deserialization_with_expanded_fields() {
        let card: IssuingCard = serde_json::from_value(json!({
            "id": "5189831499972608",
            "holderId": "5155165527080960",
            "holderName": "Tony Stark",
            "holderTaxId": "012.345.678-90",
            "holderExternalId": "ext-1",
            "type": "virtual",
            "status": "active",
            "number": "5555000011112222",
            "securityCode": "123",
            "expiration": "2032-03-31T23:59:59.999999+00:00",
            "created": 1710066600
        }))
        .unwrap();

        assert_eq!(card.kind.as_deref(), Some("virtual"));
        assert_eq!(card.security_code.as_deref(), Some("123"));
        assert!(card.expiration.is_some());
        assert_eq!(card.created.unwrap().timestamp(), 1_710_066_600);
        assert!(card.rules.is_none());
    }

    #[test]
    fn test_card_query_serialization() {
        let params = IssuingCardQuery {
            types: vec!["virtual".to_string()],
            holder_ids: vec!["1".to_string(), "2".to_string()],
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"types": ["virtual"], "holderIds": ["1", "2"]})
        );
    }

    #[test]
    fn test_card_update_omits_unset_fields() {
        let update = IssuingCardUpdate {
            display_name: Some("TONY".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"displayName": "TONY"})
        );
    }
}
