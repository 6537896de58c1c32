//! `IssuingEmbossingRequest` resource implementation.
//!
//! An embossing request asks an embosser to print a physical card and ship
//! it, with its envelope, to the given address.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::StarkClient;
use crate::rest::{operations, Page, Resource, ResourceError, ResourceStream};

/// An order to print and ship a physical card.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssuingEmbossingRequest {
    /// Card to emboss.
    #[serde(default, deserialize_with = "crate::rest::resource::deserialize_null_default")]
    pub card_id: String,

    /// Card design.
    #[serde(default, deserialize_with = "crate::rest::resource::deserialize_null_default")]
    pub card_design_id: String,

    /// First printed name line.
    #[serde(
        rename = "displayName1",
        default,
        deserialize_with = "crate::rest::resource::deserialize_null_default"
    )]
    pub display_name_1: String,

    /// Envelope design.
    #[serde(default, deserialize_with = "crate::rest::resource::deserialize_null_default")]
    pub envelope_design_id: String,

    /// Shipping city.
    #[serde(default, deserialize_with = "crate::rest::resource::deserialize_null_default")]
    pub shipping_city: String,

    /// Shipping country code (e.g., `BRA`).
    #[serde(default, deserialize_with = "crate::rest::resource::deserialize_null_default")]
    pub shipping_country_code: String,

    /// Shipping district.
    #[serde(default, deserialize_with = "crate::rest::resource::deserialize_null_default")]
    pub shipping_district: String,

    /// Shipping carrier (e.g., `loggi`).
    #[serde(default, deserialize_with = "crate::rest::resource::deserialize_null_default")]
    pub shipping_service: String,

    /// Shipping state code.
    #[serde(default, deserialize_with = "crate::rest::resource::deserialize_null_default")]
    pub shipping_state_code: String,

    /// Shipping street, first line.
    #[serde(
        rename = "shippingStreetLine1",
        default,
        deserialize_with = "crate::rest::resource::deserialize_null_default"
    )]
    pub shipping_street_line_1: String,

    /// Shipping street, second line.
    #[serde(
        rename = "shippingStreetLine2",
        default,
        deserialize_with = "crate::rest::resource::deserialize_null_default"
    )]
    pub shipping_street_line_2: String,

    /// Carrier tracking number.
    #[serde(default, deserialize_with = "crate::rest::resource::deserialize_null_default")]
    pub shipping_tracking_number: String,

    /// Shipping zip code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_zip_code: Option<String>,

    /// Second printed name line.
    #[serde(
        rename = "displayName2",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub display_name_2: Option<String>,

    /// Third printed name line.
    #[serde(
        rename = "displayName3",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub display_name_3: Option<String>,

    /// Recipient phone (e.g., `+5511999999999`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_phone: Option<String>,

    /// Tags for filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Unique id assigned by the server.
    #[serde(default, skip_serializing)]
    pub id: Option<String>,

    /// Fee charged, in cents.
    #[serde(default, skip_serializing)]
    pub fee: Option<i64>,

    /// Current status.
    #[serde(default, skip_serializing)]
    pub status: Option<String>,

    /// Sub-issuer handling the request.
    #[serde(default, skip_serializing)]
    pub sub_issuer_id: Option<String>,

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

impl Resource for IssuingEmbossingRequest {
    const NAME: &'static str = "IssuingEmbossingRequest";

    fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl IssuingEmbossingRequest {
    /// Creates embossing requests in a single batch.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] for an empty batch, or the
    /// API error.
    pub async fn create(
        client: &StarkClient,
        requests: &[Self],
    ) -> Result<Vec<Self>, ResourceError> {
        operations::post_multi(client, requests, None).await
    }

    /// Fetches one embossing request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the request does not exist.
    pub async fn get(client: &StarkClient, id: &str) -> Result<Self, ResourceError> {
        operations::get_id(client, id, None).await
    }

    /// Lists embossing requests lazily, up to `params.limit`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if the params cannot be serialized.
    pub fn query<'c>(
        client: &'c StarkClient,
        params: &IssuingEmbossingRequestQuery,
    ) -> Result<ResourceStream<'c, Self>, ResourceError> {
        operations::get_stream(client, params, params.limit)
    }

    /// Fetches one page of embossing requests.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if `params.limit` is out of range.
    pub async fn page(
        client: &StarkClient,
        params: &IssuingEmbossingRequestQuery,
        cursor: Option<&str>,
    ) -> Result<Page<Self>, ResourceError> {
        operations::get_page(client, params, params.limit, cursor).await
    }
}

/// Filters for listing embossing requests.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssuingEmbossingRequestQuery {
    /// Maximum number of requests to return.
    #[serde(skip_serializing)]
    pub limit: Option<u32>,

    /// Only requests created after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<NaiveDate>,

    /// Only requests created before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<NaiveDate>,

    /// Status filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,

    /// Card id filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub card_ids: Vec<String>,

    /// Id filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,

    /// Tag filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}
