//! `IssuingStock` resource implementation.
//!
//! A stock is the inventory of blank plastic cards of one design held by an
//! embosser. Stocks are replenished through
//! [`IssuingRestock`](crate::IssuingRestock) and consumed by embossing
//! requests; every balance change is recorded as an
//! [`IssuingStockLog`](crate::IssuingStockLog).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::StarkClient;
use crate::rest::{operations, GetParams, Page, Resource, ResourceError, ResourceStream};

/// Card inventory of one design at one embosser.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssuingStock {
    /// Unique id.
    #[serde(default, skip_serializing)]
    pub id: Option<String>,

    /// Cards currently in stock. Returned only when expanded with `balance`.
    #[serde(default)]
    pub balance: Option<i64>,

    /// Design of the stocked cards.
    #[serde(default)]
    pub design_id: Option<String>,

    /// Embosser holding the stock.
    #[serde(default)]
    pub embosser_id: Option<String>,

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

impl Resource for IssuingStock {
    const NAME: &'static str = "IssuingStock";

    fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl IssuingStock {
    /// Fetches one stock. Expand `balance` to include the current balance.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the stock does not exist.
    pub async fn get(
        client: &StarkClient,
        id: &str,
        params: Option<&GetParams>,
    ) -> Result<Self, ResourceError> {
        operations::get_id(client, id, params).await
    }

    /// Lists stocks lazily, up to `params.limit`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if the params cannot be serialized.
    pub fn query<'c>(
        client: &'c StarkClient,
        params: &IssuingStockQuery,
    ) -> Result<ResourceStream<'c, Self>, ResourceError> {
        operations::get_stream(client, params, params.limit)
    }

    /// Fetches one page of stocks.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if `params.limit` is out of range.
    pub async fn page(
        client: &StarkClient,
        params: &IssuingStockQuery,
        cursor: Option<&str>,
    ) -> Result<Page<Self>, ResourceError> {
        operations::get_page(client, params, params.limit, cursor).await
    }
}

/// Filters for listing stocks.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssuingStockQuery {
    /// Maximum number of stocks to return.
    #[serde(skip_serializing)]
    pub limit: Option<u32>,

    /// Only stocks created after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<NaiveDate>,

    /// Only stocks created before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<NaiveDate>,

    /// Design id filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub design_ids: Vec<String>,

    /// Embosser id filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embosser_ids: Vec<String>,

    /// Id filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,

    /// Fields to expand (e.g., `balance`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}
