//! `IssuingRestock` resource implementation.
//!
//! A restock orders more blank cards into an existing
//! [`IssuingStock`](crate::IssuingStock).
//!
//! # Example
//!
//! ```rust,ignore
//! use starkinfra::IssuingRestock;
//!
//! let restocks = IssuingRestock::create(
//!     &client,
//!     &[IssuingRestock::new(1000, "6526579068895232")],
//! )
//! .await?;
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::StarkClient;
use crate::rest::{operations, Page, Resource, ResourceError, ResourceStream};

/// An order to replenish a stock.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssuingRestock {
    /// Number of cards to add.
    pub count: i64,

    /// Stock to replenish.
    pub stock_id: String,

    /// Tags for filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Unique id assigned by the server.
    #[serde(default, skip_serializing)]
    pub id: Option<String>,

    /// Current status (`created`, `processing`, `confirmed`).
    #[serde(default, skip_serializing)]
    pub status: Option<String>,

    /// Sub-issuer owning the stock.
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

impl Resource for IssuingRestock {
    const NAME: &'static str = "IssuingRestock";

    fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl IssuingRestock {
    /// Creates a restock pending creation.
    #[must_use]
    pub fn new(count: i64, stock_id: impl Into<String>) -> Self {
        Self {
            count,
            stock_id: stock_id.into(),
            ..Self::default()
        }
    }

    /// Creates restocks in a single batch.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] for an empty batch, or the
    /// API error.
    pub async fn create(
        client: &StarkClient,
        restocks: &[Self],
    ) -> Result<Vec<Self>, ResourceError> {
        operations::post_multi(client, restocks, None).await
    }

    /// Fetches one restock.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the restock does not exist.
    pub async fn get(client: &StarkClient, id: &str) -> Result<Self, ResourceError> {
        operations::get_id(client, id, None).await
    }

    /// Lists restocks lazily, up to `params.limit`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if the params cannot be serialized.
    pub fn query<'c>(
        client: &'c StarkClient,
        params: &IssuingRestockQuery,
    ) -> Result<ResourceStream<'c, Self>, ResourceError> {
        operations::get_stream(client, params, params.limit)
    }

    /// Fetches one page of restocks.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if `params.limit` is out of range.
    pub async fn page(
        client: &StarkClient,
        params: &IssuingRestockQuery,
        cursor: Option<&str>,
    ) -> Result<Page<Self>, ResourceError> {
        operations::get_page(client, params, params.limit, cursor).await
    }
}

/// Filters for listing restocks.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssuingRestockQuery {
    /// Maximum number of restocks to return.
    #[serde(skip_serializing)]
    pub limit: Option<u32>,

    /// Only restocks created after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<NaiveDate>,

    /// Only restocks created before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<NaiveDate>,

    /// Status filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,

    /// Stock id filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stock_ids: Vec<String>,

    /// Id filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,

    /// Tag filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}
