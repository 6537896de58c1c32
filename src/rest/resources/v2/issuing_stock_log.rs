//! `IssuingStockLog` resource implementation.
//!
//! Logs are the immutable audit trail of a stock: each one records a balance
//! change and embeds the stock as it was after the change.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::IssuingStock;
use crate::clients::StarkClient;
use crate::rest::{operations, Page, Resource, ResourceError, ResourceStream};

/// A change to an [`IssuingStock`] balance.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssuingStockLog {
    /// Unique id.
    #[serde(default)]
    pub id: Option<String>,

    /// The stock after the change.
    pub stock: IssuingStock,

    /// Log type (e.g., `created`, `spent`, `restocked`, `lost`).
    #[serde(rename = "type")]
    pub kind: String,

    /// Number of cards added or removed.
    #[serde(default)]
    pub count: Option<i64>,

    /// Creation time.
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "crate::rest::datetime::deserialize_option"
    )]
    pub created: Option<DateTime<Utc>>,
}

impl Resource for IssuingStockLog {
    const NAME: &'static str = "IssuingStockLog";

    fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl IssuingStockLog {
    /// Fetches one log.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the log does not exist.
    pub async fn get(client: &StarkClient, id: &str) -> Result<Self, ResourceError> {
        operations::get_id(client, id, None).await
    }

    /// Lists logs lazily, up to `params.limit`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if the params cannot be serialized.
    pub fn query<'c>(
        client: &'c StarkClient,
        params: &IssuingStockLogQuery,
    ) -> Result<ResourceStream<'c, Self>, ResourceError> {
        operations::get_stream(client, params, params.limit)
    }

    /// Fetches one page of logs.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if `params.limit` is out of range.
    pub async fn page(
        client: &StarkClient,
        params: &IssuingStockLogQuery,
        cursor: Option<&str>,
    ) -> Result<Page<Self>, ResourceError> {
        operations::get_page(client, params, params.limit, cursor).await
    }
}

/// Filters for listing stock logs.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssuingStockLogQuery {
    /// Maximum number of logs to return.
    #[serde(skip_serializing)]
    pub limit: Option<u32>,

    /// Only logs created after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<NaiveDate>,

    /// Only logs created before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<NaiveDate>,

    /// Log type filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,

    /// Stock id filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stock_ids: Vec<String>,

    /// Id filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
}
