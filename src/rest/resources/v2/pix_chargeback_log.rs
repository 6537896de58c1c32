//! `PixChargebackLog` resource implementation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::PixChargeback;
use crate::clients::StarkClient;
use crate::rest::{operations, Page, Resource, ResourceError, ResourceStream};

/// A status change of a [`PixChargeback`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PixChargebackLog {
    /// Unique id.
    #[serde(default)]
    pub id: Option<String>,

    /// The chargeback after the change.
    pub chargeback: PixChargeback,

    /// Log type (e.g., `created`, `failed`, `delivered`, `closed`, `canceled`).
    #[serde(rename = "type")]
    pub kind: String,

    /// Errors reported with the change, if any.
    #[serde(default)]
    pub errors: Option<Vec<String>>,

    /// Creation time.
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "crate::rest::datetime::deserialize_option"
    )]
    pub created: Option<DateTime<Utc>>,
}

impl Resource for PixChargebackLog {
    const NAME: &'static str = "PixChargebackLog";

    fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl PixChargebackLog {
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
        params: &PixChargebackLogQuery,
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
        params: &PixChargebackLogQuery,
        cursor: Option<&str>,
    ) -> Result<Page<Self>, ResourceError> {
        operations::get_page(client, params, params.limit, cursor).await
    }
}

/// Filters for listing chargeback logs.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PixChargebackLogQuery {
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

    /// Chargeback id filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub chargeback_ids: Vec<String>,

    /// Id filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
}
