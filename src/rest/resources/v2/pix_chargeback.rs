//! `PixChargeback` resource implementation.
//!
//! A chargeback asks the counterpart of a Pix transaction to return funds,
//! for fraud or operational flaws. The receiving participant answers it by
//! updating the chargeback with a result.
//!
//! # Example
//!
//! ```rust,ignore
//! use starkinfra::{PixChargeback, PixChargebackUpdate};
//!
//! let update = PixChargebackUpdate {
//!     rejection_reason: Some("noBalance".to_string()),
//!     ..PixChargebackUpdate::new("rejected")
//! };
//! let chargeback = PixChargeback::update(&client, "5656565656565656", &update).await?;
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::StarkClient;
use crate::rest::{operations, Page, Resource, ResourceError, ResourceStream};

/// A request to return the funds of a Pix transaction.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PixChargeback {
    /// Amount to return, in cents.
    pub amount: i64,

    /// End-to-end id of the disputed transaction.
    pub reference_id: String,

    /// Reason (`fraud`, `flaw` or `reversalChargeback`).
    pub reason: String,

    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Tags for filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Unique id assigned by the server.
    #[serde(default, skip_serializing)]
    pub id: Option<String>,

    /// Analysis given by the receiving participant.
    #[serde(default, skip_serializing)]
    pub analysis: Option<String>,

    /// Bank code of the sender participant.
    #[serde(default, skip_serializing)]
    pub sender_bank_code: Option<String>,

    /// Bank code of the receiver participant.
    #[serde(default, skip_serializing)]
    pub receiver_bank_code: Option<String>,

    /// Reason given when rejected.
    #[serde(default, skip_serializing)]
    pub rejection_reason: Option<String>,

    /// End-to-end id of the reversal returning the funds.
    #[serde(default, skip_serializing)]
    pub reversal_reference_id: Option<String>,

    /// Outcome (`rejected`, `accepted`, `partiallyAccepted`).
    #[serde(default, skip_serializing)]
    pub result: Option<String>,

    /// Direction (`in` or `out`).
    #[serde(default, skip_serializing)]
    pub flow: Option<String>,

    /// Current status (`created`, `failed`, `delivered`, `closed`, `canceled`).
    #[serde(default, skip_serializing)]
    pub status: Option<String>,

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

impl Resource for PixChargeback {
    const NAME: &'static str = "PixChargeback";

    fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl PixChargeback {
    /// Creates a chargeback pending creation.
    #[must_use]
    pub fn new(amount: i64, reference_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            amount,
            reference_id: reference_id.into(),
            reason: reason.into(),
            ..Self::default()
        }
    }

    /// Creates chargebacks in a single batch.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] for an empty batch, or the
    /// API error.
    pub async fn create(
        client: &StarkClient,
        chargebacks: &[Self],
    ) -> Result<Vec<Self>, ResourceError> {
        operations::post_multi(client, chargebacks, None).await
    }

    /// Fetches one chargeback.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the chargeback does not exist.
    pub async fn get(client: &StarkClient, id: &str) -> Result<Self, ResourceError> {
        operations::get_id(client, id, None).await
    }

    /// Lists chargebacks lazily, up to `params.limit`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if the params cannot be serialized.
    pub fn query<'c>(
        client: &'c StarkClient,
        params: &PixChargebackQuery,
    ) -> Result<ResourceStream<'c, Self>, ResourceError> {
        operations::get_stream(client, params, params.limit)
    }

    /// Fetches one page of chargebacks.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if `params.limit` is out of range.
    pub async fn page(
        client: &StarkClient,
        params: &PixChargebackQuery,
        cursor: Option<&str>,
    ) -> Result<Page<Self>, ResourceError> {
        operations::get_page(client, params, params.limit, cursor).await
    }

    /// Answers a received chargeback.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the chargeback does not exist.
    pub async fn update(
        client: &StarkClient,
        id: &str,
        update: &PixChargebackUpdate,
    ) -> Result<Self, ResourceError> {
        operations::patch_id(client, id, update).await
    }

    /// Cancels a sent chargeback, returning its final state.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the chargeback does not exist.
    pub async fn cancel(client: &StarkClient, id: &str) -> Result<Self, ResourceError> {
        operations::delete_id(client, id).await
    }
}

/// Filters for listing chargebacks.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PixChargebackQuery {
    /// Maximum number of chargebacks to return.
    #[serde(skip_serializing)]
    pub limit: Option<u32>,

    /// Only chargebacks created after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<NaiveDate>,

    /// Only chargebacks created before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<NaiveDate>,

    /// Status filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,

    /// Id filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,

    /// Direction filter (`in` or `out`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow: Option<String>,

    /// Tag filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// The answer to a received chargeback. Unset optional fields are not sent.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PixChargebackUpdate {
    /// Outcome (`rejected`, `accepted`, `partiallyAccepted`).
    pub result: String,

    /// Required when rejecting (e.g., `noBalance`, `accountClosed`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,

    /// End-to-end id of the reversal, required when accepting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reversal_reference_id: Option<String>,

    /// Description of the analysis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
}

impl PixChargebackUpdate {
    /// Creates an answer with the given result.
    #[must_use]
    pub fn new(result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
            ..Self::default()
        }
    }
}
