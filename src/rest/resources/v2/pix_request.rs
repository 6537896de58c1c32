//! `PixRequest` resource implementation.
//!
//! A Pix request is an instant payment sent from one of the participant's
//! accounts. Incoming requests are created by the central bank and arrive
//! with `flow = "in"`.
//!
//! # Example
//!
//! ```rust,ignore
//! use futures_util::StreamExt;
//! use starkinfra::{PixRequest, PixRequestQuery};
//!
//! let query = PixRequestQuery {
//!     limit: Some(10),
//!     status: vec!["success".to_string()],
//!     ..Default::default()
//! };
//! let mut requests = PixRequest::query(&client, &query)?;
//! while let Some(request) = requests.next().await {
//!     println!("{:?}", request?.end_to_end_id);
//! }
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::StarkClient;
use crate::rest::{operations, Page, Resource, ResourceError, ResourceStream};

/// An instant Pix payment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PixRequest {
    /// Amount in cents.
    pub amount: i64,

    /// Caller-defined unique id, used to avoid duplicate payments.
    pub external_id: String,

    /// Sender account number.
    pub sender_account_number: String,

    /// Sender branch code.
    pub sender_branch_code: String,

    /// Sender account type (`checking`, `savings`, `salary`, `payment`).
    pub sender_account_type: String,

    /// Sender name.
    pub sender_name: String,

    /// Sender CPF or CNPJ.
    pub sender_tax_id: String,

    /// Receiver bank code (ISPB).
    pub receiver_bank_code: String,

    /// Receiver account number.
    pub receiver_account_number: String,

    /// Receiver branch code.
    pub receiver_branch_code: String,

    /// Receiver account type.
    pub receiver_account_type: String,

    /// Receiver name.
    pub receiver_name: String,

    /// Receiver CPF or CNPJ.
    pub receiver_tax_id: String,

    /// Central bank end-to-end id.
    pub end_to_end_id: String,

    /// Pix key used to address the receiver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_key_id: Option<String>,

    /// Free-text description shown to the receiver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Reconciliation id linking the request to a dynamic charge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reconciliation_id: Option<String>,

    /// CNPJ of the payment initiator, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initiator_tax_id: Option<String>,

    /// Cash amount for withdrawal or change transactions, in cents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_amount: Option<i64>,

    /// Bank code of the cashier for cash transactions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cashier_bank_code: Option<String>,

    /// Cashier type (`merchant`, `participant`, `other`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cashier_type: Option<String>,

    /// Tags for filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Initiation method (`manual`, `payerQrcode`, `dynamicQrcode`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Settlement priority (`high` or `low`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    /// Unique id assigned by the server.
    #[serde(default, skip_serializing)]
    pub id: Option<String>,

    /// Fee charged, in cents.
    #[serde(default, skip_serializing)]
    pub fee: Option<i64>,

    /// Current status (`created`, `processing`, `success`, `failed`).
    #[serde(default, skip_serializing)]
    pub status: Option<String>,

    /// Direction (`in` or `out`).
    #[serde(default, skip_serializing)]
    pub flow: Option<String>,

    /// Sender bank code (ISPB).
    #[serde(default, skip_serializing)]
    pub sender_bank_code: Option<String>,

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

impl Resource for PixRequest {
    const NAME: &'static str = "PixRequest";

    fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl PixRequest {
    /// Sends Pix requests in a single batch.
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

    /// Fetches one Pix request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the request does not exist.
    pub async fn get(client: &StarkClient, id: &str) -> Result<Self, ResourceError> {
        operations::get_id(client, id, None).await
    }

    /// Lists Pix requests lazily, up to `params.limit`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if the params cannot be serialized.
    pub fn query<'c>(
        client: &'c StarkClient,
        params: &PixRequestQuery,
    ) -> Result<ResourceStream<'c, Self>, ResourceError> {
        operations::get_stream(client, params, params.limit)
    }

    /// Fetches one page of Pix requests.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if `params.limit` is out of range.
    pub async fn page(
        client: &StarkClient,
        params: &PixRequestQuery,
        cursor: Option<&str>,
    ) -> Result<Page<Self>, ResourceError> {
        operations::get_page(client, params, params.limit, cursor).await
    }
}

/// Filters for listing Pix requests.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PixRequestQuery {
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

    /// Tag filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Id filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,

    /// End-to-end id filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub end_to_end_ids: Vec<String>,

    /// External id filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub external_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn example_request() -> PixRequest {
        PixRequest {
            amount: 1000,
            external_id: "my-external-id".to_string(),
            sender_account_number: "76543-8".to_string(),
            sender_branch_code: "2201".to_string(),
            sender_account_type: "checking".to_string(),
            sender_name: "checking-false".to_string(),
            sender_tax_id: "594.739.480-42".to_string(),
            receiver_bank_code: "20018183".to_string(),
            receiver_account_number: "00000-0".to_string(),
            receiver_branch_code: "0001".to_string(),
            receiver_account_type: "checking".to_string(),
            receiver_name: "Tony Stark".to_string(),
            receiver_tax_id: "012.345.678-90".to_string(),
            end_to_end_id: "E20018183202201201450u34sDGd19lz".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_pix_request_names() {
        assert_eq!(PixRequest::endpoint(), "pix-request");
        assert_eq!(PixRequest::resource_key(), "request");
        assert_eq!(PixRequest::plural_key(), "requests");
    }

    #[test]
    fn test_pix_request_serialization() {
        let request = PixRequest {
            priority: Some("high".to_string()),
            fee: Some(10),
            ..example_request()
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["amount"], 1000);
        assert_eq!(json["senderAccountNumber"], "76543-8");
        assert_eq!(json["endToEndId"], "E20018183202201201450u34sDGd19lz");
        assert_eq!(json["priority"], "high");
        assert!(json.get("fee").is_none());
        assert!(json.get("cashAmount").is_none());
    }

    #[test]
    fn test_pix_request_query_serialization() {
        let params = PixRequestQuery {
            end_to_end_ids: vec!["E1".to_string()],
            external_ids: vec!["x".to_string()],
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"endToEndIds": ["E1"], "externalIds": ["x"]})
        );
    }
}
