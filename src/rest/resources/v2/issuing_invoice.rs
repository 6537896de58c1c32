//! `IssuingInvoice` resource implementation.
//!
//! Invoices add balance to the issuing account: each one is a Pix charge
//! that credits the account once paid.
//!
//! # Example
//!
//! ```rust,ignore
//! use starkinfra::IssuingInvoice;
//!
//! let invoice = IssuingInvoice::create(&client, &IssuingInvoice::new(1000)).await?;
//! println!("pay with: {:?}", invoice.brcode);
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::StarkClient;
use crate::rest::{operations, Page, Resource, ResourceError, ResourceStream};

/// A charge that funds the issuing balance.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssuingInvoice {
    /// Amount in cents.
    pub amount: i64,

    /// Payer CPF or CNPJ. Defaults to the workspace's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,

    /// Payer name. Defaults to the workspace's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Tags for filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Unique id assigned by the server.
    #[serde(default, skip_serializing)]
    pub id: Option<String>,

    /// Pix copy-and-paste payment code.
    #[serde(default, skip_serializing)]
    pub brcode: Option<String>,

    /// Payment deadline.
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "crate::rest::datetime::deserialize_option"
    )]
    pub due: Option<DateTime<Utc>>,

    /// Public page for the invoice.
    #[serde(default, skip_serializing)]
    pub link: Option<String>,

    /// Current status (`created`, `paid`, `canceled`, `overdue`, `expired`).
    #[serde(default, skip_serializing)]
    pub status: Option<String>,

    /// Issuing transaction that credited the balance.
    #[serde(default, skip_serializing)]
    pub issuing_transaction_id: Option<String>,

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

impl Resource for IssuingInvoice {
    const NAME: &'static str = "IssuingInvoice";

    fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl IssuingInvoice {
    /// Creates an invoice pending creation.
    #[must_use]
    pub fn new(amount: i64) -> Self {
        Self {
            amount,
            ..Self::default()
        }
    }

    /// Creates one invoice.
    ///
    /// Unlike most resources, invoices are created one at a time.
    ///
    /// # Errors
    ///
    /// Returns the API error if the invoice is rejected.
    pub async fn create(client: &StarkClient, invoice: &Self) -> Result<Self, ResourceError> {
        operations::post_single(client, invoice).await
    }

    /// Fetches one invoice.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the invoice does not exist.
    pub async fn get(client: &StarkClient, id: &str) -> Result<Self, ResourceError> {
        operations::get_id(client, id, None).await
    }

    /// Lists invoices lazily, up to `params.limit`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if the params cannot be serialized.
    pub fn query<'c>(
        client: &'c StarkClient,
        params: &IssuingInvoiceQuery,
    ) -> Result<ResourceStream<'c, Self>, ResourceError> {
        operations::get_stream(client, params, params.limit)
    }

    /// Fetches one page of invoices.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if `params.limit` is out of range.
    pub async fn page(
        client: &StarkClient,
        params: &IssuingInvoiceQuery,
        cursor: Option<&str>,
    ) -> Result<Page<Self>, ResourceError> {
        operations::get_page(client, params, params.limit, cursor).await
    }
}

/// Filters for listing invoices.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssuingInvoiceQuery {
    /// Maximum number of invoices to return.
    #[serde(skip_serializing)]
    pub limit: Option<u32>,

    /// Only invoices created after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<NaiveDate>,

    /// Only invoices created before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<NaiveDate>,

    /// Status filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,

    /// Tag filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}
