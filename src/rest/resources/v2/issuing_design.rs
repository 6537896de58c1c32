//! `IssuingDesign` resource implementation.
//!
//! Designs describe the card and envelope artwork available to the
//! workspace. They are read-only; the artwork itself can be downloaded as a
//! PDF.
//!
//! # Example
//!
//! ```rust,ignore
//! use futures_util::TryStreamExt;
//! use starkinfra::{IssuingDesign, IssuingDesignQuery};
//!
//! let designs: Vec<IssuingDesign> = IssuingDesign::query(&client, &IssuingDesignQuery::default())?
//!     .try_collect()
//!     .await?;
//!
//! let pdf = IssuingDesign::pdf(&client, designs[0].id.as_deref().unwrap()).await?;
//! std::fs::write("design.pdf", pdf)?;
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::StarkClient;
use crate::rest::{operations, Page, Resource, ResourceError, ResourceStream};

/// A card or envelope design.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssuingDesign {
    /// Unique id.
    #[serde(default, skip_serializing)]
    pub id: Option<String>,

    /// Design name (e.g., `stark-plastic-dark-001`).
    #[serde(default)]
    pub name: Option<String>,

    /// Tags for filtering.
    #[serde(default)]
    pub tags: Option<Vec<String>>,

    /// Ids of the embossers able to print this design.
    #[serde(default)]
    pub embosser_ids: Option<Vec<String>>,

    /// Sub-issuer owning the design.
    #[serde(default)]
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

impl Resource for IssuingDesign {
    const NAME: &'static str = "IssuingDesign";

    fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl IssuingDesign {
    /// Fetches one design.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the design does not exist.
    pub async fn get(client: &StarkClient, id: &str) -> Result<Self, ResourceError> {
        operations::get_id(client, id, None).await
    }

    /// Lists designs lazily, up to `params.limit`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if the params cannot be serialized.
    pub fn query<'c>(
        client: &'c StarkClient,
        params: &IssuingDesignQuery,
    ) -> Result<ResourceStream<'c, Self>, ResourceError> {
        operations::get_stream(client, params, params.limit)
    }

    /// Fetches one page of designs.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if `params.limit` is out of range.
    pub async fn page(
        client: &StarkClient,
        params: &IssuingDesignQuery,
        cursor: Option<&str>,
    ) -> Result<Page<Self>, ResourceError> {
        operations::get_page(client, params, params.limit, cursor).await
    }

    /// Downloads the design artwork as PDF bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the design does not exist.
    pub async fn pdf(client: &StarkClient, id: &str) -> Result<Vec<u8>, ResourceError> {
        operations::get_content::<Self>(client, id, "pdf").await
    }
}

/// Filters for listing designs.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssuingDesignQuery {
    /// Maximum number of designs to return.
    #[serde(skip_serializing)]
    pub limit: Option<u32>,

    /// Only designs created after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<NaiveDate>,

    /// Only designs created before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<NaiveDate>,

    /// Tag filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Id filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,

    /// Sub-issuer id filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_issuer_ids: Vec<String>,

    /// Embosser id filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embosser_ids: Vec<String>,
}
