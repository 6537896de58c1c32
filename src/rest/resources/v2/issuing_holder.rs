//! `IssuingHolder` resource implementation.
//!
//! Card holders own issuing cards and may carry spending rules that apply to
//! every card they hold.
//!
//! # Example
//!
//! ```rust,ignore
//! use starkinfra::{IssuingHolder, IssuingHolderQuery, IssuingHolderUpdate, GetParams};
//!
//! let holders = IssuingHolder::create(&client, &[IssuingHolder::new(
//!     "Tony Stark",
//!     "012.345.678-90",
//!     "my-unique-id",
//! )])
//! .await?;
//!
//! let holder = IssuingHolder::get(&client, holders[0].id.as_deref().unwrap(), Some(&GetParams::expand(["rules"]))).await?;
//!
//! let update = IssuingHolderUpdate { name: Some("Anthony Stark".to_string()), ..Default::default() };
//! let holder = IssuingHolder::update(&client, holder.id.as_deref().unwrap(), &update).await?;
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::common::IssuingRule;
use crate::clients::StarkClient;
use crate::rest::{operations, GetParams, Page, Resource, ResourceError, ResourceStream};

/// A card holder registered in the workspace.
///
/// # Fields
///
/// ## Writable Fields
/// - `name`, `tax_id`, `external_id` (required)
/// - `rules`, `tags`
///
/// ## Read-Only Fields
/// - `id`, `status`, `updated`, `created`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssuingHolder {
    /// Holder name.
    pub name: String,

    /// Holder CPF or CNPJ, with or without formatting.
    pub tax_id: String,

    /// Caller-defined unique id, used to avoid duplicate holders.
    pub external_id: String,

    /// Spending rules. Returned only when expanded with `rules`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<IssuingRule>>,

    /// Tags for filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Unique id assigned by the server.
    #[serde(default, skip_serializing)]
    pub id: Option<String>,

    /// Current status (`active`, `blocked`, `canceled`).
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

impl Resource for IssuingHolder {
    const NAME: &'static str = "IssuingHolder";

    fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl IssuingHolder {
    /// Creates a holder pending creation.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        tax_id: impl Into<String>,
        external_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            tax_id: tax_id.into(),
            external_id: external_id.into(),
            ..Self::default()
        }
    }

    /// Creates holders in a single batch.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] for an empty batch, or the
    /// API error.
    pub async fn create(client: &StarkClient, holders: &[Self]) -> Result<Vec<Self>, ResourceError> {
        operations::post_multi(client, holders, None).await
    }

    /// Fetches one holder. Expand `rules` to include its spending rules.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the holder does not exist.
    pub async fn get(
        client: &StarkClient,
        id: &str,
        params: Option<&GetParams>,
    ) -> Result<Self, ResourceError> {
        operations::get_id(client, id, params).await
    }

    /// Lists holders lazily, up to `params.limit`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if the params cannot be serialized.
    pub fn query<'c>(
        client: &'c StarkClient,
        params: &IssuingHolderQuery,
    ) -> Result<ResourceStream<'c, Self>, ResourceError> {
        operations::get_stream(client, params, params.limit)
    }

    /// Fetches one page of holders.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] if `params.limit` is out of range.
    pub async fn page(
        client: &StarkClient,
        params: &IssuingHolderQuery,
        cursor: Option<&str>,
    ) -> Result<Page<Self>, ResourceError> {
        operations::get_page(client, params, params.limit, cursor).await
    }

    /// Updates the given fields of a holder.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the holder does not exist.
    pub async fn update(
        client: &StarkClient,
        id: &str,
        update: &IssuingHolderUpdate,
    ) -> Result<Self, ResourceError> {
        operations::patch_id(client, id, update).await
    }

    /// Cancels a holder, returning its final state.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the holder does not exist.
    pub async fn delete(client: &StarkClient, id: &str) -> Result<Self, ResourceError> {
        operations::delete_id(client, id).await
    }
}

/// Filters for listing holders.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssuingHolderQuery {
    /// Maximum number of holders to return.
    #[serde(skip_serializing)]
    pub limit: Option<u32>,

    /// Only holders created after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<NaiveDate>,

    /// Only holders created before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<NaiveDate>,

    /// Status filter (e.g., `active`, `blocked`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,

    /// Sort order (e.g., `created`, `-created`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    /// Tag filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Id filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,

    /// Fields to expand (e.g., `rules`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

/// Fields to change on a holder. Unset fields are left unchanged.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssuingHolderUpdate {
    /// New status (`active` or `blocked`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

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
    fn test_holder_names() {
        assert_eq!(IssuingHolder::endpoint(), "issuing-holder");
        assert_eq!(IssuingHolder::resource_key(), "holder");
        assert_eq!(IssuingHolder::plural_key(), "holders");
    }

    #[test]
    fn test_holder_serialization_omits_server_fields() {
        let holder = IssuingHolder {
            id: Some("1".to_string()),
            status: Some("active".to_string()),
            tags: Some(vec!["iron".to_string()]),
            ..IssuingHolder::new("Tony Stark", "012.345.678-90", "ext-1")
        };

        let json = serde_json::to_value(&holder).unwrap();
        assert_eq!(
            json,
            json!({
                "name": "Tony Stark",
                "taxId": "012.345.678-90",
                "externalId": "ext-1",
                "tags": ["iron"]
            })
        );
    }

    #[test]
    fn test_holder_deserialization() {
        let holder: IssuingHolder = serde_json::from_value(json!({
            "id": "5155165527080960",
            "name": "Tony Stark",
            "taxId": "012.345.678-90",
            "externalId": "ext-1",
            "status": "active",
            "tags": null,
            "rules": [{"name": "General", "interval": "day", "amount": 1000}],
            "created": "2024-03-10T10:30:00.000000+00:00",
            "updated": "2024-03-10 10:30:00"
        }))
        .unwrap();

        assert_eq!(holder.get_id(), Some("5155165527080960"));
        assert_eq!(holder.status.as_deref(), Some("active"));
        assert!(holder.tags.is_none());
        assert_eq!(holder.rules.unwrap()[0].amount, 1000);
        assert_eq!(holder.created, holder.updated);
    }

    #[test]
    fn test_holder_update_omits_unset_fields() {
        let update = IssuingHolderUpdate {
            status: Some("blocked".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"status": "blocked"})
        );
    }

    #[test]
    fn test_holder_query_serialization() {
        let params = IssuingHolderQuery {
            limit: Some(10),
            after: NaiveDate::from_ymd_opt(2024, 1, 1),
            status: vec!["active".to_string(), "blocked".to_string()],
            sort: Some("-created".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            json!({
                "after": "2024-01-01",
                "status": ["active", "blocked"],
                "sort": "-created"
            })
        );
    }
}
