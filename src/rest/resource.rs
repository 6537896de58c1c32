//! Resource descriptor trait and parameter serialization.
//!
//! This module defines the [`Resource`] trait, which describes one entity of
//! the Stark Infra API: its wire name, and from it the endpoint and the JSON
//! keys wrapping single entities and lists. The generic verbs in
//! [`operations`](crate::rest::operations) work with any `Resource`.
//!
//! # Implementing a Resource
//!
//! 1. Define a struct with serde derives, camelCase on the wire
//! 2. Mark server-populated fields `#[serde(skip_serializing)]`
//! 3. Implement `Resource` with the wire name and the id accessor
//!
//! # Example
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use starkinfra::rest::Resource;
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! pub struct IssuingRestock {
//!     #[serde(default, skip_serializing)]
//!     pub id: Option<String>,
//!     pub count: u64,
//!     pub stock_id: String,
//! }
//!
//! impl Resource for IssuingRestock {
//!     const NAME: &'static str = "IssuingRestock";
//!
//!     fn get_id(&self) -> Option<&str> {
//!         self.id.as_deref()
//!     }
//! }
//!
//! assert_eq!(IssuingRestock::endpoint(), "issuing-restock");
//! assert_eq!(IssuingRestock::plural_key(), "restocks");
//! ```

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::rest::naming;
use crate::rest::ResourceError;

/// A typed entity of the Stark Infra API.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The wire name of the resource in `PascalCase` (e.g., `IssuingCard`).
    const NAME: &'static str;

    /// Returns the server-assigned id, or `None` for a record not yet created.
    fn get_id(&self) -> Option<&str>;

    /// Returns the endpoint path (e.g., `issuing-card`, `pix-request/log`).
    #[must_use]
    fn endpoint() -> String {
        naming::endpoint(Self::NAME)
    }

    /// Returns the key wrapping a single entity in request and response bodies.
    #[must_use]
    fn resource_key() -> String {
        naming::singular_key(Self::NAME)
    }

    /// Returns the key wrapping a list of entities in request and response bodies.
    #[must_use]
    fn plural_key() -> String {
        naming::plural_key(Self::NAME)
    }
}

/// Parameters for fetching a single entity.
///
/// `expand` asks the API to include fields it omits by default (e.g.,
/// `rules`, `securityCode`, `number`, `expiration`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetParams {
    /// Fields to expand.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

impl GetParams {
    /// Creates parameters expanding the given fields.
    #[must_use]
    pub fn expand<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expand: fields.into_iter().map(Into::into).collect(),
        }
    }
}

/// Deserializes a field that the API may send as `null` or omit, falling
/// back to the type's default.
pub(crate) fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Serializes a params struct into a query parameter map.
///
/// Null values and empty lists are skipped; lists are comma-joined; dates
/// keep their `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidParameter`] if the params cannot be
/// serialized to a JSON object.
pub(crate) fn serialize_to_query<T: Serialize + ?Sized>(
    params: &T,
    resource: &'static str,
) -> Result<HashMap<String, String>, ResourceError> {
    let value = serde_json::to_value(params).map_err(|e| ResourceError::InvalidParameter {
        resource,
        message: format!("failed to serialize params: {e}"),
    })?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}
