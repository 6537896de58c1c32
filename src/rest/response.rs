//! Response types for REST resource operations.
//!
//! This module provides [`Page<R>`], the result of a page-mode listing: the
//! entities of one page plus the cursor for the next. The wrapper implements
//! `Deref` for ergonomic access to the items.
//!
//! # Deref Pattern
//!
//! `Page<R>` implements `Deref<Target = Vec<R>>`, which means you can use it
//! like the inner vector directly:
//!
//! ```rust,ignore
//! let page = IssuingCard::page(&client, &IssuingCardQuery::default(), None).await?;
//!
//! for card in page.iter() {
//!     println!("{:?}", card.id);
//! }
//!
//! if let Some(cursor) = page.cursor() {
//!     let next = IssuingCard::page(&client, &IssuingCardQuery::default(), Some(cursor)).await?;
//! }
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::HttpResponse;
use crate::rest::ResourceError;

/// One page of entities and the cursor to the next page.
#[derive(Debug, Clone)]
pub struct Page<R> {
    items: Vec<R>,
    cursor: Option<String>,
    request_id: Option<String>,
}

impl<R> Page<R> {
    /// Creates a new page. An empty cursor is treated as no cursor.
    #[must_use]
    pub fn new(items: Vec<R>, cursor: Option<String>, request_id: Option<String>) -> Self {
        Self {
            items,
            cursor: cursor.filter(|c| !c.is_empty()),
            request_id,
        }
    }

    /// Returns the cursor for the next page, or `None` on the last page.
    #[must_use]
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Returns `true` if the server reported more pages.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.cursor.is_some()
    }

    /// Returns the request ID from the response headers.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Splits the page into its items and cursor.
    #[must_use]
    pub fn into_parts(self) -> (Vec<R>, Option<String>) {
        (self.items, self.cursor)
    }

    /// Consumes the page, returning its items.
    #[must_use]
    pub fn into_inner(self) -> Vec<R> {
        self.items
    }

    /// Parses a page from a successful list response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Deserialize`] if the list key is missing or
    /// its items do not match `R`.
    pub fn from_http_response(
        response: &HttpResponse,
        key: &str,
        resource: &'static str,
    ) -> Result<Self, ResourceError>
    where
        R: DeserializeOwned,
    {
        let items = parse_key(response, key, resource)?;
        let cursor = response
            .body
            .get("cursor")
            .and_then(serde_json::Value::as_str)
            .map(ToString::to_string);

        Ok(Self::new(
            items,
            cursor,
            response.request_id().map(ToString::to_string),
        ))
    }
}

impl<R> Deref for Page<R> {
    type Target = Vec<R>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<R> DerefMut for Page<R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

impl<R> IntoIterator for Page<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Deserializes the value under `key` in a response body.
///
/// # Errors
///
/// Returns [`ResourceError::Deserialize`] if the key is missing or the value
/// does not match `T`.
pub(crate) fn parse_key<T: DeserializeOwned>(
    response: &HttpResponse,
    key: &str,
    resource: &'static str,
) -> Result<T, ResourceError> {
    let request_id = response.request_id().map(ToString::to_string);

    let value = response
        .body
        .get(key)
        .ok_or_else(|| ResourceError::Deserialize {
            resource,
            message: format!("missing key '{key}' in response body"),
            request_id: request_id.clone(),
        })?;

    serde_json::from_value(value.clone()).map_err(|e| ResourceError::Deserialize {
        resource,
        message: format!("failed to deserialize '{key}': {e}"),
        request_id,
    })
}
