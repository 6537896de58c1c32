//! Resource-specific error types for REST API operations.
//!
//! This module contains the error type returned by every resource operation.
//!
//! # Error Handling
//!
//! The SDK maps API failures to semantic error variants:
//!
//! - **404**, or a `notFound`/`invalidId` error on a by-id call: [`ResourceError::NotFound`]
//! - **400**: [`ResourceError::InputErrors`] with the structured `{code, message}` list
//! - **401/403**: [`ResourceError::Unauthorized`]
//! - **5xx**: [`ResourceError::InternalServer`]
//! - Anything else: [`ResourceError::Http`]
//!
//! Parameters rejected before a request is sent produce
//! [`ResourceError::InvalidParameter`].
//!
//! # Example
//!
//! ```rust,ignore
//! use starkinfra::{IssuingHolder, ResourceError};
//!
//! match IssuingHolder::get(&client, "5155165527080960", None).await {
//!     Ok(holder) => println!("Found: {}", holder.name),
//!     Err(ResourceError::NotFound { resource, id, .. }) => {
//!         println!("{} with id {} not found", resource, id);
//!     }
//!     Err(ResourceError::InputErrors { errors, .. }) => {
//!         for error in errors {
//!             println!("{}: {}", error.code, error.message);
//!         }
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clients::{HttpError, HttpResponseError};

/// API error codes that mean the requested entity does not exist.
const NOT_FOUND_CODES: &[&str] = &["notFound", "invalidId"];

/// One structured error returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code (e.g., `invalidTaxId`).
    pub code: String,
    /// Human-readable message in the configured language.
    #[serde(default)]
    pub message: String,
}

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The entity does not exist or the id is invalid.
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The resource name (e.g., `IssuingCard`).
        resource: &'static str,
        /// The id that was requested.
        id: String,
        /// The request ID from the response headers.
        request_id: Option<String>,
    },

    /// The API rejected the request input.
    #[error("Input errors: {}", format_details(.errors))]
    InputErrors {
        /// Every error the API reported.
        errors: Vec<ApiErrorDetail>,
        /// The request ID from the response headers.
        request_id: Option<String>,
    },

    /// Authentication or authorization failed.
    #[error("Unauthorized: {}", format_details(.errors))]
    Unauthorized {
        /// The errors the API reported, if any.
        errors: Vec<ApiErrorDetail>,
        /// The request ID from the response headers.
        request_id: Option<String>,
    },

    /// The API failed while processing the request.
    #[error("Internal server error ({code}). Please contact us if you see this error again.")]
    InternalServer {
        /// The HTTP status code.
        code: u16,
        /// The request ID from the response headers.
        request_id: Option<String>,
    },

    /// A parameter was rejected before any request was sent.
    #[error("Invalid parameter for {resource}: {message}")]
    InvalidParameter {
        /// The resource name.
        resource: &'static str,
        /// What was wrong with the parameter.
        message: String,
    },

    /// A successful response did not have the expected shape.
    #[error("Failed to read {resource} response: {message}")]
    Deserialize {
        /// The resource name.
        resource: &'static str,
        /// What went wrong.
        message: String,
        /// The request ID from the response headers.
        request_id: Option<String>,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Creates a `ResourceError` from a non-successful HTTP response.
    ///
    /// `id` is the entity id for by-id calls; it enables the mapping of 404
    /// responses and `notFound`/`invalidId` input errors to
    /// [`ResourceError::NotFound`]. Without an id a 404 stays an HTTP error.
    #[must_use]
    pub fn from_http_response(
        code: u16,
        body: &serde_json::Value,
        resource: &'static str,
        id: Option<&str>,
        request_id: Option<&str>,
    ) -> Self {
        let request_id = request_id.map(ToString::to_string);
        let errors = parse_error_details(body);

        let not_found = |id: &str, request_id: Option<String>| Self::NotFound {
            resource,
            id: id.to_string(),
            request_id,
        };
        let http_response = |request_id: Option<String>| {
            Self::Http(HttpError::Response(HttpResponseError {
                code,
                message: body.to_string(),
                error_reference: request_id,
            }))
        };

        match code {
            404 => match id {
                Some(id) => not_found(id, request_id),
                None => http_response(request_id),
            },
            400 => match id {
                Some(id)
                    if errors
                        .iter()
                        .any(|e| NOT_FOUND_CODES.contains(&e.code.as_str())) =>
                {
                    not_found(id, request_id)
                }
                _ => Self::InputErrors { errors, request_id },
            },
            401 | 403 => Self::Unauthorized { errors, request_id },
            500..=599 => Self::InternalServer { code, request_id },
            _ => http_response(request_id),
        }
    }

    /// Returns the request ID associated with this error, if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::NotFound { request_id, .. }
            | Self::InputErrors { request_id, .. }
            | Self::Unauthorized { request_id, .. }
            | Self::InternalServer { request_id, .. }
            | Self::Deserialize { request_id, .. } => request_id.as_deref(),
            Self::Http(HttpError::Response(e)) => e.error_reference.as_deref(),
            _ => None,
        }
    }

    /// Returns the structured API errors carried by this error.
    #[must_use]
    pub fn details(&self) -> &[ApiErrorDetail] {
        match self {
            Self::InputErrors { errors, .. } | Self::Unauthorized { errors, .. } => errors,
            _ => &[],
        }
    }
}

fn format_details(errors: &[ApiErrorDetail]) -> String {
    if errors.is_empty() {
        return "no details".to_string();
    }
    errors
        .iter()
        .map(|e| format!("{}: {}", e.code, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

fn parse_error_details(body: &serde_json::Value) -> Vec<ApiErrorDetail> {
    match body.get("errors") {
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                serde_json::Value::Object(_) => serde_json::from_value(item.clone()).ok(),
                serde_json::Value::String(message) => Some(ApiErrorDetail {
                    code: "unknown".to_string(),
                    message: message.clone(),
                }),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
