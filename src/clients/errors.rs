//! HTTP-specific error types for the Stark Infra SDK.
//!
//! This module contains error types for HTTP operations: response errors
//! and request validation failures.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: A non-2xx response the resource layer could not classify
//! - [`InvalidHttpRequestError`]: A request that fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! Requests are never retried; a network failure surfaces immediately as
//! [`HttpError::Network`].
//!
//! # Example
//!
//! ```rust,ignore
//! use starkinfra::clients::HttpError;
//!
//! match client.get("issuing-holder", None).await {
//!     Ok(response) => println!("Status {}", response.code),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {}", e),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//! }
//! ```

use thiserror::Error;

/// Error returned for a non-successful response.
///
/// The message holds the serialized error body returned by the API.
///
/// # Example
///
/// ```rust
/// use starkinfra::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 429,
///     message: r#"{"errors":[{"code":"tooManyRequests","message":"Slow down"}]}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert!(error.to_string().contains("tooManyRequests"));
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from `X-Request-Id` header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path is empty after normalization.
    #[error("Invalid request path: '{path}'")]
    InvalidPath {
        /// The path that was provided.
        path: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error, including timeouts.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
