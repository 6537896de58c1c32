//! HTTP response types for the Stark Infra SDK.
//!
//! This module provides the [`HttpResponse`] type for accessing API
//! response data.

use std::collections::HashMap;

/// A response from the Stark Infra API.
///
/// JSON bodies are parsed into [`body`](Self::body). The raw bytes are kept
/// as well, since some endpoints (such as PDF downloads) return binary
/// content.
///
/// # Example
///
/// ```rust
/// use starkinfra::clients::HttpResponse;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::from_bytes(200, HashMap::new(), br#"{"holder":{"id":"1"}}"#.to_vec());
/// assert!(response.is_ok());
/// assert_eq!(response.body["holder"]["id"], "1");
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed JSON body (`{}` when the body is empty or not JSON).
    pub body: serde_json::Value,
    /// The raw response body.
    pub raw_body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` from an already parsed JSON body.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let raw_body = body.to_string().into_bytes();
        Self {
            code,
            headers,
            body,
            raw_body,
        }
    }

    /// Creates a new `HttpResponse` from the raw body bytes.
    ///
    /// Bodies that are not valid JSON are kept only as raw bytes. For 5xx
    /// responses the text is exposed under `raw_body` in the JSON body so it
    /// reaches error messages.
    #[must_use]
    pub fn from_bytes(code: u16, headers: HashMap<String, Vec<String>>, raw_body: Vec<u8>) -> Self {
        let body = if raw_body.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_slice(&raw_body).unwrap_or_else(|_| {
                if code >= 500 {
                    serde_json::json!({ "raw_body": String::from_utf8_lossy(&raw_body) })
                } else {
                    serde_json::json!({})
                }
            })
        };

        Self {
            code,
            headers,
            body,
            raw_body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
