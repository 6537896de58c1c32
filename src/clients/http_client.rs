//! HTTP client for Stark Infra API communication.
//!
//! This module provides the [`HttpClient`] type for making signed requests
//! to the Stark Infra API.

use std::collections::HashMap;

use crate::auth::{sign_request, User};
use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::StarkConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Stark Infra API.
///
/// The client handles:
/// - Base URI construction from the user's environment or the configured host
/// - Default headers including User-Agent and Accept-Language
/// - Per-request signing (`Access-Id`, `Access-Time`, `Access-Signature`)
///
/// Every response is returned as-is, whatever its status; mapping statuses to
/// errors is left to the resource layer. Requests are never retried.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://sandbox.api.starkinfra.com`).
    base_uri: String,
    /// Base path (e.g., "/v2").
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Credentials used to sign requests.
    user: User,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given user.
    ///
    /// # Arguments
    ///
    /// * `base_path` - The base path for API requests (e.g., "/v2")
    /// * `user` - The credentials that sign every request
    /// * `config` - Optional configuration for host, timeout, language and `user_agent_prefix`
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(base_path: impl Into<String>, user: User, config: Option<&StarkConfig>) -> Self {
        let default_config = StarkConfig::default();
        let config = config.unwrap_or(&default_config);

        let base_uri = config.host().map_or_else(
            || format!("https://{}", user.environment().api_host()),
            |host| host.base().to_string(),
        );

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Stark Infra Rust SDK v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Accept-Language".to_string(),
            config.language().as_tag().to_string(),
        );
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            base_path: base_path.into(),
            default_headers,
            user,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the credentials this client signs with.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Sends an HTTP request to the Stark Infra API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error or timeout occurs (`Network`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let path = request.path.trim_start_matches('/');
        let url = format!("{}{}/{}", self.base_uri, self.base_path, path);
        let body = request.body_text();

        let access = sign_request(&self.user, chrono::Utc::now().timestamp(), &body);

        let mut headers = self.default_headers.clone();
        headers.insert("Access-Id".to_string(), access.access_id);
        headers.insert("Access-Time".to_string(), access.access_time);
        headers.insert("Access-Signature".to_string(), access.access_signature);
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if request.body.is_some() {
            req_builder = req_builder.body(body);
        }

        tracing::debug!(method = %request.http_method, path = %path, "Sending request to Stark Infra API");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let raw_body = res.bytes().await?.to_vec();

        let response = HttpResponse::from_bytes(code, res_headers, raw_body);

        tracing::debug!(status = code, path = %path, "Received response from Stark Infra API");
        if !response.is_ok() {
            tracing::warn!(
                "Request to Stark Infra API at {} failed with status {}: {}",
                path,
                code,
                Self::serialize_error(&response)
            );
        }

        Ok(response)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes an error response to a compact JSON message.
    pub(crate) fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(errors) = response.body.get("errors") {
            error_body.insert("errors".to_string(), errors.clone());
        }
        if let Some(raw) = response.body.get("raw_body") {
            error_body.insert("raw_body".to_string(), raw.clone());
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}
