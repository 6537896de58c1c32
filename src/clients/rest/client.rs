//! REST client for the Stark Infra API.
//!
//! This module provides the [`StarkClient`] type, the explicit
//! authentication context every resource operation receives.

use std::collections::HashMap;

use crate::auth::User;
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ApiVersion, StarkConfig};

/// REST client for the Stark Infra API.
///
/// Wraps an [`HttpClient`] with the versioned base path (`/v2`) and path
/// normalization. Construct one per set of credentials and pass it to
/// resource operations.
///
/// # Thread Safety
///
/// `StarkClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use starkinfra::{Environment, IssuingHolder, Project, StarkClient};
///
/// let project = Project::new("5656565656565656", Environment::Sandbox, private_key)?;
/// let client = StarkClient::new(project.into(), None);
///
/// let holder = IssuingHolder::get(&client, "5155165527080960", None).await?;
/// ```
#[derive(Debug)]
pub struct StarkClient {
    http_client: HttpClient,
    api_version: ApiVersion,
}

// Verify StarkClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StarkClient>();
};

impl StarkClient {
    /// Creates a new client for `user`.
    ///
    /// Uses the API version from `config`, or the latest version when no
    /// configuration is given.
    #[must_use]
    pub fn new(user: User, config: Option<&StarkConfig>) -> Self {
        let api_version = config.map_or_else(ApiVersion::latest, |c| c.api_version().clone());
        let base_path = format!("/{api_version}");

        tracing::debug!(
            access_id = %user.access_id(),
            environment = %user.environment(),
            "Creating Stark Infra client for API {}",
            api_version
        );

        Self {
            http_client: HttpClient::new(base_path, user, config),
            api_version,
        }
    }

    /// Returns the API version used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the credentials used by this client.
    #[must_use]
    pub const fn user(&self) -> &User {
        self.http_client.user()
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the path is empty or the request fails in transport.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the path is empty or the request fails in transport.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    /// Sends a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the path is empty or the request fails in transport.
    pub async fn patch(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Patch, path, Some(body), query)
            .await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the path is empty or the request fails in transport.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Delete, path, None, query)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(method, normalize_path(path));

        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }

        if let Some(query_params) = query.filter(|q| !q.is_empty()) {
            builder = builder.query(query_params);
        }

        let request = builder.build()?;

        self.http_client.request(request).await
    }
}

fn normalize_path(path: &str) -> String {
    path.trim_matches('/').to_string()
}
