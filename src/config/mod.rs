//! Configuration types for the Stark Infra SDK.
//!
//! This module provides the configuration used to build clients for the
//! Stark Infra API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StarkConfig`]: Transport settings shared by every request
//! - [`StarkConfigBuilder`]: A builder for constructing [`StarkConfig`] instances
//! - [`Environment`]: Production or sandbox
//! - [`CredentialId`]: A validated project/organization/workspace id
//! - [`PrivateKey`]: A signing key with masked debug output
//! - [`HostUrl`]: A validated API host override
//! - [`ApiVersion`]: The API version path segment
//!
//! Credentials are not part of the configuration: they live in
//! [`User`](crate::User) and are passed to every client explicitly.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use starkinfra::{StarkConfig, ApiVersion, Language};
//!
//! let config = StarkConfig::builder()
//!     .api_version(ApiVersion::latest())
//!     .language(Language::Portuguese)
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

use std::time::Duration;

pub use newtypes::{CredentialId, Environment, HostUrl, Language, PrivateKey};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Transport configuration for the Stark Infra SDK.
///
/// # Thread Safety
///
/// `StarkConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct StarkConfig {
    api_version: ApiVersion,
    language: Language,
    timeout: Duration,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl StarkConfig {
    /// Creates a new builder for constructing a `StarkConfig`.
    #[must_use]
    pub fn builder() -> StarkConfigBuilder {
        StarkConfigBuilder::new()
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the language requested for API messages.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the host override, if configured.
    #[must_use]
    pub const fn host(&self) -> Option<&HostUrl> {
        self.host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for StarkConfig {
    fn default() -> Self {
        Self {
            api_version: ApiVersion::latest(),
            language: Language::default(),
            timeout: DEFAULT_TIMEOUT,
            host: None,
            user_agent_prefix: None,
        }
    }
}

// Verify StarkConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StarkConfig>();
};

/// Builder for constructing [`StarkConfig`] instances.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::latest`]
/// - `language`: `en-US`
/// - `timeout`: 15 seconds
/// - `host`: `None` (use the environment's host)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct StarkConfigBuilder {
    api_version: Option<ApiVersion>,
    language: Option<Language>,
    timeout: Option<Duration>,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl StarkConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the language for API messages.
    #[must_use]
    pub const fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides the API host (scheme, host and port).
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StarkConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] if a zero timeout was set.
    pub fn build(self) -> Result<StarkConfig, ConfigError> {
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(StarkConfig {
            api_version: self.api_version.unwrap_or_default(),
            language: self.language.unwrap_or_default(),
            timeout,
            host: self.host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
