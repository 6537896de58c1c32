//! Stark Infra API version definitions.
//!
//! This module provides the [`ApiVersion`] type, the path segment that
//! prefixes every endpoint (e.g. `/v2/issuing-card`).

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Stark Infra API version.
///
/// The API is versioned by a single path segment. `V2` is the only stable
/// version served today; `Custom` accepts any `v<number>` segment for
/// forward compatibility.
///
/// # Example
///
/// ```rust
/// use starkinfra::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version.to_string(), "v2");
///
/// let version: ApiVersion = "v3".parse().unwrap();
/// assert_eq!(version, ApiVersion::Custom(3));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2.
    V2,
    /// Any other numbered version.
    Custom(u32),
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V2 => f.write_str("v2"),
            Self::Custom(number) => write!(f, "v{number}"),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidApiVersion {
            version: s.to_string(),
        };

        let number: u32 = s
            .trim()
            .strip_prefix('v')
            .ok_or_else(invalid)?
            .parse()
            .map_err(|_| invalid())?;

        match number {
            0 => Err(invalid()),
            2 => Ok(Self::V2),
            other => Ok(Self::Custom(other)),
        }
    }
}
