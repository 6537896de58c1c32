//! Version-specific REST resource implementations.
//!
//! Resources are organized by API version to allow for version-specific
//! differences in resource structure:
//!
//! ```text
//! resources/
//!   mod.rs           <- This file (re-exports latest version)
//!   v2/
//!     mod.rs         <- Version-specific resources
//!     common/        <- Embedded types (rules, merchant filters)
//! ```
//!
//! The latest stable version is re-exported at this module level:
//!
//! ```rust,ignore
//! use starkinfra::rest::resources::IssuingCard;  // Uses latest version
//!
//! // Or explicitly specify a version:
//! use starkinfra::rest::resources::v2::IssuingCard;
//! ```

pub mod v2;

// Re-export types from the latest version for convenience
pub use v2::*;
