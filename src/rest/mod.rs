//! REST resource infrastructure for the Stark Infra API.
//!
//! This module provides:
//!
//! - **[`Resource`] trait**: the wire name of an entity and the endpoint and
//!   JSON keys derived from it
//! - **[`operations`]**: the generic verbs (create, get, page, query, update,
//!   delete, content download) shared by every resource
//! - **[`Page<R>`]** and **[`ResourceStream<R>`]**: the two listing modes
//! - **[`ResourceError`]**: semantic errors for resource operations
//!
//! Individual resources (`IssuingCard`, `PixRequest`, ...) live in the
//! [`resources`] submodule and are re-exported at the crate root.
//!
//! # Example
//!
//! ```rust,ignore
//! use starkinfra::{Environment, IssuingCard, IssuingCardQuery, Project, StarkClient};
//!
//! let project = Project::new("5656565656565656", Environment::Sandbox, private_key)?;
//! let client = StarkClient::new(project.into(), None);
//!
//! // Page mode: one request, explicit cursor
//! let page = IssuingCard::page(&client, &IssuingCardQuery::default(), None).await?;
//! if let Some(cursor) = page.cursor() {
//!     let next = IssuingCard::page(&client, &IssuingCardQuery::default(), Some(cursor)).await?;
//! }
//!
//! // Sequence mode: pages fetched lazily
//! let query = IssuingCardQuery { limit: Some(10), ..Default::default() };
//! // (TryStreamExt from futures-util)
//! let cards: Vec<IssuingCard> = IssuingCard::query(&client, &query)?.try_collect().await?;
//! ```

pub mod datetime;
mod errors;
pub mod naming;
pub mod operations;
mod resource;
pub mod resources;
mod response;
mod stream;

pub use errors::{ApiErrorDetail, ResourceError};
pub use resource::{GetParams, Resource};
pub use response::Page;
pub use stream::ResourceStream;
