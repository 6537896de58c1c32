//! HTTP client types for Stark Infra API communication.
//!
//! This module provides the foundational HTTP client layer for making
//! signed requests to the Stark Infra API.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client that signs and sends requests
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response from the API (JSON and raw bytes)
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`rest::StarkClient`]: Versioned REST client passed to every resource operation
//!
//! # Example
//!
//! ```rust,ignore
//! use starkinfra::{Environment, Project, StarkClient};
//!
//! let project = Project::new("5656565656565656", Environment::Sandbox, private_key)?;
//! let client = StarkClient::new(project.into(), None);
//!
//! let response = client.get("issuing-holder", None).await?;
//! println!("{}", response.body);
//! ```
//!
//! # Retry Behavior
//!
//! Requests are sent exactly once. Transport failures and timeouts surface
//! as [`HttpError::Network`]; non-2xx responses are returned to the caller
//! for classification.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use rest::StarkClient;
