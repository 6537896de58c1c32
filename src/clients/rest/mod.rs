//! REST transport for the Stark Infra API.
//!
//! [`StarkClient`] sends signed, versioned requests and returns raw
//! [`HttpResponse`](crate::clients::HttpResponse)s. Typed resource access is
//! built on top of it in [`crate::rest`].

mod client;

pub use client::StarkClient;
