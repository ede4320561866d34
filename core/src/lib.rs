//! Typed JSON client for the site's three backend services.
//!
//! # Overview
//! `SiteApi` exposes one helper set per service (content, backend,
//! auxiliary). Every helper composes a URL from the configured `Endpoints`
//! and delegates to `ApiClient::request`, which sends the request through a
//! `Transport`, checks the status, and decodes the JSON body into whatever
//! type the caller asks for.
//!
//! # Design
//! - `ApiClient` is stateless apart from its transport; concurrent calls
//!   share nothing mutable.
//! - Request building and response parsing are pure functions, so the wire
//!   format is testable without a network.
//! - Failures are logged through `tracing` and returned unchanged. There is
//!   no retry, caching or fallback value.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod services;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{build_request, parse_response, ApiClient};
pub use config::{Endpoints, Service};
pub use error::{ApiError, TransportError, UnknownMethod};
pub use http::{HttpMethod, HttpRequest, HttpResponse, RequestOptions};
pub use services::{AuxiliaryApi, BackendApi, ContentApi, SiteApi, DEFAULT_PAGE_SIZE};
pub use transport::{Transport, UreqTransport};
pub use types::{Page, Post, Rendered};
