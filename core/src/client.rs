//! Generic JSON fetch wrapper.
//!
//! # Design
//! A call is split into three steps. `build_request` merges the caller's
//! options over the default headers, the `Transport` performs exactly one
//! round-trip, and `parse_response` maps the status and decodes the body.
//! `ApiClient::request` strings them together and logs every failure before
//! returning it. Nothing is retried and nothing is swallowed.

use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::ApiError;
use crate::http::{merge_headers, HttpRequest, HttpResponse, RequestOptions, DEFAULT_HEADERS};
use crate::transport::{Transport, UreqTransport};

/// Build the request for `url`, merging `options.headers` over the defaults.
///
/// The URL is not validated here; a malformed one fails in the transport.
pub fn build_request(url: &str, options: RequestOptions) -> HttpRequest {
    HttpRequest {
        method: options.method,
        url: url.to_string(),
        headers: merge_headers(DEFAULT_HEADERS, &options.headers),
        body: options.body,
    }
}

/// Map a non-2xx status to `ApiError::Http`, otherwise decode the body as `T`.
///
/// An empty success body decodes as JSON `null`, so `()`, `Option<_>` and
/// `serde_json::Value` accept `204 No Content`.
pub fn parse_response<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    if !response.is_success() {
        return Err(ApiError::Http {
            status: response.status,
            body: response.body,
        });
    }
    let body = response.body.trim();
    let body = if body.is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(ApiError::Deserialization)
}

/// Stateless fetch wrapper over a `Transport`.
#[derive(Debug, Clone, Default)]
pub struct ApiClient<T = UreqTransport> {
    transport: T,
}

impl ApiClient<UreqTransport> {
    pub fn new() -> Self {
        Self::with_transport(UreqTransport::new())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Perform one request against the absolute `url` and decode the JSON
    /// response as `R`.
    pub fn request<R: DeserializeOwned>(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<R, ApiError> {
        let request = build_request(url, options);
        debug!(method = %request.method, url = %request.url, "sending request");

        let response = match self.transport.execute(&request) {
            Ok(response) => response,
            Err(e) => {
                error!(method = %request.method, url = %request.url, error = %e, "API fetch error");
                return Err(e.into());
            }
        };
        debug!(method = %request.method, url = %request.url, status = response.status, "received response");

        parse_response(response).inspect_err(|e| {
            error!(method = %request.method, url = %request.url, error = %e, "API fetch error");
        })
    }
}
