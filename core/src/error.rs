//! Error types for the site API client.
//!
//! # Design
//! Two failure kinds reach callers from the network: the transport could not
//! complete the round-trip (`Transport`), or it completed with a status
//! outside 200..=299 (`Http`). Both carry enough context to log and present.
//! The remaining variants cover JSON encoding and decoding at either end of
//! the call.

use std::error::Error as StdError;

use thiserror::Error;

/// The round-trip itself failed: connection refused, DNS, IO, malformed URL.
///
/// Displays as `<message>: <cause>` so a single log line names the cause.
#[derive(Debug, Error)]
#[error("{message}{}", .source.as_ref().map(|s| format!(": {s}")).unwrap_or_default())]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors returned by `ApiClient::request` and every service helper.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The transport could not complete the request.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a status outside 200..=299.
    #[error("HTTP error! status: {status}")]
    Http { status: u16, body: String },

    /// The success body could not be decoded into the requested type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The request payload could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl ApiError {
    /// Status code of an `Http` failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// A method string that is not one of the supported HTTP verbs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown HTTP method: {0}")]
pub struct UnknownMethod(pub String);
