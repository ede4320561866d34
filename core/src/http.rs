//! HTTP request/response types and per-call options.
//!
//! # Design
//! Requests and responses are plain data with owned fields. The fetch wrapper
//! builds an `HttpRequest` from a URL plus `RequestOptions`, hands it to a
//! `Transport`, and interprets the `HttpResponse` that comes back. Keeping
//! both sides as data lets unit tests inspect exactly what would go on the
//! wire without a network.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ApiError, UnknownMethod};

/// Header every request carries unless the caller overrides it.
pub const DEFAULT_HEADERS: &[(&str, &str)] = &[("content-type", "application/json")];

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}

/// An HTTP request described as plain data.
///
/// Produced by `client::build_request`; `url` is absolute and passed to the
/// transport untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// First header value whose name matches `name`, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// Per-call options for `ApiClient::request`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    /// Merged over `DEFAULT_HEADERS`; these win on a name collision.
    pub headers: Vec<(String, String)>,
    /// Pre-serialized body, sent as-is.
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `data` to JSON and use it as the body.
    pub fn json<T: Serialize + ?Sized>(mut self, data: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(data).map_err(ApiError::Serialization)?;
        self.body = Some(body);
        Ok(self)
    }
}

/// Merge `caller` headers over `defaults`.
///
/// A default is dropped when the caller supplies the same name (compared
/// case-insensitively); surviving defaults come first, then the caller's
/// headers in their original order.
pub fn merge_headers(
    defaults: &[(&str, &str)],
    caller: &[(String, String)],
) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = defaults
        .iter()
        .filter(|(name, _)| find_header(caller, name).is_none())
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    merged.extend(caller.iter().cloned());
    merged
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn merge_keeps_default_content_type() {
        let merged = merge_headers(DEFAULT_HEADERS, &[pair("x-request-id", "abc")]);
        assert_eq!(
            merged,
            vec![pair("content-type", "application/json"), pair("x-request-id", "abc")]
        );
    }

    #[test]
    fn merge_lets_caller_override_regardless_of_case() {
        let merged = merge_headers(DEFAULT_HEADERS, &[pair("Content-Type", "text/plain")]);
        assert_eq!(merged, vec![pair("Content-Type", "text/plain")]);
    }

    #[test]
    fn merge_with_no_caller_headers_is_defaults() {
        let merged = merge_headers(DEFAULT_HEADERS, &[]);
        assert_eq!(merged, vec![pair("content-type", "application/json")]);
    }

    #[test]
    fn method_parses_case_insensitively() {
        assert_eq!("delete".parse::<HttpMethod>().unwrap(), HttpMethod::Delete);
        assert_eq!("Patch".parse::<HttpMethod>().unwrap(), HttpMethod::Patch);
        let err = "TRACE".parse::<HttpMethod>().unwrap_err();
        assert_eq!(err, UnknownMethod("TRACE".to_string()));
    }

    #[test]
    fn options_default_to_get_without_body() {
        let options = RequestOptions::new();
        assert_eq!(options.method, HttpMethod::Get);
        assert!(options.headers.is_empty());
        assert!(options.body.is_none());
    }

    #[test]
    fn options_json_serializes_body() {
        let options = RequestOptions::new()
            .method(HttpMethod::Post)
            .json(&serde_json::json!({"name": "a"}))
            .unwrap();
        assert_eq!(options.body.as_deref(), Some(r#"{"name":"a"}"#));
    }

    #[test]
    fn response_success_range() {
        let response = |status| HttpResponse {
            status,
            headers: Vec::new(),
            body: String::new(),
        };
        assert!(response(200).is_success());
        assert!(response(299).is_success());
        assert!(!response(199).is_success());
        assert!(!response(300).is_success());
        assert!(!response(404).is_success());
    }
}
