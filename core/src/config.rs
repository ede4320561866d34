//! Base URLs of the three services the site talks to.
//!
//! Resolved once, from the environment or explicit values, and read-only
//! afterwards. A missing or blank variable falls back to the local
//! development default without complaint.

use std::fmt;

use tracing::debug;

/// One of the three backends behind the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// WordPress REST API serving posts and pages.
    Content,
    /// General application backend.
    Backend,
    /// Auxiliary Node service.
    Auxiliary,
}

impl Service {
    pub const ALL: [Service; 3] = [Service::Content, Service::Backend, Service::Auxiliary];

    /// Environment variable that overrides this service's base URL.
    pub fn env_var(&self) -> &'static str {
        match self {
            Service::Content => "WP_API_URL",
            Service::Backend => "BACKEND_API_URL",
            Service::Auxiliary => "NODE_API_URL",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Service::Content => "http://localhost:8000/wp-json/wp/v2",
            Service::Backend => "http://localhost:8080/api",
            Service::Auxiliary => "http://localhost:3001/api",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Service::Content => "content",
            Service::Backend => "backend",
            Service::Auxiliary => "auxiliary",
        };
        f.write_str(name)
    }
}

/// Immutable mapping from `Service` to its base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    content: String,
    backend: String,
    auxiliary: String,
}

impl Endpoints {
    /// Explicit base URLs. Blank values fall back to the defaults; a
    /// trailing `/` is stripped.
    pub fn new(content: &str, backend: &str, auxiliary: &str) -> Self {
        Self {
            content: normalize(Service::Content, Some(content)),
            backend: normalize(Service::Backend, Some(backend)),
            auxiliary: normalize(Service::Auxiliary, Some(auxiliary)),
        }
    }

    /// Read `WP_API_URL`, `BACKEND_API_URL` and `NODE_API_URL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve every service through `lookup`, keyed by `Service::env_var`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |service: Service| {
            let value = lookup(service.env_var());
            let url = normalize(service, value.as_deref());
            debug!(%service, url = %url, from_env = value.is_some(), "resolved endpoint");
            url
        };
        Self {
            content: resolve(Service::Content),
            backend: resolve(Service::Backend),
            auxiliary: resolve(Service::Auxiliary),
        }
    }

    pub fn base_url(&self, service: Service) -> &str {
        match service {
            Service::Content => &self.content,
            Service::Backend => &self.backend,
            Service::Auxiliary => &self.auxiliary,
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn normalize(service: Service, value: Option<&str>) -> String {
    let trimmed = value.map(str::trim).unwrap_or("").trim_end_matches('/');
    if trimmed.is_empty() {
        service.default_base_url().to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_when_nothing_configured() {
        let endpoints = Endpoints::default();
        for service in Service::ALL {
            assert_eq!(endpoints.base_url(service), service.default_base_url());
        }
        assert_eq!(
            endpoints.base_url(Service::Content),
            "http://localhost:8000/wp-json/wp/v2"
        );
    }

    #[test]
    fn lookup_overrides_per_service() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("WP_API_URL", "https://cms.example.com/wp-json/wp/v2/"),
            ("NODE_API_URL", "https://node.example.com/api"),
        ]);
        let endpoints = Endpoints::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(
            endpoints.base_url(Service::Content),
            "https://cms.example.com/wp-json/wp/v2"
        );
        assert_eq!(endpoints.base_url(Service::Auxiliary), "https://node.example.com/api");
        assert_eq!(endpoints.base_url(Service::Backend), "http://localhost:8080/api");
    }

    #[test]
    fn blank_values_fall_back() {
        let endpoints = Endpoints::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(endpoints, Endpoints::default());

        let endpoints = Endpoints::new("", "/", "http://aux:1/api");
        assert_eq!(endpoints.base_url(Service::Content), Service::Content.default_base_url());
        assert_eq!(endpoints.base_url(Service::Backend), Service::Backend.default_base_url());
        assert_eq!(endpoints.base_url(Service::Auxiliary), "http://aux:1/api");
    }
}
