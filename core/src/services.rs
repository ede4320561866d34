//! Per-service helpers over the shared fetch wrapper.
//!
//! # Design
//! `SiteApi` owns the `Endpoints` and one `ApiClient`. The helper sets are
//! borrowed views that pair the client with a single base URL; each method
//! only composes `<base>/<path>`, picks the verb and body, and delegates.
//! Status checks, decoding, logging and error propagation all happen in
//! `ApiClient::request`.
//!
//! Paths, ids and endpoints are inserted verbatim. Escaping them is the
//! caller's job.

use std::fmt::Display;
use std::num::NonZeroU32;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::ApiClient;
use crate::config::{Endpoints, Service};
use crate::error::ApiError;
use crate::http::{HttpMethod, RequestOptions};
use crate::transport::{Transport, UreqTransport};

/// `per_page` used by the listing helpers when no limit is given.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Entry point: the three helper sets over one configured client.
pub struct SiteApi<T = UreqTransport> {
    endpoints: Endpoints,
    client: ApiClient<T>,
}

impl SiteApi<UreqTransport> {
    pub fn new(endpoints: Endpoints) -> Self {
        Self::with_transport(endpoints, UreqTransport::new())
    }

    /// Endpoints from the process environment, blocking `ureq` transport.
    pub fn from_env() -> Self {
        Self::new(Endpoints::from_env())
    }
}

impl<T: Transport> SiteApi<T> {
    pub fn with_transport(endpoints: Endpoints, transport: T) -> Self {
        Self {
            endpoints,
            client: ApiClient::with_transport(transport),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// The underlying fetch wrapper, for absolute URLs outside the helpers.
    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    pub fn content(&self) -> ContentApi<'_, T> {
        ContentApi {
            base: Base::new(&self.client, self.endpoints.base_url(Service::Content)),
        }
    }

    pub fn backend(&self) -> BackendApi<'_, T> {
        BackendApi {
            base: Base::new(&self.client, self.endpoints.base_url(Service::Backend)),
        }
    }

    pub fn auxiliary(&self) -> AuxiliaryApi<'_, T> {
        AuxiliaryApi {
            base: Base::new(&self.client, self.endpoints.base_url(Service::Auxiliary)),
        }
    }
}

struct Base<'a, T> {
    client: &'a ApiClient<T>,
    url: &'a str,
}

impl<'a, T: Transport> Base<'a, T> {
    fn new(client: &'a ApiClient<T>, url: &'a str) -> Self {
        Self { client, url }
    }

    fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.send(path, RequestOptions::new())
    }

    fn send_json<D, R>(&self, method: HttpMethod, path: &str, data: &D) -> Result<R, ApiError>
    where
        D: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(path, RequestOptions::new().method(method).json(data)?)
    }

    fn send<R: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<R, ApiError> {
        self.client.request(&format!("{}/{}", self.url, path), options)
    }
}

fn page_size(limit: Option<NonZeroU32>) -> u32 {
    limit.map_or(DEFAULT_PAGE_SIZE, NonZeroU32::get)
}

/// Read-only helpers for the WordPress content service.
pub struct ContentApi<'a, T> {
    base: Base<'a, T>,
}

impl<T: Transport> ContentApi<'_, T> {
    /// `GET <base>/posts?per_page=<limit>`, defaulting to `DEFAULT_PAGE_SIZE`.
    pub fn get_posts<R: DeserializeOwned>(&self, limit: Option<NonZeroU32>) -> Result<R, ApiError> {
        self.base.get(&format!("posts?per_page={}", page_size(limit)))
    }

    pub fn get_post<R: DeserializeOwned>(&self, id: impl Display) -> Result<R, ApiError> {
        self.base.get(&format!("posts/{id}"))
    }

    /// `GET <base>/pages?per_page=<limit>`, defaulting to `DEFAULT_PAGE_SIZE`.
    pub fn get_pages<R: DeserializeOwned>(&self, limit: Option<NonZeroU32>) -> Result<R, ApiError> {
        self.base.get(&format!("pages?per_page={}", page_size(limit)))
    }

    pub fn get_page<R: DeserializeOwned>(&self, id: impl Display) -> Result<R, ApiError> {
        self.base.get(&format!("pages/{id}"))
    }
}

/// CRUD helpers for the application backend.
pub struct BackendApi<'a, T> {
    base: Base<'a, T>,
}

impl<T: Transport> BackendApi<'_, T> {
    pub fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
        self.base.get(endpoint)
    }

    /// `POST <base>/<endpoint>` with `data` as the JSON body.
    pub fn post<D, R>(&self, endpoint: &str, data: &D) -> Result<R, ApiError>
    where
        D: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.base.send_json(HttpMethod::Post, endpoint, data)
    }

    /// `PUT <base>/<endpoint>` with `data` as the JSON body.
    pub fn put<D, R>(&self, endpoint: &str, data: &D) -> Result<R, ApiError>
    where
        D: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.base.send_json(HttpMethod::Put, endpoint, data)
    }

    pub fn delete<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
        self.base
            .send(endpoint, RequestOptions::new().method(HttpMethod::Delete))
    }
}

/// Read and create helpers for the auxiliary service.
pub struct AuxiliaryApi<'a, T> {
    base: Base<'a, T>,
}

impl<T: Transport> AuxiliaryApi<'_, T> {
    pub fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
        self.base.get(endpoint)
    }

    pub fn post<D, R>(&self, endpoint: &str, data: &D) -> Result<R, ApiError>
    where
        D: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.base.send_json(HttpMethod::Post, endpoint, data)
    }
}
