//! Authenticated resource fetching.
//!
//! Every catalog read is a GET against a collection (`/clients`) or a
//! record (`/clients/{id}`) that decodes the JSON body into a typed value.
//! The bearer token is passed in by the caller; this layer never reads the
//! session itself.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use smartops_core::config::Endpoints;
use smartops_core::error::{Result, SmartOpsError};
use smartops_core::session::AuthHeaders;
use strum::{AsRefStr, Display};

use crate::http::{header_map, network_error};

/// Named backend collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Resource {
    Clients,
    Products,
}

impl Resource {
    fn collection_url(self, endpoints: &Endpoints) -> &str {
        match self {
            Resource::Clients => &endpoints.clients,
            Resource::Products => &endpoints.products,
        }
    }

    fn record_url(self, endpoints: &Endpoints, id: u64) -> String {
        match self {
            Resource::Clients => endpoints.client(id),
            Resource::Products => endpoints.product(id),
        }
    }

    /// Singular noun used in log lines ("client 42").
    fn singular(self) -> &'static str {
        match self {
            Resource::Clients => "client",
            Resource::Products => "product",
        }
    }
}

/// GETs JSON resources from the backend.
///
/// Cheap to clone; clones share the connection pool. Calls are independent
/// and may run concurrently.
#[derive(Clone)]
pub struct ResourceClient {
    http: Client,
    endpoints: Endpoints,
}

impl ResourceClient {
    pub fn new(http: Client, endpoints: Endpoints) -> Self {
        Self { http, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetches a whole collection.
    ///
    /// The body must be a JSON array. Records that do not decode as `T` are
    /// skipped and counted in a warning; the rest are returned in order.
    pub async fn fetch_all<T>(&self, resource: Resource, token: Option<&str>) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let url = resource.collection_url(&self.endpoints).to_string();
        let items: Vec<Value> = self.get_json(&url, token).await.inspect_err(|err| {
            tracing::error!(resource = %resource, error = %err, "Error fetching {}", resource);
        })?;

        let total = items.len();
        let records: Vec<T> = items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect();
        if records.len() < total {
            tracing::warn!(
                resource = %resource,
                skipped = total - records.len(),
                "Skipped undecodable {} records",
                resource.singular()
            );
        }
        Ok(records)
    }

    /// Fetches one record by id.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` without sending anything if `id` is zero.
    pub async fn fetch_one<T>(&self, resource: Resource, id: u64, token: Option<&str>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let result = if id == 0 {
            Err(SmartOpsError::invalid_input(format!(
                "{} id must be a positive integer",
                resource.singular()
            )))
        } else {
            let url = resource.record_url(&self.endpoints, id);
            self.get_json(&url, token).await
        };

        result.inspect_err(|err| {
            tracing::error!(
                resource = %resource,
                id,
                error = %err,
                "Error fetching {} {}",
                resource.singular(),
                id
            );
        })
    }

    async fn get_json<T>(&self, url: &str, token: Option<&str>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let headers = header_map(&AuthHeaders::for_token(token))?;

        tracing::debug!(url, authenticated = token.is_some(), "GET");
        let response = self
            .http
            .get(url)
            .headers(headers)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SmartOpsError::http(status.as_u16()));
        }

        let body = response.text().await.map_err(network_error)?;
        serde_json::from_str(&body).map_err(|_| SmartOpsError::malformed_body(status.as_u16(), &body))
    }
}
