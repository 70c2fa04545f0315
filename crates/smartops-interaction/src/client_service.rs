//! Customer records.

use smartops_core::catalog::Client;
use smartops_core::error::Result;

use crate::resource_client::{Resource, ResourceClient};

/// Reads clients with the caller's bearer token.
#[derive(Clone)]
pub struct ClientService {
    resources: ResourceClient,
}

impl ClientService {
    pub fn new(resources: ResourceClient) -> Self {
        Self { resources }
    }

    /// Lists every client visible to the token.
    pub async fn get_clients(&self, token: Option<&str>) -> Result<Vec<Client>> {
        self.resources.fetch_all(Resource::Clients, token).await
    }

    pub async fn get_client_by_id(&self, id: u64, token: Option<&str>) -> Result<Client> {
        self.resources.fetch_one(Resource::Clients, id, token).await
    }
}
