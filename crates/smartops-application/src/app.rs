//! Wiring of the session store and catalog from a configuration.

use smartops_core::config::{ApiConfig, Endpoints};
use smartops_core::error::Result;
use smartops_core::storage::KeyValueStore;
use smartops_interaction::http::build_client;
use smartops_interaction::{ClientService, HttpAuthGateway, ProductService, ResourceClient};
use std::sync::Arc;

use crate::auth_service::AuthService;
use crate::catalog_service::CatalogService;

/// Everything a front end needs, built once per process.
///
/// All network services share one HTTP client and therefore one deadline
/// and connection pool.
pub struct SmartOpsApp {
    pub endpoints: Endpoints,
    pub auth: Arc<AuthService>,
    pub catalog: CatalogService,
}

impl SmartOpsApp {
    /// Builds the services and restores the persisted session.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the base URL is invalid or the HTTP client cannot
    /// be built. A missing or unreadable stored session is not an error.
    pub async fn initialize(config: &ApiConfig, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let endpoints = config.endpoints()?;
        let http = build_client(config)?;
        tracing::debug!(base_url = %endpoints.base_url, "Initializing SmartOps services");

        let gateway = Arc::new(HttpAuthGateway::new(http.clone(), &endpoints));
        let auth = Arc::new(AuthService::initialize(store, gateway).await);

        let resources = ResourceClient::new(http, endpoints.clone());
        let catalog = CatalogService::new(
            auth.clone(),
            ClientService::new(resources.clone()),
            ProductService::new(resources),
        );

        Ok(Self {
            endpoints,
            auth,
            catalog,
        })
    }
}
