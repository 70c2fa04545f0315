//! Catalog reads bound to the current session.

use smartops_core::catalog::{Client, Product};
use smartops_core::error::Result;
use smartops_interaction::{ClientService, ProductService};
use std::sync::Arc;

use crate::auth_service::AuthService;
use crate::fetch_state::{
    FetchState, CLIENTS_LOAD_FAILED, CLIENT_LOAD_FAILED, PRODUCTS_LOAD_FAILED, PRODUCT_LOAD_FAILED,
};

/// Reads clients with the session's token and products without one.
///
/// The token is read from the session at call time, so a logout between two
/// calls is reflected on the next request.
#[derive(Clone)]
pub struct CatalogService {
    auth: Arc<AuthService>,
    clients: ClientService,
    products: ProductService,
}

impl CatalogService {
    pub fn new(auth: Arc<AuthService>, clients: ClientService, products: ProductService) -> Self {
        Self {
            auth,
            clients,
            products,
        }
    }

    pub async fn clients(&self) -> Result<Vec<Client>> {
        let token = self.auth.token();
        self.clients.get_clients(token.as_deref()).await
    }

    pub async fn client(&self, id: u64) -> Result<Client> {
        let token = self.auth.token();
        self.clients.get_client_by_id(id, token.as_deref()).await
    }

    pub async fn products(&self) -> Result<Vec<Product>> {
        self.products.get_products().await
    }

    pub async fn product(&self, id: u64) -> Result<Product> {
        self.products.get_product_by_id(id).await
    }

    // ============================================================================
    // Screen states
    // ============================================================================

    pub async fn load_clients(&self) -> FetchState<Vec<Client>> {
        FetchState::from_result(self.clients().await, CLIENTS_LOAD_FAILED)
    }

    pub async fn load_client(&self, id: u64) -> FetchState<Client> {
        FetchState::from_result(self.client(id).await, CLIENT_LOAD_FAILED)
    }

    pub async fn load_products(&self) -> FetchState<Vec<Product>> {
        FetchState::from_result(self.products().await, PRODUCTS_LOAD_FAILED)
    }

    pub async fn load_product(&self, id: u64) -> FetchState<Product> {
        FetchState::from_result(self.product(id).await, PRODUCT_LOAD_FAILED)
    }
}
