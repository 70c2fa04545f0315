//! Product catalog.
//!
//! Products are public on the backend; requests go out with only the
//! content-type header.

use smartops_core::catalog::Product;
use smartops_core::error::Result;

use crate::resource_client::{Resource, ResourceClient};

#[derive(Clone)]
pub struct ProductService {
    resources: ResourceClient,
}

impl ProductService {
    pub fn new(resources: ResourceClient) -> Self {
        Self { resources }
    }

    pub async fn get_products(&self) -> Result<Vec<Product>> {
        self.resources.fetch_all(Resource::Products, None).await
    }

    pub async fn get_product_by_id(&self, id: u64) -> Result<Product> {
        self.resources.fetch_one(Resource::Products, id, None).await
    }
}
