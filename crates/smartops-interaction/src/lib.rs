//! HTTP access to the SmartOps backend: the login call and the
//! authenticated resource clients.

pub mod auth_gateway;
pub mod client_service;
pub mod http;
pub mod product_service;
pub mod resource_client;

pub use auth_gateway::HttpAuthGateway;
pub use client_service::ClientService;
pub use product_service::ProductService;
pub use resource_client::{Resource, ResourceClient};
