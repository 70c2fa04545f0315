//! Application layer for SmartOps.
//!
//! Owns the session store and the use cases built on it: restoring a
//! session at startup, signing in and out, deciding what the user may see,
//! and reading the catalog with the current credentials.

pub mod access;
pub mod app;
pub mod auth_service;
pub mod catalog_service;
pub mod fetch_state;

pub use access::{Access, FeatureGate, Route};
pub use app::SmartOpsApp;
pub use auth_service::AuthService;
pub use catalog_service::CatalogService;
pub use fetch_state::FetchState;
