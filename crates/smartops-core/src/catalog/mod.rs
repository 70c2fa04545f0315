//! Catalog records served by the backend: clients (with their contacts and
//! jobs) and products.
//!
//! Every field is optional. The backend schema is not versioned, so readers
//! treat each field as possibly missing.

pub mod client;
pub mod product;

pub use client::{Client, Contact, Job};
pub use product::Product;
