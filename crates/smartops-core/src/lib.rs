pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod lenient;
pub mod session;
pub mod storage;
pub mod user;

// Re-export common error type
pub use error::{Result, SmartOpsError};
