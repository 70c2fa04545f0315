//! Persistent key-value store trait.
//!
//! Defines the durable string-keyed storage the session is persisted to.

use async_trait::async_trait;

use crate::error::Result;

/// Key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";

/// Key holding the JSON-serialized user record.
pub const USER_KEY: &str = "user";

/// Durable, asynchronous string-keyed storage that survives restarts.
///
/// Implementations report read failures as `StorageRead` and write or
/// remove failures as `StorageWrite`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if absent.
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a key that does not exist succeeds.
    async fn remove_item(&self, key: &str) -> Result<()>;
}
