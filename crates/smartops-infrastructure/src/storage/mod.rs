//! Persistent key-value store implementations.

pub mod atomic_json;
pub mod file_store;
pub mod memory_store;

pub use atomic_json::{AtomicJsonError, AtomicJsonFile};
pub use file_store::FileKeyValueStore;
pub use memory_store::MemoryKeyValueStore;
