//! Screen-level state of a resource read.

use serde::Serialize;
use smartops_core::error::Result;

pub const CLIENTS_LOAD_FAILED: &str = "Failed to load clients. Please try again.";
pub const CLIENT_LOAD_FAILED: &str = "Failed to load client details";
pub const PRODUCTS_LOAD_FAILED: &str = "Failed to load products. Please try again.";
pub const PRODUCT_LOAD_FAILED: &str = "Failed to load product details";

/// What a list or detail screen shows for a fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Failed {
        message: String,
        retry_available: bool,
    },
}

impl<T> FetchState<T> {
    /// Maps a fetch result. Errors become `failure_message`; a retry is
    /// offered for failures another attempt might fix.
    pub fn from_result(result: Result<T>, failure_message: &str) -> Self {
        match result {
            Ok(value) => FetchState::Loaded(value),
            Err(err) => FetchState::Failed {
                message: failure_message.to_string(),
                retry_available: err.is_retryable(),
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn retry_available(&self) -> bool {
        matches!(
            self,
            FetchState::Failed {
                retry_available: true,
                ..
            }
        )
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}
