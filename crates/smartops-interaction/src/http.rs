//! Shared HTTP plumbing.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use smartops_core::config::ApiConfig;
use smartops_core::error::{Result, SmartOpsError};
use smartops_core::session::AuthHeaders;

/// Builds the HTTP client every request goes through, applying the
/// configured deadline.
pub fn build_client(config: &ApiConfig) -> Result<Client> {
    let mut builder = Client::builder().user_agent(concat!("smartops/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = config.request_timeout() {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| SmartOpsError::config(format!("Failed to build HTTP client: {}", e)))
}

/// Converts session headers into a request header map.
///
/// # Errors
///
/// Returns `InvalidInput` if a value (typically the token) contains
/// characters that cannot appear in a header.
pub fn header_map(headers: &AuthHeaders) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers.iter() {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| SmartOpsError::invalid_input(format!("Invalid header name: {}", name)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| SmartOpsError::invalid_input(format!("Invalid value for header {}", name)))?;
        map.insert(name, value);
    }
    Ok(map)
}

/// Maps a transport failure (no response received) into the error taxonomy.
pub fn network_error(err: reqwest::Error) -> SmartOpsError {
    if err.is_timeout() {
        SmartOpsError::network(format!("Request timed out: {}", err))
    } else {
        SmartOpsError::network(err.to_string())
    }
}
