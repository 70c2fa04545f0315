//! Request headers derived from the current session.

use serde::Serialize;
use std::collections::BTreeMap;

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Header set attached to outgoing JSON requests.
///
/// Always carries `Content-Type: application/json`; carries
/// `Authorization: Bearer <token>` only when a token is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AuthHeaders(BTreeMap<String, String>);

impl AuthHeaders {
    /// Builds the header set for an optional bearer token.
    ///
    /// An empty token is treated as no token.
    pub fn for_token(token: Option<&str>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string());
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            headers.insert(AUTHORIZATION.to_string(), format!("Bearer {}", token));
        }
        Self(headers)
    }

    /// Headers for an unauthenticated JSON request.
    pub fn anonymous() -> Self {
        Self::for_token(None)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn has_authorization(&self) -> bool {
        self.0.contains_key(AUTHORIZATION)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }
}
