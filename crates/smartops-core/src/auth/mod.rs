//! Authentication endpoint contract.
//!
//! The wire types for the login call, the rules for interpreting its
//! response, and the [`AuthGateway`] seam the session store talks to.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, SmartOpsError};
use crate::user::User;

/// Body of the login request.
#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful login body.
///
/// `token` and `user` are what the session needs; every other field the
/// server sent is kept in `extra` so callers can act on flags such as a
/// first-login welcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LoginResponse {
    /// Interprets a login response from its status code and raw body.
    ///
    /// The body is parsed before the status is looked at so a rejection can
    /// carry the server's own message.
    ///
    /// # Errors
    ///
    /// - `MalformedResponse` when the body is not JSON, or a success body lacks
    ///   a string `token` or a `user` object. The user's fields themselves are
    ///   decoded leniently.
    /// - `AuthRejected` for any non-2xx status.
    pub fn from_http(status: u16, body: &str) -> Result<Self> {
        let data: Value =
            serde_json::from_str(body).map_err(|_| SmartOpsError::malformed_body(status, body))?;

        if !(200..300).contains(&status) {
            return Err(SmartOpsError::auth_rejected(rejection_message(&data)));
        }

        let malformed = || SmartOpsError::malformed_body(status, body);
        let Value::Object(mut fields) = data else {
            return Err(malformed());
        };

        let token = match fields.remove("token") {
            Some(Value::String(token)) if !token.is_empty() => token,
            _ => return Err(malformed()),
        };
        let user = fields
            .remove("user")
            .and_then(User::from_value)
            .ok_or_else(malformed)?;

        Ok(Self {
            token,
            user,
            extra: fields,
        })
    }
}

/// Picks the server's explanation out of a rejection body: `message`
/// first, then `error`.
fn rejection_message(data: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .filter_map(|key| data.get(*key).and_then(Value::as_str))
        .find(|m| !m.trim().is_empty())
        .map(str::to_string)
}

/// Remote authentication endpoint.
///
/// Implementations perform the network call only; persisting and
/// publishing the session is the caller's job.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchanges credentials for a token and user record.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse>;
}
