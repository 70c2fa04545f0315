//! Session state domain model.

use crate::session::headers::AuthHeaders;
use crate::user::User;

/// Snapshot of the client's authentication state.
///
/// The token and user are set and cleared together, so `is_authenticated`
/// is derived rather than stored and can never disagree with them. The only
/// ways to build a value are the three constructors below, one per state
/// the session can be in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    credentials: Option<(String, User)>,
    loading: bool,
}

impl SessionState {
    /// Initial state of a freshly constructed store, before rehydration.
    pub fn loading() -> Self {
        Self {
            credentials: None,
            loading: true,
        }
    }

    /// Logged-out default.
    pub fn logged_out() -> Self {
        Self {
            credentials: None,
            loading: false,
        }
    }

    /// Authenticated state for the given bearer token and user.
    pub fn authenticated(token: impl Into<String>, user: User) -> Self {
        Self {
            credentials: Some((token.into(), user)),
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(|(token, _)| token.as_str())
    }

    pub fn user(&self) -> Option<&User> {
        self.credentials.as_ref().map(|(_, user)| user)
    }

    /// Request headers for the current session.
    pub fn auth_headers(&self) -> AuthHeaders {
        AuthHeaders::for_token(self.token())
    }

    /// JSON view for presentation code. The token is never included.
    pub fn summary(&self) -> serde_json::Value {
        serde_json::json!({
            "isAuthenticated": self.is_authenticated(),
            "loading": self.loading,
            "user": self.user(),
        })
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::loading()
    }
}
