//! What the current session is allowed to see.

use serde::Serialize;
use smartops_core::session::SessionState;
use strum::Display;

pub const DEFAULT_GUEST_MESSAGE: &str = "Please sign in to access this feature";

/// Top-level screen for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Route {
    /// Session is still being restored.
    Splash,
    Login,
    AdminDashboard,
    UserDashboard,
}

impl Route {
    pub fn for_session(session: &SessionState) -> Self {
        if session.is_loading() {
            return Route::Splash;
        }
        match session.user() {
            Some(user) if user.role.is_admin() => Route::AdminDashboard,
            Some(_) => Route::UserDashboard,
            None => Route::Login,
        }
    }
}

/// Outcome of a [`FeatureGate`] check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "access", rename_all = "snake_case")]
pub enum Access {
    Granted,
    SignInRequired { message: String },
}

impl Access {
    pub fn is_granted(&self) -> bool {
        matches!(self, Access::Granted)
    }
}

/// Guards a feature that needs a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureGate {
    guest_message: String,
}

impl FeatureGate {
    pub fn new(guest_message: impl Into<String>) -> Self {
        Self {
            guest_message: guest_message.into(),
        }
    }

    pub fn check(&self, session: &SessionState) -> Access {
        if session.is_authenticated() {
            Access::Granted
        } else {
            Access::SignInRequired {
                message: self.guest_message.clone(),
            }
        }
    }
}

impl Default for FeatureGate {
    fn default() -> Self {
        Self::new(DEFAULT_GUEST_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartops_core::user::{User, UserRole};

    #[test]
    fn test_route_per_state() {
        assert_eq!(Route::for_session(&SessionState::loading()), Route::Splash);
        assert_eq!(Route::for_session(&SessionState::logged_out()), Route::Login);

        let admin = User::new(1, "A", "a@b.com", UserRole::Admin);
        assert_eq!(
            Route::for_session(&SessionState::authenticated("T1", admin)),
            Route::AdminDashboard
        );

        let tech = User::new(2, "B", "b@b.com", UserRole::Other("technician".into()));
        assert_eq!(
            Route::for_session(&SessionState::authenticated("T2", tech)),
            Route::UserDashboard
        );
    }

    #[test]
    fn test_route_names() {
        assert_eq!(Route::AdminDashboard.to_string(), "admin_dashboard");
    }

    #[test]
    fn test_feature_gate() {
        let gate = FeatureGate::default();
        assert_eq!(
            gate.check(&SessionState::loading()),
            Access::SignInRequired {
                message: DEFAULT_GUEST_MESSAGE.into()
            }
        );

        let user = User::new(1, "A", "a@b.com", UserRole::User);
        assert!(gate.check(&SessionState::authenticated("T1", user)).is_granted());

        let custom = FeatureGate::new("Sign in to view invoices");
        match custom.check(&SessionState::logged_out()) {
            Access::SignInRequired { message } => assert_eq!(message, "Sign in to view invoices"),
            other => panic!("unexpected access: {:?}", other),
        }
    }
}
