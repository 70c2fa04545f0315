//! Session store and the operations that move it between states.
//!
//! `AuthService` is the one owner of the client's [`SessionState`]. It
//! rehydrates from the persistent store once at startup, persists before it
//! publishes on login, and clears both sides on logout.

use smartops_core::auth::{AuthGateway, LoginRequest, LoginResponse};
use smartops_core::error::Result;
use smartops_core::session::{AuthHeaders, SessionState};
use smartops_core::storage::{KeyValueStore, TOKEN_KEY, USER_KEY};
use smartops_core::user::User;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::{Mutex, Notify};

/// Owns the session and serializes every transition of it.
///
/// Transitions (`check_auth`, `login`, `logout`) run one at a time behind an
/// async lock. Readers take a snapshot without waiting on that lock; the
/// snapshot is replaced whole, so a reader sees either the old state or the
/// new one.
pub struct AuthService {
    store: Arc<dyn KeyValueStore>,
    gateway: Arc<dyn AuthGateway>,
    state: RwLock<SessionState>,
    op_lock: Mutex<()>,
    loaded: Notify,
}

impl AuthService {
    /// Creates a store in the `loading` state. Call [`check_auth`] (or use
    /// [`initialize`]) before relying on the session.
    ///
    /// [`check_auth`]: Self::check_auth
    /// [`initialize`]: Self::initialize
    pub fn new(store: Arc<dyn KeyValueStore>, gateway: Arc<dyn AuthGateway>) -> Self {
        Self {
            store,
            gateway,
            state: RwLock::new(SessionState::loading()),
            op_lock: Mutex::new(()),
            loaded: Notify::new(),
        }
    }

    /// Creates a store and restores any persisted session before returning.
    pub async fn initialize(store: Arc<dyn KeyValueStore>, gateway: Arc<dyn AuthGateway>) -> Self {
        let service = Self::new(store, gateway);
        service.check_auth().await;
        service
    }

    // ============================================================================
    // Auth operations
    // ============================================================================

    /// Restores the session from the persistent store.
    ///
    /// Only the first call does anything: once the state has left `loading`
    /// further calls return immediately. Missing entries, an unparsable user
    /// record, or a storage failure all resolve to the logged-out state.
    pub async fn check_auth(&self) {
        let _guard = self.op_lock.lock().await;
        if !self.session().is_loading() {
            return;
        }

        let next = match self.read_persisted().await {
            Ok(Some((token, user))) => {
                tracing::info!(user_id = ?user.id, role = %user.role, "Restored session");
                SessionState::authenticated(token, user)
            }
            Ok(None) => {
                tracing::debug!("No stored session");
                SessionState::logged_out()
            }
            Err(err) => {
                tracing::error!(error = %err, "Error checking auth");
                SessionState::logged_out()
            }
        };

        self.publish(next);
    }

    /// Signs in and persists the session.
    ///
    /// The session is published only after both `token` and `user` have
    /// been written. Returns the full login body so callers can read extra
    /// fields the server sent.
    ///
    /// # Errors
    ///
    /// - `AuthRejected`, `MalformedResponse`, `NetworkError` from the login call.
    /// - `StorageWrite` if persisting fails; no key is left behind and the
    ///   session is unchanged.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let _guard = self.op_lock.lock().await;

        let request = LoginRequest::new(email, password);
        let response = self.gateway.login(&request).await?;

        self.persist(&response.token, &response.user).await?;
        tracing::info!(
            user_id = ?response.user.id,
            role = %response.user.role,
            "Login successful"
        );
        self.publish(SessionState::authenticated(
            response.token.clone(),
            response.user.clone(),
        ));

        Ok(response)
    }

    /// Clears the persisted session and resets to logged out.
    ///
    /// Storage failures are logged and otherwise ignored; the in-memory
    /// session is always cleared.
    pub async fn logout(&self) {
        let _guard = self.op_lock.lock().await;

        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(err) = self.store.remove_item(key).await {
                tracing::warn!(key, error = %err, "Error during logout");
            }
        }

        self.publish(SessionState::logged_out());
        tracing::info!("Logged out");
    }

    // ============================================================================
    // Readers
    // ============================================================================

    /// Snapshot of the current session.
    pub fn session(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Headers for an authenticated request, derived from the current
    /// session at call time.
    pub fn auth_header(&self) -> AuthHeaders {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .auth_headers()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.session().is_loading()
    }

    pub fn current_user(&self) -> Option<User> {
        self.session().user().cloned()
    }

    pub fn token(&self) -> Option<String> {
        self.session().token().map(str::to_string)
    }

    /// Resolves once the session has left `loading`.
    pub async fn wait_until_loaded(&self) {
        loop {
            let notified = self.loaded.notified();
            if !self.is_loading() {
                return;
            }
            notified.await;
        }
    }

    // ============================================================================
    // Internals
    // ============================================================================

    async fn read_persisted(&self) -> Result<Option<(String, User)>> {
        let token = self
            .store
            .get_item(TOKEN_KEY)
            .await?
            .filter(|t| !t.is_empty());
        let raw_user = self.store.get_item(USER_KEY).await?;

        let (Some(token), Some(raw_user)) = (token, raw_user) else {
            return Ok(None);
        };

        match User::from_json(&raw_user) {
            Some(user) => Ok(Some((token, user))),
            None => {
                tracing::warn!("Stored user record could not be parsed");
                Ok(None)
            }
        }
    }

    async fn persist(&self, token: &str, user: &User) -> Result<()> {
        let user_json = user.to_json()?;

        self.store.set_item(TOKEN_KEY, token).await?;
        if let Err(err) = self.store.set_item(USER_KEY, &user_json).await {
            if let Err(rollback) = self.store.remove_item(TOKEN_KEY).await {
                tracing::warn!(error = %rollback, "Failed to roll back stored token");
            }
            return Err(err);
        }

        Ok(())
    }

    fn publish(&self, next: SessionState) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = next;
        self.loaded.notify_waiters();
    }
}
