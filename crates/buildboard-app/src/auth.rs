// Rust guideline compliant 2026-10-18

//! Sign-in session state.

use crate::error::{AppError, Result};
use crate::store::{AuthProvider, Subscription};
use buildboard_core::{AuthUser, LoadingTracker};
use std::sync::{Arc, Mutex, MutexGuard};

/// Loading key held while a sign-in is in flight.
pub const SIGN_IN_KEY: &str = "auth";

#[derive(Debug, Default)]
struct SessionState {
    user: Option<AuthUser>,
    auth_error: String,
}

/// Mirrors the provider's signed-in user and the last sign-in error.
pub struct AuthSession {
    provider: Arc<dyn AuthProvider>,
    loading: LoadingTracker,
    state: Arc<Mutex<SessionState>>,
    subscription: Option<Subscription>,
}

impl AuthSession {
    /// Creates a session over a provider.
    pub fn new(provider: Arc<dyn AuthProvider>, loading: LoadingTracker) -> Self {
        Self {
            provider,
            loading,
            state: Arc::new(Mutex::new(SessionState::default())),
            subscription: None,
        }
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Starts mirroring the provider's auth state.
    ///
    /// `on_change` runs after the mirrored user is updated, once immediately
    /// and then on every sign-in or sign-out. Calling this again replaces the
    /// previous watcher.
    pub fn initialize<F>(&mut self, on_change: F)
    where
        F: Fn(Option<&AuthUser>) + Send + Sync + 'static,
    {
        self.cleanup();
        let state = Arc::clone(&self.state);
        self.subscription = Some(self.provider.on_auth_change(Arc::new(
            move |user: Option<AuthUser>| {
                state
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .user = user.clone();
                on_change(user.as_ref());
            },
        )));
    }

    /// Stops mirroring the provider.
    pub fn cleanup(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
        }
    }

    /// Signs in through the provider.
    ///
    /// Clears the previous error first. On failure the Danish message for
    /// the provider's error code is recorded and returned through
    /// [`auth_error`](Self::auth_error).
    ///
    /// # Returns
    ///
    /// The signed-in user, or `None` if sign-in failed.
    pub fn sign_in(&self) -> Option<AuthUser> {
        let _guard = self.loading.begin(SIGN_IN_KEY, Some("Logger ind..."));
        self.state().auth_error.clear();

        match self.provider.sign_in() {
            Ok(user) => Some(user),
            Err(error) => {
                tracing::warn!(code = %error.code, "sign-in failed");
                self.state().auth_error = error.sign_in_message().to_string();
                None
            }
        }
    }

    /// Signs out through the provider.
    ///
    /// # Errors
    ///
    /// Returns the provider error if sign-out fails.
    pub fn sign_out(&self) -> Result<()> {
        self.provider.sign_out().map_err(AppError::from)
    }

    /// Returns the signed-in user.
    #[must_use]
    pub fn user(&self) -> Option<AuthUser> {
        self.state().user.clone()
    }

    /// Returns the signed-in user or fails.
    ///
    /// # Errors
    ///
    /// Returns `NotSignedIn` if nobody is signed in.
    pub fn require_user(&self) -> Result<AuthUser> {
        self.user().ok_or(AppError::NotSignedIn)
    }

    /// Returns the last sign-in error, or an empty string.
    #[must_use]
    pub fn auth_error(&self) -> String {
        self.state().auth_error.clone()
    }

    /// Returns true while a sign-in is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_loading(SIGN_IN_KEY)
    }
}

impl Drop for AuthSession {
    fn drop(&mut self) {
        self.cleanup();
    }
}
