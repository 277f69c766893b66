// Rust guideline compliant 2026-10-18

//! Collaborator interfaces: the document store and the authentication
//! provider, plus the subscription plumbing they share.

use crate::error::{AuthError, Result};
use buildboard_core::{AuthUser, Build, BuildDraft, Resource, ResourceDraft, UserPreferences};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// Callback invoked with every delivered value.
pub type Listener<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Handle to an active subscription.
///
/// The subscription stops when [`cancel`](Self::cancel) is called or the
/// handle is dropped.
#[must_use = "dropping a subscription cancels it"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Wraps the function that tears the subscription down.
    pub fn new<F>(cancel: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Stops the subscription.
    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

struct HubInner<T> {
    next_id: u64,
    listeners: BTreeMap<u64, (String, Listener<T>)>,
}

/// Registry of listeners keyed by owner (usually a user ID).
pub struct ListenerHub<T> {
    inner: Arc<Mutex<HubInner<T>>>,
}

impl<T> Clone for ListenerHub<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for ListenerHub<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HubInner {
                next_id: 0,
                listeners: BTreeMap::new(),
            })),
        }
    }
}

impl<T: 'static> ListenerHub<T> {
    /// Creates an empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HubInner<T>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Registers a listener under `key`.
    pub fn subscribe(&self, key: &str, listener: Listener<T>) -> Subscription {
        let id = {
            let mut inner = self.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.insert(id, (key.to_string(), listener));
            id
        };

        let weak = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                let mut inner = inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                inner.listeners.remove(&id);
            }
        })
    }

    /// Returns the listeners registered under `key`, in registration order.
    #[must_use]
    pub fn listeners(&self, key: &str) -> Vec<Listener<T>> {
        self.lock()
            .listeners
            .values()
            .filter(|(owner, _)| owner == key)
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().listeners.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone + 'static> ListenerHub<T> {
    /// Delivers `value` to every listener under `key`.
    ///
    /// Listeners run after the hub lock is released, so they may subscribe
    /// or cancel.
    pub fn emit(&self, key: &str, value: T) {
        for listener in self.listeners(key) {
            listener(value.clone());
        }
    }
}

/// The document database the dashboard reads and writes.
///
/// Collection listings are scoped to one user and ordered by `updated_at`,
/// newest first. Subscriptions deliver the current value once on subscribe
/// and again after every change.
pub trait DocumentStore: Send + Sync {
    /// Creates a build owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft is incomplete or the write fails.
    fn add_build(&self, user_id: &str, draft: BuildDraft) -> Result<Build>;

    /// Replaces the editable fields of a build.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID, or any write error.
    fn update_build(&self, id: &str, draft: BuildDraft) -> Result<Build>;

    /// Deletes a build.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID, or any write error.
    fn delete_build(&self, id: &str) -> Result<()>;

    /// Records that a build was just opened.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID, or any write error.
    fn touch_build(&self, id: &str) -> Result<()>;

    /// Lists the builds of a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read.
    fn user_builds(&self, user_id: &str) -> Result<Vec<Build>>;

    /// Watches the builds of a user.
    fn subscribe_builds(&self, user_id: &str, listener: Listener<Vec<Build>>) -> Subscription;

    /// Creates a custom resource owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft is incomplete or the write fails.
    fn add_resource(&self, user_id: &str, draft: ResourceDraft) -> Result<Resource>;

    /// Replaces the editable fields of a custom resource.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID, or any write error.
    fn update_resource(&self, id: &str, draft: ResourceDraft) -> Result<Resource>;

    /// Deletes a custom resource.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID, or any write error.
    fn delete_resource(&self, id: &str) -> Result<()>;

    /// Lists the custom resources of a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read.
    fn user_resources(&self, user_id: &str) -> Result<Vec<Resource>>;

    /// Watches the custom resources of a user.
    fn subscribe_resources(&self, user_id: &str, listener: Listener<Vec<Resource>>)
        -> Subscription;

    /// Returns the preferences of a user, or defaults if none are stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read.
    fn preferences(&self, user_id: &str) -> Result<UserPreferences>;

    /// Stores the hidden resource IDs of a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn update_preferences(
        &self,
        user_id: &str,
        hidden_resource_ids: Vec<String>,
    ) -> Result<UserPreferences>;

    /// Watches the preferences of a user.
    fn subscribe_preferences(
        &self,
        user_id: &str,
        listener: Listener<UserPreferences>,
    ) -> Subscription;
}

/// The identity service users sign in with.
pub trait AuthProvider: Send + Sync {
    /// Starts an interactive sign-in.
    ///
    /// # Errors
    ///
    /// Returns the provider error, e.g. when the user closed the prompt.
    fn sign_in(&self) -> std::result::Result<AuthUser, AuthError>;

    /// Signs the current user out.
    ///
    /// # Errors
    ///
    /// Returns the provider error if sign-out fails.
    fn sign_out(&self) -> std::result::Result<(), AuthError>;

    /// Returns the signed-in user, if any.
    fn current_user(&self) -> Option<AuthUser>;

    /// Watches sign-in state. The current state is delivered immediately.
    fn on_auth_change(&self, listener: Listener<Option<AuthUser>>) -> Subscription;
}
