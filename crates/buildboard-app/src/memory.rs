// Rust guideline compliant 2026-10-18

//! In-memory collaborators for tests and embedding.

use crate::error::AuthError;
use crate::local::{Collection, LocalStore};
use crate::store::{AuthProvider, Listener, ListenerHub, Subscription};
use buildboard_core::{
    AuthUser, Build, Document, Error as CoreError, Resource, Result as CoreResult,
    UserPreferences,
};
use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// A collection held in memory.
///
/// Clones share the same documents. [`set_unavailable`](Self::set_unavailable)
/// makes every call fail, to exercise error paths.
pub struct MemoryCollection<T> {
    documents: Arc<Mutex<Vec<T>>>,
    unavailable: Arc<AtomicBool>,
}

impl<T> Clone for MemoryCollection<T> {
    fn clone(&self) -> Self {
        Self {
            documents: Arc::clone(&self.documents),
            unavailable: Arc::clone(&self.unavailable),
        }
    }
}

impl<T> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self {
            documents: Arc::new(Mutex::new(Vec::new())),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl<T> MemoryCollection<T> {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail (or succeed again).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn documents(&self) -> CoreResult<MutexGuard<'_, Vec<T>>> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(CoreError::Io(io::Error::new(
                io::ErrorKind::NotConnected,
                "collection unavailable",
            )));
        }
        Ok(self
            .documents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()))
    }
}

impl<T> Collection<T> for MemoryCollection<T>
where
    T: Document + Clone + Send + 'static,
{
    fn load_all(&self) -> CoreResult<Vec<T>> {
        Ok(self.documents()?.clone())
    }

    fn upsert(&self, document: &T) -> CoreResult<()> {
        document.validate()?;
        let mut documents = self.documents()?;
        match documents.iter().position(|d| d.id() == document.id()) {
            Some(pos) => documents[pos] = document.clone(),
            None => documents.push(document.clone()),
        }
        Ok(())
    }

    fn remove(&self, id: &str) -> CoreResult<()> {
        let mut documents = self.documents()?;
        let before = documents.len();
        documents.retain(|d| d.id() != id);
        if documents.len() == before {
            return Err(CoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

impl LocalStore {
    /// Creates an empty store held in memory.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Box::new(MemoryCollection::<Build>::new()),
            Box::new(MemoryCollection::<Resource>::new()),
            Box::new(MemoryCollection::<UserPreferences>::new()),
        )
    }
}

const AUTH_KEY: &str = "";

struct AuthInner {
    current: Option<AuthUser>,
    outcomes: VecDeque<Result<AuthUser, AuthError>>,
}

/// An authentication provider whose sign-in outcomes are scripted.
///
/// Sign-in pops the next queued outcome; with nothing queued it fails with
/// `auth/internal-error`. State changes are delivered to listeners the way a
/// hosted provider would.
#[derive(Clone)]
pub struct ScriptedAuth {
    inner: Arc<Mutex<AuthInner>>,
    listeners: ListenerHub<Option<AuthUser>>,
}

impl Default for ScriptedAuth {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(AuthInner {
                current: None,
                outcomes: VecDeque::new(),
            })),
            listeners: ListenerHub::new(),
        }
    }
}

impl ScriptedAuth {
    /// Creates a provider with nobody signed in.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider with `user` already signed in.
    #[must_use]
    pub fn signed_in(user: AuthUser) -> Self {
        let auth = Self::new();
        auth.lock().current = Some(user);
        auth
    }

    fn lock(&self) -> MutexGuard<'_, AuthInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Queues the outcome of the next sign-in.
    pub fn push_outcome(&self, outcome: Result<AuthUser, AuthError>) {
        self.lock().outcomes.push_back(outcome);
    }

    /// Changes the signed-in user from outside, e.g. a session expiring.
    pub fn set_user(&self, user: Option<AuthUser>) {
        self.lock().current = user.clone();
        self.listeners.emit(AUTH_KEY, user);
    }
}

impl AuthProvider for ScriptedAuth {
    fn sign_in(&self) -> Result<AuthUser, AuthError> {
        let outcome = self
            .lock()
            .outcomes
            .pop_front()
            .unwrap_or_else(|| Err(AuthError::new("auth/internal-error", "no sign-in scripted")));
        let user = outcome?;
        self.set_user(Some(user.clone()));
        Ok(user)
    }

    fn sign_out(&self) -> Result<(), AuthError> {
        self.set_user(None);
        Ok(())
    }

    fn current_user(&self) -> Option<AuthUser> {
        self.lock().current.clone()
    }

    fn on_auth_change(&self, listener: Listener<Option<AuthUser>>) -> Subscription {
        listener(self.current_user());
        self.listeners.subscribe(AUTH_KEY, listener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(uid: &str) -> AuthUser {
        AuthUser {
            uid: uid.to_string(),
            display_name: None,
            email: None,
        }
    }

    #[test]
    fn test_collection_upsert_and_remove() {
        let collection: MemoryCollection<UserPreferences> = MemoryCollection::new();
        let mut prefs = UserPreferences::for_user("u1");
        collection.upsert(&prefs).unwrap();
        prefs.hidden_resource_ids.push("3".to_string());
        collection.upsert(&prefs).unwrap();
        assert_eq!(collection.load_all().unwrap(), vec![prefs]);

        collection.remove("u1").unwrap();
        assert!(matches!(collection.remove("u1"), Err(CoreError::NotFound(_))));
    }

    #[test]
    fn test_unavailable_collection_fails() {
        let collection: MemoryCollection<UserPreferences> = MemoryCollection::new();
        let handle = collection.clone();
        handle.set_unavailable(true);
        assert!(collection.load_all().is_err());
        handle.set_unavailable(false);
        assert!(collection.load_all().is_ok());
    }

    #[test]
    fn test_scripted_sign_in() {
        let auth = ScriptedAuth::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _subscription = auth.on_auth_change(Arc::new(move |user: Option<AuthUser>| {
            sink.lock().unwrap().push(user.map(|u| u.uid));
        }));

        auth.push_outcome(Err(AuthError::new("auth/popup-blocked", "blocked")));
        auth.push_outcome(Ok(user("u1")));
        assert!(auth.sign_in().is_err());
        assert_eq!(auth.sign_in().unwrap().uid, "u1");
        auth.sign_out().unwrap();
        assert!(auth.sign_in().is_err());

        assert_eq!(
            *seen.lock().unwrap(),
            vec![None, Some("u1".to_string()), None]
        );
    }
}
