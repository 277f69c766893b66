// Rust guideline compliant 2026-10-18

//! Loading-state tracking for in-flight operations.
//!
//! A [`LoadingTracker`] is constructed explicitly and handed to whatever needs
//! it; clones share the same registry.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

/// Message shown when a caller does not supply one.
pub const DEFAULT_MESSAGE: &str = "Indlæser...";

/// Key used for the global loading flag.
pub const GLOBAL_KEY: &str = "global";

/// Snapshot of one in-flight operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingState {
    /// Whether the operation is running.
    pub loading: bool,
    /// Message to show while it runs.
    pub message: String,
}

#[derive(Debug, Default)]
struct Registry {
    global: bool,
    states: BTreeMap<String, LoadingState>,
}

/// Keyed registry of in-flight operation flags and messages.
#[derive(Debug, Clone, Default)]
pub struct LoadingTracker {
    inner: Arc<Mutex<Registry>>,
}

impl LoadingTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        // A panic while holding the lock cannot leave the registry half
        // written, so a poisoned lock is still usable.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Sets the global loading flag, recorded under [`GLOBAL_KEY`].
    pub fn set_global_loading(&self, loading: bool, message: Option<&str>) {
        let mut registry = self.registry();
        registry.global = loading;
        if loading {
            registry.states.insert(
                GLOBAL_KEY.to_string(),
                LoadingState {
                    loading: true,
                    message: message.unwrap_or(DEFAULT_MESSAGE).to_string(),
                },
            );
        } else {
            registry.states.remove(GLOBAL_KEY);
        }
    }

    /// Returns the global loading flag.
    #[must_use]
    pub fn is_global_loading(&self) -> bool {
        self.registry().global
    }

    /// Marks `key` as loading or done. Done keys are removed.
    pub fn set_loading(&self, key: &str, loading: bool, message: Option<&str>) {
        let mut registry = self.registry();
        if loading {
            registry.states.insert(
                key.to_string(),
                LoadingState {
                    loading: true,
                    message: message.unwrap_or(DEFAULT_MESSAGE).to_string(),
                },
            );
        } else {
            registry.states.remove(key);
        }
    }

    /// Returns true if `key` is loading.
    #[must_use]
    pub fn is_loading(&self, key: &str) -> bool {
        self.registry()
            .states
            .get(key)
            .is_some_and(|state| state.loading)
    }

    /// Returns the message for `key`, or [`DEFAULT_MESSAGE`].
    #[must_use]
    pub fn loading_message(&self, key: &str) -> String {
        self.registry()
            .states
            .get(key)
            .map_or_else(|| DEFAULT_MESSAGE.to_string(), |state| state.message.clone())
    }

    /// Returns true if anything is loading.
    #[must_use]
    pub fn has_any_loading(&self) -> bool {
        let registry = self.registry();
        registry.global || !registry.states.is_empty()
    }

    /// Returns a snapshot of every loading key.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, LoadingState> {
        self.registry().states.clone()
    }

    /// Clears every loading key and the global flag.
    pub fn clear_all(&self) {
        let mut registry = self.registry();
        registry.states.clear();
        registry.global = false;
    }

    /// Marks `key` as loading until the returned guard is dropped.
    #[must_use = "the key is cleared as soon as the guard is dropped"]
    pub fn begin(&self, key: &str, message: Option<&str>) -> LoadingGuard {
        self.set_loading(key, true, message);
        LoadingGuard {
            tracker: self.clone(),
            key: key.to_string(),
        }
    }

    /// Runs a future with `key` marked as loading.
    ///
    /// The key is cleared when the future completes, and also when it is
    /// dropped before completing.
    pub async fn with_loading<F, T>(&self, key: &str, message: Option<&str>, operation: F) -> T
    where
        F: Future<Output = T>,
    {
        let _guard = self.begin(key, message);
        operation.await
    }
}

/// Clears its key from the tracker when dropped.
#[derive(Debug)]
pub struct LoadingGuard {
    tracker: LoadingTracker,
    key: String,
}

impl LoadingGuard {
    /// Returns the key this guard holds.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.tracker.set_loading(&self.key, false, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear_key() {
        let tracker = LoadingTracker::new();
        tracker.set_loading("builds", true, Some("Henter builds"));
        assert!(tracker.is_loading("builds"));
        assert_eq!(tracker.loading_message("builds"), "Henter builds");

        tracker.set_loading("builds", false, None);
        assert!(!tracker.is_loading("builds"));
        assert_eq!(tracker.loading_message("builds"), DEFAULT_MESSAGE);
        assert!(!tracker.has_any_loading());
    }

    #[test]
    fn test_global_flag_is_tracked_under_key() {
        let tracker = LoadingTracker::new();
        tracker.set_global_loading(true, None);
        assert!(tracker.is_global_loading());
        assert!(tracker.is_loading(GLOBAL_KEY));
        assert!(tracker.has_any_loading());

        tracker.set_global_loading(false, None);
        assert!(!tracker.has_any_loading());
    }

    #[test]
    fn test_clones_share_state() {
        let tracker = LoadingTracker::new();
        let other = tracker.clone();
        other.set_loading("auth", true, None);
        assert!(tracker.is_loading("auth"));
        tracker.clear_all();
        assert!(!other.has_any_loading());
    }

    #[test]
    fn test_guard_clears_on_drop() {
        let tracker = LoadingTracker::new();
        {
            let guard = tracker.begin("save", None);
            assert_eq!(guard.key(), "save");
            assert!(tracker.is_loading("save"));
        }
        assert!(!tracker.is_loading("save"));
    }

    #[test]
    fn test_guard_clears_on_panic() {
        let tracker = LoadingTracker::new();
        let inner = tracker.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _guard = inner.begin("explode", None);
            panic!("boom");
        }));
        assert!(result.is_err());
        assert!(!tracker.is_loading("explode"));
    }
}
