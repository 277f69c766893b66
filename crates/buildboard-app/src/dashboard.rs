// Rust guideline compliant 2026-10-18

//! The dashboard: every service wired to the auth session.

use crate::auth::AuthSession;
use crate::builds::BuildsState;
use crate::resources::ResourcesState;
use crate::store::{AuthProvider, DocumentStore};
use crate::tab::TabState;
use buildboard_core::{Build, Config, LoadingTracker, SearchState};
use std::sync::Arc;

/// Owns the dashboard services.
///
/// After [`start`](Self::start), signing in subscribes the builds and
/// resources of the new user and signing out tears those subscriptions down.
pub struct Dashboard {
    auth: AuthSession,
    builds: BuildsState,
    resources: ResourcesState,
    tab: TabState,
    search: SearchState,
    loading: LoadingTracker,
}

impl Dashboard {
    /// Creates the services over the given collaborators.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        provider: Arc<dyn AuthProvider>,
        config: &Config,
    ) -> Self {
        let loading = LoadingTracker::new();
        Self {
            auth: AuthSession::new(provider, loading.clone()),
            builds: BuildsState::new(Arc::clone(&store), loading.clone()),
            resources: ResourcesState::new(store),
            tab: TabState::new(config.default_tab),
            search: SearchState::new(config.debounce()),
            loading,
        }
    }

    /// Starts following the auth state.
    pub fn start(&mut self) {
        let builds = self.builds.clone();
        let resources = self.resources.clone();
        self.auth.initialize(move |user| {
            match user {
                Some(user) => tracing::debug!(uid = %user.uid, "signed in"),
                None => tracing::debug!("signed out"),
            }
            builds.initialize_subscription(user);
            resources.initialize_subscriptions(user);
        });
    }

    /// Stops following the auth state and drops all subscriptions.
    pub fn shutdown(&mut self) {
        self.auth.cleanup();
        self.builds.cleanup_subscription();
        self.resources.cleanup_subscriptions();
        self.search.cleanup();
    }

    /// Returns the auth session.
    #[must_use]
    pub fn auth(&self) -> &AuthSession {
        &self.auth
    }

    /// Returns the builds state.
    #[must_use]
    pub fn builds(&self) -> &BuildsState {
        &self.builds
    }

    /// Returns the resources state.
    #[must_use]
    pub fn resources(&self) -> &ResourcesState {
        &self.resources
    }

    /// Returns the tab state.
    #[must_use]
    pub fn tab(&self) -> &TabState {
        &self.tab
    }

    /// Returns the tab state for switching tabs.
    pub fn tab_mut(&mut self) -> &mut TabState {
        &mut self.tab
    }

    /// Returns the search state.
    #[must_use]
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Returns the search state for typing and filtering.
    pub fn search_mut(&mut self) -> &mut SearchState {
        &mut self.search
    }

    /// Returns the shared loading tracker.
    #[must_use]
    pub fn loading(&self) -> &LoadingTracker {
        &self.loading
    }

    /// Returns the builds passing the current filter and debounced query.
    #[must_use]
    pub fn visible_builds(&self) -> Vec<Build> {
        self.search.apply(&self.builds.builds())
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        self.shutdown();
    }
}
