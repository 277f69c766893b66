// Rust guideline compliant 2026-10-18

//! A [`DocumentStore`] over local collections.
//!
//! [`LocalStore`] keeps each collection behind the [`Collection`] trait, so
//! the same store logic runs over memory (see [`crate::memory`]) or JSONL
//! files (see [`crate::file_store`]). Change notifications are in-process.

use crate::error::Result;
use crate::store::{DocumentStore, Listener, ListenerHub, Subscription};
use crate::time::{system_clock, Clock};
use buildboard_core::identity::{generate_unique_id, BUILD_PREFIX, RESOURCE_PREFIX};
use buildboard_core::{
    Build, BuildDraft, Document, Error as CoreError, Resource, ResourceDraft, UserPreferences,
};
use std::cmp::Reverse;
use std::sync::Arc;

/// Persistence for one collection of documents.
pub trait Collection<T>: Send + Sync {
    /// Loads every document.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read.
    fn load_all(&self) -> buildboard_core::Result<Vec<T>>;

    /// Inserts or replaces a document by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is invalid or the write fails.
    fn upsert(&self, document: &T) -> buildboard_core::Result<()>;

    /// Removes a document by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID, or any write error.
    fn remove(&self, id: &str) -> buildboard_core::Result<()>;
}

/// Document store over three local collections.
pub struct LocalStore {
    builds: Box<dyn Collection<Build>>,
    resources: Box<dyn Collection<Resource>>,
    preferences: Box<dyn Collection<UserPreferences>>,
    build_listeners: ListenerHub<Vec<Build>>,
    resource_listeners: ListenerHub<Vec<Resource>>,
    preference_listeners: ListenerHub<UserPreferences>,
    clock: Clock,
}

impl LocalStore {
    /// Creates a store over the given collections, using the system clock.
    pub fn new(
        builds: Box<dyn Collection<Build>>,
        resources: Box<dyn Collection<Resource>>,
        preferences: Box<dyn Collection<UserPreferences>>,
    ) -> Self {
        Self {
            builds,
            resources,
            preferences,
            build_listeners: ListenerHub::new(),
            resource_listeners: ListenerHub::new(),
            preference_listeners: ListenerHub::new(),
            clock: system_clock(),
        }
    }

    /// Replaces the clock used to stamp writes.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    fn now(&self) -> Result<i64> {
        (self.clock)()
    }

    fn find_build(&self, id: &str) -> Result<Build> {
        self.builds
            .load_all()?
            .into_iter()
            .find(|build| build.id == id)
            .ok_or_else(|| CoreError::NotFound(id.to_string()).into())
    }

    fn find_resource(&self, id: &str) -> Result<Resource> {
        self.resources
            .load_all()?
            .into_iter()
            .find(|resource| resource.id == id)
            .ok_or_else(|| CoreError::NotFound(id.to_string()).into())
    }

    fn notify_builds(&self, user_id: &str) {
        if self.build_listeners.listeners(user_id).is_empty() {
            return;
        }
        let builds = self.user_builds(user_id).unwrap_or_else(|e| {
            tracing::error!(user_id, error = %e, "error listening to builds");
            Vec::new()
        });
        self.build_listeners.emit(user_id, builds);
    }

    fn notify_resources(&self, user_id: &str) {
        if self.resource_listeners.listeners(user_id).is_empty() {
            return;
        }
        let resources = self.user_resources(user_id).unwrap_or_else(|e| {
            tracing::error!(user_id, error = %e, "error listening to resources");
            Vec::new()
        });
        self.resource_listeners.emit(user_id, resources);
    }

    fn notify_preferences(&self, user_id: &str) {
        if self.preference_listeners.listeners(user_id).is_empty() {
            return;
        }
        let preferences = self.preferences(user_id).unwrap_or_else(|e| {
            tracing::error!(user_id, error = %e, "error listening to user preferences");
            UserPreferences::for_user(user_id)
        });
        self.preference_listeners.emit(user_id, preferences);
    }
}

/// Keeps the documents of one user, newest first.
fn owned_by<T: Document>(documents: Vec<T>, user_id: &str) -> Vec<T> {
    let mut owned: Vec<T> = documents
        .into_iter()
        .filter(|document| document.user_id() == user_id)
        .collect();
    owned.sort_by_key(|document| Reverse(document.updated_at()));
    owned
}

impl DocumentStore for LocalStore {
    fn add_build(&self, user_id: &str, draft: BuildDraft) -> Result<Build> {
        let now = self.now()?;
        let existing = self.builds.load_all()?;
        let seed = format!("{user_id}:{}", draft.build_name);
        let id = generate_unique_id(BUILD_PREFIX, &seed, now, |candidate| {
            existing.iter().any(|build| build.id == candidate)
        });

        let build = Build::from_draft(id, user_id.to_string(), draft, now)?;
        self.builds.upsert(&build)?;
        tracing::debug!(id = %build.id, user_id, "added build");
        self.notify_builds(user_id);
        Ok(build)
    }

    fn update_build(&self, id: &str, draft: BuildDraft) -> Result<Build> {
        let now = self.now()?;
        let mut build = self.find_build(id)?;
        build.apply(draft, now)?;
        self.builds.upsert(&build)?;
        self.notify_builds(&build.user_id);
        Ok(build)
    }

    fn delete_build(&self, id: &str) -> Result<()> {
        let build = self.find_build(id)?;
        self.builds.remove(id)?;
        tracing::debug!(id, "deleted build");
        self.notify_builds(&build.user_id);
        Ok(())
    }

    fn touch_build(&self, id: &str) -> Result<()> {
        let now = self.now()?;
        let mut build = self.find_build(id)?;
        build.last_opened = Some(now);
        self.builds.upsert(&build)?;
        self.notify_builds(&build.user_id);
        Ok(())
    }

    fn user_builds(&self, user_id: &str) -> Result<Vec<Build>> {
        Ok(owned_by(self.builds.load_all()?, user_id))
    }

    fn subscribe_builds(&self, user_id: &str, listener: Listener<Vec<Build>>) -> Subscription {
        let subscription = self.build_listeners.subscribe(user_id, Arc::clone(&listener));
        let initial = self.user_builds(user_id).unwrap_or_else(|e| {
            tracing::error!(user_id, error = %e, "error listening to builds");
            Vec::new()
        });
        listener(initial);
        tracing::debug!(user_id, "subscribed to builds");
        subscription
    }

    fn add_resource(&self, user_id: &str, draft: ResourceDraft) -> Result<Resource> {
        let now = self.now()?;
        let existing = self.resources.load_all()?;
        let seed = format!("{user_id}:{}", draft.url);
        let id = generate_unique_id(RESOURCE_PREFIX, &seed, now, |candidate| {
            existing.iter().any(|resource| resource.id == candidate)
        });

        let resource = Resource::from_draft(id, user_id.to_string(), draft, now)?;
        self.resources.upsert(&resource)?;
        tracing::debug!(id = %resource.id, user_id, "added resource");
        self.notify_resources(user_id);
        Ok(resource)
    }

    fn update_resource(&self, id: &str, draft: ResourceDraft) -> Result<Resource> {
        let now = self.now()?;
        let mut resource = self.find_resource(id)?;
        resource.apply(draft, now)?;
        self.resources.upsert(&resource)?;
        self.notify_resources(&resource.user_id);
        Ok(resource)
    }

    fn delete_resource(&self, id: &str) -> Result<()> {
        let resource = self.find_resource(id)?;
        self.resources.remove(id)?;
        tracing::debug!(id, "deleted resource");
        self.notify_resources(&resource.user_id);
        Ok(())
    }

    fn user_resources(&self, user_id: &str) -> Result<Vec<Resource>> {
        Ok(owned_by(self.resources.load_all()?, user_id))
    }

    fn subscribe_resources(
        &self,
        user_id: &str,
        listener: Listener<Vec<Resource>>,
    ) -> Subscription {
        let subscription = self.resource_listeners.subscribe(user_id, Arc::clone(&listener));
        let initial = self.user_resources(user_id).unwrap_or_else(|e| {
            tracing::error!(user_id, error = %e, "error listening to resources");
            Vec::new()
        });
        listener(initial);
        tracing::debug!(user_id, "subscribed to resources");
        subscription
    }

    fn preferences(&self, user_id: &str) -> Result<UserPreferences> {
        Ok(self
            .preferences
            .load_all()?
            .into_iter()
            .find(|preferences| preferences.user_id == user_id)
            .unwrap_or_else(|| UserPreferences::for_user(user_id)))
    }

    fn update_preferences(
        &self,
        user_id: &str,
        hidden_resource_ids: Vec<String>,
    ) -> Result<UserPreferences> {
        let preferences = UserPreferences {
            user_id: user_id.to_string(),
            hidden_resource_ids,
            updated_at: self.now()?,
        };
        self.preferences.upsert(&preferences)?;
        self.notify_preferences(user_id);
        Ok(preferences)
    }

    fn subscribe_preferences(
        &self,
        user_id: &str,
        listener: Listener<UserPreferences>,
    ) -> Subscription {
        let subscription = self.preference_listeners.subscribe(user_id, Arc::clone(&listener));
        let initial = self.preferences(user_id).unwrap_or_else(|e| {
            tracing::error!(user_id, error = %e, "error listening to user preferences");
            UserPreferences::for_user(user_id)
        });
        listener(initial);
        tracing::debug!(user_id, "subscribed to user preferences");
        subscription
    }
}
