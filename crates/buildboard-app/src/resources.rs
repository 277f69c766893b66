// Rust guideline compliant 2026-10-18

//! Resource links, hidden resources and the resource modal.

use crate::error::{AppError, Result};
use crate::store::{DocumentStore, Subscription};
use buildboard_core::validation::{evaluate, form_data};
use buildboard_core::{
    resource_validation_rules, visible_by_category, AuthUser, Resource, ResourceCategory,
    ResourceDraft, UserPreferences,
};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct ResourcesView {
    user_id: Option<String>,
    custom: Vec<Resource>,
    hidden_ids: Vec<String>,
    show_modal: bool,
    editing: Option<Resource>,
    loading: bool,
}

#[derive(Default)]
struct Subscriptions {
    resources: Option<Subscription>,
    preferences: Option<Subscription>,
}

/// The signed-in user's custom resources and hidden resource IDs.
///
/// Hidden IDs live in the user's preferences document, so they follow the
/// user across devices. Clones share state.
#[derive(Clone)]
pub struct ResourcesState {
    store: Arc<dyn DocumentStore>,
    view: Arc<Mutex<ResourcesView>>,
    subscriptions: Arc<Mutex<Subscriptions>>,
}

impl ResourcesState {
    /// Creates an empty resources state.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            view: Arc::new(Mutex::new(ResourcesView::default())),
            subscriptions: Arc::new(Mutex::new(Subscriptions::default())),
        }
    }

    fn view(&self) -> MutexGuard<'_, ResourcesView> {
        self.view.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn take_subscriptions(&self) -> Subscriptions {
        let mut slot = self
            .subscriptions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::take(&mut *slot)
    }

    /// Returns the user's own resources, newest first.
    #[must_use]
    pub fn custom_resources(&self) -> Vec<Resource> {
        self.view().custom.clone()
    }

    /// Returns the IDs the user has hidden.
    #[must_use]
    pub fn hidden_resource_ids(&self) -> Vec<String> {
        self.view().hidden_ids.clone()
    }

    /// Returns true until the first resource list has arrived.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.view().loading
    }

    /// Returns true while the modal is open.
    #[must_use]
    pub fn show_modal(&self) -> bool {
        self.view().show_modal
    }

    /// Returns the resource being edited, if the modal is in edit mode.
    #[must_use]
    pub fn editing(&self) -> Option<Resource> {
        self.view().editing.clone()
    }

    /// Opens the modal for a new resource.
    pub fn open_add_modal(&self) {
        let mut view = self.view();
        view.editing = None;
        view.show_modal = true;
    }

    /// Opens the modal for an existing resource.
    pub fn open_edit_modal(&self, resource: &Resource) {
        let mut view = self.view();
        view.editing = Some(resource.clone());
        view.show_modal = true;
    }

    /// Closes the modal and leaves edit mode.
    pub fn close_modal(&self) {
        let mut view = self.view();
        view.show_modal = false;
        view.editing = None;
    }

    /// Subscribes to the resources and preferences of `user`, replacing any
    /// previous subscriptions. With no user everything is cleared.
    pub fn initialize_subscriptions(&self, user: Option<&AuthUser>) {
        self.cleanup_subscriptions();
        let Some(user) = user else {
            return;
        };

        {
            let mut view = self.view();
            view.user_id = Some(user.uid.clone());
            view.loading = true;
        }

        let view = Arc::clone(&self.view);
        let resources = self.store.subscribe_resources(
            &user.uid,
            Arc::new(move |custom: Vec<Resource>| {
                let mut view = view.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                view.custom = custom;
                view.loading = false;
            }),
        );

        let view = Arc::clone(&self.view);
        let preferences = self.store.subscribe_preferences(
            &user.uid,
            Arc::new(move |preferences: UserPreferences| {
                view.lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .hidden_ids = preferences.hidden_resource_ids;
            }),
        );

        let mut slot = self
            .subscriptions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        slot.resources = Some(resources);
        slot.preferences = Some(preferences);
    }

    /// Drops the subscriptions and clears all resource state.
    pub fn cleanup_subscriptions(&self) {
        drop(self.take_subscriptions());
        let mut view = self.view();
        view.user_id = None;
        view.custom.clear();
        view.hidden_ids.clear();
        view.loading = false;
    }

    fn store_hidden(&self, hidden_ids: Vec<String>) -> Result<()> {
        let user_id = self.view().user_id.clone().ok_or(AppError::NotSignedIn)?;
        self.store.update_preferences(&user_id, hidden_ids.clone())?;
        self.view().hidden_ids = hidden_ids;
        Ok(())
    }

    /// Hides a resource. Hiding an already hidden resource does nothing.
    ///
    /// # Errors
    ///
    /// Returns `NotSignedIn` without a user, or any store error.
    pub fn hide(&self, resource_id: &str) -> Result<()> {
        let mut hidden = self.hidden_resource_ids();
        if hidden.iter().any(|id| id == resource_id) {
            return Ok(());
        }
        hidden.push(resource_id.to_string());
        self.store_hidden(hidden)
    }

    /// Shows every hidden resource again.
    ///
    /// # Errors
    ///
    /// Returns `NotSignedIn` without a user, or any store error.
    pub fn restore_all(&self) -> Result<()> {
        self.store_hidden(Vec::new())
    }

    /// Deletes a custom resource. Failures are logged, not returned.
    ///
    /// # Returns
    ///
    /// True if the resource was deleted.
    pub fn delete(&self, resource_id: &str) -> bool {
        match self.store.delete_resource(resource_id) {
            Ok(()) => true,
            Err(error) => {
                tracing::error!(resource_id, %error, "error deleting resource");
                false
            }
        }
    }

    /// Validates and saves the modal's draft.
    ///
    /// Creates a resource in add mode and updates the edited resource
    /// otherwise. The modal closes on success.
    ///
    /// # Errors
    ///
    /// Returns `Validation` with the per-field messages if the draft fails
    /// the resource rule set, `InvalidInput` when editing a built-in
    /// resource, `NotSignedIn` without a user, or any store error.
    pub fn save(&self, draft: ResourceDraft) -> Result<Resource> {
        let errors = evaluate(&form_data(&draft)?, resource_validation_rules());
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let (user_id, editing) = {
            let view = self.view();
            (view.user_id.clone(), view.editing.clone())
        };
        let user_id = user_id.ok_or(AppError::NotSignedIn)?;

        let saved = match editing {
            Some(resource) if resource.is_default => {
                return Err(AppError::InvalidInput(format!(
                    "Built-in resource {} cannot be edited",
                    resource.id
                )))
            }
            Some(resource) => self.store.update_resource(&resource.id, draft)?,
            None => self.store.add_resource(&user_id, draft)?,
        };
        self.close_modal();
        Ok(saved)
    }

    /// Returns built-in and custom resources minus hidden ones, grouped by
    /// category in display order.
    #[must_use]
    pub fn visible_resources(&self) -> Vec<(ResourceCategory, Vec<Resource>)> {
        let view = self.view();
        visible_by_category(&view.custom, &view.hidden_ids)
    }
}
