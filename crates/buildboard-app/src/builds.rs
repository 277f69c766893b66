// Rust guideline compliant 2026-10-18

//! Build list and build modal state.

use crate::error::{AppError, Result};
use crate::store::{DocumentStore, Subscription};
use buildboard_core::validation::{evaluate, form_data};
use buildboard_core::{build_validation_rules, AuthUser, Build, BuildDraft, LoadingTracker};
use std::sync::{Arc, Mutex, MutexGuard};

/// Loading key held while a build is saved.
pub const SAVE_KEY: &str = "save-build";

#[derive(Debug, Default)]
struct BuildsView {
    user_id: Option<String>,
    builds: Vec<Build>,
    show_modal: bool,
    editing: Option<Build>,
}

/// The signed-in user's builds plus the add/edit modal.
///
/// Clones share state, so a clone can be moved into an auth callback.
#[derive(Clone)]
pub struct BuildsState {
    store: Arc<dyn DocumentStore>,
    loading: LoadingTracker,
    view: Arc<Mutex<BuildsView>>,
    subscription: Arc<Mutex<Option<Subscription>>>,
}

impl BuildsState {
    /// Creates an empty builds state.
    pub fn new(store: Arc<dyn DocumentStore>, loading: LoadingTracker) -> Self {
        Self {
            store,
            loading,
            view: Arc::new(Mutex::new(BuildsView::default())),
            subscription: Arc::new(Mutex::new(None)),
        }
    }

    fn view(&self) -> MutexGuard<'_, BuildsView> {
        self.view.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn replace_subscription(&self, next: Option<Subscription>) {
        let previous = {
            let mut slot = self
                .subscription
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            std::mem::replace(&mut *slot, next)
        };
        drop(previous);
    }

    /// Returns the current builds, newest first.
    #[must_use]
    pub fn builds(&self) -> Vec<Build> {
        self.view().builds.clone()
    }

    /// Returns true while the modal is open.
    #[must_use]
    pub fn show_modal(&self) -> bool {
        self.view().show_modal
    }

    /// Returns the build being edited, if the modal is in edit mode.
    #[must_use]
    pub fn editing(&self) -> Option<Build> {
        self.view().editing.clone()
    }

    /// Opens the modal for a new build.
    pub fn open_add_modal(&self) {
        let mut view = self.view();
        view.editing = None;
        view.show_modal = true;
    }

    /// Opens the modal for an existing build and records it as opened.
    ///
    /// # Errors
    ///
    /// Returns an error if the last-opened time cannot be recorded; the
    /// modal stays open.
    pub fn open_edit_modal(&self, build: &Build) -> Result<()> {
        {
            let mut view = self.view();
            view.editing = Some(build.clone());
            view.show_modal = true;
        }
        self.store.touch_build(&build.id)
    }

    /// Closes the modal and leaves edit mode.
    pub fn close_modal(&self) {
        let mut view = self.view();
        view.show_modal = false;
        view.editing = None;
    }

    /// Records that one of a build's links was followed.
    ///
    /// # Errors
    ///
    /// Returns an error if the last-opened time cannot be recorded.
    pub fn link_clicked(&self, build_id: &str) -> Result<()> {
        self.store.touch_build(build_id)
    }

    /// Subscribes to the builds of `user`, replacing any previous
    /// subscription. With no user the list is cleared.
    pub fn initialize_subscription(&self, user: Option<&AuthUser>) {
        self.replace_subscription(None);

        let Some(user) = user else {
            let mut view = self.view();
            view.user_id = None;
            view.builds.clear();
            return;
        };

        self.view().user_id = Some(user.uid.clone());
        let view = Arc::clone(&self.view);
        let subscription = self.store.subscribe_builds(
            &user.uid,
            Arc::new(move |builds: Vec<Build>| {
                view.lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .builds = builds;
            }),
        );
        self.replace_subscription(Some(subscription));
    }

    /// Drops the subscription and clears the list.
    pub fn cleanup_subscription(&self) {
        self.replace_subscription(None);
        let mut view = self.view();
        view.user_id = None;
        view.builds.clear();
    }

    /// Validates and saves the modal's draft.
    ///
    /// Creates a build when the modal is in add mode and updates the edited
    /// build otherwise. The modal closes on success.
    ///
    /// # Errors
    ///
    /// Returns `Validation` with the per-field messages if the draft fails
    /// the build rule set, `NotSignedIn` without a user, or any store error.
    pub fn save(&self, draft: BuildDraft) -> Result<Build> {
        let errors = evaluate(&form_data(&draft)?, build_validation_rules());
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let (user_id, editing) = {
            let view = self.view();
            (view.user_id.clone(), view.editing.clone())
        };
        let user_id = user_id.ok_or(AppError::NotSignedIn)?;

        let _guard = self.loading.begin(SAVE_KEY, Some("Gemmer build..."));
        let saved = match editing {
            Some(build) => self.store.update_build(&build.id, draft)?,
            None => self.store.add_build(&user_id, draft)?,
        };
        self.close_modal();
        Ok(saved)
    }

    /// Deletes a build, closing the modal if it was being edited.
    ///
    /// # Errors
    ///
    /// Returns any store error.
    pub fn delete(&self, build_id: &str) -> Result<()> {
        self.store.delete_build(build_id)?;
        let editing_deleted = self
            .view()
            .editing
            .as_ref()
            .is_some_and(|build| build.id == build_id);
        if editing_deleted {
            self.close_modal();
        }
        Ok(())
    }
}
