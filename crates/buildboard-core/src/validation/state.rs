// Rust guideline compliant 2026-10-18

//! Observable per-form error state.

use super::form::{evaluate, FormRules};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::fmt;

/// Field name to first error message, in form order.
///
/// A missing key means the field is currently valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(String, String)>,
}

impl FieldErrors {
    /// Records the message of a field, replacing any previous one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some((_, slot)) => *slot = message,
            None => self.entries.push((field, message)),
        }
    }

    /// Removes the message of a field, returning it if present.
    pub fn remove(&mut self, field: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(name, _)| name == field)?;
        Some(self.entries.remove(pos).1)
    }

    /// Returns the message of a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }

    /// Returns true if the field has a message.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Iterates `(field, message)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }

    /// Returns the number of fields with a message.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no field has a message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, message) in &self.entries {
            map.serialize_entry(field, message)?;
        }
        map.end()
    }
}

/// Identifies a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn(&FieldErrors) + Send>;

/// Error state owned by one form.
///
/// The state is either valid (no messages) or invalid (at least one). It only
/// changes through [`validate`](Self::validate),
/// [`clear_field_error`](Self::clear_field_error) and
/// [`clear_errors`](Self::clear_errors); each change bumps the version and
/// notifies listeners with the new messages.
#[derive(Default)]
pub struct ErrorState {
    errors: FieldErrors,
    version: u64,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl ErrorState {
    /// Creates an empty, valid error state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a whole form and replaces the error state with the result.
    ///
    /// # Arguments
    ///
    /// * `form_data` - Form values as a JSON object
    /// * `rules` - The form's rule set
    ///
    /// # Returns
    ///
    /// True if every field passed.
    pub fn validate(&mut self, form_data: &Value, rules: &FormRules) -> bool {
        self.errors = evaluate(form_data, rules);
        self.changed();
        self.errors.is_empty()
    }

    /// Removes the error of one field. Listeners are only notified if the
    /// field had an error.
    pub fn clear_field_error(&mut self, field: &str) {
        if self.errors.remove(field).is_some() {
            self.changed();
        }
    }

    /// Removes every error.
    pub fn clear_errors(&mut self) {
        self.errors = FieldErrors::default();
        self.changed();
    }

    /// Returns true if the field currently has an error.
    #[must_use]
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains(field)
    }

    /// Returns the field's error message, or an empty string.
    #[must_use]
    pub fn get_error(&self, field: &str) -> &str {
        self.errors.get(field).unwrap_or("")
    }

    /// Returns true if no field has an error.
    #[must_use]
    pub fn is_form_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the current messages.
    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Returns the number of changes made so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Registers a listener called after every change.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&FieldErrors) + Send + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn changed(&mut self) {
        self.version += 1;
        for (_, listener) in &self.listeners {
            listener(&self.errors);
        }
    }
}

impl fmt::Debug for ErrorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorState")
            .field("errors", &self.errors)
            .field("version", &self.version)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
