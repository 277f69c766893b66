// Rust guideline compliant 2026-10-18

//! Form rule sets and whole-form evaluation.

use super::field::{validate_field, RuleConfigIssue, RuleEntry};
use super::state::FieldErrors;
use serde::Serialize;
use serde_json::Value;
use std::sync::LazyLock;

/// Rules for one form field.
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    /// Label used in messages; defaults to the field key.
    pub display_name: Option<String>,
    /// Rule list, evaluated in order.
    pub rules: Vec<RuleEntry>,
}

impl FieldRules {
    /// Creates field rules with a display name.
    pub fn new(display_name: impl Into<String>, rules: Vec<RuleEntry>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            rules,
        }
    }

    /// Creates field rules labelled by the field key itself.
    #[must_use]
    pub fn unnamed(rules: Vec<RuleEntry>) -> Self {
        Self {
            display_name: None,
            rules,
        }
    }
}

/// The validation contract of one form type, keyed by field name.
///
/// Fields keep their insertion order, which is the order they are evaluated
/// and reported in.
#[derive(Debug, Clone, Default)]
pub struct FormRules {
    fields: Vec<(String, FieldRules)>,
}

impl FormRules {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the rules of a field, builder style.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, rules: FieldRules) -> Self {
        self.insert(name, rules);
        self
    }

    /// Adds or replaces the rules of a field. A replaced field keeps its
    /// original position.
    pub fn insert(&mut self, name: impl Into<String>, rules: FieldRules) {
        let name = name.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = rules,
            None => self.fields.push((name, rules)),
        }
    }

    /// Returns the rules of a field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldRules> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, rules)| rules)
    }

    /// Iterates fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRules)> {
        self.fields.iter().map(|(name, rules)| (name.as_str(), rules))
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field has rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Reports every rule entry that evaluation would skip.
    ///
    /// Intended for tests and debug assertions over static rule sets.
    #[must_use]
    pub fn lint(&self) -> Vec<(String, RuleConfigIssue)> {
        self.fields
            .iter()
            .flat_map(|(name, field)| {
                field
                    .rules
                    .iter()
                    .filter_map(move |entry| entry.resolve().err().map(|issue| (name.clone(), issue)))
            })
            .collect()
    }
}

/// Evaluates a form against a rule set without touching any error state.
///
/// `form_data` should be a JSON object; any other value is treated as a form
/// with every field missing. Only the first failure of each field is kept.
#[must_use]
pub fn evaluate(form_data: &Value, rules: &FormRules) -> FieldErrors {
    let mut errors = FieldErrors::default();

    for (name, field) in rules.iter() {
        let value = form_data.get(name).unwrap_or(&Value::Null);
        let messages = validate_field(name, value, &field.rules, field.display_name.as_deref());
        if let Some(first) = messages.into_iter().next() {
            errors.insert(name, first);
        }
    }

    errors
}

/// Serializes a draft into form data for [`evaluate`].
///
/// # Errors
///
/// Returns an error if the draft cannot be represented as JSON.
pub fn form_data<T: Serialize>(draft: &T) -> serde_json::Result<Value> {
    serde_json::to_value(draft)
}

static BUILD_RULES: LazyLock<FormRules> = LazyLock::new(|| {
    FormRules::new()
        .field(
            "buildName",
            FieldRules::new(
                "Build navn",
                vec![
                    "required".into(),
                    RuleEntry::param("minLength", 2),
                    RuleEntry::param("maxLength", 100),
                ],
            ),
        )
        .field("gameVersion", FieldRules::new("Spil", vec!["required".into()]))
        .field(
            "characterName",
            FieldRules::new("Character navn", vec!["characterName".into()]),
        )
        .field("league", FieldRules::new("League", vec!["league".into()]))
        .field("buildStatus", FieldRules::new("Status", vec!["required".into()]))
        .field(
            "pobLink",
            FieldRules::new("Path of Building link", vec!["pobUrl".into()]),
        )
        .field("guideLink", FieldRules::new("Guide link", vec!["url".into()]))
        .field(
            "notes",
            FieldRules::new("Noter", vec![RuleEntry::param("maxLength", 1000)]),
        )
});

static RESOURCE_RULES: LazyLock<FormRules> = LazyLock::new(|| {
    FormRules::new()
        .field(
            "title",
            FieldRules::new(
                "Titel",
                vec![
                    "required".into(),
                    RuleEntry::param("minLength", 2),
                    RuleEntry::param("maxLength", 100),
                ],
            ),
        )
        .field(
            "description",
            FieldRules::new(
                "Beskrivelse",
                vec![
                    "required".into(),
                    RuleEntry::param("minLength", 5),
                    RuleEntry::param("maxLength", 200),
                ],
            ),
        )
        .field("url", FieldRules::new("URL", vec!["required".into(), "url".into()]))
        .field("category", FieldRules::new("Kategori", vec!["required".into()]))
        .field("icon", FieldRules::new("Ikon", vec![RuleEntry::param("maxLength", 4)]))
});

/// Rule set for the build form.
#[must_use]
pub fn build_validation_rules() -> &'static FormRules {
    &BUILD_RULES
}

/// Rule set for the resource form.
#[must_use]
pub fn resource_validation_rules() -> &'static FormRules {
    &RESOURCE_RULES
}
