// Rust guideline compliant 2026-10-18

//! Property-based tests for the validation engine.
//!
//! These tests check the rule evaluation laws over arbitrary field values and
//! rule lists: every failure is collected, the first failure of a field wins,
//! and the error state accessors agree with each other.

use buildboard_core::validation::{evaluate, validate_field, ErrorState, FieldRules, FormRules};
use buildboard_core::RuleEntry;
use proptest::prelude::*;
use serde_json::{json, Map, Value};

/// Generates entries that always resolve.
fn arb_entry() -> impl Strategy<Value = RuleEntry> {
    prop_oneof![
        Just(RuleEntry::named("required")),
        Just(RuleEntry::named("url")),
        Just(RuleEntry::named("pobUrl")),
        Just(RuleEntry::named("email")),
        Just(RuleEntry::named("characterName")),
        Just(RuleEntry::named("league")),
        (0usize..30).prop_map(|n| RuleEntry::param("minLength", n)),
        (0usize..30).prop_map(|n| RuleEntry::param("maxLength", n)),
    ]
}

/// Generates field values, mostly strings with the odd non-string.
fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => "[ a-zA-Z0-9_.:/@]{0,40}".prop_map(Value::String),
        1 => Just(Value::Null),
        1 => any::<bool>().prop_map(Value::Bool),
        1 => any::<i32>().prop_map(|n| json!(n)),
    ]
}

/// Generates a form of up to six fields named f0..f5.
fn arb_form() -> impl Strategy<Value = (FormRules, Value)> {
    prop::collection::vec(
        (prop::collection::vec(arb_entry(), 0..5), arb_value()),
        0..6,
    )
    .prop_map(|fields| {
        let mut rules = FormRules::new();
        let mut data = Map::new();
        for (index, (entries, value)) in fields.into_iter().enumerate() {
            let name = format!("f{index}");
            rules.insert(name.clone(), FieldRules::unnamed(entries));
            data.insert(name, value);
        }
        (rules, Value::Object(data))
    })
}

proptest! {
    /// A field reports exactly one message per failing rule, in rule order.
    #[test]
    fn prop_field_collects_every_failure(
        entries in prop::collection::vec(arb_entry(), 0..8),
        value in arb_value(),
    ) {
        let expected: Vec<String> = entries
            .iter()
            .filter_map(|entry| {
                let (rule, _) = entry.resolve().ok()?;
                rule(&value, "Felt")
            })
            .collect();

        let messages = validate_field("field", &value, &entries, Some("Felt"));
        prop_assert_eq!(messages, expected);
    }

    /// Rules never panic on any JSON value.
    #[test]
    fn prop_rules_are_total(entry in arb_entry(), value in arb_value()) {
        let _ = validate_field("field", &value, &[entry], None);
    }

    /// A form is valid exactly when every field has no failures, and each
    /// recorded error is the first failure of its field.
    #[test]
    fn prop_first_error_wins((rules, data) in arb_form()) {
        let mut state = ErrorState::new();
        let valid = state.validate(&data, &rules);

        let mut all_clean = true;
        for (name, field) in rules.iter() {
            let messages = validate_field(
                name,
                data.get(name).unwrap_or(&Value::Null),
                &field.rules,
                field.display_name.as_deref(),
            );
            all_clean &= messages.is_empty();
            match messages.first() {
                Some(first) => prop_assert_eq!(state.get_error(name), first.as_str()),
                None => prop_assert!(!state.has_error(name)),
            }
        }

        prop_assert_eq!(valid, all_clean);
        prop_assert_eq!(valid, state.is_form_valid());
    }

    /// Validating twice gives the same result, and the error state is fully
    /// replaced rather than merged.
    #[test]
    fn prop_validate_is_idempotent((rules, data) in arb_form()) {
        let mut state = ErrorState::new();
        let first = state.validate(&data, &rules);
        let errors = state.errors().clone();
        let second = state.validate(&data, &rules);
        prop_assert_eq!(first, second);
        prop_assert_eq!(state.errors(), &errors);
        prop_assert_eq!(state.errors(), &evaluate(&data, &rules));
    }

    /// Clearing one field touches only that field; clearing all empties the
    /// state.
    #[test]
    fn prop_clear_field_error((rules, data) in arb_form(), pick in 0usize..6) {
        let mut state = ErrorState::new();
        state.validate(&data, &rules);
        let before = state.errors().clone();
        let target = format!("f{pick}");

        state.clear_field_error(&target);
        prop_assert!(!state.has_error(&target));
        prop_assert_eq!(state.get_error(&target), "");
        for (name, message) in before.iter().filter(|(name, _)| *name != target) {
            prop_assert_eq!(state.get_error(name), message);
        }

        state.clear_errors();
        prop_assert!(state.is_form_valid());
        prop_assert!(state.errors().is_empty());
    }
}
