// Rust guideline compliant 2026-10-18

//! Scenario tests for form validation.
//!
//! These tests drive the built-in build and resource rule sets the way the
//! dashboard forms do.

use buildboard_core::validation::{form_data, rules, ErrorState, FieldRules, FormRules};
use buildboard_core::{
    build_validation_rules, resource_validation_rules, validate_field, BuildDraft, BuildStatus,
    GameVersion, ResourceCategory, ResourceDraft, RuleEntry,
};
use serde_json::json;
use std::sync::{Arc, Mutex};

fn valid_build() -> BuildDraft {
    BuildDraft {
        build_name: "Boneshatter Juggernaut".to_string(),
        game_version: Some(GameVersion::Poe1),
        character_name: Some("Smash_Things".to_string()),
        league: Some("Settlers".to_string()),
        build_status: Some(BuildStatus::Active),
        pob_link: Some("https://pobb.in/abc123".to_string()),
        guide_link: Some("https://maxroll.gg/poe/build-guides/boneshatter".to_string()),
        notes: Some("Needs a better chest".to_string()),
        ..BuildDraft::default()
    }
}

#[test]
fn test_built_in_rule_sets_lint_clean() {
    assert!(build_validation_rules().lint().is_empty());
    assert!(resource_validation_rules().lint().is_empty());
}

#[test]
fn test_required_on_empty_build_name() {
    let errors = validate_field("buildName", &json!(""), &["required".into()], Some("Build navn"));
    assert_eq!(errors, vec!["Build navn er påkrævet"]);
}

#[test]
fn test_max_length_passes_short_value() {
    let errors = validate_field(
        "buildName",
        &json!("AB"),
        &[RuleEntry::param("maxLength", 100)],
        Some("Build navn"),
    );
    assert!(errors.is_empty());
}

#[test]
fn test_pob_url_rejects_unknown_host() {
    let errors = validate_field(
        "pobLink",
        &json!("https://example.com"),
        &["pobUrl".into()],
        Some("Path of Building link"),
    );
    assert_eq!(
        errors,
        vec![
            "Path of Building link skal være et gyldigt Path of Building link (pobb.in, pastebin.com, etc.)"
        ]
    );
}

#[test]
fn test_character_name_rejects_spaces() {
    let errors = validate_field(
        "characterName",
        &json!("bad name!"),
        &["characterName".into()],
        Some("Character navn"),
    );
    assert_eq!(
        errors,
        vec!["Character navn må kun indeholde bogstaver, tal og underscore"]
    );
}

#[test]
fn test_partial_build_form_reports_only_failing_fields() {
    let mut state = ErrorState::new();
    let valid = state.validate(
        &json!({"buildName": "", "gameVersion": "poe1"}),
        build_validation_rules(),
    );

    assert!(!valid);
    assert_eq!(state.get_error("buildName"), "Build navn er påkrævet");
    assert!(!state.has_error("gameVersion"));
    assert!(state.has_error("buildStatus"));
    assert!(!state.has_error("pobLink"));
    assert!(!state.has_error("notes"));
}

#[test]
fn test_empty_rule_set_is_always_valid() {
    let mut state = ErrorState::new();
    assert!(state.validate(&json!({"anything": 12}), &FormRules::new()));
    assert!(state.is_form_valid());
}

#[test]
fn test_missing_fields_are_undefined() {
    let mut state = ErrorState::new();
    assert!(!state.validate(&json!({}), resource_validation_rules()));
    let fields: Vec<&str> = state.errors().iter().map(|(field, _)| field).collect();
    assert_eq!(fields, vec!["title", "description", "url", "category"]);
    assert!(!state.has_error("icon"));
}

#[test]
fn test_first_error_per_field_wins() {
    let form = FormRules::new().field(
        "title",
        FieldRules::new(
            "Titel",
            vec![
                RuleEntry::param("minLength", 2),
                RuleEntry::with_message(rules::max_length(0), "for lang"),
            ],
        ),
    );
    let mut state = ErrorState::new();
    state.validate(&json!({"title": "x"}), &form);
    assert_eq!(state.get_error("title"), "Titel skal være mindst 2 tegn");
}

#[test]
fn test_serialized_drafts_validate() {
    let mut state = ErrorState::new();
    let data = form_data(&valid_build()).expect("draft serializes");
    assert!(state.validate(&data, build_validation_rules()), "{:?}", state.errors());

    let resource = ResourceDraft {
        title: "Craft of Exile".to_string(),
        description: "Crafting simulator".to_string(),
        url: "https://www.craftofexile.com".to_string(),
        icon: Some("🧪".to_string()),
        category: Some(ResourceCategory::Programs),
        kind: Some("tool".to_string()),
    };
    let data = form_data(&resource).expect("draft serializes");
    assert!(state.validate(&data, resource_validation_rules()), "{:?}", state.errors());
}

#[test]
fn test_resource_url_must_be_http() {
    let mut state = ErrorState::new();
    let data = json!({
        "title": "Local notes",
        "description": "Notes on disk",
        "url": "ftp://files.example.com",
        "category": "Community",
    });
    assert!(!state.validate(&data, resource_validation_rules()));
    assert_eq!(
        state.get_error("url"),
        "URL skal være en gyldig URL (http eller https)"
    );
}

#[test]
fn test_unknown_rule_is_skipped() {
    let entries = vec![RuleEntry::named("nonexistent"), RuleEntry::named("required")];
    let errors = validate_field("league", &json!(null), &entries, None);
    assert_eq!(errors, vec!["league er påkrævet"]);

    let form = FormRules::new().field("league", FieldRules::unnamed(entries));
    assert_eq!(form.lint().len(), 1);
}

#[test]
fn test_listeners_observe_changes() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut state = ErrorState::new();
    let sink = Arc::clone(&seen);
    let id = state.subscribe(move |errors| sink.lock().unwrap().push(errors.len()));

    state.validate(&json!({"buildName": "x"}), build_validation_rules());
    state.clear_field_error("gameVersion");
    state.clear_field_error("gameVersion");
    state.clear_errors();
    assert!(state.unsubscribe(id));
    state.clear_errors();

    assert_eq!(*seen.lock().unwrap(), vec![3, 2, 0]);
    assert_eq!(state.version(), 4);
}
