// Rust guideline compliant 2026-10-18

//! Unit tests for the storage module.
//!
//! These tests validate specific examples, edge cases, and error conditions.

use buildboard_core::{
    Build, BuildStatus, Error, GameVersion, Resource, ResourceCategory, Storage, UserPreferences,
};
use std::fs;
use tempfile::TempDir;

/// Helper to create a test build.
fn create_test_build(id: &str, name: &str) -> Build {
    Build {
        id: id.to_string(),
        user_id: "u1".to_string(),
        build_name: name.to_string(),
        game_version: GameVersion::Poe2,
        character_name: None,
        league: None,
        build_status: BuildStatus::Active,
        guide_status: None,
        pob_link: None,
        guide_link: None,
        notes: None,
        created_at: 1000,
        updated_at: 1000,
        last_opened: None,
    }
}

#[test]
fn test_empty_file_handling() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage: Storage<Build> =
        Storage::new(temp_dir.path().join("builds.jsonl")).expect("Failed to create storage");

    let builds = storage.load_all().expect("Failed to load builds");
    assert!(builds.is_empty(), "Missing file should be an empty collection");
}

#[test]
fn test_empty_path_rejected() {
    assert!(Storage::<Build>::new(Default::default()).is_err());
}

#[test]
fn test_save_and_replace() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = Storage::new(temp_dir.path().join("data").join("builds.jsonl"))
        .expect("Failed to create storage");

    let mut build = create_test_build("bld-111111", "Righteous Fire");
    storage.save(&build).expect("Failed to save");
    storage
        .save(&create_test_build("bld-222222", "Cyclone"))
        .expect("Failed to save");

    build.build_name = "Righteous Fire Inquisitor".to_string();
    storage.save(&build).expect("Failed to replace");

    let loaded = storage.load_all().expect("Failed to load");
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].build_name, "Righteous Fire Inquisitor");
    assert_eq!(
        storage.load_by_id("bld-222222").expect("Present").build_name,
        "Cyclone"
    );
}

#[test]
fn test_malformed_lines_are_skipped() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("builds.jsonl");
    let good = serde_json::to_string(&create_test_build("bld-333333", "Arc")).expect("Serialize");
    fs::write(&path, format!("{good}\n{{not json\n\n{good}\n")).expect("Failed to write");

    let storage: Storage<Build> = Storage::new(path).expect("Failed to create storage");
    let loaded = storage.load_all().expect("Failed to load");
    assert_eq!(loaded.len(), 2);
}

#[test]
fn test_invalid_document_fails_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("builds.jsonl");
    let mut build = create_test_build("bld-444444", "Arc");
    build.build_name = "   ".to_string();
    fs::write(&path, serde_json::to_string(&build).expect("Serialize")).expect("Write");

    let storage: Storage<Build> = Storage::new(path).expect("Failed to create storage");
    assert!(matches!(storage.load_all(), Err(Error::InvalidDocument(_))));
}

#[test]
fn test_save_rejects_invalid_document() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = Storage::new(temp_dir.path().join("builds.jsonl")).expect("Storage");
    let build = create_test_build("not-an-id", "Arc");
    assert!(storage.save(&build).is_err());
    assert!(!storage.path().exists());
}

#[test]
fn test_delete() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = Storage::new(temp_dir.path().join("builds.jsonl")).expect("Storage");
    storage
        .save_all(&[
            create_test_build("bld-555555", "One"),
            create_test_build("bld-666666", "Two"),
        ])
        .expect("Failed to save");

    storage.delete("bld-555555").expect("Failed to delete");
    let remaining = storage.load_all().expect("Failed to load");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "bld-666666");

    assert!(matches!(storage.delete("bld-555555"), Err(Error::NotFound(_))));
}

#[test]
fn test_no_temp_file_left_behind() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("builds.jsonl");
    let storage = Storage::new(path.clone()).expect("Storage");
    storage
        .save(&create_test_build("bld-777777", "Seven"))
        .expect("Failed to save");

    assert!(path.exists());
    assert!(!path.with_extension("jsonl.tmp").exists());
}

#[test]
fn test_other_collections() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let resources = Storage::new(temp_dir.path().join("resources.jsonl")).expect("Storage");
    let resource = Resource {
        id: "res-abcdef".to_string(),
        user_id: "u1".to_string(),
        title: "Craft of Exile".to_string(),
        description: "Crafting simulator".to_string(),
        url: "https://www.craftofexile.com".to_string(),
        icon: None,
        category: ResourceCategory::Programs,
        kind: None,
        is_default: false,
        created_at: 5,
        updated_at: 5,
    };
    resources.save(&resource).expect("Failed to save");
    assert_eq!(resources.load_by_id("res-abcdef").expect("Present"), resource);

    let preferences = Storage::new(temp_dir.path().join("preferences.jsonl")).expect("Storage");
    let mut prefs = UserPreferences::for_user("u1");
    prefs.hidden_resource_ids.push("2".to_string());
    preferences.save(&prefs).expect("Failed to save");
    assert_eq!(preferences.load_by_id("u1").expect("Present"), prefs);
}

#[test]
fn test_lock_is_exclusive() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage: Storage<Build> =
        Storage::new(temp_dir.path().join("builds.jsonl")).expect("Storage");
    let other = storage.clone();

    let nested = storage.with_lock(|| Ok(other.with_lock(|| Ok(())).is_err()));
    assert!(nested.expect("Outer lock"), "Second lock should fail while held");
    assert!(storage.with_lock(|| Ok(())).is_ok(), "Lock is released afterwards");
}
