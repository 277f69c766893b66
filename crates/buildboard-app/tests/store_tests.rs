// Rust guideline compliant 2026-10-18

//! Tests for the local document store and its subscriptions.

use buildboard_app::{Clock, DocumentStore, LocalStore, MemoryCollection};
use buildboard_core::{
    Build, BuildDraft, BuildStatus, GameVersion, Resource, ResourceCategory, ResourceDraft,
    UserPreferences,
};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

/// A clock that advances one second per reading.
fn ticking_clock() -> Clock {
    let now = Arc::new(AtomicI64::new(1_700_000_000));
    Arc::new(move || -> buildboard_app::Result<i64> { Ok(now.fetch_add(1, Ordering::SeqCst)) })
}

fn store() -> LocalStore {
    LocalStore::in_memory().with_clock(ticking_clock())
}

fn draft(name: &str) -> BuildDraft {
    BuildDraft {
        build_name: name.to_string(),
        game_version: Some(GameVersion::Poe1),
        build_status: Some(BuildStatus::Active),
        ..BuildDraft::default()
    }
}

fn names(builds: &[Build]) -> Vec<String> {
    builds.iter().map(|b| b.build_name.clone()).collect()
}

#[test]
fn test_builds_are_scoped_and_newest_first() {
    let store = store();
    let first = store.add_build("u1", draft("First")).expect("add");
    store.add_build("u1", draft("Second")).expect("add");
    store.add_build("u2", draft("Other user")).expect("add");

    assert_eq!(names(&store.user_builds("u1").expect("list")), vec!["Second", "First"]);

    store.update_build(&first.id, draft("First, renamed")).expect("update");
    assert_eq!(
        names(&store.user_builds("u1").expect("list")),
        vec!["First, renamed", "Second"]
    );
}

#[test]
fn test_add_stamps_times() {
    let store = store();
    let build = store.add_build("u1", draft("Arc")).expect("add");
    assert!(build.id.starts_with("bld-"));
    assert_eq!(build.user_id, "u1");
    assert_eq!(build.created_at, build.updated_at);
    assert_eq!(build.last_opened, Some(build.created_at));
}

#[test]
fn test_incomplete_draft_is_rejected() {
    let store = store();
    let mut incomplete = draft("Arc");
    incomplete.build_status = None;
    assert!(store.add_build("u1", incomplete).is_err());
    assert!(store.user_builds("u1").expect("list").is_empty());
}

#[test]
fn test_touch_updates_last_opened_only() {
    let store = store();
    let build = store.add_build("u1", draft("Arc")).expect("add");
    store.touch_build(&build.id).expect("touch");

    let touched = store.user_builds("u1").expect("list").remove(0);
    assert!(touched.last_opened > build.last_opened);
    assert_eq!(touched.updated_at, build.updated_at);
    assert!(store.touch_build("bld-ffffff").is_err());
}

#[test]
fn test_subscription_delivers_initial_set_and_changes() {
    let store = store();
    store.add_build("u1", draft("Existing")).expect("add");

    let deliveries = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&deliveries);
    let subscription = store.subscribe_builds(
        "u1",
        Arc::new(move |builds: Vec<Build>| sink.lock().unwrap().push(names(&builds))),
    );

    let added = store.add_build("u1", draft("New")).expect("add");
    store.add_build("u2", draft("Elsewhere")).expect("add");
    store.delete_build(&added.id).expect("delete");

    subscription.cancel();
    store.add_build("u1", draft("Unseen")).expect("add");

    assert_eq!(
        *deliveries.lock().unwrap(),
        vec![
            vec!["Existing".to_string()],
            vec!["New".to_string(), "Existing".to_string()],
            vec!["Existing".to_string()],
        ]
    );
}

#[test]
fn test_write_during_initial_delivery_reaches_listener() {
    let store = Arc::new(store());
    store.add_build("u1", draft("Existing")).expect("add");

    let deliveries = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&deliveries);
    let writer = Arc::clone(&store);
    let wrote = Arc::new(AtomicBool::new(false));
    let _subscription = store.subscribe_builds(
        "u1",
        Arc::new(move |builds: Vec<Build>| {
            sink.lock().unwrap().push(names(&builds));
            if !wrote.swap(true, Ordering::SeqCst) {
                writer.add_build("u1", draft("Follow-up")).expect("add");
            }
        }),
    );

    let deliveries = deliveries.lock().unwrap();
    assert_eq!(deliveries.len(), 2);
    assert!(deliveries.contains(&vec!["Existing".to_string()]));
    assert!(deliveries.contains(&vec!["Follow-up".to_string(), "Existing".to_string()]));
}

#[test]
fn test_preference_write_during_initial_delivery_reaches_listener() {
    let store = Arc::new(store());
    let delivered = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&delivered);
    let writer = Arc::clone(&store);
    let wrote = Arc::new(AtomicBool::new(false));
    let _subscription = store.subscribe_preferences(
        "u1",
        Arc::new(move |preferences: UserPreferences| {
            sink.lock().unwrap().push(preferences.hidden_resource_ids);
            if !wrote.swap(true, Ordering::SeqCst) {
                writer
                    .update_preferences("u1", vec!["2".to_string()])
                    .expect("update");
            }
        }),
    );

    assert_eq!(
        *delivered.lock().unwrap(),
        vec![Vec::<String>::new(), vec!["2".to_string()]]
    );
}

#[test]
fn test_unavailable_collection_delivers_empty_set() {
    let builds: MemoryCollection<Build> = MemoryCollection::new();
    let handle = builds.clone();
    let store = LocalStore::new(
        Box::new(builds),
        Box::new(MemoryCollection::<Resource>::new()),
        Box::new(MemoryCollection::<UserPreferences>::new()),
    )
    .with_clock(ticking_clock());
    store.add_build("u1", draft("Arc")).expect("add");

    handle.set_unavailable(true);
    let delivered = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&delivered);
    let _subscription = store.subscribe_builds(
        "u1",
        Arc::new(move |builds: Vec<Build>| *sink.lock().unwrap() = Some(builds.len())),
    );

    assert_eq!(*delivered.lock().unwrap(), Some(0));
    assert!(store.user_builds("u1").is_err());
}

#[test]
fn test_resources_and_preferences() {
    let store = store();
    let resource = store
        .add_resource(
            "u1",
            ResourceDraft {
                title: "Craft of Exile".to_string(),
                description: "Crafting simulator".to_string(),
                url: "https://www.craftofexile.com".to_string(),
                category: Some(ResourceCategory::Programs),
                ..ResourceDraft::default()
            },
        )
        .expect("add");
    assert!(resource.id.starts_with("res-"));
    assert!(!resource.is_default);

    let hidden = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&hidden);
    let _subscription = store.subscribe_preferences(
        "u1",
        Arc::new(move |prefs: UserPreferences| sink.lock().unwrap().push(prefs.hidden_resource_ids)),
    );

    store
        .update_preferences("u1", vec!["2".to_string(), resource.id.clone()])
        .expect("update");
    assert_eq!(
        store.preferences("u1").expect("prefs").hidden_resource_ids,
        vec!["2".to_string(), resource.id.clone()]
    );
    assert_eq!(hidden.lock().unwrap().len(), 2);
    assert!(hidden.lock().unwrap()[0].is_empty());

    store.delete_resource(&resource.id).expect("delete");
    assert!(store.user_resources("u1").expect("list").is_empty());
}
