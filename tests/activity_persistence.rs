use std::fs;

use keytally::activity::{ActivityState, ActivityStore, PointerButton, TOP_KEYS_LIMIT};
use keytally::store::json_store::JsonStore;
use tempfile::TempDir;

fn open(dir: &TempDir) -> ActivityStore {
    let storage = JsonStore::with_base_dir(dir.path().to_path_buf()).expect("create store dir");
    ActivityStore::open(storage)
}

/// Drive a store through a mixed session and check the counters after every
/// event, then reopen it as a fresh process would.
#[test]
fn test_session_survives_restart() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);

    let keys = ["h", "e", "l", "l", "o", " ", "W", "Shift", "Enter", "L"];
    let mut clicks = 0;
    for (i, key) in keys.iter().enumerate() {
        store.key_down(key);
        let button = match i % 3 {
            0 => PointerButton::Primary,
            1 => PointerButton::Secondary,
            _ => PointerButton::Auxiliary,
        };
        if button != PointerButton::Auxiliary {
            clicks += 1;
        }
        store.pointer_down(button);

        let state = store.state();
        assert_eq!(state.total_keys(), state.key_presses.values().sum::<u64>());
        assert_eq!(state.total_clicks(), clicks);
    }

    let before = store.state().clone();
    drop(store);

    let reopened = open(&dir);
    assert_eq!(reopened.state(), &before);
    assert_eq!(reopened.state().key_presses.get("L"), Some(&3));
    assert_eq!(reopened.state().key_presses.get("Shift"), Some(&1));
    assert_eq!(reopened.state().key_presses.get(" "), Some(&1));
}

#[test]
fn test_record_has_exactly_four_fields() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    store.key_down("q");
    store.pointer_down(PointerButton::Primary);

    let raw = fs::read_to_string(dir.path().join("activity.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let mut fields: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    fields.sort();
    assert_eq!(fields, ["keyPresses", "leftClicks", "rightClicks", "totalKeys"]);
    assert_eq!(value["totalKeys"], 1);
    assert_eq!(value["keyPresses"]["Q"], 1);
}

#[test]
fn test_corrupt_record_starts_fresh() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("activity.json"), "leftClicks=3").unwrap();
    let store = open(&dir);
    assert_eq!(store.state(), &ActivityState::default());
}

#[test]
fn test_reset_then_restart_is_empty() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    for key in ["a", "b", "c"] {
        store.key_down(key);
    }
    store.reset();
    store.reset();
    assert!(!dir.path().join("activity.json").exists());
    assert!(open(&dir).state().is_empty());
}

#[test]
fn test_ranking_after_restart() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    for ch in "the quick brown fox jumps over the lazy dog".chars() {
        store.key_down(&ch.to_string());
    }
    let reopened = open(&dir);
    let top = reopened.state().top_keys(TOP_KEYS_LIMIT);
    assert_eq!(top.len(), TOP_KEYS_LIMIT);
    assert_eq!(top[0], (" ", 8));
    assert_eq!(top[1], ("O", 4));
    assert!(top.windows(2).all(|w| w[0].1 >= w[1].1));
}
