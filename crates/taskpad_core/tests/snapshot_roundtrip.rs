use serde_json::Value;
use taskpad_core::{
    load_tasks, load_theme, save_tasks, save_theme, KeyValueStore, MemoryKeyValueStore,
    StoreError, Task, Theme, TASKS_KEY, THEME_KEY,
};

#[test]
fn round_trip_is_lossless() {
    let store = MemoryKeyValueStore::new();
    let mut done = Task::new(1, "Buy milk").unwrap();
    done.completed = true;
    let tasks = vec![done, Task::new(2, "Walk the dog").unwrap()];

    save_tasks(&store, &tasks).unwrap();
    let loaded = load_tasks(&store);

    assert!(!loaded.recovered);
    assert_eq!(loaded.tasks, tasks);
}

#[test]
fn missing_key_loads_empty_without_recovery() {
    let store = MemoryKeyValueStore::new();

    let loaded = load_tasks(&store);
    assert!(loaded.tasks.is_empty());
    assert!(!loaded.recovered);
}

#[test]
fn corrupt_json_recovers_with_empty_list() {
    let store = MemoryKeyValueStore::new();
    store.set(TASKS_KEY, "{not json").unwrap();

    let loaded = load_tasks(&store);
    assert!(loaded.tasks.is_empty());
    assert!(loaded.recovered);
}

#[test]
fn payload_with_blank_text_is_treated_as_corrupt() {
    let store = MemoryKeyValueStore::new();
    let payload = serde_json::json!([
        {"id": 1, "text": "   ", "completed": false, "createdAt": "2026-01-15T10:00:00Z"}
    ]);
    store.set(TASKS_KEY, &payload.to_string()).unwrap();

    let loaded = load_tasks(&store);
    assert!(loaded.tasks.is_empty());
    assert!(loaded.recovered);
}

#[test]
fn payload_with_duplicate_ids_is_treated_as_corrupt() {
    let store = MemoryKeyValueStore::new();
    let payload = serde_json::json!([
        {"id": 1, "text": "first", "completed": false, "createdAt": "2026-01-15T10:00:00Z"},
        {"id": 1, "text": "second", "completed": true, "createdAt": "2026-01-15T10:01:00Z"}
    ]);
    store.set(TASKS_KEY, &payload.to_string()).unwrap();

    let loaded = load_tasks(&store);
    assert!(loaded.tasks.is_empty());
    assert!(loaded.recovered);
}

#[test]
fn saved_payload_uses_camel_case_wire_names() {
    let store = MemoryKeyValueStore::new();
    save_tasks(&store, &[Task::new(1, "Buy milk").unwrap()]).unwrap();

    let raw = store.get(TASKS_KEY).unwrap().unwrap();
    let value: Value = serde_json::from_str(&raw).unwrap();

    assert!(value[0].get("createdAt").is_some());
    assert!(value[0].get("created_at").is_none());
    assert_eq!(value[0]["text"], "Buy milk");
}

#[test]
fn save_propagates_store_failure() {
    let store = MemoryKeyValueStore::with_quota(4);
    let tasks = vec![Task::new(1, "too big to fit").unwrap()];

    let err = save_tasks(&store, &tasks).unwrap_err();
    assert!(matches!(err, StoreError::QuotaExceeded { .. }));
}

#[test]
fn theme_round_trip() {
    let store = MemoryKeyValueStore::new();

    save_theme(&store, Theme::Dark).unwrap();
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    assert_eq!(load_theme(&store), Theme::Dark);
}

#[test]
fn missing_or_unrecognized_theme_falls_back_to_default() {
    let store = MemoryKeyValueStore::new();
    assert_eq!(load_theme(&store), Theme::Light);

    store.set(THEME_KEY, "neon").unwrap();
    assert_eq!(load_theme(&store), Theme::Light);
}
