//! Persistence across sessions with the on-disk slot backends.

use chrono::{TimeZone, Utc};
use pacemap_workouts::{
    Coordinates, FileSlot, KindInput, SqliteSlot, StorageSlot, Workout, WorkoutPersistence,
    WorkoutStore,
};

fn session_store() -> WorkoutStore {
    let mut store = WorkoutStore::new();
    let inputs = [
        (1_713_090_600_100, KindInput::Running { cadence: 150 }, 5.0, 30.0),
        (1_713_090_600_200, KindInput::Cycling { elevation_gain: 320.0 }, 42.0, 95.0),
        (1_713_090_600_300, KindInput::Running { cadence: 172 }, 10.0, 48.5),
    ];
    for (millis, input, distance, duration) in inputs {
        let created = Utc.timestamp_millis_opt(millis).unwrap();
        store.append(Workout::new_at(
            created,
            Coordinates::new(45.0, 7.0),
            duration,
            distance,
            input,
        ));
    }
    store
}

fn assert_same_core_fields(saved: &WorkoutStore, loaded: &WorkoutStore) {
    assert_eq!(saved.ids(), loaded.ids());
    for (a, b) in saved.iter().zip(loaded.iter()) {
        assert_eq!(a.distance(), b.distance());
        assert_eq!(a.duration(), b.duration());
        assert_eq!(a.coords(), b.coords());
        assert_eq!(a.created_at(), b.created_at());
    }
}

#[test]
fn test_file_slot_survives_new_session() {
    let dir = tempfile::tempdir().unwrap();
    let store = session_store();

    {
        let persistence = WorkoutPersistence::new(Box::new(FileSlot::new(dir.path(), "workouts")));
        persistence.save(&store).unwrap();
    }

    let persistence = WorkoutPersistence::new(Box::new(FileSlot::new(dir.path(), "workouts")));
    let loaded = persistence.load_store();
    assert_same_core_fields(&store, &loaded);
}

#[test]
fn test_sqlite_slot_survives_new_session() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("pacemap.db");
    let store = session_store();

    {
        let slot = SqliteSlot::open(&db, "workouts").unwrap();
        WorkoutPersistence::new(Box::new(slot)).save(&store).unwrap();
    }

    let slot = SqliteSlot::open(&db, "workouts").unwrap();
    let loaded = WorkoutPersistence::new(Box::new(slot)).load_store();
    assert_same_core_fields(&store, &loaded);
}

#[test]
fn test_cleared_store_without_save_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = session_store();
    store.clear();

    let persistence = WorkoutPersistence::new(Box::new(FileSlot::new(dir.path(), "workouts")));
    assert!(persistence.load().is_empty());
}

#[test]
fn test_corrupt_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let slot = FileSlot::new(dir.path(), "workouts");
    slot.write("[{\"id\": 12").unwrap();

    let persistence = WorkoutPersistence::new(Box::new(slot));
    assert!(persistence.load().is_empty());
}

#[test]
fn test_snapshot_is_plain_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let slot = FileSlot::new(dir.path(), "workouts");
    let path = slot.path().to_path_buf();
    WorkoutPersistence::new(Box::new(slot))
        .save(&session_store())
        .unwrap();

    let raw = std::fs::read_to_string(path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["type"], "running");
    assert_eq!(entries[1]["type"], "cycling");
    assert_eq!(entries[1]["elevationGain"], 320.0);
}
