//! Snapshot persistence of the workout store into a single durable slot.
//!
//! Every save overwrites the whole slot with a JSON array. Loading never
//! fails: a missing or unreadable slot is treated as "no saved workouts", and
//! a single unreadable record is skipped while the rest load.
//! Loaded records keep the fields exactly as they were serialized, including
//! the derived metric and description.

use serde_json::Value;

use crate::storage::{StorageResult, StorageSlot};
use crate::store::WorkoutStore;
use crate::workout::Workout;

pub struct WorkoutPersistence {
    slot: Box<dyn StorageSlot>,
}

impl WorkoutPersistence {
    pub fn new(slot: Box<dyn StorageSlot>) -> Self {
        Self { slot }
    }

    /// Overwrite the slot with the full, ordered contents of `store`.
    pub fn save(&self, store: &WorkoutStore) -> StorageResult<()> {
        let json = serde_json::to_string(store.all())?;
        self.slot.write(&json)?;
        tracing::debug!("Saved {} workouts", store.len());
        Ok(())
    }

    /// Read back the saved workouts, or an empty list if there are none.
    pub fn load(&self) -> Vec<Workout> {
        let contents = match self.slot.read() {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                tracing::debug!("No saved workouts");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!("Failed to read saved workouts: {}", e);
                return Vec::new();
            }
        };

        // `null` is what an empty browser slot parses to; treat it like absence.
        let entries = match serde_json::from_str::<Option<Vec<Value>>>(&contents) {
            Ok(entries) => entries.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("Ignoring unreadable saved workouts: {}", e);
                return Vec::new();
            }
        };

        let workouts: Vec<Workout> = entries.into_iter().filter_map(parse_entry).collect();
        tracing::info!("Loaded {} saved workouts", workouts.len());
        workouts
    }

    /// Load straight into a store.
    pub fn load_store(&self) -> WorkoutStore {
        WorkoutStore::from(self.load())
    }

    /// Drop all saved data.
    pub fn reset(&self) -> StorageResult<()> {
        self.slot.remove()?;
        tracing::info!("Saved workouts removed");
        Ok(())
    }
}

/// One record of the saved array. A bad record is skipped so it cannot take
/// the rest of the list down with it.
fn parse_entry(entry: Value) -> Option<Workout> {
    let id = entry.get("id").and_then(Value::as_str).map(str::to_owned);
    match serde_json::from_value(entry) {
        Ok(workout) => Some(workout),
        Err(e) => {
            tracing::warn!(
                "Skipping unreadable saved workout {}: {}",
                id.as_deref().unwrap_or("<no id>"),
                e
            );
            None
        }
    }
}
