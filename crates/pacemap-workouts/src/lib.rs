//! Workout records, the in-session workout store and its durable persistence.

pub mod persistence;
pub mod storage;
pub mod store;
pub mod workout;

pub use persistence::WorkoutPersistence;
pub use storage::{FileSlot, MemorySlot, SqliteSlot, StorageError, StorageResult, StorageSlot};
pub use store::WorkoutStore;
pub use workout::{
    describe, workout_id, ActivityType, Coordinates, KindInput, Metrics, Workout, WorkoutError,
};
