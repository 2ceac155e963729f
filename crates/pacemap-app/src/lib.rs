//! Application layer: wires user events to the workout store, persistence,
//! the presenter and the weather service.

pub mod controller;
pub mod error_mapping;
pub mod form;
pub mod presentation;
pub mod services;
pub mod view;

pub use controller::{initialize, AppState, Controller, WeatherDisplay};
pub use error_mapping::IntoAppError;
pub use form::{FormFields, FormState, ValidInput};
pub use presentation::{ConsolePresenter, MarkerSpec, PopupOptions, Presenter};
pub use services::weather_service::{request_fetch, WeatherServiceMessage};

use pacemap_core::{Config, StorageBackend};
use pacemap_workouts::{FileSlot, MemorySlot, SqliteSlot, StorageSlot, WorkoutPersistence};

/// Build the persistence adapter for the configured storage backend.
///
/// A SQLite database that cannot be opened falls back to an in-memory slot so
/// the app stays usable; the failure is logged.
pub fn open_persistence(config: &Config) -> WorkoutPersistence {
    let key = config.storage.slot_key.as_str();
    let slot: Box<dyn StorageSlot> = match config.storage.backend {
        StorageBackend::File => Box::new(FileSlot::new(&config.config_dir, key)),
        StorageBackend::Sqlite => {
            match SqliteSlot::open(config.config_dir.join("pacemap.db"), key) {
                Ok(slot) => Box::new(slot),
                Err(e) => {
                    tracing::error!(
                        "{}; using volatile storage",
                        e.into_app_error()
                    );
                    Box::new(MemorySlot::new())
                }
            }
        }
        StorageBackend::Memory => Box::new(MemorySlot::new()),
    };
    WorkoutPersistence::new(slot)
}
