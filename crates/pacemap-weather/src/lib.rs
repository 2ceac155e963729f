//! Weather summary for the user's position
//!
//! Fetches a one-day forecast from the 7timer "civillight" product. The
//! request races a fixed timer; whichever finishes first decides the result.

pub mod location;
pub mod provider;
pub mod race;
pub mod types;

pub use location::get_current_location;
pub use provider::WeatherProvider;
pub use race::{race_slot, race_with_timer, RaceSlot};
pub use types::*;
