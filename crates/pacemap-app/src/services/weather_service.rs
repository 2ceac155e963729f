//! Weather backend: async weather fetching.
//! Network work runs on the tokio runtime; results come back over mpsc so the
//! controller applies them on its own thread, away from the workout store.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use pacemap_weather::{Location, WeatherError, WeatherProvider, WeatherReport};
use tokio::runtime::Handle;

/// Messages sent from async operations back to the controller thread
#[derive(Debug)]
pub enum WeatherServiceMessage {
    /// Result of fetching weather data
    FetchDone(Result<WeatherReport, WeatherError>),
}

/// Request a weather fetch for `location`.
/// Sends exactly one `FetchDone` on the channel when the fetch or its timer
/// finishes.
pub fn request_fetch(
    tx: &Sender<WeatherServiceMessage>,
    runtime: &Handle,
    provider: Arc<WeatherProvider>,
    location: Location,
) {
    let tx = tx.clone();

    runtime.spawn(async move {
        tracing::info!(
            "Fetching weather for {}, {}",
            location.latitude,
            location.longitude
        );
        let result = provider.fetch(&location).await;
        if tx.send(WeatherServiceMessage::FetchDone(result)).is_err() {
            tracing::debug!("Weather result dropped: receiver gone");
        }
    });
}
