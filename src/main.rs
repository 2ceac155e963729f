use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use pacemap_app::{open_persistence, request_fetch, ConsolePresenter};
use pacemap_weather::{get_current_location, WeatherProvider};

fn main() -> Result<()> {
    // Initialize core
    pacemap_core::init()?;

    // Warnings are logged by the loader
    let (config, _) = pacemap_core::Config::load_validated()?;

    let runtime = tokio::runtime::Runtime::new()?;

    let persistence = open_persistence(&config);
    let mut controller = pacemap_app::initialize(
        persistence,
        ConsolePresenter::stdout(),
        config.map.zoom_level,
    );

    tracing::info!("PaceMap started");

    let position = runtime.block_on(get_current_location(config.location.coordinates()));
    let Some(location) = controller.on_location(position) else {
        tracing::info!("No position; map and weather disabled");
        return Ok(());
    };

    if config.weather.enabled {
        let provider = WeatherProvider::new(
            &config.weather.base_url,
            &config.weather.product,
            Duration::from_millis(config.weather.timeout_ms),
        )?;

        let (tx, rx) = std::sync::mpsc::channel();
        request_fetch(&tx, runtime.handle(), Arc::new(provider), location);
        drop(tx);

        if let Ok(message) = rx.recv() {
            controller.on_weather(message);
        }
    }

    tracing::info!("PaceMap shutting down");
    Ok(())
}
