use crate::race::race_with_timer;
use crate::types::{ForecastResponse, Location, WeatherCondition, WeatherError, WeatherReport};
use chrono::Utc;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

pub const DEFAULT_BASE_URL: &str = "https://www.7timer.info/bin/api.pl";
pub const DEFAULT_PRODUCT: &str = "civillight";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);
const USER_AGENT: &str = "PaceMap/0.1.0";

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    base_url: String,
    product: String,
    timeout: Duration,
}

impl WeatherProvider {
    pub fn new(base_url: &str, product: &str, timeout: Duration) -> Result<Self, WeatherError> {
        // No client-level timeout: the deadline is enforced by the timer race.
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.to_string(),
            product: product.to_string(),
            timeout,
        })
    }

    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(DEFAULT_BASE_URL, DEFAULT_PRODUCT, DEFAULT_TIMEOUT)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn forecast_url(&self, location: &Location) -> String {
        format!(
            "{}?lon={}&lat={}&product={}&output=json",
            self.base_url, location.longitude, location.latitude, self.product
        )
    }

    /// Fetch today's summary for `location`.
    ///
    /// The request races a timer of `self.timeout`; if the timer wins the
    /// result is `WeatherError::Timeout` and the late response is discarded.
    /// Nothing is retried.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(&self, location: &Location) -> Result<WeatherReport, WeatherError> {
        let client = Arc::clone(&self.client);
        let url = self.forecast_url(location);

        let outcome = race_with_timer(
            async move { fetch_forecast(&client, &url).await },
            self.timeout,
            || Err(WeatherError::Timeout),
        )
        .await
        .unwrap_or(Err(WeatherError::Timeout));

        let forecast = outcome?;

        let today = forecast
            .dataseries
            .into_iter()
            .next()
            .ok_or(WeatherError::EmptyForecast)?;

        tracing::info!("Weather for {:?}: {}", location, today.weather);

        Ok(WeatherReport {
            condition: WeatherCondition::from_code(&today.weather),
            code: today.weather,
            temperature: today.temp2m,
            location: *location,
            fetched_at: Utc::now(),
        })
    }
}

async fn fetch_forecast(client: &Client, url: &str) -> Result<ForecastResponse, WeatherError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(WeatherError::Status(status.as_u16()));
    }

    response
        .json::<ForecastResponse>()
        .await
        .map_err(|e| WeatherError::Parse(e.to_string()))
}
