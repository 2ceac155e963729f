//! Integration tests for WeatherProvider using wiremock.

use std::time::{Duration, Instant};

use pacemap_weather::{Location, WeatherCondition, WeatherError, WeatherProvider};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn paris() -> Location {
    Location {
        latitude: 48.85,
        longitude: 2.35,
    }
}

fn forecast_body() -> serde_json::Value {
    serde_json::json!({
        "product": "civillight",
        "init": "2024041400",
        "dataseries": [
            { "date": 20240414, "weather": "pcloudy", "temp2m": { "max": 17, "min": 6 }, "wind10m_max": 3 },
            { "date": 20240415, "weather": "rain", "temp2m": { "max": 12, "min": -2 }, "wind10m_max": 4 }
        ]
    })
}

fn provider_for(server: &MockServer, timeout: Duration) -> WeatherProvider {
    let base_url = format!("{}/bin/api.pl", server.uri());
    WeatherProvider::new(&base_url, "civillight", timeout).unwrap()
}

#[tokio::test]
async fn test_fetch_uses_first_series_entry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bin/api.pl"))
        .and(query_param("lon", "2.35"))
        .and(query_param("lat", "48.85"))
        .and(query_param("product", "civillight"))
        .and(query_param("output", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server, Duration::from_secs(5));
    let report = provider.fetch(&paris()).await.unwrap();

    assert_eq!(report.code, "pcloudy");
    assert_eq!(report.condition, WeatherCondition::PartlyCloudy);
    assert_eq!(report.temperature.max, 17.0);
    assert_eq!(report.temperature.min, 6.0);
    assert_eq!(report.day_temperature(), "+17");
    assert_eq!(report.night_temperature(), "+6");
    assert_eq!(report.icon_path(), "imgs/icon-pcloudy.png");
    assert_eq!(report.location, paris());
}

#[tokio::test]
async fn test_fetch_non_success_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bin/api.pl"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server, Duration::from_secs(5));
    let err = provider.fetch(&paris()).await.unwrap_err();

    assert!(matches!(err, WeatherError::Status(503)));
    assert_eq!(err.to_string(), "Something went wrong (503)");
}

#[tokio::test]
async fn test_fetch_times_out_before_slow_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bin/api.pl"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(forecast_body())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server, Duration::from_millis(100));
    let started = Instant::now();
    let err = provider.fetch(&paris()).await.unwrap_err();

    assert!(matches!(err, WeatherError::Timeout));
    assert_eq!(err.to_string(), "Timed out!");
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_fetch_empty_series() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bin/api.pl"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "dataseries": [] })),
        )
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server, Duration::from_secs(5));
    let err = provider.fetch(&paris()).await.unwrap_err();
    assert!(matches!(err, WeatherError::EmptyForecast));
}

#[tokio::test]
async fn test_fetch_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bin/api.pl"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server, Duration::from_secs(5));
    let err = provider.fetch(&paris()).await.unwrap_err();
    assert!(matches!(err, WeatherError::Parse(_)));
}
