use super::IntoAppError;
use pacemap_core::{AppError, NetworkError, ReqwestErrorExt, WeatherError};
use pacemap_weather::WeatherError as ProviderError;

impl IntoAppError for ProviderError {
    fn into_app_error(self) -> AppError {
        match self {
            ProviderError::Network(e) => AppError::Network(e.into_network_error()),
            ProviderError::Status(status) => AppError::Network(NetworkError::ServerError { status }),
            ProviderError::Timeout => AppError::Network(NetworkError::Timeout),
            ProviderError::Parse(s) => AppError::Network(NetworkError::InvalidResponse(s)),
            ProviderError::EmptyForecast => AppError::Weather(WeatherError::EmptyForecast),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_maps_to_network_timeout() {
        let err = ProviderError::Timeout.into_app_error();
        assert!(matches!(err, AppError::Network(NetworkError::Timeout)));
        assert!(!err.is_blocking());
    }

    #[test]
    fn status_maps_to_server_error() {
        let err = ProviderError::Status(503).into_app_error();
        assert!(matches!(
            err,
            AppError::Network(NetworkError::ServerError { status: 503 })
        ));
    }

    #[test]
    fn empty_forecast_maps_to_weather_error() {
        let err = ProviderError::EmptyForecast.into_app_error();
        assert!(matches!(err, AppError::Weather(WeatherError::EmptyForecast)));
    }
}
