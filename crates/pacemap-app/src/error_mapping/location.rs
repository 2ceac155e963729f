use super::IntoAppError;
use pacemap_core::{AppError, LocationError};
use pacemap_weather::LocationError as ProviderLocationError;

impl IntoAppError for ProviderLocationError {
    fn into_app_error(self) -> AppError {
        match self {
            ProviderLocationError::PermissionDenied => {
                AppError::Location(LocationError::PermissionDenied)
            }
            ProviderLocationError::ServiceUnavailable => {
                AppError::Location(LocationError::ServiceUnavailable)
            }
        }
    }
}
