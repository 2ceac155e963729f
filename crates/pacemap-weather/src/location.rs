// Position comes from configuration; there is no platform geolocation backend.
use crate::types::{Location, LocationError};

/// Resolve the user's position.
///
/// `configured` is `(latitude, longitude)` from settings. Without it the
/// position is unavailable and callers skip map and weather setup.
pub async fn get_current_location(
    configured: Option<(f64, f64)>,
) -> Result<Location, LocationError> {
    match configured {
        Some((latitude, longitude))
            if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) =>
        {
            Ok(Location {
                latitude,
                longitude,
            })
        }
        Some((latitude, longitude)) => {
            tracing::warn!("Configured position {}, {} is out of range", latitude, longitude);
            Err(LocationError::ServiceUnavailable)
        }
        None => Err(LocationError::ServiceUnavailable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_configured_position() {
        let loc = get_current_location(Some((47.6, -122.3))).await;
        assert_eq!(
            loc,
            Ok(Location {
                latitude: 47.6,
                longitude: -122.3
            })
        );
    }

    #[tokio::test]
    async fn test_missing_position_is_unavailable() {
        assert_eq!(
            get_current_location(None).await,
            Err(LocationError::ServiceUnavailable)
        );
    }

    #[tokio::test]
    async fn test_out_of_range_position_is_rejected() {
        assert_eq!(
            get_current_location(Some((120.0, 0.0))).await,
            Err(LocationError::ServiceUnavailable)
        );
    }
}
