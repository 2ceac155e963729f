//! Centralized error types for the PaceMap application.
//!
//! Every crate keeps its own precise error enum; the app layer maps those into
//! [`AppError`] so the UI has one place to ask for a user-facing message.

use thiserror::Error;

/// Top-level application error type.
///
/// Use `user_message()` to get a UI-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Location error: {0}")]
    Location(#[from] LocationError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Validation(e) => e.user_message(),
            AppError::Network(e) => e.user_message(),
            AppError::Storage(e) => e.user_message(),
            AppError::Location(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
        }
    }

    /// Whether the error should be shown as a blocking alert rather than inline text.
    pub fn is_blocking(&self) -> bool {
        matches!(self, AppError::Validation(_) | AppError::Location(_))
    }
}

/// Workout form input errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Non-finite or non-positive input: {0}")]
    InvalidNumber(String),

    #[error("Unknown workout type: {0}")]
    UnknownKind(String),

    #[error("No location selected")]
    NoPendingLocation,
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::InvalidNumber(_) => "Inputs have to be positive numbers!",
            ValidationError::UnknownKind(_) => "Please choose a running or cycling workout.",
            ValidationError::NoPendingLocation => "Click on the map to choose a location first.",
        }
    }
}

/// Network-related errors (HTTP, connectivity).
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Timed out!")]
    Timeout,

    #[error("Something went wrong ({status})")]
    ServerError { status: u16 },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl NetworkError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed(_) => {
                "Unable to connect. Check your internet connection."
            }
            NetworkError::Timeout => "The request timed out. Please try again.",
            NetworkError::ServerError { status } if *status >= 500 => {
                "The server is experiencing issues. Please try again later."
            }
            NetworkError::ServerError { .. } => "The request failed. Please try again.",
            NetworkError::InvalidResponse(_) => {
                "Received an unexpected response. Please try again."
            }
        }
    }
}

/// Durable storage errors (file slot, SQLite slot, serialization).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage write failed: {0}")]
    WriteFailed(String),

    #[error("Stored data is corrupt: {0}")]
    Corruption(String),
}

impl StorageError {
    pub fn user_message(&self) -> &'static str {
        match self {
            StorageError::WriteFailed(_) => "Your workouts could not be saved.",
            StorageError::Corruption(_) => {
                "Saved workouts look corrupted. Consider resetting app data."
            }
        }
    }
}

/// Geolocation errors.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Location service unavailable")]
    ServiceUnavailable,
}

impl LocationError {
    pub fn user_message(&self) -> &'static str {
        "Could not get your position"
    }
}

/// Weather service errors that are not plain network failures.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Forecast is empty")]
    EmptyForecast,
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::EmptyForecast => "No forecast available for your location.",
        }
    }
}

/// Extension trait for converting reqwest errors to our error types.
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if let Some(status) = self.status() {
            NetworkError::ServerError {
                status: status.as_u16(),
            }
        } else if self.is_decode() {
            NetworkError::InvalidResponse(self.to_string())
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}

/// Extension trait for converting rusqlite errors to our error types.
pub trait RusqliteErrorExt {
    fn into_storage_error(self) -> StorageError;
}

impl RusqliteErrorExt for rusqlite::Error {
    fn into_storage_error(self) -> StorageError {
        match &self {
            rusqlite::Error::SqliteFailure(_, Some(msg)) if msg.contains("corrupt") => {
                StorageError::Corruption(self.to_string())
            }
            _ => StorageError::WriteFailed(self.to_string()),
        }
    }
}
