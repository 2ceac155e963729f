//! Maps crate errors to pacemap_core::AppError for consistent user-facing messages.
//! Each source crate has its own module to keep mappings small and readable.

mod location;
mod storage;
mod weather;
mod workout;

use pacemap_core::AppError;

/// Conversion into the application-wide error type.
pub trait IntoAppError {
    fn into_app_error(self) -> AppError;
}
