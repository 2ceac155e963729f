use super::IntoAppError;
use pacemap_core::{AppError, ValidationError};
use pacemap_workouts::WorkoutError;

impl IntoAppError for ValidationError {
    fn into_app_error(self) -> AppError {
        AppError::Validation(self)
    }
}

impl IntoAppError for WorkoutError {
    fn into_app_error(self) -> AppError {
        match self {
            WorkoutError::UnknownKind(kind) => {
                AppError::Validation(ValidationError::UnknownKind(kind))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_is_validation_error() {
        let err = WorkoutError::UnknownKind("rowing".into()).into_app_error();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::UnknownKind(ref k)) if k == "rowing"
        ));
        assert!(err.is_blocking());
    }
}
