use super::IntoAppError;
use pacemap_core::{AppError, RusqliteErrorExt, StorageError};
use pacemap_workouts::StorageError as SlotError;

impl IntoAppError for SlotError {
    fn into_app_error(self) -> AppError {
        match self {
            SlotError::Io(e) => AppError::Io(e),
            SlotError::Sqlite(e) => AppError::Storage(e.into_storage_error()),
            SlotError::Serialize(e) => AppError::Storage(StorageError::Corruption(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use pacemap_workouts::SqliteSlot;

    #[test]
    fn sqlite_errors_become_storage_errors() {
        // A directory is not a database file.
        let dir = tempfile::tempdir().unwrap();
        let err = match SqliteSlot::open(dir.path(), "workouts") {
            Ok(_) => panic!("opening a directory should fail"),
            Err(e) => e,
        };
        assert!(matches!(err, SlotError::Sqlite(_)));
        assert!(matches!(
            err.into_app_error(),
            AppError::Storage(StorageError::WriteFailed(_))
        ));
    }

    #[test]
    fn io_errors_stay_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = SlotError::Io(io).into_app_error();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn serialization_errors_are_corruption() {
        let json_err = match serde_json::from_str::<Vec<u32>>("[oops") {
            Ok(_) => panic!("invalid json should not parse"),
            Err(e) => e,
        };
        let err = SlotError::Serialize(json_err).into_app_error();
        assert!(matches!(err, AppError::Storage(StorageError::Corruption(_))));
    }
}
