//! Durable key/value slots.
//!
//! A slot holds one opaque string and is always overwritten in full.
//! Backends: in-memory, a JSON file, or a row in a SQLite key/value table.

use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// A single named slot of durable storage.
pub trait StorageSlot: Send {
    /// Current contents, or `None` if nothing was ever written.
    fn read(&self) -> StorageResult<Option<String>>;

    /// Replace the contents.
    fn write(&self, contents: &str) -> StorageResult<()>;

    /// Delete the slot. Removing an absent slot succeeds.
    fn remove(&self) -> StorageResult<()>;
}

/// Process-local slot. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    value: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            value: Arc::new(Mutex::new(Some(contents.into()))),
        }
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> StorageResult<Option<String>> {
        Ok(self.value.lock().clone())
    }

    fn write(&self, contents: &str) -> StorageResult<()> {
        *self.value.lock() = Some(contents.to_string());
        Ok(())
    }

    fn remove(&self) -> StorageResult<()> {
        *self.value.lock() = None;
        Ok(())
    }
}

/// Slot stored as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(dir: &Path, key: &str) -> Self {
        Self {
            path: dir.join(format!("{}.json", key)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> StorageResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, contents: &str) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        // Write then rename so a crash never leaves a half-written slot.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, contents)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn remove(&self) -> StorageResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Slot stored as one row of a SQLite key/value table.
pub struct SqliteSlot {
    conn: Mutex<Connection>,
    key: String,
}

impl SqliteSlot {
    /// Open or create the database at `path`.
    pub fn open<P: AsRef<Path>>(path: P, key: &str) -> StorageResult<Self> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn, key)
    }

    pub fn in_memory(key: &str) -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn, key)
    }

    fn with_connection(conn: Connection, key: &str) -> StorageResult<Self> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS slots (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
            key: key.to_string(),
        })
    }
}

impl StorageSlot for SqliteSlot {
    fn read(&self) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .lock()
            .query_row(
                "SELECT value FROM slots WHERE key = ?1",
                params![self.key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, contents: &str) -> StorageResult<()> {
        self.conn.lock().execute(
            "INSERT INTO slots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![self.key, contents],
        )?;
        Ok(())
    }

    fn remove(&self) -> StorageResult<()> {
        self.conn
            .lock()
            .execute("DELETE FROM slots WHERE key = ?1", params![self.key])?;
        Ok(())
    }
}
