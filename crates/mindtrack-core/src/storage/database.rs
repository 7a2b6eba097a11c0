//! SQLite storage handle.
//!
//! Provides persistent storage for:
//! - Mood entries (`mood_entries`)
//! - Key-value store for small pieces of application state (`kv`)
//!
//! The handle is opened once at startup and cloned into every component that
//! needs it. Each call runs on tokio's blocking pool with the connection
//! locked, so writes are applied one at a time in the order they were issued.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::DatabaseError;

/// Shared SQLite database handle.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
    path: Option<PathBuf>,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").field("path", &self.path).finish()
    }
}

impl Database {
    /// Open (or create) the database file at `path`.
    ///
    /// Creates the schema if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or the schema
    /// cannot be created.
    pub fn open_at(path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open(&path).map_err(|source| DatabaseError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        Self::init_schema(&conn)?;
        tracing::debug!(path = %path.display(), "opened mood database");
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path: Some(path),
        })
    }

    /// Open an in-memory database (for tests).
    ///
    /// # Errors
    /// Returns an error if SQLite cannot allocate the database.
    pub fn open_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path: None,
        })
    }

    /// Location of the database file, `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn init_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS mood_entries (
                id        INTEGER PRIMARY KEY AUTOINCREMENT,
                mood      INTEGER NOT NULL,
                note      TEXT NOT NULL DEFAULT '',
                timestamp INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_mood_entries_timestamp ON mood_entries(timestamp);",
        )
    }

    /// Run `f` against the connection on the blocking pool.
    ///
    /// The connection lock is held for the whole closure, so everything `f`
    /// does is observed atomically by other callers.
    ///
    /// # Errors
    /// Returns the closure's error, or [`DatabaseError::Unavailable`] if the
    /// lock is poisoned or the worker task was aborted.
    pub async fn call<F, T>(&self, f: F) -> Result<T, DatabaseError>
    where
        F: FnOnce(&mut Connection) -> Result<T, DatabaseError> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|_| DatabaseError::Unavailable("connection lock poisoned".into()))?;
            f(&mut guard)
        })
        .await
        .map_err(|e| DatabaseError::Unavailable(e.to_string()))?
    }

    /// Get a value from the kv store.
    pub async fn kv_get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let key = key.to_string();
        self.call(move |conn| kv_get(conn, &key).map_err(DatabaseError::from))
            .await
    }

    /// Set a value in the kv store.
    pub async fn kv_set(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        let key = key.to_string();
        let value = value.to_string();
        self.call(move |conn| kv_set(conn, &key, &value).map_err(DatabaseError::from))
            .await
    }
}

pub(crate) fn kv_get(conn: &Connection, key: &str) -> Result<Option<String>, rusqlite::Error> {
    conn.query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
        row.get::<_, String>(0)
    })
    .optional()
}

pub(crate) fn kv_set(conn: &Connection, key: &str, value: &str) -> Result<(), rusqlite::Error> {
    conn.execute(
        "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
        params![key, value],
    )?;
    Ok(())
}
