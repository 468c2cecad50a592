//! Connection lifecycle for the backing SQLite store.

use super::schema;
use crate::{Error, Result};
use rusqlite::Connection;
use std::path::PathBuf;

/// Owns the single persistent connection to a named SQLite store.
///
/// Enforces open/close lifecycle: at most one handle at a time, single-flight
/// opens, and explicit `NotOpen` failures for early access. Higher layers
/// serialize their calls; this type adds no locking of its own.
pub struct ConnectionManager {
    dir: PathBuf,
    conn: Option<Connection>,
    opening: bool,
}

impl ConnectionManager {
    /// Create a manager for stores under `dir`. Nothing is opened yet.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            conn: None,
            opening: false,
        }
    }

    /// Path of the backing file for a named store
    pub fn store_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.db", name))
    }

    /// Open the named store, creating the directory, file, and schema as
    /// needed.
    ///
    /// Fails with [`Error::AlreadyOpen`] when a handle is already held and
    /// [`Error::AlreadyOpening`] when another open is in flight.
    pub fn open(&mut self, name: &str) -> Result<()> {
        if self.conn.is_some() {
            return Err(Error::AlreadyOpen);
        }
        if self.opening {
            return Err(Error::AlreadyOpening);
        }

        self.opening = true;
        let result = self.open_store(name);
        self.opening = false;

        self.conn = Some(result?);
        Ok(())
    }

    fn open_store(&self, name: &str) -> Result<Connection> {
        std::fs::create_dir_all(&self.dir)?;
        let conn = Connection::open(self.store_path(name))?;
        for stmt in schema::all_schema_statements() {
            conn.execute(stmt, [])?;
        }
        Ok(conn)
    }

    /// Release the handle. No-op when already closed.
    pub fn close(&mut self) {
        self.conn = None;
    }

    /// Whether a handle is currently held
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Whether an `open` call is in flight.
    ///
    /// Callers that must not interleave a purge with an open check this
    /// before destroying the backing file.
    pub fn is_opening(&self) -> bool {
        self.opening
    }

    /// Get the open connection, or [`Error::NotOpen`]
    pub fn handle(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or(Error::NotOpen)
    }

    /// Remove the backing file of a named store.
    ///
    /// Succeeds silently when the file does not exist; any other failure
    /// propagates.
    pub fn delete_backing_store(&self, name: &str) -> Result<()> {
        match std::fs::remove_file(self.store_path(name)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl std::fmt::Debug for ConnectionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionManager")
            .field("dir", &self.dir)
            .field("open", &self.conn.is_some())
            .field("opening", &self.opening)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = ConnectionManager::new(dir.path());

        assert!(!manager.is_open());
        assert!(matches!(manager.handle(), Err(Error::NotOpen)));

        manager.open("dict").unwrap();
        assert!(manager.is_open());
        assert!(manager.handle().is_ok());
        assert!(manager.store_path("dict").exists());

        manager.close();
        assert!(!manager.is_open());
        // Close is a no-op when already closed
        manager.close();
    }

    #[test]
    fn test_double_open_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = ConnectionManager::new(dir.path());

        manager.open("dict").unwrap();
        assert!(matches!(manager.open("dict"), Err(Error::AlreadyOpen)));
    }

    #[test]
    fn test_open_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("jiten");
        let mut manager = ConnectionManager::new(&nested);

        manager.open("dict").unwrap();
        assert!(nested.join("dict.db").exists());
    }

    #[test]
    fn test_reopen_after_close_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = ConnectionManager::new(dir.path());

        // Schema creation must be idempotent across reopens
        manager.open("dict").unwrap();
        manager.close();
        manager.open("dict").unwrap();
    }

    #[test]
    fn test_delete_missing_store_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConnectionManager::new(dir.path());
        manager.delete_backing_store("never-created").unwrap();
    }

    #[test]
    fn test_delete_backing_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = ConnectionManager::new(dir.path());

        manager.open("dict").unwrap();
        manager.close();
        assert!(manager.store_path("dict").exists());

        manager.delete_backing_store("dict").unwrap();
        assert!(!manager.store_path("dict").exists());
    }
}
