//! Request-scoped connections to the booking database.
//!
//! A request opens its own [`Connection`] through [`Store::connect`] and owns
//! it for the whole unit of work. Dropping it closes the connection on every
//! exit path, including an early `?` return or a panic on the blocking pool;
//! SQLite rolls back a transaction still open at that point.

use super::{configure, open_db};
use crate::error::{BookingError, BookingResult};
use log::debug;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Handle to the database file, cloned into every worker.
#[derive(Debug, Clone)]
pub struct Store {
    path: Arc<PathBuf>,
}

impl Store {
    /// Migrates the database at `path` and returns a handle to it.
    ///
    /// In-memory databases are refused: every connection to one would start
    /// from a private, empty database.
    pub fn open(path: impl AsRef<Path>) -> BookingResult<Self> {
        let path = path.as_ref();
        if is_in_memory(path) {
            return Err(BookingError::InMemoryStore(path.display().to_string()));
        }
        open_db(path)?;

        Ok(Self {
            path: Arc::new(path.to_path_buf()),
        })
    }

    /// Opens a connection for one unit of work.
    pub fn connect(&self) -> BookingResult<Connection> {
        debug!("opening connection to {}", self.path.display());
        configure(Connection::open(self.path.as_path())?)
    }
}

fn is_in_memory(path: &Path) -> bool {
    let path = path.to_string_lossy();
    path.is_empty()
        || path == ":memory:"
        || path.starts_with("file::memory:")
        || (path.starts_with("file:") && path.contains("mode=memory"))
}
