//! SQLite bootstrap: opening connections and applying the schema.
//!
//! Every connection handed out by this module has `foreign_keys=ON`, so a show
//! can only be inserted against an existing venue and artist, and deleting a
//! venue or artist removes its shows.

pub mod migrations;
mod store;

pub use store::Store;

use crate::error::BookingResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens a database file and brings its schema up to date.
pub fn open_db(path: impl AsRef<Path>) -> BookingResult<Connection> {
    let started_at = Instant::now();
    let path = path.as_ref();

    let mut conn = configure(Connection::open(path)?)?;
    match migrations::apply_migrations(&mut conn) {
        Ok(()) => {
            info!(
                "database {} ready (schema v{}, {} ms)",
                path.display(),
                migrations::latest_version(),
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!("database {} failed to migrate: {}", path.display(), err);
            Err(err)
        }
    }
}

/// Opens a private in-memory database with the schema applied.
pub fn open_in_memory() -> BookingResult<Connection> {
    let mut conn = configure(Connection::open_in_memory()?)?;
    migrations::apply_migrations(&mut conn)?;
    Ok(conn)
}

fn configure(conn: Connection) -> BookingResult<Connection> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(conn)
}
