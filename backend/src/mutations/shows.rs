use crate::error::BookingResult;
use crate::mutations::transact;
use common::model::show::NewShow;
use rusqlite::{params, Connection};

/// Books `show.artist_id` at `show.venue_id`.
///
/// The referenced venue and artist must exist; the foreign keys turn a
/// dangling id into a store failure and the insert is rolled back.
pub fn create_show(conn: &mut Connection, show: &NewShow) -> BookingResult<i64> {
    transact(conn, "create show", |tx| {
        tx.execute(
            "INSERT INTO shows (venue_id, artist_id, start_time) VALUES (?1, ?2, ?3)",
            params![show.venue_id, show.artist_id, show.start_time],
        )?;
        Ok(tx.last_insert_rowid())
    })
}
