//! Show joins.
//!
//! Venue and artist pages share one join shape: the shows owned by the page's
//! record, each joined with its counterpart on the counterpart's id. Only the
//! column names change with the perspective.

use crate::error::BookingResult;
use common::model::show::{BookedShow, ShowListing};
use rusqlite::{params, Connection, Row};

/// The side of a booking a page is rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    /// Venue page; counterparts are artists.
    Venue,
    /// Artist page; counterparts are venues.
    Artist,
}

impl Perspective {
    fn sql(self) -> &'static str {
        match self {
            Self::Venue => {
                "SELECT a.id, a.name, a.image_link, s.start_time
                 FROM shows s
                 INNER JOIN artists a ON a.id = s.artist_id
                 WHERE s.venue_id = ?1
                 ORDER BY s.start_time ASC, s.id ASC"
            }
            Self::Artist => {
                "SELECT v.id, v.name, v.image_link, s.start_time
                 FROM shows s
                 INNER JOIN venues v ON v.id = s.venue_id
                 WHERE s.artist_id = ?1
                 ORDER BY s.start_time ASC, s.id ASC"
            }
        }
    }
}

/// Every show owned by `owner_id`, joined with its counterpart, oldest first.
pub fn booked_shows(
    conn: &Connection,
    perspective: Perspective,
    owner_id: i64,
) -> BookingResult<Vec<BookedShow>> {
    let mut stmt = conn.prepare(perspective.sql())?;
    let rows = stmt.query_map(params![owner_id], booked_from_row)?;
    let mut shows = Vec::new();
    for row in rows {
        shows.push(row?);
    }
    Ok(shows)
}

/// Every show joined with its venue and artist, in storage order.
pub fn list(conn: &Connection) -> BookingResult<Vec<ShowListing>> {
    let mut stmt = conn.prepare(
        "SELECT s.venue_id, v.name, s.artist_id, a.name, a.image_link, s.start_time
         FROM shows s
         INNER JOIN venues v ON v.id = s.venue_id
         INNER JOIN artists a ON a.id = s.artist_id
         ORDER BY s.id ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(ShowListing {
            venue_id: row.get(0)?,
            venue_name: row.get(1)?,
            artist_id: row.get(2)?,
            artist_name: row.get(3)?,
            artist_image_link: row.get(4)?,
            start_time: row.get(5)?,
        })
    })?;

    let mut shows = Vec::new();
    for row in rows {
        shows.push(row?);
    }
    Ok(shows)
}

fn booked_from_row(row: &Row<'_>) -> rusqlite::Result<BookedShow> {
    Ok(BookedShow {
        counterpart_id: row.get(0)?,
        counterpart_name: row.get(1)?,
        counterpart_image_link: row.get(2)?,
        start_time: row.get(3)?,
    })
}
