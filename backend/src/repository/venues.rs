use crate::error::{BookingError, BookingResult, Entity};
use crate::repository::schedule;
use crate::repository::shows::{self, Perspective};
use crate::repository::{decode_genres, name_matches};
use chrono::NaiveDateTime;
use common::model::search::SearchResults;
use common::model::venue::{Venue, VenueArea, VenueDetail, VenueFields, VenueSummary};
use rusqlite::{params, Connection, OptionalExtension, Row};

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, genres, website, \
     facebook_link, image_link, seeking_talent, seeking_description";

/// Groups every venue under its distinct `(city, state)` pair.
///
/// Pairs come back ordered by state, then city; venues inside a pair keep
/// storage order. Each venue lands in exactly one group and no group is empty.
pub fn list_areas(conn: &Connection) -> BookingResult<Vec<VenueArea>> {
    let mut stmt =
        conn.prepare("SELECT DISTINCT city, state FROM venues ORDER BY state ASC, city ASC")?;
    let pairs = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let mut stmt = conn.prepare("SELECT id, name, city, state FROM venues ORDER BY id ASC")?;
    let venues = stmt
        .query_map([], |row| {
            Ok((
                VenueSummary {
                    id: row.get(0)?,
                    name: row.get(1)?,
                },
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let areas = pairs
        .into_iter()
        .map(|(city, state)| {
            let members = venues
                .iter()
                .filter(|(_, venue_city, venue_state)| *venue_city == city && *venue_state == state)
                .map(|(summary, _, _)| summary.clone())
                .collect();
            VenueArea {
                city,
                state,
                venues: members,
            }
        })
        .collect();
    Ok(areas)
}

/// Venues whose name contains `term`, ignoring case, in storage order.
pub fn search(conn: &Connection, term: &str) -> BookingResult<SearchResults<Venue>> {
    let matches = all(conn)?
        .into_iter()
        .filter(|venue| name_matches(&venue.fields.name, term))
        .collect();
    Ok(SearchResults::new(term, matches))
}

/// Every venue in storage order.
pub fn all(conn: &Connection) -> BookingResult<Vec<Venue>> {
    let mut stmt = conn.prepare(&format!("SELECT {VENUE_COLUMNS} FROM venues ORDER BY id ASC"))?;
    let venues = stmt
        .query_map([], venue_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(venues)
}

pub fn find(conn: &Connection, venue_id: i64) -> BookingResult<Option<Venue>> {
    let venue = conn
        .query_row(
            &format!("SELECT {VENUE_COLUMNS} FROM venues WHERE id = ?1"),
            params![venue_id],
            venue_from_row,
        )
        .optional()?;
    Ok(venue)
}

pub fn get(conn: &Connection, venue_id: i64) -> BookingResult<Venue> {
    find(conn, venue_id)?.ok_or(BookingError::not_found(Entity::Venue, venue_id))
}

/// The venue page: the record plus its shows split around `now`.
pub fn detail(conn: &Connection, venue_id: i64, now: NaiveDateTime) -> BookingResult<VenueDetail> {
    let venue = get(conn, venue_id)?;
    let booked = shows::booked_shows(conn, Perspective::Venue, venue_id)?;
    Ok(VenueDetail {
        venue,
        schedule: schedule::partition(booked, now),
    })
}

fn venue_from_row(row: &Row<'_>) -> rusqlite::Result<Venue> {
    let genres: String = row.get(6)?;
    Ok(Venue {
        id: row.get(0)?,
        fields: VenueFields {
            name: row.get(1)?,
            city: row.get(2)?,
            state: row.get(3)?,
            address: row.get(4)?,
            phone: row.get(5)?,
            genres: decode_genres(&genres, 6)?,
            website: row.get(7)?,
            facebook_link: row.get(8)?,
            image_link: row.get(9)?,
            seeking_talent: row.get(10)?,
            seeking_description: row.get(11)?,
        },
    })
}
