use crate::error::{BookingError, BookingResult, Entity};
use crate::repository::schedule;
use crate::repository::shows::{self, Perspective};
use crate::repository::{decode_genres, name_matches};
use chrono::NaiveDateTime;
use common::model::artist::{Artist, ArtistDetail, ArtistFields, ArtistSummary};
use common::model::search::SearchResults;
use rusqlite::{params, Connection, OptionalExtension, Row};

const ARTIST_COLUMNS: &str = "id, name, city, state, phone, genres, website, facebook_link, \
     image_link, seeking_venue, seeking_description";

/// `{id, name}` of every artist in storage order.
pub fn list(conn: &Connection) -> BookingResult<Vec<ArtistSummary>> {
    let mut stmt = conn.prepare("SELECT id, name FROM artists ORDER BY id ASC")?;
    let artists = stmt
        .query_map([], |row| {
            Ok(ArtistSummary {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(artists)
}

pub fn search(conn: &Connection, term: &str) -> BookingResult<SearchResults<Artist>> {
    let matches = all(conn)?
        .into_iter()
        .filter(|artist| name_matches(&artist.fields.name, term))
        .collect();
    Ok(SearchResults::new(term, matches))
}

pub fn all(conn: &Connection) -> BookingResult<Vec<Artist>> {
    let mut stmt = conn.prepare(&format!("SELECT {ARTIST_COLUMNS} FROM artists ORDER BY id ASC"))?;
    let artists = stmt
        .query_map([], artist_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(artists)
}

pub fn find(conn: &Connection, artist_id: i64) -> BookingResult<Option<Artist>> {
    let artist = conn
        .query_row(
            &format!("SELECT {ARTIST_COLUMNS} FROM artists WHERE id = ?1"),
            params![artist_id],
            artist_from_row,
        )
        .optional()?;
    Ok(artist)
}

pub fn get(conn: &Connection, artist_id: i64) -> BookingResult<Artist> {
    find(conn, artist_id)?.ok_or(BookingError::not_found(Entity::Artist, artist_id))
}

/// The artist page, built from the same join as the venue page.
pub fn detail(
    conn: &Connection,
    artist_id: i64,
    now: NaiveDateTime,
) -> BookingResult<ArtistDetail> {
    let artist = get(conn, artist_id)?;
    let booked = shows::booked_shows(conn, Perspective::Artist, artist_id)?;
    Ok(ArtistDetail {
        artist,
        schedule: schedule::partition(booked, now),
    })
}

fn artist_from_row(row: &Row<'_>) -> rusqlite::Result<Artist> {
    let genres: String = row.get(5)?;
    Ok(Artist {
        id: row.get(0)?,
        fields: ArtistFields {
            name: row.get(1)?,
            city: row.get(2)?,
            state: row.get(3)?,
            phone: row.get(4)?,
            genres: decode_genres(&genres, 5)?,
            website: row.get(6)?,
            facebook_link: row.get(7)?,
            image_link: row.get(8)?,
            seeking_venue: row.get(9)?,
            seeking_description: row.get(10)?,
        },
    })
}
