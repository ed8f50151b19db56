use crate::error::{BookingError, BookingResult, Entity};
use crate::mutations::transact;
use crate::repository::encode_genres;
use common::model::artist::ArtistFields;
use rusqlite::{params, Connection, OptionalExtension};

pub fn create_artist(conn: &mut Connection, fields: &ArtistFields) -> BookingResult<i64> {
    let genres = encode_genres(&fields.genres)?;
    transact(conn, "create artist", |tx| {
        tx.execute(
            "INSERT INTO artists (
                name, city, state, phone, genres, website,
                facebook_link, image_link, seeking_venue, seeking_description
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                fields.name,
                fields.city,
                fields.state,
                fields.phone,
                genres,
                fields.website,
                fields.facebook_link,
                fields.image_link,
                fields.seeking_venue,
                fields.seeking_description,
            ],
        )?;
        Ok(tx.last_insert_rowid())
    })
}

pub fn update_artist(
    conn: &mut Connection,
    artist_id: i64,
    fields: &ArtistFields,
) -> BookingResult<()> {
    let genres = encode_genres(&fields.genres)?;
    transact(conn, "update artist", |tx| {
        let changed = tx.execute(
            "UPDATE artists SET
                name = ?2, city = ?3, state = ?4, phone = ?5, genres = ?6,
                website = ?7, facebook_link = ?8, image_link = ?9,
                seeking_venue = ?10, seeking_description = ?11
             WHERE id = ?1",
            params![
                artist_id,
                fields.name,
                fields.city,
                fields.state,
                fields.phone,
                genres,
                fields.website,
                fields.facebook_link,
                fields.image_link,
                fields.seeking_venue,
                fields.seeking_description,
            ],
        )?;
        if changed == 0 {
            return Err(BookingError::not_found(Entity::Artist, artist_id));
        }
        Ok(())
    })
}

/// Deletes artist `artist_id` together with its shows. Zero matches is fine.
pub fn delete_artist(conn: &mut Connection, artist_id: i64) -> BookingResult<Option<String>> {
    transact(conn, "delete artist", |tx| {
        let name: Option<String> = tx
            .query_row(
                "SELECT name FROM artists WHERE id = ?1",
                params![artist_id],
                |row| row.get(0),
            )
            .optional()?;
        tx.execute("DELETE FROM artists WHERE id = ?1", params![artist_id])?;
        Ok(name)
    })
}
