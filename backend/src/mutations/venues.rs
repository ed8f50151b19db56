use crate::error::{BookingError, BookingResult, Entity};
use crate::mutations::transact;
use crate::repository::encode_genres;
use common::model::venue::VenueFields;
use rusqlite::{params, Connection, OptionalExtension};

/// Inserts a venue and returns its id.
pub fn create_venue(conn: &mut Connection, fields: &VenueFields) -> BookingResult<i64> {
    let genres = encode_genres(&fields.genres)?;
    transact(conn, "create venue", |tx| {
        tx.execute(
            "INSERT INTO venues (
                name, city, state, address, phone, genres, website,
                facebook_link, image_link, seeking_talent, seeking_description
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                fields.name,
                fields.city,
                fields.state,
                fields.address,
                fields.phone,
                genres,
                fields.website,
                fields.facebook_link,
                fields.image_link,
                fields.seeking_talent,
                fields.seeking_description,
            ],
        )?;
        Ok(tx.last_insert_rowid())
    })
}

/// Replaces every mutable field of venue `venue_id`.
pub fn update_venue(
    conn: &mut Connection,
    venue_id: i64,
    fields: &VenueFields,
) -> BookingResult<()> {
    let genres = encode_genres(&fields.genres)?;
    transact(conn, "update venue", |tx| {
        let changed = tx.execute(
            "UPDATE venues SET
                name = ?2, city = ?3, state = ?4, address = ?5, phone = ?6,
                genres = ?7, website = ?8, facebook_link = ?9, image_link = ?10,
                seeking_talent = ?11, seeking_description = ?12
             WHERE id = ?1",
            params![
                venue_id,
                fields.name,
                fields.city,
                fields.state,
                fields.address,
                fields.phone,
                genres,
                fields.website,
                fields.facebook_link,
                fields.image_link,
                fields.seeking_talent,
                fields.seeking_description,
            ],
        )?;
        if changed == 0 {
            return Err(BookingError::not_found(Entity::Venue, venue_id));
        }
        Ok(())
    })
}

/// Deletes venue `venue_id` together with its shows.
///
/// Returns the deleted venue's name, or `None` when no venue matched; deleting
/// nothing is not an error.
pub fn delete_venue(conn: &mut Connection, venue_id: i64) -> BookingResult<Option<String>> {
    transact(conn, "delete venue", |tx| {
        let name: Option<String> = tx
            .query_row(
                "SELECT name FROM venues WHERE id = ?1",
                params![venue_id],
                |row| row.get(0),
            )
            .optional()?;
        tx.execute("DELETE FROM venues WHERE id = ?1", params![venue_id])?;
        Ok(name)
    })
}
