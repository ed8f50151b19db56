//! Read side: grouping, search and join queries behind the listing and detail
//! pages.
//!
//! Every function takes the connection it runs on; nothing here keeps state
//! between calls. Detail queries take the evaluation instant explicitly so the
//! past/upcoming split is reproducible.

pub mod artists;
pub mod schedule;
pub mod shows;
pub mod venues;

use rusqlite::types::Type;

/// Decodes the JSON array stored in a `genres` column.
pub(crate) fn decode_genres(raw: &str, column: usize) -> rusqlite::Result<Vec<String>> {
    serde_json::from_str(raw).map_err(|err| {
        rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(err))
    })
}

/// Encodes genres for storage.
pub(crate) fn encode_genres(genres: &[String]) -> rusqlite::Result<String> {
    serde_json::to_string(genres).map_err(|err| rusqlite::Error::ToSqlConversionFailure(Box::new(err)))
}

/// Case-insensitive substring test used by both name searches.
pub(crate) fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}
