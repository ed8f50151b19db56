//! Show records and the views built around them.
//!
//! A show is one booking of an artist at a venue. It has no fields of its own
//! beyond the start time, so most of what gets rendered is a projection of the
//! joined venue and artist rows.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A validated show submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShow {
    pub artist_id: i64,
    pub venue_id: i64,
    #[serde(with = "crate::timestamp")]
    pub start_time: NaiveDateTime,
}

/// One row of the `/shows` page: the show joined with both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowListing {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    #[serde(with = "crate::timestamp")]
    pub start_time: NaiveDateTime,
}

/// A show seen from one side of the booking.
///
/// On a venue page the counterpart is the artist, on an artist page it is the
/// venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedShow {
    pub counterpart_id: i64,
    pub counterpart_name: String,
    pub counterpart_image_link: String,
    #[serde(with = "crate::timestamp")]
    pub start_time: NaiveDateTime,
}

/// Shows of one venue or artist, split around the evaluation instant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowSchedule {
    pub past_shows: Vec<BookedShow>,
    pub upcoming_shows: Vec<BookedShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}
