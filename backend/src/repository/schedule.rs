//! Past/upcoming classification of shows.
//!
//! The split is recomputed on every read from the start time and the
//! evaluation instant; nothing about it is stored. Both comparisons are
//! strict, so a show starting exactly at the evaluation instant is in neither
//! list.

use chrono::NaiveDateTime;
use common::model::show::{BookedShow, ShowSchedule};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTiming {
    Past,
    Upcoming,
}

impl ShowTiming {
    pub fn classify(start_time: NaiveDateTime, now: NaiveDateTime) -> Option<Self> {
        match start_time.cmp(&now) {
            Ordering::Less => Some(Self::Past),
            Ordering::Greater => Some(Self::Upcoming),
            Ordering::Equal => None,
        }
    }
}

/// Splits shows around `now`, keeping their relative order.
pub fn partition(shows: Vec<BookedShow>, now: NaiveDateTime) -> ShowSchedule {
    let mut schedule = ShowSchedule::default();
    for show in shows {
        match ShowTiming::classify(show.start_time, now) {
            Some(ShowTiming::Past) => schedule.past_shows.push(show),
            Some(ShowTiming::Upcoming) => schedule.upcoming_shows.push(show),
            None => {}
        }
    }
    schedule.past_shows_count = schedule.past_shows.len();
    schedule.upcoming_shows_count = schedule.upcoming_shows.len();
    schedule
}
