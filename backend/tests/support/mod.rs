#![allow(dead_code)]

use backend::db::{self, Store};
use backend::mutations;
use chrono::{NaiveDate, NaiveDateTime};
use common::model::artist::ArtistFields;
use common::model::show::NewShow;
use common::model::venue::VenueFields;
use rusqlite::Connection;
use std::time::Duration;
use tempfile::TempDir;

pub fn memory_db() -> Connection {
    db::open_in_memory().unwrap()
}

/// A file-backed store; keep the `TempDir` alive for as long as the store.
pub fn temp_store() -> (TempDir, Store) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path().join("booking.sqlite")).unwrap();
    (dir, store)
}

/// True when no connection still holds a lock on the database, i.e. every
/// unit of work released its connection and transaction.
pub fn store_is_unlocked(store: &Store) -> bool {
    let conn = store.connect().unwrap();
    conn.busy_timeout(Duration::ZERO).unwrap();
    conn.execute_batch("BEGIN EXCLUSIVE; ROLLBACK;").is_ok()
}

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

pub fn venue_fields(name: &str, city: &str, state: &str) -> VenueFields {
    VenueFields {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: "123-123-1234".to_string(),
        genres: vec!["Jazz".to_string(), "Reggae".to_string()],
        website: "https://www.themusicalhop.com".to_string(),
        facebook_link: "https://www.facebook.com/TheMusicalHop".to_string(),
        image_link: format!("https://img.example.com/{}.png", name.len()),
        seeking_talent: true,
        seeking_description: "We are on the lookout for a local artist".to_string(),
    }
}

pub fn artist_fields(name: &str) -> ArtistFields {
    ArtistFields {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: "326-123-5000".to_string(),
        genres: vec!["Rock n Roll".to_string()],
        website: "https://www.gunsnpetalsband.com".to_string(),
        facebook_link: "https://www.facebook.com/GunsNPetals".to_string(),
        image_link: format!("https://img.example.com/artist-{}.png", name.len()),
        seeking_venue: false,
        seeking_description: String::new(),
    }
}

pub fn add_venue(conn: &mut Connection, name: &str, city: &str, state: &str) -> i64 {
    mutations::venues::create_venue(conn, &venue_fields(name, city, state)).unwrap()
}

pub fn add_artist(conn: &mut Connection, name: &str) -> i64 {
    mutations::artists::create_artist(conn, &artist_fields(name)).unwrap()
}

pub fn add_show(conn: &mut Connection, artist_id: i64, venue_id: i64, start: NaiveDateTime) -> i64 {
    mutations::shows::create_show(
        conn,
        &NewShow {
            artist_id,
            venue_id,
            start_time: start,
        },
    )
    .unwrap()
}

/// Makes every insert into or update of `table` with `name = 'Explode'` fail
/// inside the store.
pub fn install_failing_trigger(conn: &Connection, table: &str) {
    conn.execute_batch(&format!(
        "CREATE TRIGGER fail_{table}_insert BEFORE INSERT ON {table}
         WHEN NEW.name = 'Explode'
         BEGIN SELECT RAISE(ABORT, 'store refused'); END;
         CREATE TRIGGER fail_{table}_update BEFORE UPDATE ON {table}
         WHEN NEW.name = 'Explode'
         BEGIN SELECT RAISE(ABORT, 'store refused'); END;"
    ))
    .unwrap();
}
