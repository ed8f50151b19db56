//! HTTP surface.
//!
//! One sub-module per resource, each exposing a `configure_routes` scope, the
//! same shape for venues, artists and shows. Handlers move store work onto the
//! blocking pool and open one store connection for the duration of it.

pub mod artists;
pub mod home;
pub mod render;
pub mod shows;
pub mod venues;

use crate::db::Store;
use crate::error::{BookingError, BookingResult};
use actix_web::web;
use chrono::{Local, NaiveDateTime};
use rusqlite::Connection;

/// Registers every route; shared by the server binary and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(render::path_error))
        .app_data(web::FormConfig::default().error_handler(render::form_error))
        .route("/", web::get().to(home::process))
        .service(venues::configure_routes())
        .service(artists::configure_routes())
        .service(shows::configure_routes())
        .default_service(web::route().to(render::not_found_page));
}

/// Runs `work` on the blocking pool with a connection opened for it.
///
/// The connection is closed when `work` returns, whatever it returns.
pub(crate) async fn with_connection<T, F>(
    store: &web::Data<Store>,
    work: F,
) -> BookingResult<T>
where
    F: FnOnce(&mut Connection) -> BookingResult<T> + Send + 'static,
    T: Send + 'static,
{
    let store = store.get_ref().clone();
    tokio::task::spawn_blocking(move || {
        let mut conn = store.connect()?;
        work(&mut conn)
    })
    .await
    .map_err(|err| BookingError::Fatal(err.to_string()))?
}

/// The instant show lists are split around.
pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Result of an edit submission that reached the store.
pub(crate) enum EditOutcome<Saved, Persisted> {
    Saved(Saved),
    /// The update was rolled back; carries the record as still persisted.
    RolledBack(Persisted),
}
