//! Venue pages and venue mutations.
//!
//! Routes under `/venues`:
//! - `GET ""`: venues grouped by area.
//! - `POST /search`: case-insensitive name search.
//! - `GET|POST /create`: blank form / create.
//! - `GET|DELETE /{venue_id}`: venue page with past and upcoming shows / delete.
//! - `GET|POST /{venue_id}/edit`: prefilled form / full update.

mod create;
mod delete;
mod detail;
mod edit;
mod list;
mod search;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/venues";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/search", post().to(search::process))
        .route("/create", get().to(create::form))
        .route("/create", post().to(create::process))
        .route("/{venue_id:\\d+}", get().to(detail::process))
        .route("/{venue_id:\\d+}", delete().to(delete::process))
        .route("/{venue_id:\\d+}/edit", get().to(edit::form))
        .route("/{venue_id:\\d+}/edit", post().to(edit::process))
}
