//! Artist pages and artist mutations, routed under `/artists`.

mod create;
mod delete;
mod detail;
mod edit;
mod list;
mod search;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/artists";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/search", post().to(search::process))
        .route("/create", get().to(create::form))
        .route("/create", post().to(create::process))
        .route("/{artist_id:\\d+}", get().to(detail::process))
        .route("/{artist_id:\\d+}", delete().to(delete::process))
        .route("/{artist_id:\\d+}/edit", get().to(edit::form))
        .route("/{artist_id:\\d+}/edit", post().to(edit::process))
}
