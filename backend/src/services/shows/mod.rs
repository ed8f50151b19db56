mod create;
mod list;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/shows";

/// Shows can be listed and created; there is no edit or delete route.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/create", get().to(create::form))
        .route("/create", post().to(create::process))
}
