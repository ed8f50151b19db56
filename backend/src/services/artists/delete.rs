use crate::db::Store;
use crate::error::{BookingError, BookingResult};
use crate::mutations;
use crate::services::{render, with_connection};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use common::model::notice::Notice;

pub async fn process(
    store: web::Data<Store>,
    artist_id: web::Path<i64>,
) -> BookingResult<HttpResponse> {
    let artist_id = artist_id.into_inner();
    let deleted =
        with_connection(&store, move |conn| mutations::artists::delete_artist(conn, artist_id))
            .await;

    match deleted {
        Ok(Some(name)) => Ok(render::with_notice(
            "pages/home",
            (),
            Notice::success(format!("Artist {name} was successfully deleted.")),
        )),
        Ok(None) => Ok(render::with_notice(
            "pages/home",
            (),
            Notice::success(format!("Artist {artist_id} was already gone.")),
        )),
        Err(BookingError::Store(_)) => Ok(render::page(
            StatusCode::SERVICE_UNAVAILABLE,
            "pages/home",
            (),
            Some(Notice::error(format!(
                "An error occurred. Artist {artist_id} could not be removed."
            ))),
        )),
        Err(other) => Err(other),
    }
}
