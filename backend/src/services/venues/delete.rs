use crate::db::Store;
use crate::error::{BookingError, BookingResult};
use crate::mutations;
use crate::services::{render, with_connection};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use common::model::notice::Notice;

/// `DELETE /venues/{venue_id}`. Deleting a venue that does not exist succeeds.
pub async fn process(
    store: web::Data<Store>,
    venue_id: web::Path<i64>,
) -> BookingResult<HttpResponse> {
    let venue_id = venue_id.into_inner();
    let deleted =
        with_connection(&store, move |conn| mutations::venues::delete_venue(conn, venue_id)).await;

    match deleted {
        Ok(Some(name)) => Ok(render::with_notice(
            "pages/home",
            (),
            Notice::success(format!("Venue {name} was successfully deleted.")),
        )),
        Ok(None) => Ok(render::with_notice(
            "pages/home",
            (),
            Notice::success(format!("Venue {venue_id} was already gone.")),
        )),
        Err(BookingError::Store(_)) => Ok(render::page(
            StatusCode::SERVICE_UNAVAILABLE,
            "pages/home",
            (),
            Some(Notice::error(format!(
                "An error occurred. Venue {venue_id} could not be removed."
            ))),
        )),
        Err(other) => Err(other),
    }
}
