use crate::db::Store;
use crate::error::BookingResult;
use crate::repository;
use crate::services::{now, render, with_connection};
use actix_web::{web, HttpResponse};

/// `GET /venues/{venue_id}`; an unknown id renders the 404 page.
pub async fn process(
    store: web::Data<Store>,
    venue_id: web::Path<i64>,
) -> BookingResult<HttpResponse> {
    let venue_id = venue_id.into_inner();
    let detail =
        with_connection(&store, move |conn| repository::venues::detail(conn, venue_id, now()))
            .await?;
    Ok(render::ok("pages/show_venue", detail))
}
