use crate::db::Store;
use crate::error::BookingResult;
use crate::repository;
use crate::services::{now, render, with_connection};
use actix_web::{web, HttpResponse};

pub async fn process(
    store: web::Data<Store>,
    artist_id: web::Path<i64>,
) -> BookingResult<HttpResponse> {
    let artist_id = artist_id.into_inner();
    let detail =
        with_connection(&store, move |conn| repository::artists::detail(conn, artist_id, now()))
            .await?;
    Ok(render::ok("pages/show_artist", detail))
}
