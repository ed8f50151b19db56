use crate::db::Store;
use crate::error::BookingResult;
use crate::repository;
use crate::services::{render, with_connection};
use actix_web::{web, HttpResponse};

pub async fn process(store: web::Data<Store>) -> BookingResult<HttpResponse> {
    let artists = with_connection(&store, |conn| repository::artists::list(conn)).await?;
    Ok(render::ok("pages/artists", artists))
}
