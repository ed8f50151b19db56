use crate::db::Store;
use crate::error::BookingResult;
use crate::repository;
use crate::services::{render, with_connection};
use actix_web::{web, HttpResponse};
use common::requests::SearchRequest;

pub async fn process(
    store: web::Data<Store>,
    request: web::Form<SearchRequest>,
) -> BookingResult<HttpResponse> {
    let term = request.into_inner().search_term;
    let results =
        with_connection(&store, move |conn| repository::artists::search(conn, &term)).await?;
    Ok(render::ok("pages/search_artists", results))
}
