use crate::services::render;
use actix_web::HttpResponse;

pub async fn process() -> HttpResponse {
    render::ok("pages/home", ())
}
