//! `GET|POST /shows/create`.
//!
//! The referenced artist and venue are not looked up first: the insert runs
//! against the foreign keys, and a dangling id rolls the attempt back like any
//! other store failure.

use crate::db::Store;
use crate::error::{BookingError, BookingResult};
use crate::forms::{self, FormData, FormPage};
use crate::mutations;
use crate::services::render::{self, Created};
use crate::services::{now, with_connection};
use actix_web::{web, HttpResponse};
use common::model::notice::Notice;
use common::timestamp;
use std::collections::BTreeMap;

const TEMPLATE: &str = "forms/new_show";
const FAILED: &str = "An error occurred. Show could not be listed.";

/// Blank show form; the start time defaults to the current time.
pub async fn form() -> HttpResponse {
    let values = BTreeMap::from([
        ("artist_id", String::new()),
        ("venue_id", String::new()),
        ("start_time", timestamp::format(&now())),
    ]);
    render::ok(TEMPLATE, FormPage::new(values))
}

pub async fn process(
    store: web::Data<Store>,
    body: web::Form<Vec<(String, String)>>,
) -> BookingResult<HttpResponse> {
    let form = FormData::from(body.into_inner());

    let show = match forms::parse_show(&form) {
        Ok(show) => show,
        Err(BookingError::Validation(errors)) => {
            return Ok(render::form_rejected(
                TEMPLATE,
                FormPage::new(form.values()).with_errors(&errors),
                Notice::error(FAILED),
            ));
        }
        Err(other) => return Err(other),
    };

    match with_connection(&store, move |conn| mutations::shows::create_show(conn, &show)).await {
        Ok(id) => Ok(render::with_notice(
            "pages/home",
            Created { id },
            Notice::success("Show was successfully listed!"),
        )),
        Err(BookingError::Store(_)) => Ok(render::form_failed(
            TEMPLATE,
            FormPage::new(form.values()),
            Notice::error(FAILED),
        )),
        Err(other) => Err(other),
    }
}
