//! `GET|POST /venues/create`.
//!
//! A rejected submission comes back as the form with field errors. A
//! submission the store refuses is rolled back and also comes back as the
//! form, with a notice naming the venue. Only a committed insert moves on to
//! the home page.

use crate::db::Store;
use crate::error::{BookingError, BookingResult};
use crate::forms::{self, FlagRule, FormData, FormPage};
use crate::mutations;
use crate::services::render::{self, Created};
use crate::services::with_connection;
use actix_web::{web, HttpResponse};
use common::model::notice::Notice;
use common::model::venue::VenueFields;

const TEMPLATE: &str = "forms/new_venue";

pub async fn form() -> HttpResponse {
    render::ok(TEMPLATE, FormPage::new(VenueFields::default()).with_choices())
}

pub async fn process(
    store: web::Data<Store>,
    body: web::Form<Vec<(String, String)>>,
) -> BookingResult<HttpResponse> {
    let form = FormData::from(body.into_inner());
    let name = form.text("name");

    let fields = match forms::parse_venue(&form, FlagRule::ExactYes) {
        Ok(fields) => fields,
        Err(BookingError::Validation(errors)) => {
            return Ok(render::form_rejected(
                TEMPLATE,
                FormPage::new(form.values()).with_choices().with_errors(&errors),
                Notice::error(format!("Venue {name} could not be listed.")),
            ));
        }
        Err(other) => return Err(other),
    };

    let submitted = fields.clone();
    match with_connection(&store, move |conn| {
        mutations::venues::create_venue(conn, &submitted)
    })
    .await
    {
        Ok(id) => Ok(render::with_notice(
            "pages/home",
            Created { id },
            Notice::success(format!("Venue {name} was successfully listed!")),
        )),
        Err(BookingError::Store(_)) => Ok(render::form_failed(
            TEMPLATE,
            FormPage::new(fields).with_choices(),
            Notice::error(format!("An error occurred. Venue {name} could not be listed.")),
        )),
        Err(other) => Err(other),
    }
}
