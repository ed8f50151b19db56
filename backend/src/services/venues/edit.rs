use crate::db::Store;
use crate::error::{BookingError, BookingResult};
use crate::forms::{self, FlagRule, FormData, FormPage};
use crate::services::{now, render, with_connection, EditOutcome};
use crate::{mutations, repository};
use actix_web::{web, HttpResponse};
use common::model::notice::Notice;

const TEMPLATE: &str = "forms/edit_venue";

/// `GET /venues/{venue_id}/edit`: the form prefilled from the stored venue.
pub async fn form(
    store: web::Data<Store>,
    venue_id: web::Path<i64>,
) -> BookingResult<HttpResponse> {
    let venue_id = venue_id.into_inner();
    let venue = with_connection(&store, move |conn| repository::venues::get(conn, venue_id)).await?;
    Ok(render::ok(
        TEMPLATE,
        FormPage::new(venue.fields).with_choices().for_record(venue.id),
    ))
}

/// `POST /venues/{venue_id}/edit`: replaces every field of the venue.
///
/// On success the venue page is rendered. When the store rolls the update
/// back, the form is rendered from the venue as it is still stored, so the
/// rejected values never appear as if they had been saved.
pub async fn process(
    store: web::Data<Store>,
    venue_id: web::Path<i64>,
    body: web::Form<Vec<(String, String)>>,
) -> BookingResult<HttpResponse> {
    let venue_id = venue_id.into_inner();
    let form = FormData::from(body.into_inner());
    let name = form.text("name");

    let fields = match forms::parse_venue(&form, FlagRule::Presence) {
        Ok(fields) => fields,
        Err(BookingError::Validation(errors)) => {
            return Ok(render::form_rejected(
                TEMPLATE,
                FormPage::new(form.values())
                    .with_choices()
                    .with_errors(&errors)
                    .for_record(venue_id),
                Notice::error(format!("Venue {name} could not be changed.")),
            ));
        }
        Err(other) => return Err(other),
    };

    let outcome = with_connection(&store, move |conn| {
        match mutations::venues::update_venue(conn, venue_id, &fields) {
            Ok(()) => Ok(EditOutcome::Saved(repository::venues::detail(
                conn,
                venue_id,
                now(),
            )?)),
            Err(BookingError::Store(_)) => Ok(EditOutcome::RolledBack(repository::venues::get(
                conn, venue_id,
            )?)),
            Err(other) => Err(other),
        }
    })
    .await?;

    Ok(match outcome {
        EditOutcome::Saved(detail) => render::with_notice(
            "pages/show_venue",
            detail,
            Notice::success(format!("Venue {name} was successfully updated!")),
        ),
        EditOutcome::RolledBack(venue) => render::form_failed(
            TEMPLATE,
            FormPage::new(venue.fields).with_choices().for_record(venue_id),
            Notice::error(format!("An error occurred! Venue {name} could not be changed.")),
        ),
    })
}
