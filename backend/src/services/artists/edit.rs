use crate::db::Store;
use crate::error::{BookingError, BookingResult};
use crate::forms::{self, FlagRule, FormData, FormPage};
use crate::services::{now, render, with_connection, EditOutcome};
use crate::{mutations, repository};
use actix_web::{web, HttpResponse};
use common::model::notice::Notice;

const TEMPLATE: &str = "forms/edit_artist";

pub async fn form(
    store: web::Data<Store>,
    artist_id: web::Path<i64>,
) -> BookingResult<HttpResponse> {
    let artist_id = artist_id.into_inner();
    let artist =
        with_connection(&store, move |conn| repository::artists::get(conn, artist_id)).await?;
    Ok(render::ok(
        TEMPLATE,
        FormPage::new(artist.fields).with_choices().for_record(artist.id),
    ))
}

/// Full replace of the artist's fields; `seeking_venue` is true when the key
/// is present at all.
pub async fn process(
    store: web::Data<Store>,
    artist_id: web::Path<i64>,
    body: web::Form<Vec<(String, String)>>,
) -> BookingResult<HttpResponse> {
    let artist_id = artist_id.into_inner();
    let form = FormData::from(body.into_inner());
    let name = form.text("name");

    let fields = match forms::parse_artist(&form, FlagRule::Presence) {
        Ok(fields) => fields,
        Err(BookingError::Validation(errors)) => {
            return Ok(render::form_rejected(
                TEMPLATE,
                FormPage::new(form.values())
                    .with_choices()
                    .with_errors(&errors)
                    .for_record(artist_id),
                Notice::error(format!("Artist {name} could not be changed.")),
            ));
        }
        Err(other) => return Err(other),
    };

    let outcome = with_connection(&store, move |conn| {
        match mutations::artists::update_artist(conn, artist_id, &fields) {
            Ok(()) => Ok(EditOutcome::Saved(repository::artists::detail(
                conn,
                artist_id,
                now(),
            )?)),
            Err(BookingError::Store(_)) => Ok(EditOutcome::RolledBack(
                repository::artists::get(conn, artist_id)?,
            )),
            Err(other) => Err(other),
        }
    })
    .await?;

    Ok(match outcome {
        EditOutcome::Saved(detail) => render::with_notice(
            "pages/show_artist",
            detail,
            Notice::success(format!("Artist {name} was successfully updated!")),
        ),
        EditOutcome::RolledBack(artist) => render::form_failed(
            TEMPLATE,
            FormPage::new(artist.fields).with_choices().for_record(artist_id),
            Notice::error(format!("An error occurred! Artist {name} could not be changed.")),
        ),
    })
}
