use crate::db::Store;
use crate::error::{BookingError, BookingResult};
use crate::forms::{self, FlagRule, FormData, FormPage};
use crate::mutations;
use crate::services::render::{self, Created};
use crate::services::with_connection;
use actix_web::{web, HttpResponse};
use common::model::artist::ArtistFields;
use common::model::notice::Notice;

const TEMPLATE: &str = "forms/new_artist";

pub async fn form() -> HttpResponse {
    render::ok(TEMPLATE, FormPage::new(ArtistFields::default()).with_choices())
}

pub async fn process(
    store: web::Data<Store>,
    body: web::Form<Vec<(String, String)>>,
) -> BookingResult<HttpResponse> {
    let form = FormData::from(body.into_inner());
    let name = form.text("name");

    let fields = match forms::parse_artist(&form, FlagRule::ExactYes) {
        Ok(fields) => fields,
        Err(BookingError::Validation(errors)) => {
            return Ok(render::form_rejected(
                TEMPLATE,
                FormPage::new(form.values()).with_choices().with_errors(&errors),
                Notice::error(format!("Artist {name} could not be listed.")),
            ));
        }
        Err(other) => return Err(other),
    };

    let submitted = fields.clone();
    match with_connection(&store, move |conn| {
        mutations::artists::create_artist(conn, &submitted)
    })
    .await
    {
        Ok(id) => Ok(render::with_notice(
            "pages/home",
            Created { id },
            Notice::success(format!("Artist {name} was successfully listed!")),
        )),
        Err(BookingError::Store(_)) => Ok(render::form_failed(
            TEMPLATE,
            FormPage::new(fields).with_choices(),
            Notice::error(format!("An error occurred. Artist {name} could not be listed.")),
        )),
        Err(other) => Err(other),
    }
}
