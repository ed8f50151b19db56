//! Page responses.
//!
//! Templating lives outside this server: every page goes out as a JSON
//! document naming the template to render, the one-shot notices to show with
//! it and the page data.

use crate::error::BookingError;
use actix_web::error::{InternalError, PathError, UrlencodedError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use common::model::notice::{FieldError, Notice};
use log::error;
use serde::Serialize;

#[derive(Serialize)]
struct Page<'a, T: Serialize> {
    template: &'a str,
    notices: Vec<Notice>,
    data: T,
}

/// Id of a record created by the submission that led to this page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Created {
    pub id: i64,
}

pub fn page<T: Serialize>(
    status: StatusCode,
    template: &str,
    data: T,
    notice: Option<Notice>,
) -> HttpResponse {
    HttpResponse::build(status).json(Page {
        template,
        notices: notice.into_iter().collect(),
        data,
    })
}

pub fn ok<T: Serialize>(template: &str, data: T) -> HttpResponse {
    page(StatusCode::OK, template, data, None)
}

pub fn with_notice<T: Serialize>(template: &str, data: T, notice: Notice) -> HttpResponse {
    page(StatusCode::OK, template, data, Some(notice))
}

/// The submitted form again, after validation rejected it.
pub fn form_rejected<T: Serialize>(template: &str, data: T, notice: Notice) -> HttpResponse {
    page(StatusCode::BAD_REQUEST, template, data, Some(notice))
}

/// The form again, after the store rolled the attempt back.
pub fn form_failed<T: Serialize>(template: &str, data: T, notice: Notice) -> HttpResponse {
    page(StatusCode::SERVICE_UNAVAILABLE, template, data, Some(notice))
}

pub fn not_found() -> HttpResponse {
    page(StatusCode::NOT_FOUND, "errors/404", (), None)
}

pub fn bad_request(errors: &[FieldError]) -> HttpResponse {
    page(StatusCode::BAD_REQUEST, "errors/400", errors, None)
}

pub fn server_error() -> HttpResponse {
    page(StatusCode::INTERNAL_SERVER_ERROR, "errors/500", (), None)
}

/// Default service: anything no route matched.
pub async fn not_found_page() -> HttpResponse {
    not_found()
}

/// Ids that match `\d+` but do not fit an `i64` are unknown records.
pub fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    InternalError::from_response(err, not_found()).into()
}

pub fn form_error(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    let field = FieldError::new("body", err.to_string());
    InternalError::from_response(err, bad_request(&[field])).into()
}

impl ResponseError for BookingError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::NotFound { .. } => not_found(),
            Self::Validation(errors) => bad_request(errors.fields()),
            other => {
                error!("unhandled failure: {other}");
                server_error()
            }
        }
    }
}
