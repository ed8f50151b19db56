//! Error kinds shared by the query layer, the mutation service and the HTTP
//! handlers.
//!
//! Handlers tell the kinds apart to pick a response: `NotFound` renders the
//! 404 page, `Validation` re-renders the submitted form, `Store` becomes a
//! rolled-back attempt with a failure notice, everything else is a 500.

use common::model::notice::FieldError;
use std::fmt::{Display, Formatter};
use thiserror::Error;

pub type BookingResult<T> = Result<T, BookingError>;

/// The record kinds an id can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Venue,
    Artist,
}

impl Display for Entity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Venue => "venue",
            Self::Artist => "artist",
        };
        f.write_str(name)
    }
}

/// Every field-level reason a submission was rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn push(&mut self, field: &str, message: &str) {
        self.0.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    /// `Ok(value)` when nothing was rejected.
    pub fn into_result<T>(self, value: T) -> BookingResult<T> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(BookingError::Validation(self))
        }
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("{entity} {id} does not exist")]
    NotFound { entity: Entity, id: i64 },
    #[error("submission rejected: {0}")]
    Validation(ValidationErrors),
    #[error("store failure: {0}")]
    Store(#[from] rusqlite::Error),
    #[error("database schema version {found} is newer than supported {supported}")]
    UnsupportedSchema { found: u32, supported: u32 },
    #[error("`{0}` is an in-memory database; point BOOKING_DATABASE at a file")]
    InMemoryStore(String),
    #[error("request worker failed: {0}")]
    Fatal(String),
}

impl BookingError {
    pub fn not_found(entity: Entity, id: i64) -> Self {
        Self::NotFound { entity, id }
    }
}
