//! Form submissions: decoding the urlencoded body and validating it into the
//! domain field sets.
//!
//! Values that pass validation are kept exactly as submitted. The seeking
//! flags are read differently by the create and edit forms (see [`FlagRule`]).

use crate::error::{BookingError, BookingResult, ValidationErrors};
use common::model::artist::ArtistFields;
use common::model::choices::{self, FormChoices};
use common::model::notice::FieldError;
use common::model::show::NewShow;
use common::model::venue::VenueFields;
use common::timestamp;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

const REQUIRED: &str = "This field is required.";

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 ().\-]{5,18}[0-9]$").expect("phone pattern"));
static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("url pattern"));

/// The decoded pairs of an `application/x-www-form-urlencoded` body.
///
/// Repeated keys (`genres`) keep every value in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First value submitted under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First value under `key`, or `""` when the key is absent.
    pub fn text(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }

    pub fn get_all(&self, key: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// The submission as `field -> values`, for re-rendering a rejected form.
    pub fn values(&self) -> SubmittedValues {
        let mut values = SubmittedValues::new();
        for (key, value) in &self.pairs {
            values.entry(key.clone()).or_default().push(value.clone());
        }
        values
    }
}

impl From<Vec<(String, String)>> for FormData {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::new(pairs)
    }
}

pub type SubmittedValues = BTreeMap<String, Vec<String>>;

/// How a checkbox-like seeking flag is read from a submission.
///
/// The create forms send `"Yes"`/`"No"` and only `"Yes"` counts. The edit forms
/// send the key only when the box is ticked, so any value counts, even `"No"`.
/// The two paths disagree on a submitted `"No"`; both readings are kept as they
/// are until the forms agree on one encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagRule {
    /// True only when the value is exactly `"Yes"`.
    ExactYes,
    /// True whenever the key is present.
    Presence,
}

impl FlagRule {
    pub fn read(self, form: &FormData, key: &str) -> bool {
        match self {
            Self::ExactYes => form.get(key) == Some("Yes"),
            Self::Presence => form.contains(key),
        }
    }
}

/// Data of every page that carries a form.
///
/// `values` prefill the inputs: the persisted record on an edit page, the raw
/// submission when a form is rendered again after a rejected attempt.
#[derive(Debug, Clone, Serialize)]
pub struct FormPage<V: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub values: V,
    pub errors: Vec<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<FormChoices>,
}

impl<V: Serialize> FormPage<V> {
    pub fn new(values: V) -> Self {
        Self {
            id: None,
            values,
            errors: Vec::new(),
            choices: None,
        }
    }

    /// Adds the genre and state lists of the venue and artist forms.
    pub fn with_choices(mut self) -> Self {
        self.choices = Some(FormChoices::default());
        self
    }

    pub fn with_errors(mut self, errors: &ValidationErrors) -> Self {
        self.errors = errors.fields().to_vec();
        self
    }

    /// Marks the form as editing record `id`.
    pub fn for_record(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

pub fn parse_venue(form: &FormData, flag: FlagRule) -> BookingResult<VenueFields> {
    let mut errors = ValidationErrors::default();
    let fields = VenueFields {
        name: form.text("name"),
        city: form.text("city"),
        state: form.text("state"),
        address: form.text("address"),
        phone: form.text("phone"),
        genres: dedup(form.get_all("genres")),
        website: form.text("website"),
        facebook_link: form.text("facebook_link"),
        image_link: form.text("image_link"),
        seeking_talent: flag.read(form, "seeking_talent"),
        seeking_description: form.text("seeking_description"),
    };

    check_required(&mut errors, "name", &fields.name);
    check_required(&mut errors, "city", &fields.city);
    check_state(&mut errors, &fields.state);
    check_required(&mut errors, "address", &fields.address);
    check_phone(&mut errors, &fields.phone);
    check_genres(&mut errors, &fields.genres);
    check_url(&mut errors, "website", &fields.website);
    check_url(&mut errors, "facebook_link", &fields.facebook_link);
    check_url(&mut errors, "image_link", &fields.image_link);

    errors.into_result(fields)
}

pub fn parse_artist(form: &FormData, flag: FlagRule) -> BookingResult<ArtistFields> {
    let mut errors = ValidationErrors::default();
    let fields = ArtistFields {
        name: form.text("name"),
        city: form.text("city"),
        state: form.text("state"),
        phone: form.text("phone"),
        genres: dedup(form.get_all("genres")),
        website: form.text("website"),
        facebook_link: form.text("facebook_link"),
        image_link: form.text("image_link"),
        seeking_venue: flag.read(form, "seeking_venue"),
        seeking_description: form.text("seeking_description"),
    };

    check_required(&mut errors, "name", &fields.name);
    check_required(&mut errors, "city", &fields.city);
    check_state(&mut errors, &fields.state);
    check_phone(&mut errors, &fields.phone);
    check_genres(&mut errors, &fields.genres);
    check_url(&mut errors, "website", &fields.website);
    check_url(&mut errors, "facebook_link", &fields.facebook_link);
    check_url(&mut errors, "image_link", &fields.image_link);

    errors.into_result(fields)
}

pub fn parse_show(form: &FormData) -> BookingResult<NewShow> {
    let mut errors = ValidationErrors::default();
    let artist_id = parse_id(&mut errors, form, "artist_id");
    let venue_id = parse_id(&mut errors, form, "venue_id");

    let raw_start = form.text("start_time");
    let start_time = if raw_start.trim().is_empty() {
        errors.push("start_time", REQUIRED);
        None
    } else {
        let parsed = timestamp::parse(&raw_start);
        if parsed.is_none() {
            errors.push("start_time", "Not a valid datetime value.");
        }
        parsed
    };

    match (artist_id, venue_id, start_time) {
        (Some(artist_id), Some(venue_id), Some(start_time)) if errors.is_empty() => Ok(NewShow {
            artist_id,
            venue_id,
            start_time,
        }),
        _ => Err(BookingError::Validation(errors)),
    }
}

fn parse_id(errors: &mut ValidationErrors, form: &FormData, key: &str) -> Option<i64> {
    let raw = form.text(key);
    if raw.trim().is_empty() {
        errors.push(key, REQUIRED);
        return None;
    }
    match raw.trim().parse() {
        Ok(id) => Some(id),
        Err(_) => {
            errors.push(key, "Not a valid integer value.");
            None
        }
    }
}

fn dedup(values: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    unique
}

fn check_required(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(field, REQUIRED);
    }
}

fn check_state(errors: &mut ValidationErrors, value: &str) {
    if value.trim().is_empty() {
        errors.push("state", REQUIRED);
    } else if !choices::is_state(value) {
        errors.push("state", "Not a valid choice.");
    }
}

fn check_phone(errors: &mut ValidationErrors, value: &str) {
    if !value.is_empty() && !PHONE_RE.is_match(value) {
        errors.push("phone", "Invalid phone number.");
    }
}

fn check_genres(errors: &mut ValidationErrors, genres: &[String]) {
    if genres.is_empty() {
        errors.push("genres", REQUIRED);
    } else if let Some(unknown) = genres.iter().find(|g| !choices::is_genre(g)) {
        errors.push("genres", &format!("'{unknown}' is not a valid choice."));
    }
}

fn check_url(errors: &mut ValidationErrors, field: &str, value: &str) {
    if !value.is_empty() && !URL_RE.is_match(value) {
        errors.push(field, "Invalid URL.");
    }
}
