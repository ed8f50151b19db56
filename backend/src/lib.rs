//! Venue, artist and show booking directory.
//!
//! - [`repository`]: area grouping, name search and the show joins behind the
//!   detail pages.
//! - [`mutations`]: create, update and delete, each a single transaction.
//! - [`services`]: the actix-web routes on top of both.

pub mod config;
pub mod db;
pub mod error;
pub mod forms;
pub mod logging;
pub mod mutations;
pub mod repository;
pub mod services;

pub use error::{BookingError, BookingResult};
