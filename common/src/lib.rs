//! Types shared by the booking backend and anything that renders its pages.
//!
//! Everything in here is plain data: serde-serializable records, the views the
//! query layer assembles, and the small amount of vocabulary (genres, states,
//! the timestamp layout) that both sides of the HTTP surface agree on.

pub mod model;
pub mod requests;
pub mod timestamp;
