pub mod artist;
pub mod choices;
pub mod notice;
pub mod search;
pub mod show;
pub mod venue;
