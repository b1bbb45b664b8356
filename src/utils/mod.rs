//! Shared helpers: timestamp formatting and message pluralization.

pub mod date;
pub mod plural;
