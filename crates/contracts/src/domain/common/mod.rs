//! Helpers shared by the mock datasets

pub mod seed;

pub use seed::{iso_date, pick};
