//! Utility functions

pub mod time;
pub mod validation;

pub use time::{current_year, now_utc};
