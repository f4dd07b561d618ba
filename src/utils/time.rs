//! Time utilities

use chrono::{DateTime, Datelike, Utc};

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Current calendar year (UTC)
pub fn current_year() -> i32 {
    now_utc().year()
}
