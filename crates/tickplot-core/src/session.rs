//! Regular trading session constants and boundary helpers.
//!
//! The session is 09:30-16:00 exchange-local time. Normalized bar times
//! map the session open to 0 and the close to [`SESSION_SECONDS`].

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Canonical session length in seconds: (16 - 9.5) * 3600.
pub const SESSION_SECONDS: f64 = (16.0 - 9.5) * 3600.0;

/// Session open, exchange-local.
pub fn session_open() -> NaiveTime {
    // 09:30:00 is always a valid wall-clock time.
    NaiveTime::from_hms_opt(9, 30, 0).expect("valid session open time")
}

/// Session close, exchange-local.
pub fn session_close() -> NaiveTime {
    NaiveTime::from_hms_opt(16, 0, 0).expect("valid session close time")
}

/// The session open and close instants for a given trading date.
pub fn session_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    (date.and_time(session_open()), date.and_time(session_close()))
}
