//! Trade tick data structure.

use chrono::NaiveDateTime;

/// A single recorded transaction, already converted to exchange-local time
/// and restricted to the regular session by the loader.
///
/// Invariants expected from upstream: `price > 0`, `size > 0`, timestamps
/// non-decreasing within a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trade {
    /// Exchange-local wall-clock time of the trade.
    pub timestamp: NaiveDateTime,
    /// Trade price in the working currency unit.
    pub price: f64,
    /// Trade size in shares.
    pub size: f64,
}

impl Trade {
    pub fn new(timestamp: NaiveDateTime, price: f64, size: f64) -> Self {
        Self {
            timestamp,
            price,
            size,
        }
    }
}
