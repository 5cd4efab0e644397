//! CSV tick loading implementation.
//!
//! Reads raw (timestamp, price, size) trade records, drops zero-valued
//! rows, converts epoch timestamps to exchange-local time, keeps only the
//! regular session window and applies unit scaling. The output satisfies
//! the invariants the aggregator expects.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::TimeZone;
use chrono_tz::Tz;

use tickplot_core::session::{session_close, session_open};
use tickplot_core::Trade;

use crate::source::TickSource;
use crate::validation::validate_trade;

/// Loads trade ticks from a CSV file.
pub struct CsvTickLoader {
    path: PathBuf,
    timezone: Tz,
    price_scale: f64,
    size_scale: f64,
}

impl CsvTickLoader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            timezone: chrono_tz::America::New_York,
            price_scale: 1.0,
            size_scale: 1.0,
        }
    }

    /// Exchange timezone used to localize epoch timestamps.
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Multiplier applied to raw prices, e.g. 0.01 for cents.
    pub fn with_price_scale(mut self, scale: f64) -> Self {
        self.price_scale = scale;
        self
    }

    /// Multiplier applied to raw sizes, e.g. 100 for round lots.
    pub fn with_size_scale(mut self, scale: f64) -> Self {
        self.size_scale = scale;
        self
    }
}

impl TickSource for CsvTickLoader {
    fn load(&self) -> Result<Vec<Trade>> {
        let file = File::open(&self.path)
            .with_context(|| format!("failed to open tick file {}", self.path.display()))?;
        load_trades(
            file,
            self.timezone,
            self.price_scale,
            self.size_scale,
        )
    }
}

/// Load trades from CSV data with columns timestamp,price,size.
///
/// Column positions are detected from the header row and fall back to the
/// standard order when missing. Timestamps are epoch seconds (or
/// milliseconds, detected by magnitude) in UTC.
pub fn load_trades<R: Read>(
    reader: R,
    timezone: Tz,
    price_scale: f64,
    size_scale: f64,
) -> Result<Vec<Trade>> {
    let mut reader = csv::ReaderBuilder::new().delimiter(b',').from_reader(reader);

    let headers = reader.headers()?.clone();
    let headers_lower: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();

    let ts_col = headers_lower
        .iter()
        .position(|h| h.contains("timestamp") || h == "time")
        .unwrap_or(0);
    let price_col = headers_lower
        .iter()
        .position(|h| h == "price")
        .unwrap_or(1);
    let size_col = headers_lower
        .iter()
        .position(|h| h == "size" || h == "quantity")
        .unwrap_or(2);

    let open = session_open();
    let close = session_close();

    let mut trades = Vec::new();
    let mut dropped_invalid = 0usize;
    let mut dropped_off_session = 0usize;

    for result in reader.records() {
        let record = result?;

        let mut epoch: f64 = record.get(ts_col).unwrap_or("0").parse()?;
        let price: f64 = record.get(price_col).unwrap_or("0").parse()?;
        let size: f64 = record.get(size_col).unwrap_or("0").parse()?;

        // Rows without a usable timestamp are bad prints.
        if epoch == 0.0 {
            dropped_invalid += 1;
            continue;
        }

        // Detect milliseconds (13+ digits) vs seconds (10 digits).
        if epoch > 1e12 {
            epoch /= 1000.0;
        }

        let secs = epoch.trunc() as i64;
        let nanos = (epoch.fract() * 1e9).round() as u32;
        let Some(utc) = chrono::Utc.timestamp_opt(secs, nanos).single() else {
            dropped_invalid += 1;
            continue;
        };
        let local = utc.with_timezone(&timezone).naive_local();

        // Keep only the regular session, [09:30, 16:00).
        let t = local.time();
        if t < open || t >= close {
            dropped_off_session += 1;
            continue;
        }

        // Aggregation requires positive, finite price and size.
        let trade = Trade::new(local, price * price_scale, size * size_scale);
        if !validate_trade(&trade) {
            dropped_invalid += 1;
            continue;
        }

        trades.push(trade);
    }

    // Sort by timestamp to ensure chronological order.
    trades.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

    log::info!(
        "loaded {} trades ({} invalid rows, {} outside session)",
        trades.len(),
        dropped_invalid,
        dropped_off_session
    );

    Ok(trades)
}
