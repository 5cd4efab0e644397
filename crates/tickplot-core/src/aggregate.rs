//! Tick aggregation: bin a time-ordered trade sequence into OHLCV bars
//! with session-normalized open/close timestamps.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::bar::{Bar, BarSeries};
use crate::session::{session_bounds, SESSION_SECONDS};
use crate::trade::Trade;

/// Aggregation errors. All are precondition violations detected before any
/// bars are produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    #[error("no trades to aggregate")]
    EmptyInput,
    #[error("bin size must be at least 1, got {0}")]
    InvalidBinSize(usize),
}

/// Aggregate `trades` into bars of `bin_size` consecutive trades each.
///
/// Grouping is positional: the first `bin_size` trades form the first bar
/// and so on. A short trailing group is kept as a partial bar rather than
/// discarded. For each group, open/close come from the first/last trade,
/// high/low are the extremes, and volume is the sum of trade sizes.
///
/// Bar timestamps are rewritten as seconds since the 09:30 session open of
/// the first bar's trading date, scaled to the canonical session length.
pub fn aggregate(trades: &[Trade], bin_size: usize) -> Result<BarSeries, AggregateError> {
    if bin_size < 1 {
        return Err(AggregateError::InvalidBinSize(bin_size));
    }
    if trades.is_empty() {
        return Err(AggregateError::EmptyInput);
    }

    let mut raw: Vec<(Bar, NaiveDateTime, NaiveDateTime)> =
        Vec::with_capacity(trades.len().div_ceil(bin_size));

    for group in trades.chunks(bin_size) {
        let first = &group[0];
        let last = &group[group.len() - 1];
        let high = group.iter().map(|t| t.price).fold(f64::MIN, f64::max);
        let low = group.iter().map(|t| t.price).fold(f64::MAX, f64::min);
        let volume = group.iter().map(|t| t.size).sum();

        let bar = Bar {
            open: first.price,
            high,
            low,
            close: last.price,
            volume,
            t_open: 0.0,
            t_close: 0.0,
        };
        raw.push((bar, first.timestamp, last.timestamp));
    }

    // Normalize against the session window of the first bar's date. The
    // scale factor is 1.0 whenever the session really spans 6.5 hours; it
    // only corrects for deviations in the bounds computation.
    let (t0, t1) = session_bounds(raw[0].1.date());
    let session_span = (t1 - t0).num_milliseconds() as f64 / 1000.0;
    let td = SESSION_SECONDS / session_span;

    let elapsed = |ts: NaiveDateTime| (ts - t0).num_milliseconds() as f64 / 1000.0 * td;

    let bars = raw
        .into_iter()
        .map(|(mut bar, open_ts, close_ts)| {
            bar.t_open = elapsed(open_ts);
            bar.t_close = elapsed(close_ts);
            bar
        })
        .collect();

    Ok(BarSeries::from_bars(bars))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 7, 29)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn trade(timestamp: NaiveDateTime, price: f64, size: f64) -> Trade {
        Trade::new(timestamp, price, size)
    }

    #[test]
    fn test_single_bar() {
        let trades = vec![
            trade(at(9, 30, 0), 10.0, 100.0),
            trade(at(9, 30, 1), 12.0, 50.0),
            trade(at(9, 30, 2), 9.0, 200.0),
        ];
        let series = aggregate(&trades, 3).unwrap();
        assert_eq!(series.len(), 1);

        let bar = &series.bars()[0];
        assert_eq!(bar.open, 10.0);
        assert_eq!(bar.high, 12.0);
        assert_eq!(bar.low, 9.0);
        assert_eq!(bar.close, 9.0);
        assert_eq!(bar.volume, 350.0);
    }

    #[test]
    fn test_partial_trailing_bar_kept() {
        let trades: Vec<Trade> = (0..5)
            .map(|i| trade(at(10, 0, i), 100.0 + i as f64, 10.0))
            .collect();
        let series = aggregate(&trades, 2).unwrap();
        assert_eq!(series.len(), 3);

        // Third bar covers only the fifth trade.
        let last = &series.bars()[2];
        assert_eq!(last.open, 104.0);
        assert_eq!(last.high, 104.0);
        assert_eq!(last.low, 104.0);
        assert_eq!(last.close, 104.0);
        assert_eq!(last.volume, 10.0);
    }

    #[test]
    fn test_bar_count() {
        let trades: Vec<Trade> = (0..7)
            .map(|i| trade(at(11, 0, i), 50.0, 1.0))
            .collect();
        assert_eq!(aggregate(&trades, 3).unwrap().len(), 3);
        assert_eq!(aggregate(&trades, 7).unwrap().len(), 1);
        assert_eq!(aggregate(&trades, 1).unwrap().len(), 7);
        assert_eq!(aggregate(&trades, 100).unwrap().len(), 1);
    }

    #[test]
    fn test_volume_conserved_for_any_bin_size() {
        let trades: Vec<Trade> = (0..13)
            .map(|i| trade(at(12, 0, i), 10.0 + i as f64, 3.0 + i as f64))
            .collect();
        let total: f64 = trades.iter().map(|t| t.size).sum();
        for bin_size in 1..=14 {
            let series = aggregate(&trades, bin_size).unwrap();
            assert!((series.total_volume() - total).abs() < 1e-9);
        }
    }

    #[test]
    fn test_low_high_envelope() {
        let trades: Vec<Trade> = [13.0, 11.5, 14.0, 12.0, 10.0, 15.0]
            .iter()
            .enumerate()
            .map(|(i, &p)| trade(at(13, 0, i as u32), p, 1.0))
            .collect();
        for bar in aggregate(&trades, 4).unwrap().iter() {
            assert!(bar.low <= bar.open.min(bar.close));
            assert!(bar.high >= bar.open.max(bar.close));
        }
    }

    #[test]
    fn test_time_normalization() {
        let trades = vec![
            trade(at(9, 30, 0), 10.0, 1.0),
            trade(at(12, 45, 0), 11.0, 1.0),
            trade(at(16, 0, 0), 12.0, 1.0),
        ];
        let series = aggregate(&trades, 1).unwrap();
        let bars = series.bars();

        assert!((bars[0].t_open - 0.0).abs() < 1e-9);
        // 12:45 is 3.25 hours after the open.
        assert!((bars[1].t_open - 3.25 * 3600.0).abs() < 1e-9);
        assert!((bars[2].t_close - SESSION_SECONDS).abs() < 1e-9);
    }

    #[test]
    fn test_times_monotonic() {
        let trades: Vec<Trade> = (0..20)
            .map(|i| trade(at(10, i / 3, (i * 7) % 60), 10.0, 1.0))
            .collect();
        let series = aggregate(&trades, 3).unwrap();
        let mut prev = f64::MIN;
        for bar in series.iter() {
            assert!(bar.t_open <= bar.t_close);
            assert!(bar.t_open >= prev);
            prev = bar.t_open;
        }
        assert!(series.bars()[0].t_open >= 0.0);
        assert!(series.bars().last().unwrap().t_close <= SESSION_SECONDS + 1e-9);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(aggregate(&[], 5), Err(AggregateError::EmptyInput));
    }

    #[test]
    fn test_invalid_bin_size() {
        let trades = vec![trade(at(10, 0, 0), 10.0, 1.0)];
        assert_eq!(aggregate(&trades, 0), Err(AggregateError::InvalidBinSize(0)));
    }

    #[test]
    fn test_group_of_one_valid() {
        let trades = vec![trade(at(10, 0, 0), 42.0, 7.0)];
        let series = aggregate(&trades, 1).unwrap();
        let bar = &series.bars()[0];
        assert_eq!(bar.open, 42.0);
        assert_eq!(bar.high, 42.0);
        assert_eq!(bar.low, 42.0);
        assert_eq!(bar.close, 42.0);
        assert_eq!(bar.volume, 7.0);
        assert_eq!(bar.t_open, bar.t_close);
    }
}
