//! OHLCV bar data structures.

/// An OHLCV aggregate over a fixed-size run of trades.
///
/// `t_open` and `t_close` are normalized session times: seconds since the
/// 09:30 session open, scaled to the canonical 6.5-hour session length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub t_open: f64,
    pub t_close: f64,
}

impl Bar {
    /// True when the bar closed at or above its open.
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }
}

/// An immutable, time-ordered sequence of bars built by one aggregation
/// pass. Rebuilding with a different bin size produces a new, independent
/// series.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    bars: Vec<Bar>,
}

impl BarSeries {
    pub fn from_bars(bars: Vec<Bar>) -> Self {
        Self { bars }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bar> {
        self.bars.iter()
    }

    /// (min low, max high) over all bars, or `None` when empty.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        if self.bars.is_empty() {
            return None;
        }
        let min = self.bars.iter().map(|b| b.low).fold(f64::MAX, f64::min);
        let max = self.bars.iter().map(|b| b.high).fold(f64::MIN, f64::max);
        Some((min, max))
    }

    /// (min volume, max volume) over all bars, or `None` when empty.
    pub fn volume_range(&self) -> Option<(f64, f64)> {
        if self.bars.is_empty() {
            return None;
        }
        let min = self.bars.iter().map(|b| b.volume).fold(f64::MAX, f64::min);
        let max = self.bars.iter().map(|b| b.volume).fold(f64::MIN, f64::max);
        Some((min, max))
    }

    /// Sum of all bar volumes.
    pub fn total_volume(&self) -> f64 {
        self.bars.iter().map(|b| b.volume).sum()
    }
}
