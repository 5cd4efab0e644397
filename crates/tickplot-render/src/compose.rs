//! Figure composition helpers.

use std::sync::Arc;

use tickplot_core::BarSeries;

use crate::axes::Axes;
use crate::error::RenderError;
use crate::figure::{Figure, FigureStyle};
use crate::series::{CandlestickSeries, VolumeSeries};

/// Build a figure holding an empty rows x cols grid of default axes.
pub fn subplots(rows: usize, cols: usize) -> Result<Figure, RenderError> {
    if rows == 0 || cols == 0 {
        return Err(RenderError::InvalidGrid(format!(
            "grid must be at least 1x1, got {rows}x{cols}"
        )));
    }
    let grid = (0..rows)
        .map(|_| (0..cols).map(|_| Axes::new()).collect())
        .collect();
    Ok(Figure::new(grid, FigureStyle::default()))
}

/// The standard OHLCV layout: candlesticks over volume in a 2x1 grid,
/// both bound to the same bar series. Returns a fully laid-out and drawn
/// figure.
pub fn ohlcv_figure(
    bars: Arc<BarSeries>,
    title: &str,
    subtitle: &str,
) -> Result<Figure, RenderError> {
    let candles = Axes::with_series(vec![Box::new(CandlestickSeries::new(Arc::clone(&bars)))]);
    let volume = Axes::with_series(vec![Box::new(VolumeSeries::new(bars))]);

    let mut figure = Figure::new(vec![vec![candles], vec![volume]], FigureStyle::default());
    figure.set_titles(title, subtitle)?;
    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::RecordSurface;
    use tickplot_core::{Bar, SESSION_SECONDS};

    fn sample_bars() -> Arc<BarSeries> {
        Arc::new(BarSeries::from_bars(vec![
            Bar {
                open: 10.0,
                high: 12.0,
                low: 9.0,
                close: 11.0,
                volume: 100.0,
                t_open: 0.0,
                t_close: SESSION_SECONDS / 2.0,
            },
            Bar {
                open: 11.0,
                high: 13.0,
                low: 10.5,
                close: 10.5,
                volume: 60.0,
                t_open: SESSION_SECONDS / 2.0,
                t_close: SESSION_SECONDS,
            },
        ]))
    }

    #[test]
    fn test_subplots_grid_dimensions() {
        assert!(subplots(0, 1).is_err());
        assert!(subplots(1, 0).is_err());
        let mut figure = subplots(3, 2).unwrap();
        assert!(figure.axes_mut(2, 1).is_some());
        assert!(figure.axes_mut(3, 0).is_none());
    }

    #[test]
    fn test_ohlcv_figure_draws() {
        let figure = ohlcv_figure(sample_bars(), "KODK 2020-07-29", "").unwrap();
        assert_eq!(figure.title(), "KODK 2020-07-29");
        assert!(!figure.svg().is_empty());
    }

    #[test]
    fn test_candle_and_volume_axes_share_x_labels() {
        let mut figure = ohlcv_figure(sample_bars(), "t", "").unwrap();
        figure.layout().unwrap();

        let mut surface = RecordSurface::new();
        figure.render(&mut surface).unwrap();

        // Every session clock label appears once per axes panel.
        for label in ["9:30", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00"] {
            let count = surface.texts().iter().filter(|t| *t == label).count();
            assert_eq!(count, 2, "label {label} should appear in both panels");
        }
    }

    #[test]
    fn test_ohlcv_figure_empty_bars_fails() {
        let empty = Arc::new(BarSeries::from_bars(Vec::new()));
        let err = ohlcv_figure(empty, "t", "").map(|_| ()).unwrap_err();
        assert_eq!(err, RenderError::EmptyBarSeries);
    }
}
